use crate::systems::selection::BodyInfo;

/// Info overlay state: which record is shown and how faded-in it is.
/// Rendering the panel is the host's job; this tracks the state machine
/// (visible flag + fade) so the animation survives mode changes coherently.
pub struct InfoPanel {
    visible: bool,
    fade_alpha: f32,
    current: Option<BodyInfo>,
}

impl InfoPanel {
    /// Fade rate toward the target visibility, per second.
    const FADE_RATE: f32 = 3.0;

    pub fn new() -> Self {
        Self {
            visible: false,
            fade_alpha: 0.0,
            current: None,
        }
    }

    pub fn show(&mut self, info: BodyInfo) {
        log::info!("showing info for {}", info.name);
        self.current = Some(info);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self, info: BodyInfo) {
        if self.visible {
            self.hide();
        } else {
            self.show(info);
        }
    }

    /// If the panel is up, swap in a new record (selection advanced while
    /// the overlay was open).
    pub fn refresh(&mut self, info: BodyInfo) {
        if self.visible {
            self.current = Some(info);
        }
    }

    /// Ease the fade toward the current visibility target.
    /// Uses the raw frame delta: the overlay animates in real time even
    /// when the simulation is paused.
    pub fn update(&mut self, raw_dt: f32) {
        if self.visible {
            self.fade_alpha = (self.fade_alpha + raw_dt * Self::FADE_RATE).min(1.0);
        } else {
            self.fade_alpha = (self.fade_alpha - raw_dt * Self::FADE_RATE).max(0.0);
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    pub fn current(&self) -> Option<&BodyInfo> {
        self.current.as_ref()
    }
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> BodyInfo {
        BodyInfo {
            name: "Saturn".into(),
            description: "Ringed beauty".into(),
            facts: vec!["Would float in water".into()],
        }
    }

    #[test]
    fn fades_in_and_out() {
        let mut panel = InfoPanel::new();
        panel.show(info());
        panel.update(0.1);
        assert!(panel.fade_alpha() > 0.0 && panel.fade_alpha() < 1.0);
        panel.update(10.0);
        assert_eq!(panel.fade_alpha(), 1.0);

        panel.hide();
        panel.update(0.1);
        assert!(panel.fade_alpha() < 1.0);
        panel.update(10.0);
        assert_eq!(panel.fade_alpha(), 0.0);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut panel = InfoPanel::new();
        panel.toggle(info());
        assert!(panel.visible());
        panel.toggle(info());
        assert!(!panel.visible());
    }

    #[test]
    fn refresh_only_applies_while_visible() {
        let mut panel = InfoPanel::new();
        let mut other = info();
        other.name = "Jupiter".into();

        panel.refresh(other.clone());
        assert!(panel.current().is_none(), "hidden panel keeps no record");

        panel.show(info());
        panel.refresh(other);
        assert_eq!(panel.current().unwrap().name, "Jupiter");
    }
}
