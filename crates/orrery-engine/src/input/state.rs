/// Input state the embedding host writes into each frame.
/// Generic — no game-specific semantics. The host maps its windowing
/// layer's physical keys onto this logical key set; games decide what the
/// keys mean.

/// Logical keys the simulation can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    C,
    I,
    R,
    X,
    Up,
    Down,
    Left,
    Right,
    Space,
    Equal,
    Minus,
    Shift,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
}

impl Key {
    pub const COUNT: usize = 28;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Keyboard levels plus the per-frame mouse delta.
/// Key state is level state owned by the host (set on key-down, cleared on
/// key-up); the mouse delta accumulates within a frame and is cleared by the
/// runner once the frame is consumed.
pub struct InputState {
    down: [bool; Key::COUNT],
    mouse_dx: f32,
    mouse_dy: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            down: [false; Key::COUNT],
            mouse_dx: 0.0,
            mouse_dy: 0.0,
        }
    }

    /// Record a key level change (called by the host on key events).
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.down[key.index()] = down;
    }

    /// Whether a key is currently held.
    pub fn pressed(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    /// Accumulate mouse movement since the last frame.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    /// Mouse movement accumulated this frame.
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.mouse_dx, self.mouse_dy)
    }

    /// Clear per-frame transient input (mouse delta). Key levels persist.
    pub fn end_frame(&mut self) {
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_levels_persist_across_frames() {
        let mut input = InputState::new();
        input.set_key(Key::W, true);
        assert!(input.pressed(Key::W));
        input.end_frame();
        assert!(input.pressed(Key::W), "key level must survive end_frame");
        input.set_key(Key::W, false);
        assert!(!input.pressed(Key::W));
    }

    #[test]
    fn mouse_delta_accumulates_and_clears() {
        let mut input = InputState::new();
        input.add_mouse_delta(3.0, -1.0);
        input.add_mouse_delta(2.0, 1.5);
        assert_eq!(input.mouse_delta(), (5.0, 0.5));
        input.end_frame();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
    }
}
