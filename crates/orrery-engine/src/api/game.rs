use std::collections::HashMap;

use glam::Vec3;

use crate::api::types::{BodyId, SimEvent};
use crate::components::body::CelestialBody;
use crate::components::comet::Comet;
use crate::config::system::SystemConfig;
use crate::core::scene::Scene;
use crate::core::time::{SimClock, TimeControl};
use crate::input::InputState;
use crate::renderer::camera::Camera;
use crate::systems::layout::{ComparisonSlot, SceneLayout};
use crate::systems::overlay::InfoPanel;
use crate::systems::selection::{BodyInfo, Selector};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Largest raw frame delta fed into one update, seconds. Long hitches
    /// (window dragged, debugger pause) are clamped instead of producing a
    /// giant simulation step.
    pub max_dt: f32,
    /// Maximum number of simulation events surfaced per frame.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.1,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: load the system, position the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick: sample input edges, drive the state machines,
    /// resolve positions, then the camera. `dt` is the raw frame delta.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub comets: Vec<Comet>,
    pub time: TimeControl,
    pub clock: SimClock,
    pub layout: SceneLayout,
    pub selector: Selector,
    pub info_panel: InfoPanel,
    pub camera: Camera,
    pub events: Vec<SimEvent>,
    next_id: u32,
    star: Option<BodyId>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            comets: Vec::new(),
            time: TimeControl::new(),
            clock: SimClock::new(),
            layout: SceneLayout::new(Vec3::ZERO),
            selector: Selector::new(),
            info_panel: InfoPanel::new(),
            camera: Camera::new(),
            events: Vec::new(),
            next_id: 1,
            star: None,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a simulation event to be surfaced to the host.
    pub fn emit_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Position of the system's star (the first emissive body), or the
    /// origin before any system is loaded.
    pub fn star_position(&self) -> Vec3 {
        self.star
            .and_then(|id| self.scene.get(id))
            .map_or(Vec3::ZERO, |b| b.position)
    }

    /// Build the whole scene from a system description: spawn bodies in
    /// config order (parents first), fan them out at their start angles,
    /// wire up comets, selection and comparison slots, then capture the
    /// canonical reset snapshot from this exact placement.
    pub fn load_system(&mut self, config: &SystemConfig) {
        let mut by_name: HashMap<String, BodyId> = HashMap::with_capacity(config.bodies.len());

        for bc in &config.bodies {
            let id = self.next_id();
            let mut body = CelestialBody::new(id, bc.name.clone())
                .with_scale(bc.scale)
                .with_orbit(bc.orbit_radius, bc.orbit_speed)
                .with_rotation_speed(bc.rotation_speed)
                .with_emissive(bc.emissive);
            if let Some(pos) = bc.position {
                body = body.with_position(Vec3::from(pos));
            }
            if let Some(parent) = bc.parent.as_ref().and_then(|n| by_name.get(n)) {
                body = body.with_parent(*parent);
            }
            by_name.insert(bc.name.clone(), id);
            self.scene.spawn(body);

            if self.star.is_none() && bc.emissive > 0.0 {
                self.star = Some(id);
            }
        }

        // Initial fan-out: place each body on its orbit at its own start
        // angle. Spawn order guarantees parents are placed first.
        for bc in &config.bodies {
            let Some(&id) = by_name.get(&bc.name) else {
                continue;
            };
            let center = self
                .scene
                .get(id)
                .map(|b| {
                    b.parent
                        .and_then(|p| self.scene.get(p))
                        .map_or(b.position, |p| p.position)
                })
                .unwrap_or(Vec3::ZERO);
            if let Some(body) = self.scene.get_mut(id) {
                body.update(center, bc.start_angle, 0.0);
            }
        }

        let star_pos = self.star_position();
        let collapse_center = config.collapse_center.map_or(star_pos, Vec3::from);
        self.layout.set_collapse_center(collapse_center);

        for cc in &config.comets {
            let id = self.next_id();
            let head = CelestialBody::new(id, cc.name.clone())
                .with_scale(cc.scale)
                .with_rotation_speed(cc.rotation_speed);
            self.comets.push(
                Comet::new(head, star_pos, cc.semi_major_axis, cc.eccentricity)
                    .with_phase(cc.phase),
            );
        }

        for name in &config.selection_order {
            if let Some(&id) = by_name.get(name) {
                let info = config
                    .bodies
                    .iter()
                    .find(|b| &b.name == name)
                    .and_then(|b| b.info.clone())
                    .unwrap_or_else(|| BodyInfo {
                        name: name.clone(),
                        description: String::new(),
                        facts: Vec::new(),
                    });
                self.selector.add(id, info);
            }
        }

        let slots = config
            .comparison_slots
            .iter()
            .filter_map(|slot| {
                by_name.get(&slot.body).map(|&body| ComparisonSlot {
                    body,
                    position: Vec3::from(slot.position),
                })
            })
            .collect();
        self.layout.set_comparison_slots(slots);

        self.layout.capture_reset_snapshot(&self.scene);
        log::info!(
            "system loaded: {} bodies, {} comets",
            self.scene.len(),
            self.comets.len()
        );
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::system::{BodyConfig, CometConfig};

    fn two_body_config() -> SystemConfig {
        SystemConfig {
            bodies: vec![
                BodyConfig {
                    name: "Sun".into(),
                    scale: 4.0,
                    orbit_radius: 0.0,
                    orbit_speed: 0.0,
                    rotation_speed: 15.0,
                    parent: None,
                    emissive: 3.5,
                    start_angle: 0.0,
                    position: Some([0.0, 0.0, -20.0]),
                    info: None,
                },
                BodyConfig {
                    name: "Earth".into(),
                    scale: 0.35,
                    orbit_radius: 12.0,
                    orbit_speed: 1.0,
                    rotation_speed: 20.0,
                    parent: Some("Sun".into()),
                    emissive: 0.0,
                    start_angle: 90.0,
                    position: None,
                    info: None,
                },
            ],
            comets: vec![CometConfig {
                name: "Halley".into(),
                scale: 0.05,
                semi_major_axis: 45.0,
                eccentricity: 0.85,
                rotation_speed: 10.0,
                phase: 0.0,
            }],
            selection_order: vec!["Sun".into(), "Earth".into()],
            comparison_slots: Vec::new(),
            collapse_center: None,
        }
    }

    #[test]
    fn load_system_spawns_and_fans_out() {
        let mut ctx = EngineContext::new();
        ctx.load_system(&two_body_config());

        assert_eq!(ctx.scene.len(), 2);
        assert_eq!(ctx.comets.len(), 1);
        assert_eq!(ctx.selector.len(), 2);

        let sun = ctx.scene.find_by_name("Sun").unwrap();
        assert_eq!(sun.position, Vec3::new(0.0, 0.0, -20.0));

        // Earth starts at base angle 90°: sun + (0, 0, 12)
        let earth = ctx.scene.find_by_name("Earth").unwrap();
        assert!((earth.position - Vec3::new(0.0, 0.0, -8.0)).length() < 1e-4);
        assert_eq!(earth.parent, Some(sun.id));
    }

    #[test]
    fn star_is_first_emissive_body() {
        let mut ctx = EngineContext::new();
        ctx.load_system(&two_body_config());
        assert_eq!(ctx.star_position(), Vec3::new(0.0, 0.0, -20.0));
    }

    #[test]
    fn reset_snapshot_covers_initial_placement() {
        let mut ctx = EngineContext::new();
        ctx.load_system(&two_body_config());
        let earth_start = ctx.scene.find_by_name("Earth").unwrap().position;

        // Drift the orbits, then reset: back to the fan-out placement
        for i in 0..200 {
            ctx.layout.update(&mut ctx.scene, 0.016, i as f64 * 0.016);
        }
        let drifted = ctx.scene.find_by_name("Earth").unwrap().position;
        assert!((drifted - earth_start).length() > 0.1, "orbit should have moved");

        ctx.layout.reset_collapse(&mut ctx.scene);
        let restored = ctx.scene.find_by_name("Earth").unwrap().position;
        assert!((restored - earth_start).length() < 1e-5);
    }

    #[test]
    fn event_queue_clears_per_frame() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(SimEvent { kind: 1.0, a: 2.0, b: 0.0, c: 0.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
