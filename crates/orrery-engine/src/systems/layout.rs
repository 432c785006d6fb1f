//! Scene layout system: decides where every body is each frame.
//!
//! Three mutually exclusive modes drive body transforms, resolved in a fixed
//! priority order: an active collapse effect wins over the comparison line,
//! which wins over normal orbiting. The comparison flag is independent state
//! that survives a collapse — it is simply not applied while one is active.

use std::collections::HashMap;

use glam::Vec3;

use crate::api::types::BodyId;
use crate::core::scene::Scene;

/// Position/scale snapshot for one body, keyed by stable identity.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

/// Which layout is driving body transforms this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    Comparison,
    Collapse,
}

/// A hand-authored slot in the size-comparison line.
///
/// The order and spacing are authored, not derived from live scale values:
/// the physical size order has exceptions the orbit order does not show
/// (Mars is smaller than Earth, Neptune smaller than Uranus), and deriving
/// the line from mutable scales would let other effects reorder it.
#[derive(Debug, Clone)]
pub struct ComparisonSlot {
    pub body: BodyId,
    pub position: Vec3,
}

/// The running collapse effect: everything needed to place bodies as a pure
/// function of the activation snapshot and the current strength.
struct CollapseEffect {
    activation_time: f64,
    strength: f32,
    original: HashMap<BodyId, Transform>,
}

pub struct SceneLayout {
    /// Shared scene angle (degrees) driving every orbit. Keeps advancing
    /// with effective time in every mode; only the normal layout consumes it.
    orbit_angle: f32,
    comparison: bool,
    comparison_slots: Vec<ComparisonSlot>,
    collapse: Option<CollapseEffect>,
    /// Where collapsing bodies converge.
    collapse_center: Vec3,
    /// Canonical startup configuration, captured once after initial
    /// placement. The explicit reset control restores this, not the
    /// activation snapshot.
    reset_snapshot: HashMap<BodyId, Transform>,
}

impl SceneLayout {
    /// Degrees per simulation second added to the shared scene angle.
    const ORBIT_ANGLE_RATE: f32 = 20.0;
    /// Wall-clock seconds for a collapse to reach full strength.
    pub const COLLAPSE_DURATION: f64 = 6.0;

    pub fn new(collapse_center: Vec3) -> Self {
        Self {
            orbit_angle: 0.0,
            comparison: false,
            comparison_slots: Vec::new(),
            collapse: None,
            collapse_center,
            reset_snapshot: HashMap::new(),
        }
    }

    pub fn set_comparison_slots(&mut self, slots: Vec<ComparisonSlot>) {
        self.comparison_slots = slots;
    }

    pub fn set_collapse_center(&mut self, center: Vec3) {
        self.collapse_center = center;
    }

    /// Record the canonical startup transforms. Call once, after bodies have
    /// been placed at their initial orbital positions.
    pub fn capture_reset_snapshot(&mut self, scene: &Scene) {
        self.reset_snapshot = snapshot(scene);
    }

    /// Resolve the active mode. Collapse beats comparison beats normal; this
    /// is the single place that priority lives.
    pub fn mode(&self) -> LayoutMode {
        if self.collapse.is_some() {
            LayoutMode::Collapse
        } else if self.comparison {
            LayoutMode::Comparison
        } else {
            LayoutMode::Normal
        }
    }

    /// Flip the comparison flag. Takes effect whenever no collapse is active.
    pub fn toggle_comparison(&mut self) {
        self.comparison = !self.comparison;
        log::info!(
            "size comparison {}",
            if self.comparison { "on" } else { "off" }
        );
    }

    pub fn comparison_enabled(&self) -> bool {
        self.comparison
    }

    /// Start the collapse effect, snapshotting every body's current
    /// transform. Not re-entrant: a no-op while a collapse is running.
    pub fn activate_collapse(&mut self, now: f64, scene: &Scene) {
        if self.collapse.is_some() {
            return;
        }
        self.collapse = Some(CollapseEffect {
            activation_time: now,
            strength: 0.0,
            original: snapshot(scene),
        });
        log::info!("black hole activated");
    }

    /// Stop any collapse and restore every body to the startup snapshot —
    /// not to where it was when the collapse began. Valid at any time.
    pub fn reset_collapse(&mut self, scene: &mut Scene) {
        self.collapse = None;
        for body in scene.iter_mut() {
            if let Some(t) = self.reset_snapshot.get(&body.id) {
                body.position = t.position;
                body.scale = t.scale;
            }
        }
        log::info!("black hole reset");
    }

    /// Collapse progress in [0, 1]; 0 when no collapse is active.
    pub fn collapse_strength(&self) -> f32 {
        self.collapse.as_ref().map_or(0.0, |c| c.strength)
    }

    /// The shared scene angle, degrees.
    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Apply the active layout to the scene.
    ///
    /// `effective_dt` is the scaled simulation delta; `now` is the raw wall
    /// clock. Collapse strength runs off the wall clock on purpose: the
    /// effect is a UI animation, not part of the simulated timeline, so
    /// pausing or reversing time does not slow it down.
    pub fn update(&mut self, scene: &mut Scene, effective_dt: f32, now: f64) {
        self.orbit_angle += Self::ORBIT_ANGLE_RATE * effective_dt;

        match self.mode() {
            LayoutMode::Collapse => self.apply_collapse(scene, now),
            LayoutMode::Comparison => self.apply_comparison(scene, effective_dt),
            LayoutMode::Normal => self.apply_normal(scene, effective_dt),
        }
    }

    fn apply_normal(&self, scene: &mut Scene, dt: f32) {
        let base_angle = self.orbit_angle;
        // Parents are spawned before their satellites, so one pass resolves
        // every orbit center from already-updated positions.
        let mut resolved: HashMap<BodyId, Vec3> = HashMap::with_capacity(scene.len());
        for body in scene.iter_mut() {
            let center = body
                .parent
                .and_then(|p| resolved.get(&p).copied())
                .unwrap_or(body.position);
            body.update(center, base_angle, dt);
            resolved.insert(body.id, body.position);
        }
    }

    fn apply_comparison(&self, scene: &mut Scene, dt: f32) {
        for slot in &self.comparison_slots {
            if let Some(body) = scene.get_mut(slot.body) {
                body.position = slot.position;
            }
        }
        // No orbital motion, but bodies keep spinning with simulation time.
        for body in scene.iter_mut() {
            body.rotation_angle =
                (body.rotation_angle + body.rotation_speed * dt).rem_euclid(360.0);
        }
    }

    fn apply_collapse(&mut self, scene: &mut Scene, now: f64) {
        let center = self.collapse_center;
        let Some(effect) = self.collapse.as_mut() else {
            return;
        };

        let elapsed = now - effect.activation_time;
        effect.strength = ((elapsed / Self::COLLAPSE_DURATION) as f32).clamp(0.0, 1.0);
        let shrink = 1.0 - effect.strength;

        // Every transform is a pure function of the activation snapshot and
        // the strength; normal orbital updates are fully suspended.
        for body in scene.iter_mut() {
            if let Some(original) = effect.original.get(&body.id) {
                body.position = original.position.lerp(center, effect.strength);
                body.scale = original.scale * shrink;
            }
        }
    }
}

fn snapshot(scene: &Scene) -> HashMap<BodyId, Transform> {
    scene
        .iter()
        .map(|b| {
            (
                b.id,
                Transform {
                    position: b.position,
                    scale: b.scale,
                },
            )
        })
        .collect()
}
