use glam::Vec3;

use crate::api::types::BodyId;

/// One celestial body: a fat struct holding identity, transform and orbital
/// parameters. Designed for simplicity over ECS purity — the whole scene is
/// a dozen of these.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    /// Unique identifier.
    pub id: BodyId,
    /// Display name ("Earth", "Halley's Comet", ...).
    pub name: String,
    /// World-space size per axis.
    pub scale: Vec3,
    /// Current position in world space.
    pub position: Vec3,
    /// Distance from the orbit center. Zero keeps the body in place.
    pub orbit_radius: f32,
    /// Multiplier applied to the shared scene angle.
    pub orbit_speed: f32,
    /// Current spin around the body's own axis, degrees in [0, 360).
    pub rotation_angle: f32,
    /// Spin rate in degrees per second. Negative = retrograde.
    pub rotation_speed: f32,
    /// Body whose position this one orbits. `None` means the body orbits
    /// its own position, i.e. it stays where it is (the sun).
    pub parent: Option<BodyId>,
    /// Self-illumination factor passed through to the renderer. Zero for
    /// everything except the star.
    pub emissive: f32,
}

impl CelestialBody {
    pub fn new(id: BodyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            scale: Vec3::ONE,
            position: Vec3::ZERO,
            orbit_radius: 0.0,
            orbit_speed: 0.0,
            rotation_angle: 0.0,
            rotation_speed: 0.0,
            parent: None,
            emissive: 0.0,
        }
    }

    // -- Builder pattern --

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_orbit(mut self, radius: f32, speed: f32) -> Self {
        self.orbit_radius = radius;
        self.orbit_speed = speed;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    /// Advance spin and recompute the orbital position.
    ///
    /// `base_angle` is the shared scene angle in degrees (advanced once per
    /// tick by the layout system, not per body); each body scales it by its
    /// own `orbit_speed`. The spin is normalized to [0, 360) so it cannot
    /// grow without bound over long runs.
    pub fn update(&mut self, center: Vec3, base_angle: f32, dt: f32) {
        self.rotation_angle = (self.rotation_angle + self.rotation_speed * dt).rem_euclid(360.0);

        let orbit_angle = (base_angle * self.orbit_speed).to_radians();
        self.position = center
            + Vec3::new(
                self.orbit_radius * orbit_angle.cos(),
                0.0,
                self.orbit_radius * orbit_angle.sin(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(radius: f32, speed: f32) -> CelestialBody {
        CelestialBody::new(BodyId(1), "test").with_orbit(radius, speed)
    }

    #[test]
    fn position_on_orbit_circle() {
        // orbit_radius=10, orbit_speed=1, base_angle=90° => (0, 0, 10)
        let mut b = body(10.0, 1.0);
        b.update(Vec3::ZERO, 90.0, 0.0);
        assert!(b.position.x.abs() < 1e-4, "x = {}", b.position.x);
        assert!(b.position.y.abs() < 1e-4);
        assert!((b.position.z - 10.0).abs() < 1e-4, "z = {}", b.position.z);
    }

    #[test]
    fn orbit_is_periodic() {
        let mut a = body(7.0, 2.0);
        let mut b = body(7.0, 2.0);
        let center = Vec3::new(3.0, 0.0, -20.0);
        a.update(center, 42.0, 0.0);
        // One full revolution for this body: 360 / orbit_speed degrees
        b.update(center, 42.0 + 360.0 / 2.0, 0.0);
        assert!((a.position - b.position).length() < 1e-3);
    }

    #[test]
    fn zero_radius_body_stays_at_center() {
        let mut b = body(0.0, 0.0).with_position(Vec3::new(0.0, 0.0, -20.0));
        let here = b.position;
        b.update(here, 123.0, 0.5);
        assert_eq!(b.position, here);
    }

    #[test]
    fn rotation_wraps_into_range() {
        let mut b = body(1.0, 1.0).with_rotation_speed(720.0);
        for _ in 0..1000 {
            b.update(Vec3::ZERO, 0.0, 0.016);
        }
        assert!(b.rotation_angle >= 0.0 && b.rotation_angle < 360.0);
    }

    #[test]
    fn negative_dt_spins_backwards() {
        let mut b = body(1.0, 1.0).with_rotation_speed(10.0);
        b.update(Vec3::ZERO, 0.0, -1.0);
        // -10 degrees normalized into [0, 360)
        assert!((b.rotation_angle - 350.0).abs() < 1e-4);
    }
}
