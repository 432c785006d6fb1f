use std::collections::VecDeque;

use glam::Vec3;

use crate::components::body::CelestialBody;

/// One historical sample of a comet head's position.
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub position: Vec3,
    /// Seconds since the sample was taken (drives the fade-out).
    pub age: f32,
    /// Set from the distance to the sun at creation time, fixed thereafter.
    pub brightness: f32,
}

/// A comet: a celestial-body head on an elliptical (focus-at-origin) path,
/// plus a bounded newest-first trail of past positions.
///
/// Trail sampling is wall-clock driven and deliberately decoupled from the
/// simulation cadence: speeding the orbits up or down changes how far the
/// head moves between samples, not how often samples are taken.
pub struct Comet {
    pub head: CelestialBody,
    /// How elliptical the orbit is: 0 = circle, approaching 1 = very long.
    pub eccentricity: f32,
    pub semi_major_axis: f32,
    /// The focus the conic equation is evaluated around.
    pub orbit_center: Vec3,
    /// Current angle along the ellipse, radians, continuously increasing.
    pub orbit_angle: f32,
    trail: VecDeque<TrailPoint>,
    last_sample: f64,
}

impl Comet {
    /// Angular rate along the ellipse, radians per simulation second.
    const ANGULAR_RATE: f32 = 0.5;
    /// Wall-clock seconds between trail samples.
    const SAMPLE_INTERVAL: f64 = 0.1;
    /// Fixed per-update aging increment for existing samples.
    const AGE_STEP: f32 = 0.016;
    /// Brightness falloff with distance from the sun.
    const BRIGHTNESS_FALLOFF: f32 = 0.1;

    pub const MAX_TRAIL_POINTS: usize = 150;

    pub fn new(head: CelestialBody, orbit_center: Vec3, semi_major_axis: f32, eccentricity: f32) -> Self {
        Self {
            head,
            eccentricity,
            semi_major_axis,
            orbit_center,
            orbit_angle: 0.0,
            trail: VecDeque::with_capacity(Self::MAX_TRAIL_POINTS),
            last_sample: 0.0,
        }
    }

    /// Start the comet at a different point along its ellipse.
    pub fn with_phase(mut self, orbit_angle: f32) -> Self {
        self.orbit_angle = orbit_angle;
        self
    }

    /// Advance the head along the ellipse and refresh the trail.
    /// `dt` is simulation time (scaled); `now` is the raw wall clock.
    pub fn update(&mut self, dt: f32, sun_position: Vec3, now: f64) {
        self.orbit_angle += Self::ANGULAR_RATE * dt;

        // Conic equation, focus at orbit_center: r = a(1-e²)/(1 + e·cosθ)
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        let r = a * (1.0 - e * e) / (1.0 + e * self.orbit_angle.cos());

        self.head.position = self.orbit_center
            + Vec3::new(
                r * self.orbit_angle.cos(),
                0.0,
                r * self.orbit_angle.sin(),
            );
        self.head.rotation_angle =
            (self.head.rotation_angle + self.head.rotation_speed * dt).rem_euclid(360.0);

        self.update_trail(now, sun_position);
    }

    fn update_trail(&mut self, now: f64, sun_position: Vec3) {
        if now - self.last_sample > Self::SAMPLE_INTERVAL {
            let distance_from_sun = self.head.position.distance(sun_position);
            self.trail.push_front(TrailPoint {
                position: self.head.position,
                age: 0.0,
                brightness: 1.0 / (1.0 + distance_from_sun * Self::BRIGHTNESS_FALLOFF),
            });

            // FIFO with bounded capacity: newest kept, oldest dropped
            if self.trail.len() > Self::MAX_TRAIL_POINTS {
                self.trail.pop_back();
            }

            self.last_sample = now;
        }

        for point in &mut self.trail {
            point.age += Self::AGE_STEP;
        }
    }

    /// Trail samples, newest first.
    pub fn trail(&self) -> impl Iterator<Item = &TrailPoint> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
