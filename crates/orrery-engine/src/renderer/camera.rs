use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::input::{InputState, Key};

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
}

/// Free-fly / locked-on-target camera rig.
///
/// Angles are stored in degrees; `look_at` is the derived unit direction.
/// The two update paths are mutually exclusive per frame: the game calls
/// [`Camera::update_free`] outside selection mode and [`Camera::follow`]
/// while a body is selected.
pub struct Camera {
    pub position: Vec3,
    /// Unit direction the camera is facing.
    pub look_at: Vec3,
    pub up: Vec3,
    /// Normal fly speed, world units per second.
    pub speed: f32,
    /// Sprint fly speed (shift held).
    pub fast_speed: f32,
    /// Left/right rotation, degrees.
    pub horizontal_angle: f32,
    /// Up/down rotation, degrees, clamped to ±[`Camera::VERTICAL_LIMIT`].
    pub vertical_angle: f32,
    pub first_person: bool,
}

impl Camera {
    /// Mouse/arrow look speed, degrees per second.
    const ANGULAR_SPEED: f32 = 60.0;
    /// Vertical angle clamp, degrees. Keeps the rig clear of the poles.
    const VERTICAL_LIMIT: f32 = 85.0;
    /// First-order approach rate toward the framed view of a selected body.
    const FOLLOW_RATE: f32 = 2.0;
    /// Viewing distance per unit of body scale when framing a selection.
    const VIEW_DISTANCE_FACTOR: f32 = 8.0;
    /// Closest the framed view will get to a tiny body.
    const MIN_VIEW_DISTANCE: f32 = 3.0;
    /// Third-person eye offset behind the rig position.
    const THIRD_PERSON_RADIUS: f32 = 1.5;

    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            speed: 6.0,
            fast_speed: 10.0,
            horizontal_angle: 90.0,
            vertical_angle: 0.0,
            first_person: true,
        }
    }

    /// Free-fly update: mouse + arrow keys steer, WASDQE translates.
    pub fn update_free(&mut self, input: &InputState, dt: f32) {
        let (dx, dy) = input.mouse_delta();
        self.horizontal_angle -= dx * Self::ANGULAR_SPEED * dt;
        self.vertical_angle -= dy * Self::ANGULAR_SPEED * dt;

        if input.pressed(Key::Left) {
            self.horizontal_angle += Self::ANGULAR_SPEED * dt;
        }
        if input.pressed(Key::Right) {
            self.horizontal_angle -= Self::ANGULAR_SPEED * dt;
        }
        if input.pressed(Key::Up) {
            self.vertical_angle += Self::ANGULAR_SPEED * dt;
        }
        if input.pressed(Key::Down) {
            self.vertical_angle -= Self::ANGULAR_SPEED * dt;
        }

        self.vertical_angle = self
            .vertical_angle
            .clamp(-Self::VERTICAL_LIMIT, Self::VERTICAL_LIMIT);
        self.refresh_look();

        let speed = if input.pressed(Key::Shift) {
            self.fast_speed
        } else {
            self.speed
        };
        let side = self.look_at.cross(self.up);

        if input.pressed(Key::W) {
            self.position += self.look_at * speed * dt;
        }
        if input.pressed(Key::S) {
            self.position -= self.look_at * speed * dt;
        }
        if input.pressed(Key::A) {
            self.position -= side * speed * dt;
        }
        if input.pressed(Key::D) {
            self.position += side * speed * dt;
        }
        if input.pressed(Key::Q) {
            self.position += self.up * speed * dt;
        }
        if input.pressed(Key::E) {
            self.position -= self.up * speed * dt;
        }
    }

    /// Locked-on-target update: drift toward a framed view of the body and
    /// face it every tick, even mid-interpolation.
    pub fn follow(&mut self, body_position: Vec3, body_scale: Vec3, dt: f32) {
        let distance = (body_scale.x * Self::VIEW_DISTANCE_FACTOR).max(Self::MIN_VIEW_DISTANCE);
        let target = body_position + Vec3::new(0.0, distance * 0.3, distance);

        let t = (Self::FOLLOW_RATE * dt).min(1.0);
        self.position = self.position.lerp(target, t);

        self.look_at = (body_position - self.position)
            .try_normalize()
            .unwrap_or(self.look_at);
    }

    /// Recompute `look_at` from the spherical angles.
    fn refresh_look(&mut self) {
        let theta = self.horizontal_angle.to_radians();
        let phi = self.vertical_angle.to_radians();
        self.look_at = Vec3::new(
            phi.cos() * theta.cos(),
            phi.sin(),
            -phi.cos() * theta.sin(),
        );
    }

    /// Resolve the view matrix from the rig state.
    /// Third person pulls the eye back along the view direction.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = if self.first_person {
            self.position
        } else {
            self.position - self.look_at * Self::THIRD_PERSON_RADIUS
        };
        Mat4::look_at_rh(eye, eye + self.look_at, self.up)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_angles_face_negative_z() {
        let mut cam = Camera::new();
        cam.refresh_look();
        // horizontal 90°, vertical 0° => (0, 0, -1)
        assert!(cam.look_at.x.abs() < 1e-6);
        assert!(cam.look_at.y.abs() < 1e-6);
        assert!((cam.look_at.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn vertical_angle_clamps() {
        let mut cam = Camera::new();
        let mut input = InputState::new();
        input.add_mouse_delta(0.0, -100000.0);
        cam.update_free(&input, 0.016);
        assert!(cam.vertical_angle <= 85.0);
        input.end_frame();
        input.add_mouse_delta(0.0, 100000.0);
        cam.update_free(&input, 0.016);
        assert!(cam.vertical_angle >= -85.0);
    }

    #[test]
    fn forward_key_moves_along_look() {
        let mut cam = Camera::new();
        let mut input = InputState::new();
        input.set_key(Key::W, true);
        let before = cam.position;
        cam.update_free(&input, 1.0);
        let moved = cam.position - before;
        assert!((moved.length() - cam.speed).abs() < 1e-4);
        assert!((moved.normalize() - cam.look_at).length() < 1e-4);
    }

    #[test]
    fn sprint_is_faster() {
        let mut normal = Camera::new();
        let mut sprint = Camera::new();
        let mut input = InputState::new();
        input.set_key(Key::W, true);
        normal.update_free(&input, 1.0);
        input.set_key(Key::Shift, true);
        sprint.update_free(&input, 1.0);
        assert!(
            (sprint.position - Camera::new().position).length()
                > (normal.position - Camera::new().position).length()
        );
    }

    #[test]
    fn follow_approaches_without_snapping() {
        let mut cam = Camera::new();
        let body = Vec3::new(50.0, 0.0, -20.0);
        let scale = Vec3::splat(1.0);
        let d0 = cam.position.distance(body);
        cam.follow(body, scale, 0.1);
        let d1 = cam.position.distance(body);
        assert!(d1 < d0, "camera must drift toward the target");
        assert!(d1 > 8.0, "one small step must not teleport");
        // Always faces the body, even mid-flight
        let toward = (body - cam.position).normalize();
        assert!((cam.look_at - toward).length() < 1e-5);
    }

    #[test]
    fn follow_respects_minimum_distance() {
        let mut cam = Camera::new();
        let body = Vec3::ZERO;
        // Tiny body: framing distance clamps to the minimum
        for _ in 0..500 {
            cam.follow(body, Vec3::splat(0.01), 0.1);
        }
        let expected = body + Vec3::new(0.0, 3.0 * 0.3, 3.0);
        assert!((cam.position - expected).length() < 1e-2);
    }

    #[test]
    fn third_person_pulls_eye_back() {
        let mut cam = Camera::new();
        cam.first_person = true;
        let fp = cam.view_matrix();
        cam.first_person = false;
        let tp = cam.view_matrix();
        assert_ne!(fp.to_cols_array(), tp.to_cols_array());
        // Inverse view translation differs by the third-person radius
        let fp_eye = fp.inverse().col(3).truncate();
        let tp_eye = tp.inverse().col(3).truncate();
        assert!(((fp_eye - tp_eye).length() - 1.5).abs() < 1e-4);
    }

    #[test]
    fn uniform_matches_view_matrix() {
        let cam = Camera::new();
        assert_eq!(cam.uniform().view, cam.view_matrix().to_cols_array_2d());
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }
}
