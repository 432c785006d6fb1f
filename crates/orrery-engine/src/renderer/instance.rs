use bytemuck::{Pod, Zeroable};

use crate::components::body::CelestialBody;
use crate::components::comet::Comet;
use crate::core::scene::Scene;

/// Per-body render data read by the external renderer as raw floats.
/// 8 floats = 32 bytes stride; must match the host's instance layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// World-space position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World-space size per axis.
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    /// Spin around the body's own axis, degrees.
    pub rotation: f32,
    /// Self-illumination factor (0 = lit body, >0 = light source).
    pub emissive: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn from_body(body: &CelestialBody) -> Self {
        Self {
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            scale_x: body.scale.x,
            scale_y: body.scale.y,
            scale_z: body.scale.z,
            rotation: body.rotation_angle,
            emissive: body.emissive,
        }
    }
}

/// One comet-trail sample for the host's line-strip pass.
/// 5 floats = 20 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct TrailVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Distance-to-sun brightness, fixed at sample time.
    pub brightness: f32,
    /// Age-driven fade in [0, 1]; 0 = fully faded out.
    pub fade: f32,
}

impl TrailVertex {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Seconds for a trail sample to fade to nothing.
    const FADE_SECONDS: f32 = 10.0;
}

/// The finalized per-frame output the external renderer consumes:
/// visible body instances, trail vertices grouped per comet, nothing else.
pub struct FrameBuffer {
    instances: Vec<RenderInstance>,
    trail_vertices: Vec<TrailVertex>,
    /// Number of trail vertices belonging to each comet, in comet order,
    /// so the host can split the flat vertex list into one strip per comet.
    trail_strips: Vec<u32>,
}

impl FrameBuffer {
    /// Bodies at or below this scale are culled from submission entirely.
    pub const VISIBILITY_EPSILON: f32 = 0.01;

    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
            trail_vertices: Vec::with_capacity(512),
            trail_strips: Vec::new(),
        }
    }

    /// Rebuild the frame output from fully-resolved simulation state.
    /// Called by the runner after the game update; never mid-update.
    pub fn rebuild(&mut self, scene: &Scene, comets: &[Comet]) {
        self.instances.clear();
        self.trail_vertices.clear();
        self.trail_strips.clear();

        for body in scene.iter() {
            if body.scale.x > Self::VISIBILITY_EPSILON {
                self.instances.push(RenderInstance::from_body(body));
            }
        }

        for comet in comets {
            if comet.head.scale.x > Self::VISIBILITY_EPSILON {
                self.instances.push(RenderInstance::from_body(&comet.head));
            }

            let start = self.trail_vertices.len();
            for point in comet.trail() {
                let fade =
                    (1.0 - point.age / TrailVertex::FADE_SECONDS).max(0.0);
                self.trail_vertices.push(TrailVertex {
                    x: point.position.x,
                    y: point.position.y,
                    z: point.position.z,
                    brightness: point.brightness,
                    fade,
                });
            }
            self.trail_strips
                .push((self.trail_vertices.len() - start) as u32);
        }
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    pub fn trail_vertices(&self) -> &[TrailVertex] {
        &self.trail_vertices
    }

    pub fn trail_strips(&self) -> &[u32] {
        &self.trail_strips
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
