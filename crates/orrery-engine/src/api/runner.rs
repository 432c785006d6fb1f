use crate::api::game::{EngineContext, Game, GameConfig};
use crate::input::{InputState, Key};
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{FrameBuffer, RenderInstance, TrailVertex};
use crate::systems::selection::BodyInfo;

/// Generic frame driver that wires up the engine loop.
///
/// The embedding host owns the window, the GPU and the real clock; it feeds
/// raw input and elapsed time in, calls [`SimRunner::tick`] once per frame,
/// and reads the baked frame output back out. Within a tick the ordering is
/// fixed: clock advance → game update (input edges, transitions, positions,
/// camera) → frame bake. External collaborators only ever see fully
/// resolved transforms.
pub struct SimRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputState,
    frame: FrameBuffer,
    view: CameraUniform,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> SimRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::new(),
            input: InputState::new(),
            frame: FrameBuffer::new(),
            view: CameraUniform {
                view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            },
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.game.init(&mut self.ctx);
        self.view = self.ctx.camera.uniform();
        self.initialized = true;
    }

    // ---- Host-side input feeds ----

    /// Record a key level change from the host's windowing layer.
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.input.set_key(key, down);
    }

    /// Accumulate mouse movement from the host's windowing layer.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.input.add_mouse_delta(dx, dy);
    }

    /// Run one frame: advance the wall clock, update the game, bake the
    /// frame output. `raw_dt` is the host's elapsed time since last frame.
    pub fn tick(&mut self, raw_dt: f32) {
        if !self.initialized {
            return;
        }

        // Clamp hitches so one long frame cannot become a giant step
        let dt = raw_dt.clamp(0.0, self.config.max_dt);

        self.ctx.clear_frame_data();
        self.ctx.clock.advance(dt);

        self.game.update(&mut self.ctx, &self.input, dt);
        self.input.end_frame();

        self.ctx.events.truncate(self.config.max_events);
        self.frame.rebuild(&self.ctx.scene, &self.ctx.comets);
        self.view = self.ctx.camera.uniform();
    }

    // ---- Frame output accessors ----

    /// Finalized, visibility-culled body instances for this frame.
    pub fn instances(&self) -> &[RenderInstance] {
        self.frame.instances()
    }

    /// Flat comet-trail vertex list for this frame.
    pub fn trail_vertices(&self) -> &[TrailVertex] {
        self.frame.trail_vertices()
    }

    /// Per-comet vertex counts splitting `trail_vertices` into strips.
    pub fn trail_strips(&self) -> &[u32] {
        self.frame.trail_strips()
    }

    /// Resolved view matrix for this frame.
    pub fn view_uniform(&self) -> &CameraUniform {
        &self.view
    }

    /// Events emitted during this frame's update.
    pub fn events(&self) -> &[crate::api::types::SimEvent] {
        &self.ctx.events
    }

    /// The selected body's descriptive record, if selection mode is active.
    pub fn selected_info(&self) -> Option<&BodyInfo> {
        if self.ctx.selector.is_active() {
            self.ctx.selector.selected_info()
        } else {
            None
        }
    }

    /// Info-overlay fade level for the host's UI pass.
    pub fn overlay_alpha(&self) -> f32 {
        self.ctx.info_panel.fade_alpha()
    }

    /// Direct access to engine state, for hosts and tests.
    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }
}
