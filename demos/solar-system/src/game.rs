/// Solar System — interactive orrery with time controls, planet selection,
/// size comparison and a black-hole collapse effect.
///
/// Pure simulation: the embedding host owns the window and the GPU and reads
/// the baked frame output from the runner after each tick.

use orrery_engine::{
    EdgeTrigger, EngineContext, Game, GameConfig, InputState, Key, SimEvent,
};

use crate::bodies;

// ── Key bindings ─────────────────────────────────────────────────────

const KEY_PAUSE: Key = Key::Space;
const KEY_SPEED_UP: Key = Key::Equal;
const KEY_SPEED_DOWN: Key = Key::Minus;
const KEY_REVERSE: Key = Key::Digit9;
const KEY_RESET_SPEED: Key = Key::Digit0;
const KEY_COMPARISON: Key = Key::C;
const KEY_SELECT: Key = Key::Digit3;
const KEY_EXIT_SELECT: Key = Key::Digit4;
const KEY_INFO: Key = Key::I;
const KEY_COLLAPSE: Key = Key::X;
const KEY_RESET: Key = Key::R;
const KEY_FIRST_PERSON: Key = Key::Digit1;
const KEY_THIRD_PERSON: Key = Key::Digit2;

// ── Event kinds to the host ──────────────────────────────────────────

/// a = time speed, b = paused (0/1), c = collapse strength.
const EVENT_TIME_INFO: f32 = 1.0;
/// a = selected index (-1 when selection mode is off).
const EVENT_SELECTION: f32 = 2.0;

/// One edge trigger per debounced control, composed rather than duplicated
/// as ad-hoc booleans per key.
#[derive(Default)]
struct Controls {
    pause: EdgeTrigger,
    speed_up: EdgeTrigger,
    speed_down: EdgeTrigger,
    reverse: EdgeTrigger,
    comparison: EdgeTrigger,
    select: EdgeTrigger,
    info: EdgeTrigger,
    collapse: EdgeTrigger,
    reset: EdgeTrigger,
}

pub struct SolarSystem {
    controls: Controls,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            controls: Controls::default(),
        }
    }

    /// Sample every debounced control once and apply the transitions.
    fn handle_toggles(&mut self, ctx: &mut EngineContext, input: &InputState) {
        let c = &mut self.controls;

        if c.pause.fire(input.pressed(KEY_PAUSE)) {
            ctx.time.toggle_pause();
        }
        if c.speed_up.fire(input.pressed(KEY_SPEED_UP)) {
            ctx.time.increase_speed();
        }
        if c.speed_down.fire(input.pressed(KEY_SPEED_DOWN)) {
            ctx.time.decrease_speed();
        }
        if c.reverse.fire(input.pressed(KEY_REVERSE)) {
            ctx.time.reverse();
        }
        if input.pressed(KEY_RESET_SPEED) {
            ctx.time.reset_speed();
        }

        if c.comparison.fire(input.pressed(KEY_COMPARISON)) {
            ctx.layout.toggle_comparison();
        }

        // Selection is a two-state toggle nested in a cycle: the first press
        // enters the mode without advancing, later presses advance.
        if c.select.fire(input.pressed(KEY_SELECT)) {
            if !ctx.selector.is_active() {
                ctx.selector.enter();
                ctx.camera.first_person = false;
            } else {
                ctx.selector.advance();
                if let Some(info) = ctx.selector.selected_info().cloned() {
                    ctx.info_panel.refresh(info);
                }
            }
        }
        if input.pressed(KEY_EXIT_SELECT) && ctx.selector.is_active() {
            ctx.selector.exit();
            ctx.info_panel.hide();
            log::info!("exited selection mode");
        }

        // Info overlay only answers while a body is selected
        if ctx.selector.is_active() {
            if c.info.fire(input.pressed(KEY_INFO)) {
                if let Some(info) = ctx.selector.selected_info().cloned() {
                    ctx.info_panel.toggle(info);
                }
            }
        }

        let now = ctx.clock.now();
        if c.collapse.fire(input.pressed(KEY_COLLAPSE)) {
            ctx.layout.activate_collapse(now, &ctx.scene);
        }
        if c.reset.fire(input.pressed(KEY_RESET)) {
            ctx.layout.reset_collapse(&mut ctx.scene);
        }
    }

    fn update_camera(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32) {
        if ctx.selector.is_active() {
            if let Some(body) = ctx.selector.selected_body().and_then(|id| ctx.scene.get(id)) {
                let (position, scale) = (body.position, body.scale);
                ctx.camera.follow(position, scale, dt);
            }
        } else {
            // Manual person switching only outside selection mode
            if input.pressed(KEY_FIRST_PERSON) {
                ctx.camera.first_person = true;
            }
            if input.pressed(KEY_THIRD_PERSON) {
                ctx.camera.first_person = false;
            }
            ctx.camera.update_free(input, dt);
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.load_system(&bodies::system_config());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32) {
        // Input edges first, then positions, then the camera — transforms
        // are fully resolved before anything downstream reads them.
        self.handle_toggles(ctx, input);
        ctx.info_panel.update(dt);

        let now = ctx.clock.now();
        let effective_dt = ctx.time.effective_delta(dt);
        ctx.layout.update(&mut ctx.scene, effective_dt, now);

        // Comets are not part of the layout body set: they keep orbiting in
        // every mode, including during a collapse.
        let sun_position = ctx.star_position();
        for comet in &mut ctx.comets {
            comet.update(effective_dt, sun_position, now);
        }

        self.update_camera(ctx, input, dt);

        ctx.emit_event(SimEvent {
            kind: EVENT_TIME_INFO,
            a: ctx.time.speed(),
            b: if ctx.time.paused() { 1.0 } else { 0.0 },
            c: ctx.layout.collapse_strength(),
        });
        let selected = if ctx.selector.is_active() {
            ctx.selector.selected_index().map_or(-1.0, |i| i as f32)
        } else {
            -1.0
        };
        ctx.emit_event(SimEvent {
            kind: EVENT_SELECTION,
            a: selected,
            b: 0.0,
            c: 0.0,
        });
    }
}
