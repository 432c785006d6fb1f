/// Wall-clock accumulator for the simulation process.
/// Collapse progress and comet-trail sampling run off this clock, NOT the
/// scaled simulation time — pausing or speeding up the orbits must not
/// affect them.
pub struct SimClock {
    elapsed: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advance by a raw (unscaled) frame delta.
    pub fn advance(&mut self, raw_dt: f32) {
        self.elapsed += raw_dt as f64;
    }

    /// Seconds since simulation start.
    pub fn now(&self) -> f64 {
        self.elapsed
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-control state machine: pause, speed multiplier, direction.
/// The magnitude of `speed` is capped at [`TimeControl::MAX_SPEED`] in both
/// directions; a negative speed runs the orbits backwards.
pub struct TimeControl {
    speed: f32,
    paused: bool,
}

impl TimeControl {
    pub const MAX_SPEED: f32 = 10.0;
    const SPEED_STEP: f32 = 1.5;

    pub fn new() -> Self {
        Self {
            speed: 1.0,
            paused: false,
        }
    }

    /// Scale a raw frame delta into simulation time.
    pub fn effective_delta(&self, raw_dt: f32) -> f32 {
        if self.paused {
            0.0
        } else {
            raw_dt * self.speed
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("simulation {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn increase_speed(&mut self) {
        self.speed = (self.speed * Self::SPEED_STEP).min(Self::MAX_SPEED);
        log::info!("time speed: {}x", self.speed);
    }

    pub fn decrease_speed(&mut self) {
        self.speed = (self.speed / Self::SPEED_STEP).max(-Self::MAX_SPEED);
        log::info!("time speed: {}x", self.speed);
    }

    /// Flip the direction of time.
    pub fn reverse(&mut self) {
        self.speed = -self.speed;
        log::info!(
            "time {} at {}x speed",
            if self.speed < 0.0 { "reversed" } else { "forward" },
            self.speed.abs()
        );
    }

    /// Back to normal 1x forward speed. Pause state is a separate concern
    /// and is left untouched.
    pub fn reset_speed(&mut self) {
        self.speed = 1.0;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new()
    }
}
