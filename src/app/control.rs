use std::time::{Duration, Instant};

/// Turns wall-clock time into a steady stream of simulation ticks,
/// independent of how often it is polled
pub struct TickTimer {
    ns_per_tick: f64,
    last_update: Instant,
    /// Ticks owed, the fractional part is how far the
    /// simulation is between two ticks
    delta: f64,
    /// Longer gaps between updates are dropped instead
    /// of being caught up on
    stall_threshold: Duration,
}

impl TickTimer {
    pub const DEFAULT_TPS: f64 = 10.;
    pub const DEFAULT_STALL_THRESHOLD: Duration = Duration::from_millis(100);

    pub fn new(ticks_per_second: f64) -> Self {
        let mut timer = Self {
            ns_per_tick: 1_000_000_000. / Self::DEFAULT_TPS,
            last_update: Instant::now(),
            delta: 0.,
            stall_threshold: Self::DEFAULT_STALL_THRESHOLD,
        };
        timer.set_ticks_per_second(ticks_per_second);
        timer
    }

    #[must_use]
    pub fn with_stall_threshold(mut self, stall_threshold: Duration) -> Self {
        self.stall_threshold = stall_threshold;
        self
    }

    pub fn ticks_per_second(&self) -> f64 {
        1_000_000_000. / self.ns_per_tick
    }

    /// Non-positive rates are ignored
    pub fn set_ticks_per_second(&mut self, ticks_per_second: f64) {
        if ticks_per_second <= 0. || !ticks_per_second.is_finite() {
            tracing::warn!(ticks_per_second, "ignoring invalid tick rate");
            return;
        }
        self.ns_per_tick = 1_000_000_000. / ticks_per_second;
    }

    /// Call once per frame, then drain `should_tick`
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_update;
        self.last_update = now;
        self.update_by(elapsed);
    }

    pub fn update_by(&mut self, elapsed: Duration) {
        if elapsed > self.stall_threshold {
            tracing::debug!(?elapsed, "stall, skipping ticks");
            return;
        }
        self.delta += elapsed.as_nanos() as f64 / self.ns_per_tick;
    }

    // repeatedly called as while loop condition
    pub fn should_tick(&mut self) -> bool {
        if self.delta >= 1. {
            self.delta -= 1.;
            true
        } else {
            false
        }
    }

    /// Fraction of the way from the last tick to the next one
    pub fn interpolation(&self) -> f32 {
        self.delta.clamp(0., 1.) as f32
    }
}
