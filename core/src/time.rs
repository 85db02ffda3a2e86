//! Wall-clock sampling and the clamped simulation timer.

use std::{cell::Cell, rc::Rc, time::Duration, time::Instant};

/// Source of monotonic wall-clock readings.
///
/// Readings are offsets from an arbitrary, clock-specific origin; only their
/// differences are meaningful.
pub trait Clock {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`], anchored at construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose readings start at zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for deterministic replays and tests.
///
/// Clones share the same reading, so a harness can keep one handle while the
/// simulation owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    reading: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the reading forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.reading.set(self.reading.get().saturating_add(delta));
    }

    /// Overwrites the reading.
    pub fn set(&self, reading: Duration) {
        self.reading.set(reading);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.reading.get()
    }
}

/// Converts wall-clock samples into clamped simulated time.
///
/// Each [`step`](Timer::step) contributes at most `max_step` of game time, so
/// a suspended window or a slow frame cannot produce a destabilising jump.
/// The first sample only establishes the baseline.
#[derive(Clone, Debug)]
pub struct Timer {
    game_time: Duration,
    last_tick: Duration,
    max_step: Duration,
    last_timestamp: Option<Duration>,
}

impl Timer {
    /// Creates a timer that clamps every step to `max_step`.
    #[must_use]
    pub const fn new(max_step: Duration) -> Self {
        Self {
            game_time: Duration::ZERO,
            last_tick: Duration::ZERO,
            max_step,
            last_timestamp: None,
        }
    }

    /// Largest amount of game time a single step may add.
    #[must_use]
    pub const fn max_step(&self) -> Duration {
        self.max_step
    }

    /// Total simulated time accumulated so far.
    #[must_use]
    pub const fn game_time(&self) -> Duration {
        self.game_time
    }

    /// Records a wall-clock sample and accumulates the clamped delta.
    pub fn step(&mut self, now: Duration) {
        if let Some(previous) = self.last_timestamp {
            let delta = now.saturating_sub(previous);
            self.game_time = self.game_time.saturating_add(delta.min(self.max_step));
        }
        self.last_timestamp = Some(now);
    }

    /// Returns game time elapsed since the previous call and resets the baseline.
    pub fn tick_diff(&mut self) -> Duration {
        let delta = self.game_time.saturating_sub(self.last_tick);
        self.last_tick = self.game_time;
        delta
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(crate::MAX_STEP_SECONDS))
    }
}
