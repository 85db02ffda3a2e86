#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spawning system that decides when and where inbound aliens appear.
//!
//! The cadence is measured in wall-clock time rather than simulated time, so a
//! clamped frame never delays a spawn. Angles are drawn from a seeded
//! ChaCha stream so a replay with the same seed and clock readings produces
//! the same aliens.

use std::time::Duration;

use orbital_defence_core::GameConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    spawn_interval: Duration,
    angle_span: f32,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration from a cadence, an angular span and a seed.
    #[must_use]
    pub const fn new(spawn_interval: Duration, angle_span: f32, rng_seed: u64) -> Self {
        Self {
            spawn_interval,
            angle_span,
            rng_seed,
        }
    }

    /// Derives the spawning configuration from the game tunables.
    #[must_use]
    pub fn from_game_config(config: &GameConfig, rng_seed: u64) -> Self {
        Self::new(config.spawn_interval(), config.spawn_angle_span, rng_seed)
    }
}

/// Polar placement of an alien that should enter the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    /// Distance from the planet at which the alien appears.
    pub radial_distance: f32,
    /// Polar angle of the spawn point in radians.
    pub angle: f32,
}

/// Emits at most one spawn request per interval of wall-clock time.
#[derive(Debug)]
pub struct Spawning {
    spawn_interval: Duration,
    angle_span: f32,
    last_spawn: Option<Duration>,
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            spawn_interval: config.spawn_interval,
            angle_span: config.angle_span,
            last_spawn: None,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Wall-clock reading of the most recent spawn, if any.
    #[must_use]
    pub const fn last_spawn(&self) -> Option<Duration> {
        self.last_spawn
    }

    /// Returns a spawn request when the cadence allows one at `now`.
    ///
    /// The very first poll always spawns. Afterwards a spawn happens once
    /// `now` is at least one interval past the previous spawn; missed
    /// intervals are not caught up.
    pub fn poll(&mut self, now: Duration, radial_distance: f32) -> Option<SpawnRequest> {
        if !self.is_due(now) {
            return None;
        }

        self.last_spawn = Some(now);
        Some(SpawnRequest {
            radial_distance,
            angle: self.next_angle(),
        })
    }

    fn is_due(&self, now: Duration) -> bool {
        match self.last_spawn {
            None => true,
            Some(previous) => now.saturating_sub(previous) >= self.spawn_interval,
        }
    }

    fn next_angle(&mut self) -> f32 {
        if !(self.angle_span > 0.0 && self.angle_span.is_finite()) {
            return 0.0;
        }
        self.rng.gen_range(0.0..self.angle_span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_spawns_immediately() {
        let mut spawning = Spawning::new(Config::new(Duration::from_millis(500), 1.0, 7));
        assert!(spawning.poll(Duration::from_secs(90), 400.0).is_some());
        assert_eq!(spawning.last_spawn(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn non_finite_span_pins_the_angle() {
        for span in [f32::INFINITY, f32::NAN, -1.0] {
            let mut spawning = Spawning::new(Config::new(Duration::ZERO, span, 7));
            let request = spawning.poll(Duration::ZERO, 10.0).expect("first poll spawns");
            assert_eq!(request.angle, 0.0);
        }
    }

    #[test]
    fn zero_span_pins_the_angle() {
        let mut spawning = Spawning::new(Config::new(Duration::ZERO, 0.0, 7));
        let request = spawning.poll(Duration::ZERO, 10.0).expect("first poll spawns");
        assert_eq!(request.angle, 0.0);
    }
}
