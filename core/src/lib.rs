#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Orbital Defence engine.
//!
//! This crate holds the value types every other crate agrees on: the HSLA
//! [`Color`] used for damage feedback, the wall [`Clock`] and the clamped
//! simulation [`Timer`] fed by it, and the [`GameConfig`] tunables that the
//! world, the spawning system and the adapters are constructed from. Nothing in
//! here knows about entities or drawing surfaces.

mod color;
mod config;
mod time;

pub use color::Color;
pub use config::{ConfigError, GameConfig};
pub use time::{Clock, ManualClock, SystemClock, Timer};

/// Title shown by windowed adapters.
pub const WINDOW_TITLE: &str = "Orbital Defence";

/// Radius of the planet anchored at the world origin.
pub const PLANET_RADIUS: f32 = 50.0;

/// Largest simulated step a single wall-clock sample may contribute.
pub const MAX_STEP_SECONDS: f32 = 0.05;

/// One full turn in radians, used to wrap orbital angles.
pub const FULL_TURN: f32 = std::f32::consts::TAU;
