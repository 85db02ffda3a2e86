//! Tunables the simulation and its adapters are constructed from.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, MAX_STEP_SECONDS};

/// Gameplay and asset tunables.
///
/// Every field has a default, so a configuration file only needs to list the
/// values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Largest simulated step a single frame may contribute, in seconds.
    pub max_step_seconds: f32,
    /// Wall-clock milliseconds between alien spawns.
    pub spawn_interval_ms: u64,
    /// Width of the angular range spawn angles are drawn from, in radians.
    pub spawn_angle_span: f32,
    /// Inward radial speed of aliens in world units per second.
    pub alien_speed: f32,
    /// Health every alien spawns with.
    pub alien_health: f32,
    /// Collision radius of an alien.
    pub alien_radius: f32,
    /// Colour aliens spawn with, used for both fill and border.
    pub alien_color: Color,
    /// Lightness removed from an alien's fill on every hit.
    pub hit_darkening: f32,
    /// Engagement distance added beyond the tower and alien radii.
    pub tower_fire_range: f32,
    /// Numerator of the orbital speed; towers orbit at `factor / distance` rad/s.
    pub tower_orbit_factor: f32,
    /// Damage per second applied by a beam.
    pub beam_damage: f32,
    /// Tower-to-alien distance beyond which a beam disengages.
    pub beam_max_length: f32,
    /// Width of one frame in the explosion sprite strip, in pixels.
    pub explosion_frame_width: f32,
    /// Seconds each explosion frame stays on screen.
    pub explosion_frame_duration: f32,
    /// Asset path of the tower sprite.
    pub tower_sprite: String,
    /// Asset path of the explosion sprite strip.
    pub explosion_sprite: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_step_seconds: MAX_STEP_SECONDS,
            spawn_interval_ms: 500,
            spawn_angle_span: crate::FULL_TURN,
            alien_speed: 100.0,
            alien_health: 100.0,
            alien_radius: 5.0,
            alien_color: Color::new(111.0, 98.0, 50.0, 1.0),
            hit_darkening: 5.0,
            tower_fire_range: 30.0,
            tower_orbit_factor: 100.0,
            beam_damage: 100.0,
            beam_max_length: 30.0,
            explosion_frame_width: 24.0,
            explosion_frame_duration: 0.1,
            tower_sprite: "assets/img/tower.png".to_owned(),
            explosion_sprite: "assets/img/explosion.png".to_owned(),
        }
    }
}

impl GameConfig {
    /// Maximum simulated step as a duration.
    ///
    /// A value too large for [`Duration`] falls back to the default step.
    #[must_use]
    pub fn max_step(&self) -> Duration {
        Duration::try_from_secs_f32(self.max_step_seconds.max(0.0))
            .unwrap_or_else(|_| Duration::from_secs_f32(MAX_STEP_SECONDS))
    }

    /// Spawn cadence as a duration.
    #[must_use]
    pub const fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Asset paths the simulation expects to be loaded before it starts.
    #[must_use]
    pub fn sprite_paths(&self) -> [&str; 2] {
        [self.tower_sprite.as_str(), self.explosion_sprite.as_str()]
    }

    /// Rejects configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_step_seconds", self.max_step_seconds),
            ("spawn_angle_span", self.spawn_angle_span),
            ("alien_speed", self.alien_speed),
            ("alien_health", self.alien_health),
            ("tower_orbit_factor", self.tower_orbit_factor),
            ("beam_damage", self.beam_damage),
            ("beam_max_length", self.beam_max_length),
            ("explosion_frame_width", self.explosion_frame_width),
            ("explosion_frame_duration", self.explosion_frame_duration),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("alien_radius", self.alien_radius),
            ("hit_darkening", self.hit_darkening),
            ("tower_fire_range", self.tower_fire_range),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.tower_sprite.trim().is_empty() {
            return Err(ConfigError::EmptySpritePath {
                field: "tower_sprite",
            });
        }
        if self.explosion_sprite.trim().is_empty() {
            return Err(ConfigError::EmptySpritePath {
                field: "explosion_sprite",
            });
        }

        Ok(())
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A rate, duration or size that must be strictly positive was not.
    #[error("{field} must be positive and finite (received {value})")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f32,
    },
    /// A radius or amount that must not be negative was.
    #[error("{field} must not be negative (received {value})")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f32,
    },
    /// A sprite path was blank.
    #[error("{field} must name an asset path")]
    EmptySpritePath {
        /// Name of the offending field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.spawn_interval(), Duration::from_millis(500));
        assert_eq!(
            config.sprite_paths(),
            ["assets/img/tower.png", "assets/img/explosion.png"]
        );
    }

    #[test]
    fn partial_toml_overrides_keep_remaining_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            spawn_interval_ms = 250
            beam_damage = 40.0
            alien_color = { hue = 200.0, saturation = 50.0, lightness = 60.0, alpha = 1.0 }
            "#,
        )
        .expect("valid config");

        assert_eq!(config.spawn_interval_ms, 250);
        assert_eq!(config.beam_damage, 40.0);
        assert_eq!(config.alien_color, Color::new(200.0, 50.0, 60.0, 1.0));
        assert_eq!(config.alien_speed, GameConfig::default().alien_speed);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = toml::from_str::<GameConfig>("difficulty = 3");
        assert!(parsed.is_err());
    }

    #[test]
    fn validate_reports_non_positive_fields() {
        let config = GameConfig {
            alien_speed: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "alien_speed",
                value: 0.0
            })
        );

        let config = GameConfig {
            max_step_seconds: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "max_step_seconds",
                ..
            })
        ));
    }

    #[test]
    fn unrepresentable_max_step_falls_back_to_the_default() {
        let config = GameConfig {
            max_step_seconds: f32::INFINITY,
            spawn_angle_span: f32::INFINITY,
            ..GameConfig::default()
        };

        assert_eq!(config.max_step(), GameConfig::default().max_step());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "max_step_seconds",
                ..
            })
        ));

        let span_only = GameConfig {
            spawn_angle_span: f32::INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(
            span_only.validate(),
            Err(ConfigError::NonPositive {
                field: "spawn_angle_span",
                ..
            })
        ));
    }

    #[test]
    fn validate_reports_negative_and_blank_fields() {
        let config = GameConfig {
            tower_fire_range: -1.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "tower_fire_range",
                value: -1.0
            })
        );

        let config = GameConfig {
            explosion_sprite: "  ".to_owned(),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptySpritePath {
                field: "explosion_sprite"
            })
        );
    }
}
