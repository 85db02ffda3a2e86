//! Mutable HSLA colour used for simulation-driven visual feedback.

use std::fmt;

use serde::{Deserialize, Serialize};

const LIGHTNESS_MIN: f32 = 0.0;
const LIGHTNESS_MAX: f32 = 100.0;

/// Colour expressed as hue, saturation, lightness and alpha.
///
/// Hue is an unbounded angle in degrees, saturation and lightness are
/// percentages and alpha lies in `0.0..=1.0`. Only lightness is mutated after
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    hue: f32,
    saturation: f32,
    lightness: f32,
    alpha: f32,
}

impl Color {
    /// Creates a new colour from its HSLA channels.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation percentage.
    #[must_use]
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Lightness percentage.
    #[must_use]
    pub const fn lightness(&self) -> f32 {
        self.lightness
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Lowers lightness by `amount`, never dropping below zero.
    pub fn darken(&mut self, amount: f32) {
        if self.lightness <= LIGHTNESS_MIN {
            return;
        }
        self.lightness = (self.lightness - amount).max(LIGHTNESS_MIN);
    }

    /// Raises lightness by `amount`, never exceeding one hundred.
    pub fn lighten(&mut self, amount: f32) {
        if self.lightness >= LIGHTNESS_MAX {
            return;
        }
        self.lightness = (self.lightness + amount).min(LIGHTNESS_MAX);
    }

    /// Converts the colour into normalised RGBA channels for backends that
    /// cannot consume HSLA directly.
    #[must_use]
    pub fn to_rgba(&self) -> [f32; 4] {
        let saturation = (self.saturation / 100.0).clamp(0.0, 1.0);
        let lightness = (self.lightness / 100.0).clamp(0.0, 1.0);
        let sector = self.hue.rem_euclid(360.0) / 60.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (red, green, blue) = match sector as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };
        let offset = lightness - chroma / 2.0;

        [
            red + offset,
            green + offset,
            blue + offset,
            self.alpha.clamp(0.0, 1.0),
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
