//! The planet at the centre of the world.

use glam::Vec2;
use orbital_defence_core::PLANET_RADIUS;
use orbital_defence_rendering::{Paint, RenderTarget};

/// Planet anchored at the world origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planet {
    radius: f32,
}

impl Planet {
    /// Creates the planet with its fixed radius.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            radius: PLANET_RADIUS,
        }
    }

    /// Collision radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Always the origin.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Draws the planet as a red disc.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_circle(self.position(), self.radius, Paint::RED);
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::new()
    }
}
