//! Explosion left behind by a destroyed alien.

use glam::Vec2;
use orbital_defence_core::GameConfig;
use orbital_defence_rendering::{Animation, ImageHandle, RenderTarget};

/// Stationary explosion that plays once and then removes itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplodingAlien {
    position: Vec2,
    animation: Animation,
    remove: bool,
}

impl ExplodingAlien {
    /// Starts an explosion at `position` using the explosion sprite strip.
    #[must_use]
    pub fn new(position: Vec2, sprite_sheet: ImageHandle, config: &GameConfig) -> Self {
        Self {
            position,
            animation: Animation::new(
                sprite_sheet,
                config.explosion_frame_width,
                config.explosion_frame_duration,
            ),
            remove: false,
        }
    }

    /// Where the explosion is centred.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Playback state.
    #[must_use]
    pub const fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Whether playback has finished.
    #[must_use]
    pub const fn is_marked_for_removal(&self) -> bool {
        self.remove
    }

    /// Advances playback and flags the explosion once the strip is exhausted.
    pub fn update(&mut self, tick: f32) {
        self.animation.advance(tick);
        if self.animation.is_done() {
            self.remove = true;
        }
    }

    /// Draws the current frame.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        self.animation.draw_current(target, self.position);
    }
}
