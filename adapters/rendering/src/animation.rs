//! One-shot sprite strip playback.

use glam::Vec2;

use crate::{ImageHandle, RenderTarget, SourceRect};

/// Plays the frames of a horizontal sprite strip once.
///
/// Frames are `frame_width` pixels wide and span the full strip height. Once
/// the elapsed time reaches `frame_count * frame_duration` the animation is
/// done and draws nothing; it cannot be restarted.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    sprite_sheet: ImageHandle,
    frame_width: f32,
    frame_duration: f32,
    total_time: f32,
    elapsed: f32,
}

impl Animation {
    /// Creates an animation over `sprite_sheet` with fixed-duration frames.
    #[must_use]
    pub fn new(sprite_sheet: ImageHandle, frame_width: f32, frame_duration: f32) -> Self {
        let frame_count = if frame_width > 0.0 {
            (sprite_sheet.width() / frame_width).floor()
        } else {
            0.0
        };
        Self {
            total_time: frame_count * frame_duration.max(0.0),
            sprite_sheet,
            frame_width,
            frame_duration,
            elapsed: 0.0,
        }
    }

    /// Seconds the full strip takes to play.
    #[must_use]
    pub const fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Seconds played so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the last frame has finished playing.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.total_time
    }

    /// Index of the frame currently on screen, or `None` once done.
    #[must_use]
    pub fn current_frame(&self) -> Option<u32> {
        if self.is_done() || self.frame_duration <= 0.0 {
            return None;
        }
        Some((self.elapsed / self.frame_duration).floor() as u32)
    }

    /// Moves playback forward by `tick` seconds.
    pub fn advance(&mut self, tick: f32) {
        self.elapsed += tick.max(0.0);
    }

    /// Draws the current frame centred on `center` without advancing playback.
    pub fn draw_current(&self, target: &mut dyn RenderTarget, center: Vec2) {
        let Some(index) = self.current_frame() else {
            return;
        };
        let frame_height = self.sprite_sheet.height();
        let source = SourceRect::new(
            index as f32 * self.frame_width,
            0.0,
            self.frame_width,
            frame_height,
        );
        let top_left = center - Vec2::new(self.frame_width, frame_height) * 0.5;
        target.draw_image(&self.sprite_sheet, Some(source), top_left);
    }

    /// Advances by `tick` and draws the resulting frame centred on `center`.
    pub fn draw_frame(&mut self, tick: f32, target: &mut dyn RenderTarget, center: Vec2) {
        self.advance(tick);
        self.draw_current(target, center);
    }
}
