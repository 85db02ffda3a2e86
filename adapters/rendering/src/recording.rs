//! Render target that records its command stream instead of drawing.

use glam::Vec2;

use crate::{ImageHandle, Paint, RenderTarget, SourceRect};

/// One call made against a [`RecordingTarget`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// `clear_rect` call.
    ClearRect {
        /// Top-left corner of the cleared region.
        origin: Vec2,
        /// Size of the cleared region.
        size: Vec2,
    },
    /// `save` call.
    Save,
    /// `restore` call.
    Restore,
    /// `translate` call.
    Translate {
        /// Applied offset.
        offset: Vec2,
    },
    /// `rotate` call.
    Rotate {
        /// Applied rotation.
        radians: f32,
    },
    /// `fill_circle` call.
    FillCircle {
        /// Circle centre.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Fill style.
        paint: Paint,
    },
    /// `stroke_circle` call.
    StrokeCircle {
        /// Circle centre.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Outline width.
        line_width: f32,
        /// Stroke style.
        paint: Paint,
    },
    /// `stroke_line` call.
    StrokeLine {
        /// Segment start.
        from: Vec2,
        /// Segment end.
        to: Vec2,
        /// Stroke width.
        line_width: f32,
        /// Stroke style.
        paint: Paint,
    },
    /// `draw_image` call.
    DrawImage {
        /// Asset path of the blitted image.
        path: String,
        /// Cropped region, if any.
        source: Option<SourceRect>,
        /// Destination of the top-left corner.
        position: Vec2,
    },
}

/// Headless [`RenderTarget`] used by tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl RecordingTarget {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[must_use]
    pub const fn save_depth(&self) -> usize {
        self.depth
    }
}

impl RenderTarget for RecordingTarget {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate { offset });
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate { radians });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, paint: Paint) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            paint,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, paint: Paint) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            line_width,
            paint,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, source: Option<SourceRect>, position: Vec2) {
        self.commands.push(DrawCommand::DrawImage {
            path: image.path().to_owned(),
            source,
            position,
        });
    }
}
