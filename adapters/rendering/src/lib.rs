#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Orbital Defence adapters.
//!
//! The simulation draws itself through the canvas-like [`RenderTarget`]
//! trait. Backends implement that trait, load the images queued in an
//! [`AssetManager`], translate pointer clicks into world coordinates with
//! [`PointerInput`], and drive frames through [`RenderingBackend`].

mod animation;
mod assets;
mod input;
mod recording;

pub use animation::Animation;
pub use assets::{AssetError, AssetManager, ImageSize};
pub use input::{screen_to_world, CanvasRect, PointerInput};
pub use recording::{DrawCommand, RecordingTarget};

use anyhow::Result as AnyResult;
use glam::Vec2;
use orbital_defence_core::Color;
use std::time::Duration;

/// RGBA colour used by backends and fixed paints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Rgba {
    /// Creates a new colour from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque colour from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Fill or stroke style handed to a [`RenderTarget`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Fixed RGBA colour.
    Solid(Rgba),
    /// Simulation-owned HSLA colour.
    Hsla(Color),
}

impl Paint {
    /// Opaque red used for the planet and laser beams.
    pub const RED: Self = Self::Solid(Rgba::new(1.0, 0.0, 0.0, 1.0));

    /// Resolves the paint into RGBA channels.
    #[must_use]
    pub fn to_rgba(&self) -> Rgba {
        match self {
            Self::Solid(rgba) => *rgba,
            Self::Hsla(color) => {
                let [red, green, blue, alpha] = color.to_rgba();
                Rgba::new(red, green, blue, alpha)
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Hsla(color)
    }
}

/// Reference to an image registered with the [`AssetManager`].
///
/// Handles for images that failed to load are still handed out; they report
/// zero dimensions and backends skip drawing them.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageHandle {
    path: String,
    size: ImageSize,
    loaded: bool,
}

impl ImageHandle {
    /// Creates a handle for an image that loaded with the provided size.
    #[must_use]
    pub fn loaded(path: impl Into<String>, size: ImageSize) -> Self {
        Self {
            path: path.into(),
            size,
            loaded: true,
        }
    }

    /// Creates a handle for an image that is unknown or failed to load.
    #[must_use]
    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size: ImageSize::default(),
            loaded: false,
        }
    }

    /// Asset path the handle was requested with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Width in pixels, zero when missing.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Height in pixels, zero when missing.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Whether the backing image loaded successfully.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Region of an image, in pixels, used to crop frames out of sprite strips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRect {
    /// Left edge of the region.
    pub x: f32,
    /// Top edge of the region.
    pub y: f32,
    /// Width of the region.
    pub width: f32,
    /// Height of the region.
    pub height: f32,
}

impl SourceRect {
    /// Creates a new source rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Dimensions of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Surface width.
    pub width: f32,
    /// Surface height.
    pub height: f32,
}

impl Viewport {
    /// Creates a new viewport descriptor.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface size as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Centre of the surface, which maps to the world origin.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}

/// Two-dimensional drawing surface with a canvas-style transform stack.
///
/// Coordinates passed to drawing calls are transformed by every `translate`
/// and `rotate` issued since the matching `save`.
pub trait RenderTarget {
    /// Clears an axis-aligned rectangle in untransformed surface space.
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    /// Pushes the current transform.
    fn save(&mut self);
    /// Pops the transform pushed by the matching `save`.
    fn restore(&mut self);
    /// Moves the origin by `offset`.
    fn translate(&mut self, offset: Vec2);
    /// Rotates the coordinate system clockwise by `radians`.
    fn rotate(&mut self, radians: f32);
    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);
    /// Strokes the outline of a circle.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, paint: Paint);
    /// Strokes a straight segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, paint: Paint);
    /// Blits an image, or the `source` region of it, with its top-left corner at `position`.
    fn draw_image(&mut self, image: &ImageHandle, source: Option<SourceRect>, position: Vec2);
}

/// Per-frame input gathered by the adapter before the simulation runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Click captured since the previous frame, in world coordinates.
    pub click: Option<Vec2>,
    /// Current size of the drawing surface.
    pub viewport: Viewport,
}

/// Frame-rate widget fed once per rendered frame.
pub trait PerformanceOverlay {
    /// Records the wall-clock duration of one frame.
    fn record_frame(&mut self, frame: Duration);
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid colour used to clear each frame.
    pub clear_color: Rgba,
    /// Initial size of the window.
    pub viewport: Viewport,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Rgba, viewport: Viewport) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            viewport,
        }
    }
}

/// Rendering backend capable of presenting an Orbital Defence game.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The backend first loads every image queued in `assets`. Once all loads
    /// have completed, successfully or not, `start` receives the populated
    /// manager and returns the frame closure. That closure is then invoked once
    /// per display refresh with the frame's input and the drawing surface.
    fn run<S, F>(self, presentation: Presentation, assets: AssetManager, start: S) -> AnyResult<()>
    where
        S: FnOnce(AssetManager) -> F + 'static,
        F: FnMut(FrameInput, &mut dyn RenderTarget) + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsla_paint_resolves_through_core_color() {
        let paint = Paint::from(Color::new(0.0, 100.0, 50.0, 0.25));
        let rgba = paint.to_rgba();

        assert!((rgba.red - 1.0).abs() < 1e-4);
        assert!(rgba.green.abs() < 1e-4);
        assert!(rgba.blue.abs() < 1e-4);
        assert!((rgba.alpha - 0.25).abs() < 1e-4);
    }

    #[test]
    fn red_paint_is_opaque_red() {
        assert_eq!(Paint::RED.to_rgba(), Rgba::from_rgb_u8(255, 0, 0));
    }

    #[test]
    fn missing_image_reports_zero_size() {
        let handle = ImageHandle::missing("img/tower.png");

        assert!(!handle.is_loaded());
        assert_eq!(handle.width(), 0.0);
        assert_eq!(handle.height(), 0.0);
        assert_eq!(handle.path(), "img/tower.png");
    }

    #[test]
    fn viewport_center_is_half_size() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.center(), Vec2::new(400.0, 300.0));
    }
}
