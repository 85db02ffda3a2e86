//! Pointer click capture and screen-to-world translation.

use glam::Vec2;

/// Placement of the drawing surface on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    /// Screen-space offset of the surface's top-left corner.
    pub origin: Vec2,
    /// Surface size in pixels.
    pub size: Vec2,
}

impl CanvasRect {
    /// Creates a new canvas rectangle.
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }
}

/// Converts a screen-space point into world coordinates centred on the planet.
#[must_use]
pub fn screen_to_world(screen: Vec2, canvas: CanvasRect) -> Vec2 {
    screen - canvas.origin - canvas.size * 0.5
}

/// Latches at most one pending click until the simulation consumes it.
///
/// A click registered while another is pending replaces it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerInput {
    pending: Option<Vec2>,
}

impl PointerInput {
    /// Records a click at `screen` on a surface placed at `canvas`.
    pub fn register_click(&mut self, screen: Vec2, canvas: CanvasRect) {
        self.pending = Some(screen_to_world(screen, canvas));
    }

    /// Returns the pending click in world coordinates and clears the latch.
    pub fn take_click(&mut self) -> Option<Vec2> {
        self.pending.take()
    }

    /// Whether a click is waiting to be consumed.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
