//! Canvas-style affine transform stack.

use glam::Vec2;

/// Rigid transform composed of rotations and translations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Transform {
    origin: Vec2,
    rotation: f32,
}

impl Transform {
    pub(crate) const IDENTITY: Self = Self {
        origin: Vec2::ZERO,
        rotation: 0.0,
    };

    /// Moves the local origin by `offset` measured in the current local axes.
    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.origin += Vec2::from_angle(self.rotation).rotate(offset);
    }

    pub(crate) fn rotate(&mut self, radians: f32) {
        self.rotation += radians;
    }

    /// Maps a local point to screen space.
    pub(crate) fn apply(&self, point: Vec2) -> Vec2 {
        self.origin + Vec2::from_angle(self.rotation).rotate(point)
    }

    pub(crate) const fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// Current transform plus the entries pushed by `save`.
#[derive(Clone, Debug)]
pub(crate) struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    pub(crate) fn new() -> Self {
        Self {
            current: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the last saved transform. An unmatched restore is ignored.
    pub(crate) fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    pub(crate) fn current(&self) -> &Transform {
        &self.current
    }

    pub(crate) fn current_mut(&mut self) -> &mut Transform {
        &mut self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-4,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn translations_accumulate() {
        let mut stack = TransformStack::new();
        stack.current_mut().translate(Vec2::new(480.0, 480.0));
        stack.current_mut().translate(Vec2::new(-10.0, 5.0));

        assert_close(stack.current().apply(Vec2::ZERO), Vec2::new(470.0, 485.0));
    }

    #[test]
    fn translation_after_rotation_follows_rotated_axes() {
        let mut transform = Transform::IDENTITY;
        transform.translate(Vec2::new(100.0, 0.0));
        transform.rotate(FRAC_PI_2);
        transform.translate(Vec2::new(10.0, 0.0));

        assert_close(transform.apply(Vec2::ZERO), Vec2::new(100.0, 10.0));
        assert_close(transform.apply(Vec2::new(0.0, 1.0)), Vec2::new(99.0, 10.0));
    }

    #[test]
    fn rotating_about_a_point_keeps_that_point_fixed() {
        let pivot = Vec2::new(100.0, 40.0);
        let mut transform = Transform::IDENTITY;
        transform.translate(pivot);
        transform.rotate(1.3);
        transform.translate(-pivot);

        assert_close(transform.apply(pivot), pivot);
        assert!((transform.rotation() - 1.3).abs() < 1e-6);
    }

    #[test]
    fn restore_returns_to_the_saved_transform() {
        let mut stack = TransformStack::new();
        stack.current_mut().translate(Vec2::new(5.0, 5.0));
        stack.save();
        stack.current_mut().rotate(2.0);
        stack.current_mut().translate(Vec2::new(30.0, 0.0));
        stack.restore();

        assert_eq!(
            *stack.current(),
            Transform {
                origin: Vec2::new(5.0, 5.0),
                rotation: 0.0,
            }
        );
    }

    #[test]
    fn unmatched_restore_is_ignored() {
        let mut stack = TransformStack::new();
        stack.current_mut().translate(Vec2::new(1.0, 2.0));
        stack.restore();

        assert_close(stack.current().apply(Vec2::ZERO), Vec2::new(1.0, 2.0));
    }
}
