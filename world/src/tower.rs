//! Player-placed towers orbiting the planet.

use glam::Vec2;
use orbital_defence_core::{GameConfig, FULL_TURN};
use orbital_defence_rendering::{ImageHandle, RenderTarget};

use crate::Alien;

/// Tower orbiting the planet at a fixed radial distance.
///
/// Angular speed is inversely proportional to the radial distance, so towers
/// placed closer to the planet orbit faster.
#[derive(Clone, Debug, PartialEq)]
pub struct Tower {
    sprite: ImageHandle,
    radius: f32,
    radial_distance: f32,
    angle: f32,
    angular_speed: f32,
    position: Vec2,
    fire_range: f32,
    is_shooting: bool,
    rotation_angle: f32,
}

impl Tower {
    /// Places a tower at `position`, sized from its sprite.
    #[must_use]
    pub fn new(position: Vec2, sprite: ImageHandle, config: &GameConfig) -> Self {
        let radial_distance = position.length();
        let angular_speed = if radial_distance > f32::EPSILON {
            config.tower_orbit_factor / radial_distance
        } else {
            0.0
        };
        Self {
            radius: sprite.width() / 2.0,
            sprite,
            radial_distance,
            angle: polar_angle(position),
            angular_speed,
            position,
            fire_range: config.tower_fire_range,
            is_shooting: false,
            rotation_angle: 0.0,
        }
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Collision radius derived from the sprite width.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance from the planet centre.
    #[must_use]
    pub const fn radial_distance(&self) -> f32 {
        self.radial_distance
    }

    /// Polar angle in radians, kept within one turn.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Orbital speed in radians per second.
    #[must_use]
    pub const fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Whether a beam currently owns this tower.
    #[must_use]
    pub const fn is_shooting(&self) -> bool {
        self.is_shooting
    }

    /// Sprite rotation set by the owning beam.
    #[must_use]
    pub const fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Advances the orbit by `tick` seconds.
    pub fn update(&mut self, tick: f32) {
        self.angle += self.angular_speed * tick;
        if self.angle > FULL_TURN {
            self.angle = 0.0;
        }
        self.position = Vec2::from_angle(self.angle) * self.radial_distance;
    }

    /// Whether the tower is free and `alien` lies within engagement range.
    #[must_use]
    pub fn can_shoot(&self, alien: &Alien) -> bool {
        if self.is_shooting {
            return false;
        }
        let reach = self.radius + self.fire_range + alien.radius();
        self.position.distance_squared(alien.position()) <= reach * reach
    }

    pub(crate) fn set_shooting(&mut self, shooting: bool) {
        self.is_shooting = shooting;
    }

    pub(crate) fn face(&mut self, rotation_angle: f32) {
        self.rotation_angle = rotation_angle;
    }

    /// Draws the sprite rotated about the tower centre.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.save();
        target.translate(self.position);
        target.rotate(self.rotation_angle);
        target.translate(-self.position);
        target.draw_image(&self.sprite, None, self.position - Vec2::splat(self.radius));
        target.restore();
    }
}

fn polar_angle(position: Vec2) -> f32 {
    let angle = position.y.atan2(position.x);
    if angle < 0.0 {
        angle + FULL_TURN
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_defence_rendering::{DrawCommand, ImageSize, RecordingTarget};
    use std::f32::consts::PI;

    fn sprite() -> ImageHandle {
        ImageHandle::loaded("img/tower.png", ImageSize::new(20.0, 20.0))
    }

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn radius_and_speed_derive_from_sprite_and_distance() {
        let tower = Tower::new(Vec2::new(0.0, 200.0), sprite(), &GameConfig::default());

        assert_eq!(tower.radius(), 10.0);
        assert_eq!(tower.radial_distance(), 200.0);
        assert_eq!(tower.angular_speed(), 0.5);
        assert!((tower.angle() - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn closer_towers_orbit_faster() {
        let config = GameConfig::default();
        let near = Tower::new(Vec2::new(80.0, 0.0), sprite(), &config);
        let far = Tower::new(Vec2::new(300.0, 0.0), sprite(), &config);

        assert!(near.angular_speed() > far.angular_speed());
    }

    #[test]
    fn update_moves_along_the_orbit() {
        let mut tower = Tower::new(Vec2::new(100.0, 0.0), sprite(), &GameConfig::default());
        tower.update(0.5);

        assert_close(tower.position(), Vec2::from_angle(0.5) * 100.0);
        assert!((tower.position().length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn negative_x_clicks_land_in_the_left_half() {
        let mut tower = Tower::new(Vec2::new(-100.0, 0.0), sprite(), &GameConfig::default());
        assert!((tower.angle() - PI).abs() < 1e-6);

        tower.update(0.0);
        assert_close(tower.position(), Vec2::new(-100.0, 0.0));
    }

    #[test]
    fn angle_wraps_to_zero_after_a_full_turn() {
        let mut tower = Tower::new(Vec2::new(0.0, -100.0), sprite(), &GameConfig::default());
        tower.update(2.0);

        assert_eq!(tower.angle(), 0.0);
        assert_close(tower.position(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn tower_at_origin_stays_put() {
        let mut tower = Tower::new(Vec2::ZERO, sprite(), &GameConfig::default());
        tower.update(1.0);

        assert_eq!(tower.angular_speed(), 0.0);
        assert_eq!(tower.position(), Vec2::ZERO);
    }

    #[test]
    fn can_shoot_checks_range_and_engagement() {
        let config = GameConfig::default();
        let mut tower = Tower::new(Vec2::new(100.0, 0.0), sprite(), &config);
        let coincident = Alien::new(100.0, 0.0, &config);
        let edge = Alien::new(145.0, 0.0, &config);
        let beyond = Alien::new(146.0, 0.0, &config);

        assert!(tower.can_shoot(&coincident));
        assert!(tower.can_shoot(&edge));
        assert!(!tower.can_shoot(&beyond));

        tower.set_shooting(true);
        assert!(!tower.can_shoot(&coincident));
    }

    #[test]
    fn draw_rotates_sprite_about_its_centre() {
        let mut tower = Tower::new(Vec2::new(100.0, 0.0), sprite(), &GameConfig::default());
        tower.face(0.25);
        let mut target = RecordingTarget::new();

        tower.draw(&mut target);

        assert_eq!(
            target.take(),
            vec![
                DrawCommand::Save,
                DrawCommand::Translate {
                    offset: Vec2::new(100.0, 0.0)
                },
                DrawCommand::Rotate { radians: 0.25 },
                DrawCommand::Translate {
                    offset: Vec2::new(-100.0, 0.0)
                },
                DrawCommand::DrawImage {
                    path: "img/tower.png".to_owned(),
                    source: None,
                    position: Vec2::new(90.0, -10.0),
                },
                DrawCommand::Restore,
            ]
        );
        assert_eq!(target.save_depth(), 0);
    }
}
