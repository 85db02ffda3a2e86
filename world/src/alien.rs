//! Inbound aliens.

use glam::Vec2;
use orbital_defence_core::{Color, GameConfig, PLANET_RADIUS};
use orbital_defence_rendering::RenderTarget;

/// Result of applying damage to an alien.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// The alien survived, or was already destroyed before this hit.
    Absorbed,
    /// This hit destroyed the alien. Reported at most once per alien.
    Destroyed,
}

/// Alien moving straight toward the planet at constant radial speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    position: Vec2,
    radius: f32,
    radial_distance: f32,
    angle: f32,
    speed: f32,
    health: f32,
    fill_color: Color,
    border_color: Color,
    hit_darkening: f32,
    remove: bool,
}

impl Alien {
    /// Creates an alien at the given polar coordinates.
    #[must_use]
    pub fn new(radial_distance: f32, angle: f32, config: &GameConfig) -> Self {
        Self {
            position: Vec2::from_angle(angle) * radial_distance,
            radius: config.alien_radius,
            radial_distance,
            angle,
            speed: config.alien_speed,
            health: config.alien_health,
            fill_color: config.alien_color,
            border_color: config.alien_color,
            hit_darkening: config.hit_darkening,
            remove: false,
        }
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Collision radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance from the planet centre.
    #[must_use]
    pub const fn radial_distance(&self) -> f32 {
        self.radial_distance
    }

    /// Remaining health.
    #[must_use]
    pub const fn health(&self) -> f32 {
        self.health
    }

    /// Body colour, darkened by every hit.
    #[must_use]
    pub const fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Outline colour.
    #[must_use]
    pub const fn border_color(&self) -> Color {
        self.border_color
    }

    /// Whether the alien will be purged at the end of the frame.
    #[must_use]
    pub const fn is_marked_for_removal(&self) -> bool {
        self.remove
    }

    /// Moves the alien inward by `tick` seconds of travel.
    ///
    /// Reaching the planet marks the alien for silent removal.
    pub fn update(&mut self, tick: f32) {
        self.radial_distance -= self.speed * tick;
        self.position = Vec2::from_angle(self.angle) * self.radial_distance;

        if self.hit_planet() && !self.remove {
            tracing::debug!(angle = self.angle, "alien reached the planet");
            self.remove = true;
        }
    }

    /// Whether the alien overlaps the planet.
    #[must_use]
    pub fn hit_planet(&self) -> bool {
        let reach = self.radius + PLANET_RADIUS;
        self.position.length_squared() < reach * reach
    }

    /// Applies `damage` and darkens the body.
    ///
    /// Negative damage is ignored, so health never increases.
    pub fn hit(&mut self, damage: f32) -> HitOutcome {
        self.health -= damage.max(0.0);
        self.fill_color.darken(self.hit_darkening);

        if self.health <= 0.0 && !self.remove {
            self.remove = true;
            return HitOutcome::Destroyed;
        }
        HitOutcome::Absorbed
    }

    /// Draws a filled, outlined circle.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_circle(self.position, self.radius, self.fill_color.into());
        target.stroke_circle(self.position, self.radius, 1.0, self.border_color.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_defence_rendering::{DrawCommand, Paint, RecordingTarget};

    #[test]
    fn spawns_with_full_health_and_default_colours() {
        let alien = Alien::new(400.0, 0.0, &GameConfig::default());

        assert_eq!(alien.health(), 100.0);
        assert_eq!(alien.position(), Vec2::new(400.0, 0.0));
        assert_eq!(alien.fill_color(), Color::new(111.0, 98.0, 50.0, 1.0));
        assert_eq!(alien.border_color(), alien.fill_color());
    }

    #[test]
    fn update_moves_inward_at_constant_speed() {
        let mut alien = Alien::new(400.0, std::f32::consts::FRAC_PI_2, &GameConfig::default());
        alien.update(0.5);

        assert!((alien.radial_distance() - 350.0).abs() < 1e-4);
        assert!((alien.position().y - 350.0).abs() < 1e-3);
        assert!(!alien.is_marked_for_removal());
    }

    #[test]
    fn reaching_the_planet_marks_for_removal() {
        let mut alien = Alien::new(60.0, 1.0, &GameConfig::default());
        alien.update(0.01);
        assert!(!alien.is_marked_for_removal());

        alien.update(0.05);
        assert!(alien.hit_planet());
        assert!(alien.is_marked_for_removal());
    }

    #[test]
    fn travel_time_to_planet_matches_distance_over_speed() {
        let config = GameConfig::default();
        let mut alien = Alien::new(400.0, 2.0, &config);
        let tick = 0.016;
        let mut elapsed = 0.0;

        while !alien.is_marked_for_removal() {
            alien.update(tick);
            elapsed += tick;
        }

        let expected = (400.0 - (config.alien_radius + PLANET_RADIUS)) / config.alien_speed;
        assert!((elapsed - expected).abs() <= tick + 1e-3, "{elapsed} vs {expected}");
    }

    #[test]
    fn destruction_is_reported_exactly_once() {
        let mut alien = Alien::new(200.0, 0.0, &GameConfig::default());
        let outcomes: Vec<HitOutcome> = (0..6).map(|_| alien.hit(30.0)).collect();

        assert_eq!(
            outcomes
                .iter()
                .filter(|outcome| **outcome == HitOutcome::Destroyed)
                .count(),
            1
        );
        assert_eq!(outcomes[3], HitOutcome::Destroyed);
        assert!(alien.is_marked_for_removal());
    }

    #[test]
    fn health_never_increases() {
        let mut alien = Alien::new(200.0, 0.0, &GameConfig::default());
        let mut previous = alien.health();
        for damage in [5.0, -20.0, 0.0, 12.5, -1.0, 200.0, 3.0] {
            let _ = alien.hit(damage);
            assert!(alien.health() <= previous);
            previous = alien.health();
        }
    }

    #[test]
    fn hits_darken_the_fill_but_not_the_border() {
        let mut alien = Alien::new(200.0, 0.0, &GameConfig::default());
        for _ in 0..4 {
            let _ = alien.hit(1.0);
        }

        assert_eq!(alien.fill_color().lightness(), 30.0);
        assert_eq!(alien.border_color().lightness(), 50.0);
    }

    #[test]
    fn planet_hit_does_not_count_as_destruction() {
        let mut alien = Alien::new(56.0, 0.0, &GameConfig::default());
        alien.update(0.1);
        assert!(alien.is_marked_for_removal());

        assert_eq!(alien.hit(500.0), HitOutcome::Absorbed);
    }

    #[test]
    fn draw_fills_then_strokes() {
        let alien = Alien::new(100.0, 0.0, &GameConfig::default());
        let mut target = RecordingTarget::new();
        alien.draw(&mut target);

        let colour = Color::new(111.0, 98.0, 50.0, 1.0);
        assert_eq!(
            target.take(),
            vec![
                DrawCommand::FillCircle {
                    center: Vec2::new(100.0, 0.0),
                    radius: 5.0,
                    paint: Paint::Hsla(colour),
                },
                DrawCommand::StrokeCircle {
                    center: Vec2::new(100.0, 0.0),
                    radius: 5.0,
                    line_width: 1.0,
                    paint: Paint::Hsla(colour),
                },
            ]
        );
    }
}
