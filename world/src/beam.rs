//! Tower to alien laser engagements.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use orbital_defence_core::GameConfig;
use orbital_defence_rendering::{Paint, RenderTarget};

use crate::{Alien, EntityId, HitOutcome, Tower};

/// What a beam update did to its alien.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeamOutcome {
    /// Damage was applied and the alien survived.
    Firing,
    /// Damage was applied and destroyed the alien.
    Destroyed,
    /// The alien moved out of reach and the tower let go.
    Disengaged,
}

/// Continuous damage link between one tower and one alien.
///
/// Endpoints are stored as identifiers and resolved by the game every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaserBeam {
    tower: EntityId,
    alien: EntityId,
    damage: f32,
    max_length: f32,
    remove: bool,
}

impl LaserBeam {
    /// Locks `tower` onto the alien and returns the beam linking them.
    #[must_use]
    pub fn engage(
        tower: &mut Tower,
        tower_id: EntityId,
        alien_id: EntityId,
        config: &GameConfig,
    ) -> Self {
        tower.set_shooting(true);
        Self {
            tower: tower_id,
            alien: alien_id,
            damage: config.beam_damage,
            max_length: config.beam_max_length,
            remove: false,
        }
    }

    /// Firing tower.
    #[must_use]
    pub const fn tower(&self) -> EntityId {
        self.tower
    }

    /// Targeted alien.
    #[must_use]
    pub const fn alien(&self) -> EntityId {
        self.alien
    }

    /// Longest centre-to-centre distance the beam holds.
    #[must_use]
    pub const fn max_length(&self) -> f32 {
        self.max_length
    }

    /// Damage per second while engaged.
    #[must_use]
    pub const fn damage(&self) -> f32 {
        self.damage
    }

    /// Whether the beam will be purged at the end of the frame.
    #[must_use]
    pub const fn is_marked_for_removal(&self) -> bool {
        self.remove
    }

    /// Aims the tower and either damages the alien or disengages.
    ///
    /// The beam length limit is measured centre to centre, so it is shorter
    /// than the engagement reach of [`Tower::can_shoot`].
    ///
    /// The tower is released whenever the beam ends, whether through range or
    /// through the alien's destruction.
    pub fn update(&mut self, tower: &mut Tower, alien: &mut Alien, tick: f32) -> BeamOutcome {
        let delta = tower.position() - alien.position();
        tower.face(delta.y.atan2(delta.x) - FRAC_PI_2);

        if delta.length() > self.max_length {
            self.disengage(tower);
            return BeamOutcome::Disengaged;
        }

        match alien.hit(self.damage * tick) {
            HitOutcome::Absorbed => BeamOutcome::Firing,
            HitOutcome::Destroyed => {
                self.disengage(tower);
                BeamOutcome::Destroyed
            }
        }
    }

    /// Frees the tower and flags the beam for removal.
    pub fn disengage(&mut self, tower: &mut Tower) {
        tower.set_shooting(false);
        self.remove = true;
    }

    /// Flags the beam for removal when its tower no longer exists.
    pub(crate) fn drop_orphaned(&mut self) {
        self.remove = true;
    }

    /// Draws a thin red line between the resolved endpoints.
    pub fn draw(&self, target: &mut dyn RenderTarget, from: Vec2, to: Vec2) {
        target.stroke_line(from, to, 1.0, Paint::RED);
    }
}
