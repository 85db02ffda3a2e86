//! Tagged entity collection members.

use glam::Vec2;

use crate::{Alien, ExplodingAlien, LaserBeam, Planet, Tower};

/// Identifier allocated to every entity by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Behaviour-specific state of an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    /// The planet at the origin.
    Planet(Planet),
    /// A player-placed orbiting tower.
    Tower(Tower),
    /// An inbound alien.
    Alien(Alien),
    /// Explosion left behind by a destroyed alien.
    ExplodingAlien(ExplodingAlien),
    /// Engagement between one tower and one alien.
    LaserBeam(LaserBeam),
}

/// Member of the game's entity collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
}

impl Entity {
    /// Wraps `kind` under the provided identifier.
    #[must_use]
    pub const fn new(id: EntityId, kind: EntityKind) -> Self {
        Self { id, kind }
    }

    /// Identifier allocated by the game.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Behaviour-specific state.
    #[must_use]
    pub const fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut EntityKind {
        &mut self.kind
    }

    /// World position, or `None` for entities without one of their own.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match &self.kind {
            EntityKind::Planet(planet) => Some(planet.position()),
            EntityKind::Tower(tower) => Some(tower.position()),
            EntityKind::Alien(alien) => Some(alien.position()),
            EntityKind::ExplodingAlien(explosion) => Some(explosion.position()),
            EntityKind::LaserBeam(_) => None,
        }
    }

    /// Whether the entity will be purged at the end of the current frame.
    #[must_use]
    pub fn is_marked_for_removal(&self) -> bool {
        match &self.kind {
            EntityKind::Planet(_) => false,
            EntityKind::Tower(_) => false,
            EntityKind::Alien(alien) => alien.is_marked_for_removal(),
            EntityKind::ExplodingAlien(explosion) => explosion.is_marked_for_removal(),
            EntityKind::LaserBeam(beam) => beam.is_marked_for_removal(),
        }
    }

    /// Tower state when the entity is a tower.
    #[must_use]
    pub fn as_tower(&self) -> Option<&Tower> {
        match &self.kind {
            EntityKind::Tower(tower) => Some(tower),
            _ => None,
        }
    }

    /// Alien state when the entity is an alien.
    #[must_use]
    pub fn as_alien(&self) -> Option<&Alien> {
        match &self.kind {
            EntityKind::Alien(alien) => Some(alien),
            _ => None,
        }
    }

    /// Beam state when the entity is a laser beam.
    #[must_use]
    pub fn as_beam(&self) -> Option<&LaserBeam> {
        match &self.kind {
            EntityKind::LaserBeam(beam) => Some(beam),
            _ => None,
        }
    }
}

/// Removes every entity marked for removal, keeping survivors in order.
///
/// Returns the number of purged entities.
pub fn purge_removed(entities: &mut Vec<Entity>) -> usize {
    let before = entities.len();
    entities.retain(|entity| !entity.is_marked_for_removal());
    before - entities.len()
}
