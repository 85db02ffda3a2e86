#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for Orbital Defence.
//!
//! The [`Game`] owns every entity, advances them once per frame through a
//! fixed spawn, update, purge and placement sequence, and renders the
//! survivors into any [`RenderTarget`].

mod alien;
mod beam;
mod entity;
mod explosion;
mod planet;
mod tower;

use std::time::Duration;

use glam::Vec2;
use orbital_defence_core::{Clock, GameConfig, SystemClock, Timer};
use orbital_defence_rendering::{AssetManager, FrameInput, ImageHandle, RenderTarget, Viewport};
use orbital_defence_system_spawning::{Config as SpawningConfig, Spawning};

pub use alien::{Alien, HitOutcome};
pub use beam::{BeamOutcome, LaserBeam};
pub use entity::{purge_removed, Entity, EntityId, EntityKind};
pub use explosion::ExplodingAlien;
pub use planet::Planet;
pub use tower::Tower;

const DEFAULT_VIEWPORT: Viewport = Viewport::new(960.0, 960.0);

/// Entity collection and frame driver.
#[derive(Debug)]
pub struct Game<C: Clock = SystemClock> {
    config: GameConfig,
    clock: C,
    timer: Timer,
    spawning: Spawning,
    tower_sprite: ImageHandle,
    explosion_sprite: ImageHandle,
    entities: Vec<Entity>,
    next_id: u32,
    clock_tick: f32,
    viewport: Viewport,
    pending_click: Option<Vec2>,
}

impl<C: Clock> Game<C> {
    /// Creates a game holding only the planet.
    ///
    /// Sprites are looked up in `assets` once; images that failed to load
    /// resolve to missing handles.
    ///
    /// `config` should pass [`GameConfig::validate`]. A configuration that
    /// does not is logged and still runs: a non-finite spawn span pins spawn
    /// angles to zero and an unrepresentable max step uses the default.
    #[must_use]
    pub fn new(config: GameConfig, assets: &AssetManager, clock: C, seed: u64) -> Self {
        if let Err(error) = config.validate() {
            tracing::warn!(%error, "game configuration failed validation");
        }
        let mut game = Self {
            timer: Timer::new(config.max_step()),
            spawning: Spawning::new(SpawningConfig::from_game_config(&config, seed)),
            tower_sprite: assets.get_image(&config.tower_sprite),
            explosion_sprite: assets.get_image(&config.explosion_sprite),
            config,
            clock,
            entities: Vec::new(),
            next_id: 0,
            clock_tick: 0.0,
            viewport: DEFAULT_VIEWPORT,
            pending_click: None,
        };
        let _ = game.add_entity(EntityKind::Planet(Planet::new()));
        game
    }

    /// Replaces the viewport used for spawning and drawing.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Updates the viewport, typically after a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Tunables the game was created with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Time source driving the simulation.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Simulated seconds consumed by the most recent update.
    #[must_use]
    pub const fn clock_tick(&self) -> f32 {
        self.clock_tick
    }

    /// Total simulated time.
    #[must_use]
    pub const fn game_time(&self) -> Duration {
        self.timer.game_time()
    }

    /// Every live entity in collection order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Looks up an entity by identifier.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Live towers in collection order.
    pub fn towers(&self) -> impl Iterator<Item = (EntityId, &Tower)> + '_ {
        self.entities
            .iter()
            .filter_map(|entity| entity.as_tower().map(|tower| (entity.id(), tower)))
    }

    /// Live aliens in collection order.
    pub fn aliens(&self) -> impl Iterator<Item = (EntityId, &Alien)> + '_ {
        self.entities
            .iter()
            .filter_map(|entity| entity.as_alien().map(|alien| (entity.id(), alien)))
    }

    /// Live beams in collection order.
    pub fn beams(&self) -> impl Iterator<Item = (EntityId, &LaserBeam)> + '_ {
        self.entities
            .iter()
            .filter_map(|entity| entity.as_beam().map(|beam| (entity.id(), beam)))
    }

    /// Live explosions in collection order.
    pub fn explosions(&self) -> impl Iterator<Item = &ExplodingAlien> + '_ {
        self.entities.iter().filter_map(|entity| match entity.kind() {
            EntityKind::ExplodingAlien(explosion) => Some(explosion),
            _ => None,
        })
    }

    /// Appends an entity and returns its identifier.
    pub fn add_entity(&mut self, kind: EntityKind) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity::new(id, kind));
        id
    }

    /// Stores a click in world coordinates for the next placement step.
    ///
    /// A later click replaces one that has not been consumed yet.
    pub fn queue_click(&mut self, position: Vec2) {
        self.pending_click = Some(position);
    }

    /// Click waiting for placement, if any.
    #[must_use]
    pub const fn pending_click(&self) -> Option<Vec2> {
        self.pending_click
    }

    /// Runs one full frame: input, simulation and rendering.
    pub fn frame(&mut self, input: FrameInput, target: &mut dyn RenderTarget) {
        self.viewport = input.viewport;
        if let Some(click) = input.click {
            self.queue_click(click);
        }
        self.advance();
        self.draw(target);
    }

    /// Samples the clock and runs one simulation step with the clamped tick.
    pub fn advance(&mut self) {
        let now = self.clock.now();
        self.timer.step(now);
        let tick = self.timer.tick_diff().as_secs_f32();
        self.update(now, tick);
    }

    /// Runs the spawn, update, purge and placement steps.
    ///
    /// `now` is the wall-clock reading used for the spawn cadence and `tick`
    /// the simulated seconds applied to every entity.
    pub fn update(&mut self, now: Duration, tick: f32) {
        self.clock_tick = tick;
        self.spawn(now);

        let initial_len = self.entities.len();
        for index in 0..initial_len {
            match self.entities[index].kind_mut() {
                EntityKind::Planet(_) => {}
                EntityKind::Tower(tower) => {
                    tower.update(tick);
                    self.acquire_target(index);
                }
                EntityKind::Alien(alien) => alien.update(tick),
                EntityKind::ExplodingAlien(explosion) => explosion.update(tick),
                EntityKind::LaserBeam(_) => self.update_beam(index, tick),
            }
        }

        let purged = purge_removed(&mut self.entities);
        if purged > 0 {
            tracing::debug!(purged, remaining = self.entities.len(), "purged entities");
        }

        if let Some(position) = self.pending_click.take() {
            let tower = Tower::new(position, self.tower_sprite.clone(), &self.config);
            let id = self.add_entity(EntityKind::Tower(tower));
            tracing::debug!(id = id.get(), x = position.x, y = position.y, "placed tower");
        }
    }

    /// Clears the viewport and draws every entity centred on the planet.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.clear_rect(Vec2::ZERO, self.viewport.size());
        target.save();
        target.translate(self.viewport.center());
        for entity in &self.entities {
            match entity.kind() {
                EntityKind::Planet(planet) => planet.draw(target),
                EntityKind::Tower(tower) => tower.draw(target),
                EntityKind::Alien(alien) => alien.draw(target),
                EntityKind::ExplodingAlien(explosion) => explosion.draw(target),
                EntityKind::LaserBeam(beam) => {
                    let from = self.entity(beam.tower()).and_then(Entity::position);
                    let to = self.entity(beam.alien()).and_then(Entity::position);
                    if let (Some(from), Some(to)) = (from, to) {
                        beam.draw(target, from, to);
                    }
                }
            }
        }
        target.restore();
    }

    fn spawn(&mut self, now: Duration) {
        let radial_distance = self.viewport.width * 0.5;
        let Some(request) = self.spawning.poll(now, radial_distance) else {
            return;
        };
        let alien = Alien::new(request.radial_distance, request.angle, &self.config);
        let id = self.add_entity(EntityKind::Alien(alien));
        tracing::trace!(id = id.get(), angle = request.angle, "spawned alien");
    }

    fn acquire_target(&mut self, tower_index: usize) {
        let Some(tower) = self.entities[tower_index].as_tower() else {
            return;
        };
        if tower.is_shooting() {
            return;
        }
        let target = self.entities.iter().find_map(|entity| match entity.as_alien() {
            Some(alien) if !alien.is_marked_for_removal() && tower.can_shoot(alien) => {
                Some(entity.id())
            }
            _ => None,
        });
        let Some(alien_id) = target else {
            return;
        };

        let tower_id = self.entities[tower_index].id();
        let EntityKind::Tower(tower) = self.entities[tower_index].kind_mut() else {
            return;
        };
        let beam = LaserBeam::engage(tower, tower_id, alien_id, &self.config);
        let beam_id = self.add_entity(EntityKind::LaserBeam(beam));
        tracing::trace!(
            beam = beam_id.get(),
            tower = tower_id.get(),
            alien = alien_id.get(),
            "beam engaged"
        );
    }

    fn update_beam(&mut self, beam_index: usize, tick: f32) {
        let Some(mut beam) = self.entities[beam_index].as_beam().copied() else {
            return;
        };
        let tower_index = self.index_of(beam.tower());
        let alien_index = self
            .index_of(beam.alien())
            .filter(|&index| !self.entities[index].is_marked_for_removal());

        let outcome = match (tower_index, alien_index) {
            (Some(tower_index), Some(alien_index)) => {
                let (tower, alien) = pair_mut(&mut self.entities, tower_index, alien_index);
                match (tower.kind_mut(), alien.kind_mut()) {
                    (EntityKind::Tower(tower), EntityKind::Alien(alien)) => {
                        Some((beam.update(tower, alien, tick), alien.position()))
                    }
                    _ => {
                        beam.drop_orphaned();
                        None
                    }
                }
            }
            (Some(tower_index), None) => {
                if let EntityKind::Tower(tower) = self.entities[tower_index].kind_mut() {
                    beam.disengage(tower);
                }
                None
            }
            (None, _) => {
                beam.drop_orphaned();
                None
            }
        };

        if let EntityKind::LaserBeam(slot) = self.entities[beam_index].kind_mut() {
            *slot = beam;
        }

        if let Some((BeamOutcome::Destroyed, position)) = outcome {
            tracing::debug!(alien = beam.alien().get(), "alien destroyed");
            let explosion =
                ExplodingAlien::new(position, self.explosion_sprite.clone(), &self.config);
            let _ = self.add_entity(EntityKind::ExplodingAlien(explosion));
        }
        if beam.is_marked_for_removal() {
            tracing::trace!(
                tower = beam.tower().get(),
                alien = beam.alien().get(),
                "beam released"
            );
        }
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id() == id)
    }
}

/// Borrows two distinct entities mutably at once.
fn pair_mut(entities: &mut [Entity], first: usize, second: usize) -> (&mut Entity, &mut Entity) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = entities.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = entities.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
