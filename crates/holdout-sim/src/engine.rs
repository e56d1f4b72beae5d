//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies squad commands, runs
//! all systems, and produces `SimSnapshot`s. Completely headless: the display
//! shell drives it with elapsed time once per refresh and owns all timing.
//! A paused host simply passes zero elapsed time.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use holdout_core::commands::SquadCommand;
use holdout_core::components::{Civilian, Health, Position, Soldier, Weapon, Zombie};
use holdout_core::config::{ConfigError, SimConfig};
use holdout_core::effects::Effect;
use holdout_core::enums::{MissionStatus, SquadMode, ZombieVariant};
use holdout_core::state::SimSnapshot;
use holdout_core::types::{vec2, SimTime};

use holdout_behavior::gunnery;

use crate::objectives::ObjectiveState;
use crate::systems;
use crate::systems::spawner::SpawnDirector;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all mission state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    status: MissionStatus,
    rng: ChaCha8Rng,
    next_actor_id: u32,
    command_queue: VecDeque<SquadCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    effects: Vec<Effect>,
    objectives: ObjectiveState,
    spawner: SpawnDirector,
}

impl SimulationEngine {
    /// Validate the configuration and build the initial world: the squad in
    /// formation, the civilian population, and the opening horde.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut next_actor_id = 0;
        let mut objectives = ObjectiveState::default();
        world_setup::setup_mission(
            &mut world,
            &mut rng,
            &config,
            &mut next_actor_id,
            &mut objectives,
        );

        info!(
            seed = config.seed,
            soldiers = config.squad.members.len(),
            civilians = objectives.total_civilians,
            zombies = objectives.total_zombies_spawned,
            "mission_start"
        );

        let spawner = SpawnDirector::new(config.spawner.initial_interval_ms);
        Ok(Self {
            world,
            config,
            time: SimTime::default(),
            status: MissionStatus::default(),
            rng,
            next_actor_id,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            effects: Vec::new(),
            objectives,
            spawner,
        })
    }

    /// Queue a squad command for application at the next step boundary.
    pub fn queue_command(&mut self, command: SquadCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SquadCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt_ms` milliseconds and return the
    /// resulting snapshot. Zero (or non-finite) elapsed time applies pending
    /// commands but freezes the world — that is the host's pause. A terminal
    /// mission never simulates again.
    pub fn step(&mut self, dt_ms: f64) -> SimSnapshot {
        self.apply_commands();

        if self.status == MissionStatus::Active && dt_ms.is_finite() && dt_ms > 0.0 {
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
        }

        systems::snapshot::build(
            &self.world,
            self.time,
            self.status,
            &self.effects,
            &self.objectives,
        )
    }

    /// Get the current mission status.
    pub fn status(&self) -> MissionStatus {
        self.status
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Apply all queued commands, squad-wide.
    fn apply_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single squad command.
    fn handle_command(&mut self, command: SquadCommand) {
        match command {
            SquadCommand::MoveOrder { position } => {
                // Malformed orders are dropped; out-of-bounds ones clamped.
                if !position.x.is_finite() || !position.y.is_finite() {
                    return;
                }
                let clamped = vec2(
                    position.x.clamp(0.0, self.config.world.width),
                    position.y.clamp(0.0, self.config.world.height),
                );
                for (_entity, soldier) in self.world.query_mut::<&mut Soldier>() {
                    soldier.order_position = Some(clamped);
                }
            }
            SquadCommand::SetMode { mode } => {
                for (_entity, (soldier, position)) in
                    self.world.query_mut::<(&mut Soldier, &Position)>()
                {
                    soldier.mode = mode;
                    if mode == SquadMode::Hold {
                        soldier.order_position = Some(position.0);
                    }
                }
            }
            SquadCommand::SetSprint { sprinting } => {
                for (_entity, soldier) in self.world.query_mut::<&mut Soldier>() {
                    soldier.sprinting = sprinting;
                    // No aiming on the run.
                    if sprinting {
                        soldier.target = None;
                    }
                }
            }
            SquadCommand::ReloadAll => {
                for (_entity, (_soldier, weapon)) in
                    self.world.query_mut::<(&Soldier, &mut Weapon)>()
                {
                    gunnery::try_start_reload(weapon);
                }
            }
        }
    }

    /// Run all systems in order. Soldiers act on last frame's adversary
    /// positions, adversaries on this frame's soldier positions, civilians
    /// on both — the update order is a contract, not an accident.
    fn run_systems(&mut self, dt_ms: f64) {
        systems::soldier::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.effects,
            dt_ms,
        );
        systems::zombie::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.effects,
            dt_ms,
        );
        let conversions = systems::civilian::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.effects,
            dt_ms,
        );

        // Completed infections: the civilian is gone, a fresh adversary
        // stands at its position. Ignores the population cap.
        for position in conversions {
            world_setup::spawn_zombie(
                &mut self.world,
                &mut self.rng,
                &mut self.next_actor_id,
                position,
                ZombieVariant::Basic,
                &self.config.variants,
            );
            self.objectives.total_zombies_spawned += 1;
            tracing::debug!(x = position.x, y = position.y, "civilian_converted");
        }

        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.config,
            &mut self.next_actor_id,
            &mut self.objectives,
            dt_ms,
        );

        // Effects emitted this frame age with everything else.
        for effect in &mut self.effects {
            effect.elapsed_ms += dt_ms;
        }
        self.effects.retain(|e| e.elapsed_ms < e.duration_ms);

        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.objectives);

        self.evaluate_outcome();
    }

    /// Terminal conditions, checked once per step and only while active.
    /// Defeat takes precedence when both would hold.
    fn evaluate_outcome(&mut self) {
        if self.status != MissionStatus::Active {
            return;
        }

        let soldiers_alive = {
            let mut q = self.world.query::<(&Soldier, &Health)>();
            q.iter().filter(|(_, (_, h))| h.alive()).count()
        };
        if soldiers_alive == 0 {
            self.status = MissionStatus::Lost;
            info!(
                zombies_killed = self.objectives.zombies_killed,
                civilians_rescued = self.objectives.civilians_rescued,
                civilians_lost = self.objectives.civilians_lost,
                "mission_lost"
            );
            return;
        }

        let zombies_alive = {
            let mut q = self.world.query::<(&Zombie, &Health)>();
            q.iter().filter(|(_, (_, h))| h.alive()).count()
        };
        let civilians_alive = {
            let mut q = self.world.query::<(&Civilian, &Health)>();
            q.iter().filter(|(_, (_, h))| h.alive()).count()
        };
        if zombies_alive == 0 && civilians_alive == 0 {
            self.status = MissionStatus::Won;
            info!(
                zombies_killed = self.objectives.zombies_killed,
                civilians_rescued = self.objectives.civilians_rescued,
                civilians_lost = self.objectives.civilians_lost,
                "mission_won"
            );
        }
    }
}

#[cfg(test)]
impl SimulationEngine {
    /// Mutable world access for test setup.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an additional adversary at an exact position (for tests).
    pub(crate) fn spawn_test_zombie(
        &mut self,
        position: holdout_core::types::Vec2,
        variant: ZombieVariant,
    ) -> hecs::Entity {
        let entity = world_setup::spawn_zombie(
            &mut self.world,
            &mut self.rng,
            &mut self.next_actor_id,
            position,
            variant,
            &self.config.variants,
        );
        self.objectives.total_zombies_spawned += 1;
        entity
    }

    /// Spawn an additional civilian at an exact position (for tests).
    pub(crate) fn spawn_test_civilian(
        &mut self,
        position: holdout_core::types::Vec2,
    ) -> hecs::Entity {
        let entity = world_setup::spawn_civilian(
            &mut self.world,
            &mut self.rng,
            &mut self.next_actor_id,
            position,
        );
        self.objectives.total_civilians += 1;
        entity
    }
}
