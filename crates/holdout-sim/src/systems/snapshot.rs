//! Snapshot system: queries the world and builds a complete `SimSnapshot`.
//!
//! Read-only — it never modifies the world.

use hecs::World;

use holdout_core::components::{
    ActorId, Civilian, Facing, Health, Position, Soldier, Weapon, Zombie,
};
use holdout_core::effects::Effect;
use holdout_core::enums::MissionStatus;
use holdout_core::state::{CivilianView, SimSnapshot, SoldierView, ZombieView};
use holdout_core::types::SimTime;

use crate::objectives::ObjectiveState;

/// Build a complete snapshot from the current world state.
pub fn build(
    world: &World,
    time: SimTime,
    status: MissionStatus,
    effects: &[Effect],
    objectives: &ObjectiveState,
) -> SimSnapshot {
    SimSnapshot {
        time,
        status,
        soldiers: build_soldiers(world),
        zombies: build_zombies(world),
        civilians: build_civilians(world),
        effects: effects.to_vec(),
        objectives: objectives.view(),
    }
}

fn build_soldiers(world: &World) -> Vec<SoldierView> {
    let mut views: Vec<SoldierView> = {
        let mut q = world.query::<(&ActorId, &Soldier, &Weapon, &Position, &Facing, &Health)>();
        q.iter()
            .map(|(_, (id, soldier, weapon, position, facing, health))| SoldierView {
                id: id.0,
                callsign: soldier.callsign.clone(),
                position: position.0,
                heading: facing.0,
                weapon_angle: soldier.weapon_angle,
                health_fraction: health.fraction(),
                magazine: weapon.magazine,
                reserve: weapon.reserve,
                reloading: weapon.reloading,
                mode: soldier.mode,
                sprinting: soldier.sprinting,
                muzzle_flash: soldier.muzzle_flash_ms > 0.0,
            })
            .collect()
    };
    views.sort_by_key(|v| v.id);
    views
}

fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut views: Vec<ZombieView> = {
        let mut q = world.query::<(&ActorId, &Zombie, &Position, &Facing, &Health)>();
        q.iter()
            .map(|(_, (id, zombie, position, facing, health))| ZombieView {
                id: id.0,
                variant: zombie.variant,
                position: position.0,
                heading: facing.0,
                health_fraction: health.fraction(),
            })
            .collect()
    };
    views.sort_by_key(|v| v.id);
    views
}

fn build_civilians(world: &World) -> Vec<CivilianView> {
    let mut views: Vec<CivilianView> = {
        let mut q = world.query::<(&ActorId, &Civilian, &Position, &Facing, &Health)>();
        q.iter()
            .map(|(_, (id, civilian, position, facing, _health))| CivilianView {
                id: id.0,
                position: position.0,
                heading: facing.0,
                panic_level: civilian.panic_level,
                infected: civilian.infected,
                infection_progress: if civilian.infected {
                    (civilian.infection_elapsed_ms / civilian.infection_duration_ms).clamp(0.0, 1.0)
                } else {
                    0.0
                },
                rescued: civilian.rescued,
            })
            .collect()
    };
    views.sort_by_key(|v| v.id);
    views
}
