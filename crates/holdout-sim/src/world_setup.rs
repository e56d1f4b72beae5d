//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the squad, the starting civilian population, and perimeter
//! adversaries with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_behavior::profiles;
use holdout_core::components::{
    ActorId, Body, Civilian, Facing, Health, Position, Soldier, Weapon, Zombie,
};
use holdout_core::config::{SimConfig, SquadMember, VariantTable, WeaponConfig};
use holdout_core::constants::*;
use holdout_core::enums::{SquadMode, ZombieVariant};
use holdout_core::types::{vec2, Vec2};

use crate::objectives::ObjectiveState;
use crate::systems::spawner;

/// Set up the initial mission world: squad, civilians, and the opening horde.
pub fn setup_mission(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_actor_id: &mut u32,
    objectives: &mut ObjectiveState,
) {
    let center = config
        .squad
        .spawn_center
        .unwrap_or_else(|| vec2(config.world.width / 2.0, config.world.height / 2.0));

    let mut soldier_positions = Vec::with_capacity(config.squad.members.len());
    for member in &config.squad.members {
        let position = center + member.formation_offset;
        spawn_soldier(world, next_actor_id, position, member, &config.weapon);
        soldier_positions.push(position);
    }

    let mut placed: Vec<Vec2> = Vec::with_capacity(config.civilians.count as usize);
    for _ in 0..config.civilians.count {
        let position = place_civilian(rng, config, &soldier_positions, &placed);
        spawn_civilian(world, rng, next_actor_id, position);
        placed.push(position);
    }
    objectives.total_civilians = placed.len() as u32;

    for _ in 0..config.spawner.initial_count {
        let variant = profiles::roll_variant(rng, &config.variants.spawn_weights);
        let position = spawner::perimeter_point(rng, config.world.width, config.world.height);
        spawn_zombie(world, rng, next_actor_id, position, variant, &config.variants);
        objectives.total_zombies_spawned += 1;
    }
}

/// Spawn one squad member with a fresh weapon.
pub fn spawn_soldier(
    world: &mut World,
    next_actor_id: &mut u32,
    position: Vec2,
    member: &SquadMember,
    weapon: &WeaponConfig,
) -> hecs::Entity {
    world.spawn((
        ActorId(take_id(next_actor_id)),
        Position(position),
        Facing(0.0),
        Body {
            radius: SOLDIER_RADIUS,
        },
        Health::full(SOLDIER_HEALTH),
        Soldier {
            callsign: member.callsign.clone(),
            mode: SquadMode::default(),
            sprinting: false,
            order_position: None,
            formation_offset: member.formation_offset,
            target: None,
            alert_level: 0.0,
            scan_timer_ms: 0.0,
            weapon_angle: 0.0,
            muzzle_flash_ms: 0.0,
        },
        Weapon {
            damage: weapon.damage,
            range: weapon.range,
            fire_interval_ms: weapon.fire_interval_ms,
            magazine_capacity: weapon.magazine_capacity,
            magazine: weapon.magazine_capacity,
            reserve: weapon.reserve,
            reload_time_ms: weapon.reload_time_ms,
            cooldown_ms: 0.0,
            reloading: false,
            reload_remaining_ms: 0.0,
        },
    ))
}

/// Spawn one civilian with a randomized wander schedule.
pub fn spawn_civilian(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    position: Vec2,
) -> hecs::Entity {
    world.spawn((
        ActorId(take_id(next_actor_id)),
        Position(position),
        Facing(0.0),
        Body {
            radius: CIVILIAN_RADIUS,
        },
        Health::full(CIVILIAN_HEALTH),
        Civilian {
            infected: false,
            infection_elapsed_ms: 0.0,
            infection_duration_ms: INFECTION_DURATION_MS,
            rescued: false,
            panic_level: 0.0,
            flee_target: None,
            wander_heading: rng.gen::<f64>() * std::f64::consts::TAU,
            wander_timer_ms: 0.0,
            wander_duration_ms: WANDER_DURATION_BASE_MS
                + rng.gen::<f64>() * WANDER_DURATION_SPREAD_MS,
            scan_timer_ms: 0.0,
        },
    ))
}

/// Spawn one adversary of the given variant. The stat profile is copied from
/// the table and fixed for the instance's lifetime.
pub fn spawn_zombie(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    position: Vec2,
    variant: ZombieVariant,
    variants: &VariantTable,
) -> hecs::Entity {
    let stats = variants.stats(variant);
    world.spawn((
        ActorId(take_id(next_actor_id)),
        Position(position),
        Facing(0.0),
        Body {
            radius: stats.radius,
        },
        Health::full(stats.max_health),
        Zombie {
            variant,
            stats,
            target: None,
            attack_cooldown_ms: 0.0,
            scan_timer_ms: 0.0,
            wander_heading: rng.gen::<f64>() * std::f64::consts::TAU,
        },
    ))
}

/// Rejection-sampled civilian placement: keep away from barriers, soldiers,
/// and other civilians. Falls back to the last candidate once the attempt
/// budget runs out rather than failing setup; overlap there is cosmetic.
fn place_civilian(
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    soldiers: &[Vec2],
    placed: &[Vec2],
) -> Vec2 {
    let mut candidate = sample_position(rng, config);
    for _ in 0..PLACEMENT_ATTEMPTS {
        if placement_clear(candidate, config, soldiers, placed) {
            return candidate;
        }
        candidate = sample_position(rng, config);
    }
    candidate
}

fn sample_position(rng: &mut ChaCha8Rng, config: &SimConfig) -> Vec2 {
    vec2(
        PLACEMENT_MARGIN + rng.gen::<f64>() * (config.world.width - 2.0 * PLACEMENT_MARGIN),
        PLACEMENT_MARGIN + rng.gen::<f64>() * (config.world.height - 2.0 * PLACEMENT_MARGIN),
    )
}

fn placement_clear(
    candidate: Vec2,
    config: &SimConfig,
    soldiers: &[Vec2],
    placed: &[Vec2],
) -> bool {
    let barrier_clearance = CIVILIAN_RADIUS + PLACEMENT_BARRIER_CLEARANCE;
    if config
        .world
        .barriers
        .iter()
        .any(|b| b.overlaps_circle(candidate, barrier_clearance))
    {
        return false;
    }
    if soldiers
        .iter()
        .any(|s| candidate.distance(*s) < PLACEMENT_SOLDIER_CLEARANCE)
    {
        return false;
    }
    if placed
        .iter()
        .any(|p| candidate.distance(*p) < PLACEMENT_CIVILIAN_SPACING)
    {
        return false;
    }
    true
}

fn take_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}
