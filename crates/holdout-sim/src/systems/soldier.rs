//! Soldier behavior: orders, locomotion, threat scanning, and fire control.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_behavior::{gunnery, steering};
use holdout_core::components::{ActorId, Body, Facing, Health, Position, Soldier, Weapon};
use holdout_core::config::SimConfig;
use holdout_core::constants::*;
use holdout_core::effects::{Effect, EffectKind};
use holdout_core::enums::SquadMode;

use super::{advance_position, apply_damage, nearest, Actors};

/// Run the soldier system for one step.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    effects: &mut Vec<Effect>,
    dt_ms: f64,
) {
    let actors = Actors::collect(world);
    let dt_secs = dt_ms / 1000.0;

    // Damage is buffered and applied after the pass so no soldier observes
    // a kill made earlier in the same frame.
    let mut impacts: Vec<(hecs::Entity, i32)> = Vec::new();

    for (_entity, (id, soldier, weapon, position, facing, body, health)) in world.query_mut::<(
        &ActorId,
        &mut Soldier,
        &mut Weapon,
        &mut Position,
        &mut Facing,
        &Body,
        &Health,
    )>() {
        if !health.alive() {
            continue;
        }

        gunnery::advance(weapon, dt_ms);
        soldier.muzzle_flash_ms = (soldier.muzzle_flash_ms - dt_ms).max(0.0);

        // Periodic threat scan: nearest living adversary inside weapon range.
        soldier.scan_timer_ms += dt_ms;
        if soldier.scan_timer_ms >= SOLDIER_SCAN_INTERVAL_MS {
            soldier.scan_timer_ms = 0.0;
            soldier.target = nearest(&actors.zombies, position.0, weapon.range).map(|z| z.id);
        }

        // Alert tracks the local adversary count and degrades aim.
        let nearby = actors
            .zombies
            .iter()
            .filter(|z| position.0.distance(z.position) < ALERT_RADIUS)
            .count();
        soldier.alert_level = gunnery::alert_level(nearby);

        update_movement(id, soldier, position, facing, body, &actors, config, dt_secs);

        // Fire control. Sprinting and reloading both suppress it.
        if soldier.sprinting || weapon.reloading {
            continue;
        }
        let Some(target_id) = soldier.target else {
            continue;
        };
        let Some(target) = actors.find_zombie(target_id) else {
            soldier.target = None;
            continue;
        };
        let distance = position.0.distance(target.position);
        if distance > weapon.range {
            soldier.target = None;
            continue;
        }

        soldier.weapon_angle = (target.position - position.0).to_angle();
        if gunnery::can_fire(weapon) {
            gunnery::expend_round(weapon);
            soldier.muzzle_flash_ms = MUZZLE_FLASH_MS;

            // One roll decides the shot; a miss still costs the round.
            let accuracy = gunnery::hit_probability(distance, weapon.range, soldier.alert_level);
            if rng.gen_bool(accuracy.clamp(0.0, 1.0)) {
                impacts.push((target.entity, weapon.damage));
                effects.push(Effect::new(
                    EffectKind::BulletTrail {
                        from: position.0,
                        to: target.position,
                    },
                    BULLET_TRAIL_MS,
                ));
            }
        }
    }

    for (entity, damage) in impacts {
        apply_damage(world, entity, damage);
    }
}

/// Follow-mode locomotion toward the order position plus formation offset.
/// Hold and Overwatch never move.
#[allow(clippy::too_many_arguments)]
fn update_movement(
    id: &ActorId,
    soldier: &mut Soldier,
    position: &mut Position,
    facing: &mut Facing,
    body: &Body,
    actors: &Actors,
    config: &SimConfig,
    dt_secs: f64,
) {
    if soldier.mode != SquadMode::Follow {
        return;
    }
    let Some(order) = soldier.order_position else {
        return;
    };
    let goal = order + soldier.formation_offset;
    if position.0.distance(goal) <= FOLLOW_ARRIVAL_DISTANCE {
        return;
    }

    let avoidance = steering::avoid_obstacles(
        position.0,
        &actors.avoidance_points(&[id.0]),
        SOLDIER_AVOID_RADIUS,
    );
    let mut direction = (goal - position.0).normalize_or_zero();
    direction = (direction + avoidance * SOLDIER_AVOID_WEIGHT).normalize_or_zero();

    let mut speed = SOLDIER_SPEED;
    if soldier.sprinting {
        speed *= SPRINT_MULTIPLIER;
    }
    // Clambering over a barrier is slow.
    if steering::overlaps_any_barrier(position.0, body.radius, &config.world.barriers) {
        speed *= BARRIER_DRAG_FACTOR;
    }

    advance_position(
        position,
        facing,
        body,
        &config.world,
        direction,
        speed,
        dt_secs,
    );
}
