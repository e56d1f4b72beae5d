//! Civilian behavior: panic, fleeing, infection countdown, and rescue.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_behavior::fsm::{self, CivilianAction, CivilianContext};
use holdout_behavior::steering;
use holdout_core::components::{ActorId, Body, Civilian, Facing, Health, Position};
use holdout_core::config::SimConfig;
use holdout_core::constants::*;
use holdout_core::effects::{Effect, EffectKind};
use holdout_core::types::Vec2;

use super::{advance_position, nearest, Actors};

/// Run the civilian system for one step. Returns the positions of civilians
/// whose infection completed this frame; the engine spawns an adversary at
/// each, after this pass and before cleanup.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    effects: &mut Vec<Effect>,
    dt_ms: f64,
) -> Vec<Vec2> {
    let actors = Actors::collect(world);
    let dt_secs = dt_ms / 1000.0;
    let mut conversions = Vec::new();

    for (_entity, (id, civilian, position, facing, body, health)) in world.query_mut::<(
        &ActorId,
        &mut Civilian,
        &mut Position,
        &mut Facing,
        &Body,
        &mut Health,
    )>() {
        if !health.alive() {
            continue;
        }

        // Infection suspends everything else; the countdown is one-way.
        if civilian.infected {
            civilian.infection_elapsed_ms += dt_ms;
            if civilian.infection_elapsed_ms >= civilian.infection_duration_ms {
                health.current = 0;
                conversions.push(position.0);
                effects.push(Effect::new(
                    EffectKind::Transformation { at: position.0 },
                    TRANSFORMATION_MS,
                ));
            }
            continue;
        }

        civilian.scan_timer_ms += dt_ms;
        if civilian.scan_timer_ms >= CIVILIAN_SCAN_INTERVAL_MS {
            civilian.scan_timer_ms = 0.0;
            civilian.flee_target =
                nearest(&actors.zombies, position.0, CIVILIAN_FEAR_RADIUS).map(|z| z.id);
            if let Some(soldier) = nearest(&actors.soldiers, position.0, SOLDIER_SEEK_RADIUS) {
                if position.0.distance(soldier.position) < RESCUE_RADIUS {
                    civilian.rescued = true;
                }
            }
        }

        // Panic eases toward the crowd-driven target at a fixed time rate.
        let zombie_distances: Vec<f64> = actors
            .zombies
            .iter()
            .map(|z| position.0.distance(z.position))
            .collect();
        let soldier_distances: Vec<f64> = actors
            .soldiers
            .iter()
            .map(|s| position.0.distance(s.position))
            .collect();
        let drive = fsm::panic_drive(&zombie_distances, &soldier_distances);
        civilian.panic_level += (drive - civilian.panic_level) * (PANIC_EASE_RATE * dt_secs).min(1.0);

        let threat = civilian
            .flee_target
            .and_then(|tid| actors.find_zombie(tid))
            .map(|z| z.position);
        if threat.is_none() {
            civilian.flee_target = None;
        }

        let ctx = CivilianContext {
            infected: false,
            panic_level: civilian.panic_level,
            threat,
        };
        match fsm::evaluate_civilian(&ctx) {
            CivilianAction::Immobile => {}
            CivilianAction::Flee { from } => {
                let mut direction = (position.0 - from).normalize_or_zero();
                direction =
                    (direction + steering::jitter(rng, CIVILIAN_FLEE_JITTER)).normalize_or_zero();
                let avoidance = steering::avoid_obstacles(
                    position.0,
                    &actors.avoidance_points(&[id.0]),
                    CIVILIAN_AVOID_RADIUS,
                );
                direction = (direction + avoidance * CIVILIAN_AVOID_WEIGHT).normalize_or_zero();

                // Fear makes them faster.
                let speed = CIVILIAN_SPEED * (1.0 + civilian.panic_level);
                advance_position(position, facing, body, &config.world, direction, speed, dt_secs);
            }
            CivilianAction::Panic => {
                if rng.gen::<f64>() < PANIC_TURN_CHANCE {
                    civilian.wander_heading += (rng.gen::<f64>() - 0.5) * std::f64::consts::PI;
                }
                let direction = Vec2::from_angle(civilian.wander_heading);
                let speed = CIVILIAN_SPEED * civilian.panic_level;
                advance_position(position, facing, body, &config.world, direction, speed, dt_secs);
            }
            CivilianAction::Wander => {
                civilian.wander_timer_ms += dt_ms;
                if civilian.wander_timer_ms >= civilian.wander_duration_ms {
                    civilian.wander_heading = rng.gen::<f64>() * std::f64::consts::TAU;
                    civilian.wander_timer_ms = 0.0;
                    civilian.wander_duration_ms =
                        WANDER_DURATION_BASE_MS + rng.gen::<f64>() * WANDER_DURATION_SPREAD_MS;
                }
                let direction = Vec2::from_angle(civilian.wander_heading);
                let speed = CIVILIAN_SPEED * WANDER_SPEED_FACTOR;
                advance_position(position, facing, body, &config.world, direction, speed, dt_secs);
            }
        }
    }

    conversions
}
