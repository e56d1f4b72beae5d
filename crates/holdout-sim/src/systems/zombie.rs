//! Zombie behavior: target scanning, pursuit, and cooldown-gated attacks.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_behavior::fsm::{self, ZombieAction, ZombieContext};
use holdout_behavior::steering;
use holdout_core::components::{ActorId, Body, Civilian, Facing, Health, Position, Zombie};
use holdout_core::config::SimConfig;
use holdout_core::constants::*;
use holdout_core::effects::{Effect, EffectKind};
use holdout_core::types::Vec2;

use super::{advance_position, apply_damage, nearest, Actors};

/// An attack resolved this frame, applied after the pass.
struct Strike {
    target: Entity,
    target_position: Vec2,
    damage: i32,
    infection_chance: f64,
    ranged: bool,
    from: Vec2,
}

/// A scan target resolved against the live set.
struct Prey {
    entity: Entity,
    position: Vec2,
    radius: f64,
}

/// Run the zombie system for one step.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    effects: &mut Vec<Effect>,
    dt_ms: f64,
) {
    let actors = Actors::collect(world);
    let dt_secs = dt_ms / 1000.0;
    let mut strikes: Vec<Strike> = Vec::new();

    for (_entity, (id, zombie, position, facing, body, health)) in world.query_mut::<(
        &ActorId,
        &mut Zombie,
        &mut Position,
        &mut Facing,
        &Body,
        &Health,
    )>() {
        if !health.alive() {
            continue;
        }

        if zombie.attack_cooldown_ms > 0.0 {
            zombie.attack_cooldown_ms -= dt_ms;
        }

        zombie.scan_timer_ms += dt_ms;
        if zombie.scan_timer_ms >= zombie.stats.scan_interval_ms {
            zombie.scan_timer_ms = 0.0;
            zombie.target = scan_for_prey(&actors, position.0);
        }

        // A target that died or vanished since the last scan means back to
        // wandering until the next one.
        let prey = zombie.target.and_then(|tid| resolve_prey(&actors, tid));
        if prey.is_none() {
            zombie.target = None;
        }

        let ctx = ZombieContext {
            position: position.0,
            body_radius: body.radius,
            attack_range: zombie.stats.attack_range,
            attack_ready: zombie.attack_cooldown_ms <= 0.0,
            target: prey.as_ref().map(|p| fsm::ResolvedTarget {
                position: p.position,
                body_radius: p.radius,
            }),
        };

        match fsm::evaluate_zombie(&ctx, zombie.variant) {
            ZombieAction::Pursue { toward } => {
                let exclude = match zombie.target {
                    Some(target_id) => vec![id.0, target_id],
                    None => vec![id.0],
                };
                let avoidance = steering::avoid_obstacles(
                    position.0,
                    &actors.avoidance_points(&exclude),
                    ZOMBIE_AVOID_RADIUS,
                );
                let mut direction = (toward - position.0).normalize_or_zero();
                direction = (direction
                    + avoidance * ZOMBIE_AVOID_WEIGHT
                    + steering::jitter(rng, ZOMBIE_JITTER))
                .normalize_or_zero();
                advance_position(
                    position,
                    facing,
                    body,
                    &config.world,
                    direction,
                    zombie.stats.speed,
                    dt_secs,
                );
            }
            ZombieAction::Strike { ranged } => {
                if let Some(prey) = &prey {
                    zombie.attack_cooldown_ms = ZOMBIE_ATTACK_COOLDOWN_MS;
                    strikes.push(Strike {
                        target: prey.entity,
                        target_position: prey.position,
                        damage: zombie.stats.attack_damage,
                        infection_chance: zombie.stats.infection_chance,
                        ranged,
                        from: position.0,
                    });
                }
            }
            ZombieAction::Wait => {}
            ZombieAction::Wander => {
                if rng.gen::<f64>() < WANDER_TURN_CHANCE {
                    zombie.wander_heading = rng.gen::<f64>() * std::f64::consts::TAU;
                }
                let direction = Vec2::from_angle(zombie.wander_heading);
                advance_position(
                    position,
                    facing,
                    body,
                    &config.world,
                    direction,
                    zombie.stats.speed * WANDER_SPEED_FACTOR,
                    dt_secs,
                );
            }
        }
    }

    for strike in strikes {
        apply_damage(world, strike.target, strike.damage);
        effects.push(Effect::new(
            EffectKind::AttackFlash {
                at: strike.target_position,
            },
            ATTACK_FLASH_MS,
        ));
        if strike.ranged {
            effects.push(Effect::new(
                EffectKind::AcidSpit {
                    from: strike.from,
                    to: strike.target_position,
                },
                ACID_SPIT_MS,
            ));
        }

        // Infection rolls only against civilians that survived the hit.
        let survived = world
            .get::<&Health>(strike.target)
            .map(|h| h.alive())
            .unwrap_or(false);
        if !survived {
            continue;
        }
        if let Ok(mut civilian) = world.get::<&mut Civilian>(strike.target) {
            if !civilian.infected && rng.gen_bool(strike.infection_chance.clamp(0.0, 1.0)) {
                civilian.infected = true;
                civilian.infection_elapsed_ms = 0.0;
            }
        }
    }
}

/// Soldiers first; civilians only when no soldier is inside the detection
/// radius, searched at double range. Infected civilians are skipped.
fn scan_for_prey(actors: &Actors, from: Vec2) -> Option<u32> {
    if let Some(soldier) = nearest(&actors.soldiers, from, ZOMBIE_DETECTION_RADIUS) {
        return Some(soldier.id);
    }

    let fallback_radius = ZOMBIE_DETECTION_RADIUS * ZOMBIE_FALLBACK_FACTOR;
    let mut best = None;
    let mut best_distance = fallback_radius;
    for civilian in &actors.civilians {
        if civilian.infected {
            continue;
        }
        let distance = from.distance(civilian.position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(civilian.id);
        }
    }
    best
}

fn resolve_prey(actors: &Actors, id: u32) -> Option<Prey> {
    if let Some(soldier) = actors.find_soldier(id) {
        return Some(Prey {
            entity: soldier.entity,
            position: soldier.position,
            radius: soldier.radius,
        });
    }
    actors.find_civilian(id).map(|civilian| Prey {
        entity: civilian.entity,
        position: civilian.position,
        radius: civilian.radius,
    })
}
