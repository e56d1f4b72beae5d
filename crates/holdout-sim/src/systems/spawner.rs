//! Horde spawn director: continuous perimeter spawning on a countdown whose
//! interval shrinks with every successful spawn, floored at a minimum.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use holdout_behavior::profiles;
use holdout_core::components::{Health, Zombie};
use holdout_core::config::SimConfig;
use holdout_core::types::{vec2, Vec2};

use crate::objectives::ObjectiveState;
use crate::world_setup;

/// Countdown state for the escalating spawner.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    pub timer_ms: f64,
    pub interval_ms: f64,
}

impl SpawnDirector {
    pub fn new(initial_interval_ms: f64) -> Self {
        Self {
            timer_ms: 0.0,
            interval_ms: initial_interval_ms,
        }
    }
}

/// Advance the countdown; on expiry spawn one adversary at the perimeter if
/// the population is below the cap, then tighten the interval.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut SpawnDirector,
    config: &SimConfig,
    next_actor_id: &mut u32,
    objectives: &mut ObjectiveState,
    dt_ms: f64,
) {
    director.timer_ms += dt_ms;
    if director.timer_ms < director.interval_ms {
        return;
    }
    director.timer_ms = 0.0;

    let alive = {
        let mut q = world.query::<(&Zombie, &Health)>();
        q.iter().filter(|(_, (_, health))| health.alive()).count()
    };
    if alive >= config.spawner.max_alive {
        return;
    }

    let variant = profiles::roll_variant(rng, &config.variants.spawn_weights);
    let position = perimeter_point(rng, config.world.width, config.world.height);
    world_setup::spawn_zombie(world, rng, next_actor_id, position, variant, &config.variants);
    objectives.total_zombies_spawned += 1;

    // The escalation never reverses; only the floor stops it.
    director.interval_ms =
        (director.interval_ms - config.spawner.interval_decay_ms).max(config.spawner.min_interval_ms);
    debug!(
        variant = ?variant,
        interval_ms = director.interval_ms,
        "zombie_spawned"
    );
}

/// Uniformly random point on the play-area perimeter.
pub fn perimeter_point<R: Rng>(rng: &mut R, width: f64, height: f64) -> Vec2 {
    match rng.gen_range(0..4u8) {
        0 => vec2(rng.gen::<f64>() * width, 0.0),
        1 => vec2(width, rng.gen::<f64>() * height),
        2 => vec2(rng.gen::<f64>() * width, height),
        _ => vec2(0.0, rng.gen::<f64>() * height),
    }
}
