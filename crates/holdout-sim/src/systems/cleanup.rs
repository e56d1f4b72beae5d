//! End-of-step culling: removes dead and rescued actors and tallies the
//! objectives. Runs after every behavior system so nothing observes a
//! same-frame removal.

use hecs::{Entity, World};
use tracing::debug;

use holdout_core::components::{Civilian, Health, Soldier, Zombie};

use crate::objectives::ObjectiveState;

/// Cull the dead and the rescued. Uses a pre-allocated buffer to avoid
/// per-step allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, objectives: &mut ObjectiveState) {
    despawn_buffer.clear();

    for (entity, (_zombie, health)) in world.query_mut::<(&Zombie, &Health)>() {
        if !health.alive() {
            objectives.zombies_killed += 1;
            despawn_buffer.push(entity);
        }
    }

    for (entity, (civilian, health)) in world.query_mut::<(&Civilian, &Health)>() {
        if !health.alive() {
            // Converted civilians land here too; the replacement adversary
            // was already spawned by the engine.
            objectives.civilians_lost += 1;
            despawn_buffer.push(entity);
        } else if civilian.rescued {
            objectives.civilians_rescued += 1;
            despawn_buffer.push(entity);
            debug!("civilian_rescued");
        }
    }

    for (entity, (_soldier, health)) in world.query_mut::<(&Soldier, &Health)>() {
        if !health.alive() {
            despawn_buffer.push(entity);
            debug!("soldier_down");
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
