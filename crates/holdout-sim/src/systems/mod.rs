//! Per-frame systems, run by the engine in a fixed order:
//! soldiers, then zombies, then civilians, then spawning and cleanup.

pub mod civilian;
pub mod cleanup;
pub mod snapshot;
pub mod soldier;
pub mod spawner;
pub mod zombie;

use hecs::{Entity, World};

use holdout_behavior::steering;
use holdout_core::components::{
    ActorId, Body, Civilian, Facing, Health, Position, Soldier, Zombie,
};
use holdout_core::config::WorldConfig;
use holdout_core::types::Vec2;

/// A living actor as seen by this frame's scans.
pub struct ActorRef {
    pub id: u32,
    pub entity: Entity,
    pub position: Vec2,
    pub radius: f64,
}

/// Civilian entry; target scans need the infection flag.
pub struct CivilianRef {
    pub id: u32,
    pub entity: Entity,
    pub position: Vec2,
    pub radius: f64,
    pub infected: bool,
}

/// Frame-local index of every living actor. Rebuilt at the start of each
/// behavior system, so each kind observes the movement of the kinds updated
/// before it this frame and last frame's positions for the rest.
pub struct Actors {
    pub soldiers: Vec<ActorRef>,
    pub zombies: Vec<ActorRef>,
    pub civilians: Vec<CivilianRef>,
}

impl Actors {
    pub fn collect(world: &World) -> Self {
        let mut soldiers = Vec::new();
        {
            let mut q = world.query::<(&ActorId, &Soldier, &Position, &Body, &Health)>();
            for (entity, (id, _soldier, position, body, health)) in q.iter() {
                if health.alive() {
                    soldiers.push(ActorRef {
                        id: id.0,
                        entity,
                        position: position.0,
                        radius: body.radius,
                    });
                }
            }
        }

        let mut zombies = Vec::new();
        {
            let mut q = world.query::<(&ActorId, &Zombie, &Position, &Body, &Health)>();
            for (entity, (id, _zombie, position, body, health)) in q.iter() {
                if health.alive() {
                    zombies.push(ActorRef {
                        id: id.0,
                        entity,
                        position: position.0,
                        radius: body.radius,
                    });
                }
            }
        }

        let mut civilians = Vec::new();
        {
            let mut q = world.query::<(&ActorId, &Civilian, &Position, &Body, &Health)>();
            for (entity, (id, civilian, position, body, health)) in q.iter() {
                if health.alive() {
                    civilians.push(CivilianRef {
                        id: id.0,
                        entity,
                        position: position.0,
                        radius: body.radius,
                        infected: civilian.infected,
                    });
                }
            }
        }

        Self {
            soldiers,
            zombies,
            civilians,
        }
    }

    pub fn find_soldier(&self, id: u32) -> Option<&ActorRef> {
        self.soldiers.iter().find(|a| a.id == id)
    }

    pub fn find_zombie(&self, id: u32) -> Option<&ActorRef> {
        self.zombies.iter().find(|a| a.id == id)
    }

    pub fn find_civilian(&self, id: u32) -> Option<&CivilianRef> {
        self.civilians.iter().find(|a| a.id == id)
    }

    /// Positions of every living actor except the listed ids, for obstacle
    /// avoidance.
    pub fn avoidance_points(&self, exclude: &[u32]) -> Vec<Vec2> {
        let mut points =
            Vec::with_capacity(self.soldiers.len() + self.zombies.len() + self.civilians.len());
        for a in &self.soldiers {
            if !exclude.contains(&a.id) {
                points.push(a.position);
            }
        }
        for a in &self.zombies {
            if !exclude.contains(&a.id) {
                points.push(a.position);
            }
        }
        for a in &self.civilians {
            if !exclude.contains(&a.id) {
                points.push(a.position);
            }
        }
        points
    }
}

/// Nearest actor to `from` strictly inside `radius`. The first actor at the
/// minimal distance wins ties, so results are stable for a fixed list order.
pub fn nearest<'a>(actors: &'a [ActorRef], from: Vec2, radius: f64) -> Option<&'a ActorRef> {
    let mut best: Option<&ActorRef> = None;
    let mut best_distance = radius;
    for actor in actors {
        let distance = from.distance(actor.position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(actor);
        }
    }
    best
}

/// Integrate one locomotion step: barrier sliding, then the world clamp.
pub fn advance_position(
    position: &mut Position,
    facing: &mut Facing,
    body: &Body,
    world_cfg: &WorldConfig,
    direction: Vec2,
    speed: f64,
    dt_secs: f64,
) {
    let step = direction * speed * dt_secs;
    let step = steering::slide_along_barriers(position.0, body.radius, &world_cfg.barriers, step);
    position.0 = steering::clamp_to_world(
        position.0 + step,
        body.radius,
        world_cfg.width,
        world_cfg.height,
    );
    facing.0 = direction.to_angle();
}

/// Apply damage through the alive check. Health only ever decreases and
/// never drops below zero; a dead actor ignores further hits.
pub fn apply_damage(world: &mut World, entity: Entity, amount: i32) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        if health.alive() {
            health.current = (health.current - amount).max(0);
        }
    }
}
