//! Per-kind behavior decisions.
//!
//! Pure functions that compute what an adversary or non-combatant wants to do
//! this frame based on its situation. No ECS dependency — operates on plain
//! data; the sim systems build the contexts and execute the actions.

use holdout_core::constants::*;
use holdout_core::enums::ZombieVariant;
use holdout_core::types::Vec2;

use crate::profiles::ranged_presentation;

/// A scan target after identity resolution against the live set.
pub struct ResolvedTarget {
    pub position: Vec2,
    pub body_radius: f64,
}

/// Input to the adversary decision for a single entity.
pub struct ZombieContext {
    pub position: Vec2,
    pub body_radius: f64,
    pub attack_range: f64,
    /// Whether the attack cooldown has elapsed.
    pub attack_ready: bool,
    pub target: Option<ResolvedTarget>,
}

/// What the adversary does this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZombieAction {
    /// No target: drift with occasional heading changes.
    Wander,
    /// Close on the target.
    Pursue { toward: Vec2 },
    /// In range with the cooldown elapsed: strike. `ranged` marks a spit
    /// attack delivered from outside melee contact.
    Strike { ranged: bool },
    /// In range but the cooldown is still running: hold position.
    Wait,
}

/// Evaluate the adversary state machine for one entity.
pub fn evaluate_zombie(ctx: &ZombieContext, variant: ZombieVariant) -> ZombieAction {
    let Some(target) = &ctx.target else {
        return ZombieAction::Wander;
    };

    let distance = ctx.position.distance(target.position);
    if distance > ctx.attack_range {
        return ZombieAction::Pursue {
            toward: target.position,
        };
    }
    if !ctx.attack_ready {
        return ZombieAction::Wait;
    }

    let melee_contact = ctx.body_radius + target.body_radius;
    ZombieAction::Strike {
        ranged: ranged_presentation(variant) && distance > melee_contact,
    }
}

/// Input to the non-combatant decision.
pub struct CivilianContext {
    pub infected: bool,
    pub panic_level: f64,
    /// Position of the active threat, if one survived resolution.
    pub threat: Option<Vec2>,
}

/// What the non-combatant does this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CivilianAction {
    /// Infection countdown running: movement and scanning suspended.
    Immobile,
    /// Run directly away from the threat.
    Flee { from: Vec2 },
    /// No direct threat but too rattled to walk calmly.
    Panic,
    /// Idle drift with periodic heading changes.
    Wander,
}

/// Evaluate the non-combatant state machine.
pub fn evaluate_civilian(ctx: &CivilianContext) -> CivilianAction {
    if ctx.infected {
        return CivilianAction::Immobile;
    }
    if let Some(threat) = ctx.threat {
        return CivilianAction::Flee { from: threat };
    }
    if ctx.panic_level > PANIC_FLEE_THRESHOLD {
        return CivilianAction::Panic;
    }
    CivilianAction::Wander
}

/// Crowd-driven panic target in 0..=1: each nearby adversary pushes it up,
/// each nearby soldier pulls it down, both scaled by proximity.
pub fn panic_drive(zombie_distances: &[f64], soldier_distances: &[f64]) -> f64 {
    let mut drive = 0.0;
    for &d in zombie_distances {
        if d < PANIC_ZOMBIE_RADIUS {
            drive += (PANIC_ZOMBIE_RADIUS - d) / PANIC_ZOMBIE_RADIUS * PANIC_ZOMBIE_WEIGHT;
        }
    }
    for &d in soldier_distances {
        if d < PANIC_SOLDIER_RADIUS {
            drive -= (PANIC_SOLDIER_RADIUS - d) / PANIC_SOLDIER_RADIUS * PANIC_SOLDIER_WEIGHT;
        }
    }
    drive.clamp(0.0, 1.0)
}
