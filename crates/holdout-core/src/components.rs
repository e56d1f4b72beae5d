//! ECS components for hecs entities.
//!
//! Components are plain data structs; game logic lives in systems.
//! Cross-entity references are `ActorId`s resolved against the live set
//! each use, never stored pointers.

use serde::{Deserialize, Serialize};

use crate::config::VariantStats;
use crate::enums::{SquadMode, ZombieVariant};
use crate::types::Vec2;

/// Stable identity handle for an actor, assigned at spawn and never reused
/// within a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// World position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Facing angle in radians, for the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing(pub f64);

/// Collision/avoidance radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub radius: f64,
}

/// Hit points. `current` only ever decreases during a mission; an actor with
/// zero health is dead and gets culled at the end of the step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn alive(&self) -> bool {
        self.current > 0
    }

    pub fn fraction(&self) -> f64 {
        f64::from(self.current) / f64::from(self.max)
    }
}

/// Squad member state: orders, targeting, and presentation timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Soldier {
    pub callsign: String,
    pub mode: SquadMode,
    pub sprinting: bool,
    /// Squad-wide move order destination; this soldier aims for it plus
    /// its formation offset.
    pub order_position: Option<Vec2>,
    pub formation_offset: Vec2,
    /// Current engagement target, re-validated against the live set before
    /// every use.
    pub target: Option<u32>,
    /// 0..=1, rises with the local adversary count and degrades aim.
    pub alert_level: f64,
    pub scan_timer_ms: f64,
    /// Aim direction, may differ from body facing while firing on the move.
    pub weapon_angle: f64,
    pub muzzle_flash_ms: f64,
}

/// Magazine-fed weapon. Firing is impossible while `reloading`; the magazine
/// never exceeds `magazine_capacity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: i32,
    pub range: f64,
    /// Minimum time between shots.
    pub fire_interval_ms: f64,
    pub magazine_capacity: u32,
    pub magazine: u32,
    pub reserve: u32,
    pub reload_time_ms: f64,
    pub cooldown_ms: f64,
    pub reloading: bool,
    pub reload_remaining_ms: f64,
}

/// Adversary state. `stats` is copied from the variant table at spawn and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zombie {
    pub variant: ZombieVariant,
    pub stats: VariantStats,
    pub target: Option<u32>,
    pub attack_cooldown_ms: f64,
    pub scan_timer_ms: f64,
    pub wander_heading: f64,
}

/// Non-combatant state: panic, infection countdown, and rescue flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Civilian {
    pub infected: bool,
    pub infection_elapsed_ms: f64,
    pub infection_duration_ms: f64,
    /// Set when a soldier comes within rescue range; removed next cull.
    pub rescued: bool,
    /// 0..=1, eases toward the crowd-driven target each step.
    pub panic_level: f64,
    pub flee_target: Option<u32>,
    pub wander_heading: f64,
    pub wander_timer_ms: f64,
    pub wander_duration_ms: f64,
    pub scan_timer_ms: f64,
}
