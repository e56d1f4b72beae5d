//! Mission snapshot — the complete visible state handed to the renderer and
//! UI after each step. Read-only; the shells never write back.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;
use crate::enums::{MissionStatus, SquadMode, ZombieVariant};
use crate::types::{SimTime, Vec2};

/// Everything the display shell needs, emitted once per step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub status: MissionStatus,
    pub soldiers: Vec<SoldierView>,
    pub zombies: Vec<ZombieView>,
    pub civilians: Vec<CivilianView>,
    pub effects: Vec<Effect>,
    pub objectives: ObjectiveView,
}

/// One squad member as drawn on screen and in the team panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldierView {
    pub id: u32,
    pub callsign: String,
    pub position: Vec2,
    /// Body facing (radians).
    pub heading: f64,
    /// Aim direction, independent of body facing.
    pub weapon_angle: f64,
    pub health_fraction: f64,
    pub magazine: u32,
    pub reserve: u32,
    pub reloading: bool,
    pub mode: SquadMode,
    pub sprinting: bool,
    pub muzzle_flash: bool,
}

/// One adversary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: u32,
    pub variant: ZombieVariant,
    pub position: Vec2,
    pub heading: f64,
    pub health_fraction: f64,
}

/// One non-combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CivilianView {
    pub id: u32,
    pub position: Vec2,
    pub heading: f64,
    pub panic_level: f64,
    pub infected: bool,
    /// 0..=1 fraction of the infection countdown, for the renderer's color
    /// interpolation. Zero when not infected.
    pub infection_progress: f64,
    pub rescued: bool,
}

/// Mission objective tallies for the status panel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectiveView {
    pub zombies_killed: u32,
    pub civilians_rescued: u32,
    pub civilians_lost: u32,
    pub total_zombies_spawned: u32,
    pub total_civilians: u32,
}
