//! Startup configuration for a mission.
//!
//! Everything the host shell can tune lives here: world layout, squad
//! composition, weapon stats, adversary variant table, and spawn pacing.
//! The engine reads this at construction and never mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::ZombieVariant;
use crate::types::{vec2, Rect, Vec2};

/// Complete mission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed. Same seed and step sequence reproduce the same run.
    pub seed: u64,
    pub world: WorldConfig,
    pub squad: SquadConfig,
    pub weapon: WeaponConfig,
    pub civilians: CivilianConfig,
    pub variants: VariantTable,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world: WorldConfig::default(),
            squad: SquadConfig::default(),
            weapon: WeaponConfig::default(),
            civilians: CivilianConfig::default(),
            variants: VariantTable::default(),
            spawner: SpawnerConfig::default(),
        }
    }
}

/// Play area bounds and static barrier layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Static barriers: block movement, not line of fire.
    pub barriers: Vec<Rect>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
            barriers: vec![
                Rect::new(200.0, 150.0, 80.0, 20.0),
                Rect::new(500.0, 250.0, 20.0, 100.0),
                Rect::new(800.0, 200.0, 60.0, 20.0),
                Rect::new(300.0, 400.0, 100.0, 20.0),
                Rect::new(600.0, 500.0, 20.0, 80.0),
                Rect::new(900.0, 450.0, 80.0, 20.0),
            ],
        }
    }
}

/// Squad composition and starting placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadConfig {
    /// Starting point of the squad; world center when absent.
    pub spawn_center: Option<Vec2>,
    pub members: Vec<SquadMember>,
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self {
            spawn_center: None,
            members: vec![
                SquadMember::new("Alpha", vec2(-20.0, 0.0)),
                SquadMember::new("Bravo", vec2(0.0, 15.0)),
                SquadMember::new("Charlie", vec2(20.0, 0.0)),
            ],
        }
    }
}

/// One squad member: display name and position in the formation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadMember {
    pub callsign: String,
    pub formation_offset: Vec2,
}

impl SquadMember {
    pub fn new(callsign: &str, formation_offset: Vec2) -> Self {
        Self {
            callsign: callsign.to_string(),
            formation_offset,
        }
    }
}

/// Squad weapon stats, shared by every member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponConfig {
    pub damage: i32,
    pub range: f64,
    pub fire_interval_ms: f64,
    pub magazine_capacity: u32,
    pub reserve: u32,
    pub reload_time_ms: f64,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: 25,
            range: 150.0,
            fire_interval_ms: 300.0,
            magazine_capacity: 30,
            reserve: 120,
            reload_time_ms: 2000.0,
        }
    }
}

/// Non-combatant population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CivilianConfig {
    pub count: u32,
}

impl Default for CivilianConfig {
    fn default() -> Self {
        Self { count: 8 }
    }
}

/// Stat profile fixed per adversary instance at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VariantStats {
    pub max_health: i32,
    /// Pursuit speed (units/second).
    pub speed: f64,
    pub radius: f64,
    pub attack_damage: i32,
    pub attack_range: f64,
    /// Chance a successful attack on a civilian starts an infection.
    pub infection_chance: f64,
    pub scan_interval_ms: f64,
}

/// Per-variant stat rows plus the spawn weighting across them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantTable {
    pub basic: VariantStats,
    pub fast: VariantStats,
    pub tank: VariantStats,
    pub spitter: VariantStats,
    /// Relative spawn weights for Basic/Fast/Tank/Spitter.
    pub spawn_weights: [f64; 4],
}

impl VariantTable {
    pub fn stats(&self, variant: ZombieVariant) -> VariantStats {
        match variant {
            ZombieVariant::Basic => self.basic,
            ZombieVariant::Fast => self.fast,
            ZombieVariant::Tank => self.tank,
            ZombieVariant::Spitter => self.spitter,
        }
    }
}

impl Default for VariantTable {
    fn default() -> Self {
        Self {
            basic: VariantStats {
                max_health: 60,
                speed: 40.0,
                radius: 7.0,
                attack_damage: 15,
                attack_range: 20.0,
                infection_chance: 0.3,
                scan_interval_ms: 500.0,
            },
            fast: VariantStats {
                max_health: 40,
                speed: 80.0,
                radius: 6.0,
                attack_damage: 12,
                attack_range: 20.0,
                infection_chance: 0.2,
                scan_interval_ms: 300.0,
            },
            tank: VariantStats {
                max_health: 150,
                speed: 25.0,
                radius: 10.0,
                attack_damage: 25,
                attack_range: 20.0,
                infection_chance: 0.4,
                scan_interval_ms: 700.0,
            },
            spitter: VariantStats {
                max_health: 45,
                speed: 35.0,
                radius: 7.0,
                attack_damage: 8,
                attack_range: 80.0,
                infection_chance: 0.6,
                scan_interval_ms: 400.0,
            },
            spawn_weights: [0.5, 0.25, 0.15, 0.10],
        }
    }
}

/// Horde population management and escalation pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Adversaries placed on the perimeter at level start.
    pub initial_count: u32,
    /// Hard cap on simultaneously living adversaries.
    pub max_alive: usize,
    pub initial_interval_ms: f64,
    /// Interval reduction per successful spawn.
    pub interval_decay_ms: f64,
    /// Escalation floor; the interval never drops below this.
    pub min_interval_ms: f64,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            initial_count: 5,
            max_alive: 20,
            initial_interval_ms: 3000.0,
            interval_decay_ms: 50.0,
            min_interval_ms: 1500.0,
        }
    }
}

/// Rejected configurations. The constructor is the only fallible surface;
/// everything after it is no-ops and clamps.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("squad must have at least one member")]
    EmptySquad,
    #[error("world bounds must be positive and finite ({width}x{height})")]
    DegenerateWorld { width: f64, height: f64 },
    #[error("weapon magazine capacity must be nonzero")]
    ZeroMagazine,
    #[error("variant spawn weights must be non-negative with a positive sum")]
    InvalidSpawnWeights,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.squad.members.is_empty() {
            return Err(ConfigError::EmptySquad);
        }
        let (w, h) = (self.world.width, self.world.height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::DegenerateWorld {
                width: w,
                height: h,
            });
        }
        if self.weapon.magazine_capacity == 0 {
            return Err(ConfigError::ZeroMagazine);
        }
        let weights = &self.variants.spawn_weights;
        if weights.iter().any(|w| *w < 0.0 || !w.is_finite())
            || weights.iter().sum::<f64>() <= 0.0
        {
            return Err(ConfigError::InvalidSpawnWeights);
        }
        Ok(())
    }
}
