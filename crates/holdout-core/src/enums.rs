//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Squad fire-and-movement mode, applied squad-wide by the command intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquadMode {
    /// Move toward the current order position (plus formation offset).
    #[default]
    Follow,
    /// Stay put; the order position is frozen where the soldier stood.
    Hold,
    /// No locomotion at all, combat only.
    Overwatch,
}

/// Adversary variant. Fixes the stat profile at spawn; the profile never
/// changes for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieVariant {
    Basic,
    Fast,
    Tank,
    Spitter,
}

/// Top-level mission state. Once `Won` or `Lost` it never changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    #[default]
    Active,
    Won,
    Lost,
}
