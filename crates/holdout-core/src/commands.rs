//! Squad commands sent from the input shell to the simulation.
//!
//! Commands are queued and applied atomically at the next step boundary,
//! always to the whole squad. There is no error channel back to the caller:
//! a command that cannot apply (non-finite order position, say) is dropped
//! silently and the previous state retained.

use serde::{Deserialize, Serialize};

use crate::enums::SquadMode;
use crate::types::Vec2;

/// All possible squad directives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SquadCommand {
    /// Order the squad to a position; each soldier heads for it plus its
    /// formation offset. Out-of-bounds positions are clamped into the world.
    MoveOrder { position: Vec2 },
    /// Switch the squad's fire-and-movement mode. `Hold` freezes each
    /// soldier's order position where it currently stands.
    SetMode { mode: SquadMode },
    /// Toggle sprint. While sprinting, soldiers move faster but cannot
    /// engage; enabling it drops any current targets.
    SetSprint { sprinting: bool },
    /// Ask every soldier to top up its magazine. A no-op for soldiers with
    /// a full magazine, an empty reserve, or a reload already running.
    ReloadAll,
}
