//! Mission objective counters.
//!
//! Owned by the engine and mutated only by the step pipeline at the moment
//! an actor leaves the active set (kill, rescue, loss) or enters it (spawn).

use holdout_core::state::ObjectiveView;

/// Running mission tallies.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveState {
    pub zombies_killed: u32,
    pub civilians_rescued: u32,
    pub civilians_lost: u32,
    pub total_zombies_spawned: u32,
    pub total_civilians: u32,
}

impl ObjectiveState {
    pub fn view(&self) -> ObjectiveView {
        ObjectiveView {
            zombies_killed: self.zombies_killed,
            civilians_rescued: self.civilians_rescued,
            civilians_lost: self.civilians_lost,
            total_zombies_spawned: self.total_zombies_spawned,
            total_civilians: self.total_civilians,
        }
    }
}
