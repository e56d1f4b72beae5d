//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, advances it by host-supplied elapsed time, and
//! produces `SimSnapshot`s for the display shell. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod objectives;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use holdout_core as core;

#[cfg(test)]
mod tests;
