//! Transient visual effects emitted by the simulation step.
//!
//! Effects are purely cosmetic: owned by the engine's effect list, aged each
//! step, and dropped when their duration elapses. The renderer interpolates
//! from `elapsed_ms / duration_ms`.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// What to draw and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectKind {
    /// Instantaneous shot line from muzzle to impact.
    BulletTrail { from: Vec2, to: Vec2 },
    /// Melee hit marker at the victim's position.
    AttackFlash { at: Vec2 },
    /// Ranged spit projectile path.
    AcidSpit { from: Vec2, to: Vec2 },
    /// Conversion burst where a civilian turned.
    Transformation { at: Vec2 },
}

/// One live effect; expires when `elapsed_ms` reaches `duration_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub elapsed_ms: f64,
    pub duration_ms: f64,
}

impl Effect {
    pub fn new(kind: EffectKind, duration_ms: f64) -> Self {
        Self {
            kind,
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    /// Normalized age in 0..=1.
    pub fn progress(&self) -> f64 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}
