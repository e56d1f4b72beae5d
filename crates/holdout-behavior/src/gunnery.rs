//! Small-arms math and the magazine/reload state machine.
//!
//! Operates on the plain `Weapon` record; the sim crate decides when to call
//! these, this module decides what they do.

use holdout_core::components::Weapon;
use holdout_core::constants::*;

/// Hit probability for a shot at `distance` with the given alert level.
/// Degrades linearly with distance over range and with alertness, floored
/// so even a rattled soldier at maximum range can connect.
pub fn hit_probability(distance: f64, range: f64, alert_level: f64) -> f64 {
    (1.0 - (distance / range) * ACCURACY_DISTANCE_PENALTY - alert_level * ACCURACY_ALERT_PENALTY)
        .clamp(ACCURACY_FLOOR, 1.0)
}

/// Alert level from the count of adversaries in the alert radius, saturating
/// at 1.0 once five or more are close.
pub fn alert_level(nearby_zombies: usize) -> f64 {
    (nearby_zombies as f64 / ALERT_SATURATION_COUNT).min(1.0)
}

/// Whether the weapon can fire right now.
pub fn can_fire(weapon: &Weapon) -> bool {
    !weapon.reloading && weapon.magazine > 0 && weapon.cooldown_ms <= 0.0
}

/// Spend one round and restart the inter-shot cooldown. Caller must have
/// checked `can_fire`.
pub fn expend_round(weapon: &mut Weapon) {
    debug_assert!(weapon.magazine > 0);
    weapon.magazine -= 1;
    weapon.cooldown_ms = weapon.fire_interval_ms;
}

/// Begin a reload. No-op when one is already running, the magazine is full,
/// or the reserve is empty.
pub fn try_start_reload(weapon: &mut Weapon) {
    if weapon.reloading || weapon.reserve == 0 || weapon.magazine == weapon.magazine_capacity {
        return;
    }
    weapon.reloading = true;
    weapon.reload_remaining_ms = weapon.reload_time_ms;
}

/// Advance weapon timers by `dt_ms`: cooldown decay, reload completion, and
/// the automatic reload when the magazine runs dry with reserve available.
pub fn advance(weapon: &mut Weapon, dt_ms: f64) {
    if weapon.cooldown_ms > 0.0 {
        weapon.cooldown_ms -= dt_ms;
    }

    if weapon.reloading {
        weapon.reload_remaining_ms -= dt_ms;
        if weapon.reload_remaining_ms <= 0.0 {
            finish_reload(weapon);
        }
    } else if weapon.magazine == 0 && weapon.reserve > 0 {
        try_start_reload(weapon);
    }
}

/// Top up the magazine from reserve: `min(capacity - magazine, reserve)`
/// rounds move over.
fn finish_reload(weapon: &mut Weapon) {
    let wanted = weapon.magazine_capacity - weapon.magazine;
    let loaded = wanted.min(weapon.reserve);
    weapon.magazine += loaded;
    weapon.reserve -= loaded;
    weapon.reloading = false;
    weapon.reload_remaining_ms = 0.0;
}
