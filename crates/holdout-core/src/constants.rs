//! Simulation constants and tuning parameters.
//!
//! Host-tunable values (world layout, weapon, variant stats, spawn pacing)
//! live in `config`; everything here is fixed behavioral tuning.

// --- Actors ---

/// Soldier body radius (world units).
pub const SOLDIER_RADIUS: f64 = 6.0;

/// Soldier walk speed (units/second).
pub const SOLDIER_SPEED: f64 = 120.0;

/// Soldier hit points.
pub const SOLDIER_HEALTH: i32 = 100;

/// Speed multiplier while sprinting.
pub const SPRINT_MULTIPLIER: f64 = 1.8;

/// Civilian body radius.
pub const CIVILIAN_RADIUS: f64 = 5.0;

/// Civilian flat-out speed (units/second); panic scales it.
pub const CIVILIAN_SPEED: f64 = 60.0;

/// Civilian hit points.
pub const CIVILIAN_HEALTH: i32 = 50;

// --- Scanning ---

/// Time between soldier target scans.
pub const SOLDIER_SCAN_INTERVAL_MS: f64 = 200.0;

/// Time between civilian environment scans.
pub const CIVILIAN_SCAN_INTERVAL_MS: f64 = 400.0;

/// Radius within which a zombie notices soldiers.
pub const ZOMBIE_DETECTION_RADIUS: f64 = 200.0;

/// Multiplier on the detection radius for the civilian fallback search,
/// used only when no soldier was found.
pub const ZOMBIE_FALLBACK_FACTOR: f64 = 2.0;

/// Radius within which a civilian flees a zombie.
pub const CIVILIAN_FEAR_RADIUS: f64 = 100.0;

/// Radius within which a civilian notices soldiers.
pub const SOLDIER_SEEK_RADIUS: f64 = 150.0;

/// Contact distance at which a civilian counts as rescued.
pub const RESCUE_RADIUS: f64 = 20.0;

// --- Fire control ---

/// Radius within which zombies raise a soldier's alert level.
pub const ALERT_RADIUS: f64 = 100.0;

/// Zombie count at which alert saturates at 1.0.
pub const ALERT_SATURATION_COUNT: f64 = 5.0;

/// Lower bound on hit probability.
pub const ACCURACY_FLOOR: f64 = 0.3;

/// Accuracy lost per unit of distance/range ratio.
pub const ACCURACY_DISTANCE_PENALTY: f64 = 0.5;

/// Accuracy lost per unit of alert level.
pub const ACCURACY_ALERT_PENALTY: f64 = 0.2;

/// Muzzle flash display duration.
pub const MUZZLE_FLASH_MS: f64 = 100.0;

// --- Melee ---

/// Time between zombie attacks.
pub const ZOMBIE_ATTACK_COOLDOWN_MS: f64 = 1000.0;

// --- Steering ---

/// Soldier obstacle-avoidance radius and blend weight.
pub const SOLDIER_AVOID_RADIUS: f64 = 25.0;
pub const SOLDIER_AVOID_WEIGHT: f64 = 0.5;

/// Zombie obstacle-avoidance radius, blend weight, and pursuit jitter.
pub const ZOMBIE_AVOID_RADIUS: f64 = 15.0;
pub const ZOMBIE_AVOID_WEIGHT: f64 = 0.3;
pub const ZOMBIE_JITTER: f64 = 0.2;

/// Civilian obstacle-avoidance radius, blend weight, and flee jitter.
pub const CIVILIAN_AVOID_RADIUS: f64 = 20.0;
pub const CIVILIAN_AVOID_WEIGHT: f64 = 0.4;
pub const CIVILIAN_FLEE_JITTER: f64 = 0.3;

/// Distance at which a soldier considers its order position reached.
pub const FOLLOW_ARRIVAL_DISTANCE: f64 = 10.0;

/// Speed factor while overlapping a barrier (clambering).
pub const BARRIER_DRAG_FACTOR: f64 = 0.3;

// --- Panic ---

/// Radius and weight of a zombie's contribution to the panic target.
pub const PANIC_ZOMBIE_RADIUS: f64 = 80.0;
pub const PANIC_ZOMBIE_WEIGHT: f64 = 0.5;

/// Radius and weight of a soldier's calming contribution.
pub const PANIC_SOLDIER_RADIUS: f64 = 50.0;
pub const PANIC_SOLDIER_WEIGHT: f64 = 0.3;

/// Easing rate toward the panic target (per second).
pub const PANIC_EASE_RATE: f64 = 6.0;

/// Panic level above which movement turns erratic.
pub const PANIC_FLEE_THRESHOLD: f64 = 0.3;

/// Per-update chance of a panicked heading change.
pub const PANIC_TURN_CHANCE: f64 = 0.1;

// --- Wandering ---

/// Per-update chance of a zombie heading change while wandering.
pub const WANDER_TURN_CHANCE: f64 = 0.02;

/// Speed factor while wandering.
pub const WANDER_SPEED_FACTOR: f64 = 0.3;

/// Civilian wander leg duration: base plus a uniform random spread.
pub const WANDER_DURATION_BASE_MS: f64 = 2000.0;
pub const WANDER_DURATION_SPREAD_MS: f64 = 3000.0;

// --- Infection ---

/// Time from infection to conversion.
pub const INFECTION_DURATION_MS: f64 = 5000.0;

// --- Effects ---

/// Display durations of the transient effects.
pub const BULLET_TRAIL_MS: f64 = 100.0;
pub const ATTACK_FLASH_MS: f64 = 200.0;
pub const ACID_SPIT_MS: f64 = 300.0;
pub const TRANSFORMATION_MS: f64 = 500.0;

// --- Placement ---

/// Margin from the world edge for initial civilian placement.
pub const PLACEMENT_MARGIN: f64 = 50.0;

/// Rejection-sampling attempt budget per civilian.
pub const PLACEMENT_ATTEMPTS: u32 = 40;

/// Minimum initial distance from any soldier.
pub const PLACEMENT_SOLDIER_CLEARANCE: f64 = 100.0;

/// Minimum initial spacing between civilians.
pub const PLACEMENT_CIVILIAN_SPACING: f64 = 40.0;

/// Extra clearance from barriers at placement time.
pub const PLACEMENT_BARRIER_CLEARANCE: f64 = 20.0;
