//! Variant selection and per-variant behavioral quirks.
//!
//! Stat rows live in the configuration table; this module owns the weighted
//! spawn draw and the attack-presentation distinction.

use rand::Rng;

use holdout_core::enums::ZombieVariant;

const VARIANT_ORDER: [ZombieVariant; 4] = [
    ZombieVariant::Basic,
    ZombieVariant::Fast,
    ZombieVariant::Tank,
    ZombieVariant::Spitter,
];

/// Weighted-random variant draw. Weights are relative (they need not sum to
/// one); a degenerate draw falls back to Basic.
pub fn roll_variant<R: Rng>(rng: &mut R, weights: &[f64; 4]) -> ZombieVariant {
    let total: f64 = weights.iter().sum();
    let mut draw = rng.gen::<f64>() * total;
    for (variant, &weight) in VARIANT_ORDER.iter().zip(weights) {
        draw -= weight;
        if draw <= 0.0 {
            return *variant;
        }
    }
    ZombieVariant::Basic
}

/// Whether the variant's out-of-contact attacks are presented as a ranged
/// projectile. Only the Spitter spits.
pub fn ranged_presentation(variant: ZombieVariant) -> bool {
    matches!(variant, ZombieVariant::Spitter)
}
