//! Steering primitives shared by every mobile entity: obstacle repulsion,
//! barrier sliding, and the world-bounds clamp.

use rand::Rng;

use holdout_core::types::{vec2, Rect, Vec2};

/// Repulsion away from nearby bodies. Each neighbor strictly inside `radius`
/// contributes a unit vector away from it scaled by `(radius - d) / radius`;
/// coincident points (distance zero, including the caller itself) contribute
/// nothing. Returns zero when nothing is in range.
pub fn avoid_obstacles(pos: Vec2, neighbors: &[Vec2], radius: f64) -> Vec2 {
    let mut force = Vec2::ZERO;
    for &neighbor in neighbors {
        let distance = pos.distance(neighbor);
        if distance > 0.0 && distance < radius {
            let away = (pos - neighbor).normalize_or_zero();
            force += away * ((radius - distance) / radius);
        }
    }
    force
}

/// Adjust a proposed move so it slides along barriers instead of entering
/// them. For each barrier the post-move position would overlap, the inward
/// component of the move along the barrier-center-to-entity axis is removed.
/// The inward component never increases.
pub fn slide_along_barriers(pos: Vec2, body_radius: f64, barriers: &[Rect], step: Vec2) -> Vec2 {
    let mut adjusted = step;
    let test = pos + step;
    for barrier in barriers {
        if barrier.overlaps_circle(test, body_radius) {
            let push = (pos - barrier.center()).normalize_or_zero();
            let inward = adjusted.dot(push);
            if inward < 0.0 {
                adjusted -= push * inward;
            }
        }
    }
    adjusted
}

/// Whether the body currently overlaps any barrier.
pub fn overlaps_any_barrier(pos: Vec2, body_radius: f64, barriers: &[Rect]) -> bool {
    barriers.iter().any(|b| b.overlaps_circle(pos, body_radius))
}

/// Keep the body fully inside the play area.
pub fn clamp_to_world(pos: Vec2, body_radius: f64, width: f64, height: f64) -> Vec2 {
    vec2(
        pos.x.clamp(body_radius, width - body_radius),
        pos.y.clamp(body_radius, height - body_radius),
    )
}

/// Small uniform jitter, `magnitude` wide per axis, centered on zero. Breaks
/// up perfectly straight convergent paths.
pub fn jitter<R: Rng>(rng: &mut R, magnitude: f64) -> Vec2 {
    vec2(
        (rng.gen::<f64>() - 0.5) * magnitude,
        (rng.gen::<f64>() - 0.5) * magnitude,
    )
}
