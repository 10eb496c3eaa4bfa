//! Parametric heart curve.
//!
//! `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`. The raw curve
//! spans roughly x ∈ [−16, 16], y ∈ [−17, 12]; `CURVE_UNIT` shrinks it before
//! the viewport scale is applied.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Multiplier from raw curve units to scaled heart units.
pub const CURVE_UNIT: f32 = 0.08;

/// Raw heart curve point at parameter `t` (radians), y pointing up.
pub fn heart_curve(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec2::new(x, y)
}

/// Heart size in pixels for a viewport.
pub fn heart_scale(width: f32, height: f32, scale_factor: f32) -> f32 {
    width.min(height) * scale_factor
}

/// Generate `count` heart points centered in a `width`×`height` canvas.
///
/// Parameters are sampled uniformly along the curve, so points bunch up where
/// the curve moves slowly (the lobes). The result is shuffled once, so
/// particle `i` lands on an unrelated part of the outline.
pub fn generate_heart_points<R: Rng + ?Sized>(
    width: f32,
    height: f32,
    count: usize,
    scale_factor: f32,
    rng: &mut R,
) -> Vec<Vec2> {
    let center = Vec2::new(width / 2.0, height / 2.0);
    let scale = heart_scale(width, height, scale_factor) * CURVE_UNIT;

    let mut points: Vec<Vec2> = (0..count)
        .map(|_| {
            let p = heart_curve(rng.gen::<f32>() * TAU);
            // Canvas y grows downward
            center + Vec2::new(p.x, -p.y) * scale
        })
        .collect();

    points.shuffle(rng);
    points
}
