use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Wraps an angle into the `[-PI, PI)` range.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Rotates `current` toward `target` by at most `max_step` radians,
/// always taking the shortest arc.
pub fn turn_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - current);
    current + diff.clamp(-max_step, max_step)
}

/// Unit vector of the horizontal facing for a yaw angle.
///
/// Yaw 0 faces +Z; positive yaw turns counter-clockwise (toward +X).
pub fn forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Frame-rate independent exponential approach factor.
///
/// Returns the fraction of the remaining distance to cover this frame for
/// a given per-second rate, stable for any nonnegative `dt`.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}
