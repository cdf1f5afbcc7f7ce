//! Small interpolation helpers shared by both animators.
//!
//! Everything here is a total function over finite inputs; callers keep
//! their own state and apply these once per frame.

use glam::Vec2;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` a fixed fraction of the way to `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    lerp(current, target, factor)
}

#[inline]
pub fn ease_toward_vec(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// `min(magnitude^exponent * gain, max)`: reacts quickly to small inputs and
/// saturates at `max`. Negative magnitudes are treated as zero.
#[inline]
pub fn saturating(magnitude: f32, exponent: f32, gain: f32, max: f32) -> f32 {
    (magnitude.max(0.0).powf(exponent) * gain).min(max)
}

#[inline]
pub fn clamp_symmetric(value: f32, limit: f32) -> f32 {
    value.clamp(-limit, limit)
}

/// Wraparound at `[0, max]`: leaving one side re-enters at the other.
#[inline]
pub fn wrap(value: f32, max: f32) -> f32 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

/// Unit vector from `angle` radians.
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
