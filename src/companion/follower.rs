use crate::constants::*;
use crate::ease::{clamp_symmetric, ease_toward, ease_toward_vec, heading, saturating};
use glam::Vec2;

/// Tuning for the follow/tilt/eye motion and the timed reactions.
#[derive(Clone, Debug)]
pub struct CompanionConfig {
    pub start: Vec2,
    pub follow_blend: f32,
    pub rotation_blend: f32,
    pub rotation_per_px: f32,
    pub rotation_limit_deg: f32,
    pub eye_offset_exponent: f32,
    pub eye_offset_gain: f32,
    pub eye_offset_max: f32,
    pub eye_noise_threshold_px: f32,
    pub blink_first_delay_ms: f64,
    pub blink_interval_ms: (f64, f64),
    pub blink_duration_ms: f64,
    pub startle_jump_px: f32,
    pub startle_duration_ms: f64,
    pub startle_cooldown_ms: f64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            start: Vec2::new(COMPANION_START_X, COMPANION_START_Y),
            follow_blend: FOLLOW_BLEND,
            rotation_blend: ROTATION_BLEND,
            rotation_per_px: ROTATION_PER_PX,
            rotation_limit_deg: ROTATION_LIMIT_DEG,
            eye_offset_exponent: EYE_OFFSET_EXPONENT,
            eye_offset_gain: EYE_OFFSET_GAIN,
            eye_offset_max: EYE_OFFSET_MAX,
            eye_noise_threshold_px: EYE_NOISE_THRESHOLD_PX,
            blink_first_delay_ms: BLINK_FIRST_DELAY_MS,
            blink_interval_ms: (BLINK_INTERVAL_MIN_MS, BLINK_INTERVAL_MAX_MS),
            blink_duration_ms: BLINK_DURATION_MS,
            startle_jump_px: STARTLE_JUMP_PX,
            startle_duration_ms: STARTLE_DURATION_MS,
            startle_cooldown_ms: STARTLE_COOLDOWN_MS,
        }
    }
}

/// Everything the companion renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct FollowerState {
    /// Rendered position.
    pub position: Vec2,
    /// Latest pointer sample.
    pub target: Vec2,
    pub rotation_deg: f32,
    pub eye_offset: Vec2,
    /// `target - position` as measured at the start of the last frame.
    pub displacement: Vec2,
    pub is_hovering: bool,
    pub is_blinking: bool,
    pub is_startled: bool,
}

impl FollowerState {
    pub fn new(start: Vec2) -> Self {
        Self {
            position: start,
            target: start,
            rotation_deg: 0.0,
            eye_offset: Vec2::ZERO,
            displacement: Vec2::ZERO,
            is_hovering: false,
            is_blinking: false,
            is_startled: false,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.displacement.length() > MOVING_THRESHOLD_PX
    }
}

/// One display-refresh worth of follow, eye and tilt motion.
pub fn step(state: &mut FollowerState, cfg: &CompanionConfig) {
    let d = state.target - state.position;
    state.displacement = d;
    let dist = d.length();

    if dist > cfg.eye_noise_threshold_px {
        let angle = d.y.atan2(d.x);
        let magnitude = saturating(
            dist,
            cfg.eye_offset_exponent,
            cfg.eye_offset_gain,
            cfg.eye_offset_max,
        );
        state.eye_offset = heading(angle) * magnitude;
    }

    let target_rotation = clamp_symmetric(d.x * cfg.rotation_per_px, cfg.rotation_limit_deg);
    state.rotation_deg = ease_toward(state.rotation_deg, target_rotation, cfg.rotation_blend);

    state.position = ease_toward_vec(state.position, state.target, cfg.follow_blend);
}
