// Host-side tests for tuning constants and their relationships.
// constants.rs has no crate dependencies, so it is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_factors_are_fractions() {
    assert!(FOLLOW_BLEND > 0.0 && FOLLOW_BLEND < 1.0);
    assert!(ROTATION_BLEND > 0.0 && ROTATION_BLEND < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reaction_timings_are_ordered() {
    // a blink must be over long before the next can start
    assert!(BLINK_DURATION_MS < BLINK_INTERVAL_MIN_MS);
    assert!(BLINK_INTERVAL_MIN_MS < BLINK_INTERVAL_MAX_MS);
    // the startle ends before it can re-arm
    assert!(STARTLE_DURATION_MS < STARTLE_COOLDOWN_MS);
    assert!(STARTLE_JUMP_PX > MOVING_THRESHOLD_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn eye_and_tilt_limits_are_positive() {
    assert!(EYE_OFFSET_MAX > 0.0);
    assert!(EYE_OFFSET_GAIN > 0.0);
    assert!(EYE_NOISE_THRESHOLD_PX < MOVING_THRESHOLD_PX);
    assert!(ROTATION_LIMIT_DEG > 0.0 && ROTATION_LIMIT_DEG < 90.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_have_logical_relationships() {
    assert!(PARTICLE_AREA_PER_PARTICLE > 0.0);
    assert!(BLOB_PULSE_AMPLITUDE < BLOB_MIN_RADIUS);
    assert!(ATTRACTION_STRENGTH <= ATTRACTION_RADIUS);
    // the idle pointer must be outside any viewport's attraction range
    assert!(POINTER_IDLE_X + ATTRACTION_RADIUS < 0.0);
    assert!(POINTER_IDLE_Y + ATTRACTION_RADIUS < 0.0);
}
