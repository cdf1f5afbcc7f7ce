// Host-side tests for the cursor companion.
// The browser glue is wasm-only; the companion core runs anywhere.

use glam::Vec2;
use portfolio_fx::companion::*;
use portfolio_fx::input::PointerSample;
use portfolio_fx::theme::Theme;

fn make_companion(now_ms: f64) -> Companion {
    Companion::with_seed(CompanionConfig::default(), 7, now_ms)
}

fn move_to(c: &mut Companion, x: f32, y: f32, now_ms: f64) {
    c.pointer_move(PointerSample::new(x, y), false, now_ms);
}

#[test]
fn stays_off_screen_until_the_pointer_moves() {
    let mut c = make_companion(0.0);
    for i in 0..60 {
        c.frame(i as f64 * 16.0);
    }
    assert_eq!(c.state().position, Vec2::new(-100.0, -100.0));
    assert!(!c.state().is_moving());
}

#[test]
fn follower_moves_a_fixed_fraction_of_the_gap_each_frame() {
    let mut c = make_companion(0.0);
    let targets = [(400.0, 300.0), (10.0, 900.0), (-50.0, 20.0), (1200.0, 640.0)];
    let mut t = 0.0;
    for (x, y) in targets {
        move_to(&mut c, x, y, t);
        for _ in 0..20 {
            let before = c.state().position;
            let gap = (c.state().target - before).length();
            t += 16.0;
            c.frame(t);
            let step = (c.state().position - before).length();
            assert!(step <= 0.12 * gap + 1e-3, "step {step} exceeds bound for gap {gap}");
            assert!((step - 0.12 * gap).abs() < 1e-2);
        }
    }
}

#[test]
fn follower_converges_on_a_still_pointer() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 300.0, 200.0, 0.0);
    for i in 0..200 {
        c.frame(i as f64 * 16.0);
    }
    assert!(c.state().position.distance(Vec2::new(300.0, 200.0)) < 0.1);
    assert!(!c.state().is_moving());
}

#[test]
fn rotation_stays_within_limits_for_huge_jumps() {
    let mut c = make_companion(0.0);
    let mut t = 0.0;
    for i in 0..400 {
        let x = if i % 2 == 0 { 100_000.0 } else { -100_000.0 };
        move_to(&mut c, x, 0.0, t);
        t += 16.0;
        c.frame(t);
        let r = c.state().rotation_deg;
        assert!((-25.0..=25.0).contains(&r), "rotation {r} out of range");
    }
}

#[test]
fn rotation_eases_instead_of_snapping() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 2000.0, -100.0, 0.0);
    c.frame(16.0);
    // target tilt is clamped to 25, first frame only covers a tenth of it
    assert!((c.state().rotation_deg - 2.5).abs() < 1e-4);
}

#[test]
fn eye_offset_saturates_and_points_at_the_target() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 900.0, -100.0, 0.0);
    c.frame(16.0);
    let eye = c.state().eye_offset;
    assert!((eye.length() - 6.0).abs() < 1e-4);
    assert!(eye.x > 0.0 && eye.y.abs() < 1e-4);
}

#[test]
fn eye_offset_is_frozen_at_rest() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 200.0, 300.0, 0.0);
    let mut t = 0.0;
    while c.state().displacement.length() > 0.5 || t == 0.0 {
        t += 16.0;
        c.frame(t);
    }
    let frozen = c.state().eye_offset;
    assert!(frozen.length() > 0.0);
    for _ in 0..30 {
        t += 16.0;
        c.frame(t);
    }
    assert_eq!(c.state().eye_offset, frozen);
}

#[test]
fn startle_lasts_300ms_and_respects_cooldown() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 0.0, 0.0, 0.0);
    move_to(&mut c, 120.0, 0.0, 0.0);
    assert!(c.state().is_startled);

    c.frame(299.0);
    assert!(c.state().is_startled);
    c.frame(301.0);
    assert!(!c.state().is_startled);

    // within cooldown: ignored
    move_to(&mut c, 240.0, 0.0, 500.0);
    assert!(!c.state().is_startled);
    c.frame(600.0);
    assert!(!c.state().is_startled);

    // cooldown over at exactly 1000ms
    move_to(&mut c, 360.0, 0.0, 1000.0);
    assert!(c.state().is_startled);
    c.frame(1301.0);
    assert!(!c.state().is_startled);
}

#[test]
fn small_moves_never_startle() {
    let mut c = make_companion(0.0);
    let mut t = 0.0;
    for i in 0..100 {
        move_to(&mut c, i as f32 * 79.0, 0.0, t);
        t += 16.0;
        c.frame(t);
        assert!(!c.state().is_startled);
    }
}

#[test]
fn first_sample_after_mount_does_not_startle() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 1500.0, 900.0, 10.0);
    assert!(!c.state().is_startled);
}

#[test]
fn blinks_last_150ms_at_randomized_intervals() {
    let mut c = make_companion(0.0);
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    let mut was = false;
    let mut t = 0.0;
    while t < 60_000.0 {
        c.frame(t);
        let now = c.state().is_blinking;
        if now && !was {
            starts.push(t);
        }
        if !now && was {
            ends.push(t);
        }
        was = now;
        t += 1.0;
    }

    assert!(starts.len() >= 10, "expected regular blinking, got {}", starts.len());
    assert_eq!(starts[0], 2000.0);
    for (s, e) in starts.iter().zip(&ends) {
        assert!((e - s - 150.0).abs() <= 1.0, "blink lasted {}ms", e - s);
    }
    for pair in starts.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((1999.0..5001.0).contains(&gap), "interval {gap}ms out of range");
    }
    let distinct = starts
        .windows(2)
        .map(|p| (p[1] - p[0]) as i64)
        .collect::<std::collections::HashSet<_>>();
    assert!(distinct.len() > 1, "intervals should vary");
}

#[test]
fn late_polling_still_blinks_for_the_scheduled_window() {
    let mut c = make_companion(0.0);
    c.frame(2100.0);
    assert!(c.state().is_blinking);
    c.frame(2149.0);
    assert!(c.state().is_blinking);
    c.frame(2150.0);
    assert!(!c.state().is_blinking);
}

#[test]
fn teardown_cancels_timers_and_freezes_state() {
    let mut c = make_companion(0.0);
    move_to(&mut c, 0.0, 0.0, 0.0);
    move_to(&mut c, 500.0, 0.0, 0.0);
    assert!(c.pending_timers() > 0);

    c.teardown();
    assert!(c.is_torn_down());
    assert_eq!(c.pending_timers(), 0);

    let frozen = c.state().clone();
    for i in 0..500 {
        c.frame(i as f64 * 16.0);
        move_to(&mut c, 9999.0, 9999.0, i as f64 * 16.0);
    }
    assert_eq!(*c.state(), frozen);

    c.teardown();
    assert_eq!(*c.state(), frozen);
}

#[test]
fn teardown_right_after_mount_is_safe() {
    let mut c = make_companion(0.0);
    c.teardown();
    c.teardown();
    assert!(c.is_torn_down());
}

#[test]
fn hover_follows_each_pointer_move() {
    let mut c = make_companion(0.0);
    c.pointer_move(PointerSample::new(10.0, 10.0), true, 0.0);
    assert!(c.state().is_hovering);
    c.pointer_move(PointerSample::new(12.0, 10.0), false, 16.0);
    assert!(!c.state().is_hovering);
}

// ---------------- Pose ----------------

fn state() -> FollowerState {
    FollowerState::new(Vec2::new(100.0, 100.0))
}

#[test]
fn pose_relaxed_at_rest_floats() {
    let pose = CompanionPose::derive(&state(), Theme::Dark, 750.0);
    assert_eq!(pose.mouth, Mouth::Relaxed);
    assert_eq!(pose.body, BodyPose::Default);
    assert!(pose.floating);
    assert!((pose.vertical_offset - 4.0).abs() < 1e-3); // quarter period
    assert_eq!(pose.eyes.rx, 7.0);
    assert_eq!(pose.eyes.ry, 8.0);
    assert_eq!(pose.scale, 1.0);
}

#[test]
fn pose_hover_widens_eyes_and_opens_mouth() {
    let mut s = state();
    s.is_hovering = true;
    let pose = CompanionPose::derive(&s, Theme::Dark, 0.0);
    assert_eq!(pose.mouth, Mouth::ExcitedO { radius: 4.0 });
    assert_eq!((pose.eyes.rx, pose.eyes.ry), (9.0, 9.0));
    assert!(!pose.floating);
    assert_eq!(pose.vertical_offset, 0.0);
    assert!(pose.scale > 1.0);
}

#[test]
fn pose_startled_wins_over_hover() {
    let mut s = state();
    s.is_hovering = true;
    s.is_startled = true;
    let pose = CompanionPose::derive(&s, Theme::Light, 0.0);
    assert_eq!(pose.mouth, Mouth::AlarmedO { radius: 2.5 });
    assert_eq!(pose.body, BodyPose::Startled);
    assert!(pose.eyes.is_closed());
    assert!(pose.vertical_offset < 0.0);
    assert!(!pose.floating);
}

#[test]
fn pose_blink_closes_eyes() {
    let mut s = state();
    s.is_blinking = true;
    let pose = CompanionPose::derive(&s, Theme::Dark, 0.0);
    assert!(pose.eyes.ry <= 1.0);
    assert_eq!(pose.eyes.pupil_radius, 0.0);
}

#[test]
fn pose_moving_suppresses_float() {
    let mut s = state();
    s.displacement = Vec2::new(30.0, 0.0);
    let pose = CompanionPose::derive(&s, Theme::Dark, 750.0);
    assert!(!pose.floating);
    assert_eq!(pose.vertical_offset, 0.0);
}

#[test]
fn pose_palette_follows_theme() {
    let dark = CompanionPose::derive(&state(), Theme::Dark, 0.0);
    let light = CompanionPose::derive(&state(), Theme::Light, 0.0);
    assert_ne!(dark.palette.body, light.palette.body);
}
