//! Cursor companion: a small creature that trails the pointer.
//!
//! The companion owns its follower state, a private timer queue for blinks and
//! startle reactions, and its own RNG. The browser glue feeds it pointer
//! moves and display refreshes with a millisecond timestamp; every call first
//! fires whatever timers have come due, so reactions are exact no matter how
//! the calls interleave.

pub mod follower;
pub mod pose;

pub use follower::{CompanionConfig, FollowerState};
pub use pose::{BodyPose, CompanionPose, EyePose, Mouth};

use crate::input::PointerSample;
use crate::theme::Theme;
use crate::timers::{TimerHandle, TimerQueue};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reaction {
    BlinkStart,
    BlinkEnd,
    StartleEnd,
    CooldownEnd,
}

pub struct Companion {
    cfg: CompanionConfig,
    state: FollowerState,
    timers: TimerQueue<Reaction>,
    rng: StdRng,
    last_sample: Option<Vec2>,
    cooling_down: bool,
    startle_reset: Option<TimerHandle>,
}

impl Companion {
    /// Create a companion mounted at `now_ms`; the first blink is scheduled
    /// right away.
    pub fn new(cfg: CompanionConfig, rng: StdRng, now_ms: f64) -> Self {
        let mut timers = TimerQueue::new();
        timers.schedule(now_ms + cfg.blink_first_delay_ms, Reaction::BlinkStart);
        Self {
            state: FollowerState::new(cfg.start),
            cfg,
            timers,
            rng,
            last_sample: None,
            cooling_down: false,
            startle_reset: None,
        }
    }

    pub fn with_seed(cfg: CompanionConfig, seed: u64, now_ms: f64) -> Self {
        Self::new(cfg, StdRng::seed_from_u64(seed), now_ms)
    }

    pub fn state(&self) -> &FollowerState {
        &self.state
    }

    pub fn config(&self) -> &CompanionConfig {
        &self.cfg
    }

    pub fn is_torn_down(&self) -> bool {
        self.timers.is_closed()
    }

    /// Number of reactions still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Handle a pointer move. `hovering` is whether the element under the
    /// pointer is interactive.
    pub fn pointer_move(&mut self, sample: PointerSample, hovering: bool, now_ms: f64) {
        if self.is_torn_down() {
            return;
        }
        self.fire_due(now_ms);

        let pos = sample.position();
        if let Some(prev) = self.last_sample {
            if prev.distance(pos) > self.cfg.startle_jump_px && !self.cooling_down {
                self.startle(now_ms);
            }
        }
        self.last_sample = Some(pos);
        self.state.target = pos;
        self.state.is_hovering = hovering;
    }

    /// Advance one display refresh.
    pub fn frame(&mut self, now_ms: f64) {
        if self.is_torn_down() {
            return;
        }
        self.fire_due(now_ms);
        follower::step(&mut self.state, &self.cfg);
    }

    pub fn pose(&self, theme: Theme, now_ms: f64) -> CompanionPose {
        CompanionPose::derive(&self.state, theme, now_ms)
    }

    /// Cancel every pending reaction and stop reacting to input. Idempotent.
    pub fn teardown(&mut self) {
        self.timers.close();
        self.startle_reset = None;
    }

    fn startle(&mut self, now_ms: f64) {
        log::debug!("[companion] startled at {:.0}ms", now_ms);
        self.state.is_startled = true;
        self.cooling_down = true;
        if let Some(h) = self.startle_reset.take() {
            self.timers.cancel(h);
        }
        self.startle_reset = self
            .timers
            .schedule(now_ms + self.cfg.startle_duration_ms, Reaction::StartleEnd);
        self.timers
            .schedule(now_ms + self.cfg.startle_cooldown_ms, Reaction::CooldownEnd);
    }

    fn fire_due(&mut self, now_ms: f64) {
        while let Some((due_ms, reaction)) = self.timers.pop_due(now_ms) {
            match reaction {
                Reaction::BlinkStart => {
                    if !self.state.is_blinking {
                        self.state.is_blinking = true;
                        self.timers
                            .schedule(due_ms + self.cfg.blink_duration_ms, Reaction::BlinkEnd);
                    }
                    let (min, max) = self.cfg.blink_interval_ms;
                    let next = self.rng.gen_range(min..max);
                    self.timers.schedule(due_ms + next, Reaction::BlinkStart);
                }
                Reaction::BlinkEnd => self.state.is_blinking = false,
                Reaction::StartleEnd => {
                    self.state.is_startled = false;
                    self.startle_reset = None;
                }
                Reaction::CooldownEnd => self.cooling_down = false,
            }
        }
    }
}
