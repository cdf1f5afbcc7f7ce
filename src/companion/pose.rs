//! Pure mapping from follower state to what the SVG shows.

use super::follower::FollowerState;
use crate::constants::*;
use crate::theme::{companion_palette, CompanionPalette, Theme};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyPose {
    Default,
    /// Stretched body with the tail tucked up.
    Startled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mouth {
    Relaxed,
    ExcitedO { radius: f32 },
    AlarmedO { radius: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyePose {
    pub rx: f32,
    pub ry: f32,
    pub pupil_radius: f32,
}

impl EyePose {
    pub fn is_closed(&self) -> bool {
        self.pupil_radius == 0.0
    }
}

#[derive(Clone, Debug)]
pub struct CompanionPose {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    /// Hop while startled, idle float otherwise (0 when suppressed).
    pub vertical_offset: f32,
    pub floating: bool,
    pub eye_offset: Vec2,
    pub eyes: EyePose,
    pub body: BodyPose,
    pub mouth: Mouth,
    pub palette: CompanionPalette,
}

impl CompanionPose {
    pub fn derive(state: &FollowerState, theme: Theme, now_ms: f64) -> Self {
        let floating = !state.is_moving() && !state.is_hovering && !state.is_startled;
        let vertical_offset = if state.is_startled {
            HOP_OFFSET_PX
        } else if floating {
            idle_float_offset(now_ms)
        } else {
            0.0
        };

        Self {
            position: state.position,
            rotation_deg: state.rotation_deg,
            scale: if state.is_hovering { HOVER_SCALE } else { 1.0 },
            vertical_offset,
            floating,
            eye_offset: state.eye_offset,
            eyes: eye_pose(state),
            body: if state.is_startled {
                BodyPose::Startled
            } else {
                BodyPose::Default
            },
            mouth: mouth(state),
            palette: companion_palette(theme),
        }
    }
}

fn eye_pose(state: &FollowerState) -> EyePose {
    let closed = state.is_blinking || state.is_startled;
    let (rx, open_ry) = if state.is_hovering { (9.0, 9.0) } else { (7.0, 8.0) };
    EyePose {
        rx,
        ry: if closed { 1.0 } else { open_ry },
        pupil_radius: if closed { 0.0 } else { 3.0 },
    }
}

fn mouth(state: &FollowerState) -> Mouth {
    if state.is_startled {
        Mouth::AlarmedO { radius: 2.5 }
    } else if state.is_hovering {
        Mouth::ExcitedO { radius: 4.0 }
    } else {
        Mouth::Relaxed
    }
}

#[inline]
pub fn idle_float_offset(now_ms: f64) -> f32 {
    let phase = (now_ms / FLOAT_PERIOD_MS) * std::f64::consts::TAU;
    (phase.sin() as f32) * FLOAT_AMPLITUDE_PX
}
