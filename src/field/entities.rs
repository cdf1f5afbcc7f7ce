use crate::ease::wrap;
use crate::input::Viewport;
use crate::theme::Rgba;
use glam::Vec2;

/// Large, slow, heavily blurred background light.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_radius: f32,
    /// Radius oscillation phase, radians.
    pub phase: f32,
    pub color: Rgba,
}

impl Blob {
    #[inline]
    pub fn radius(&self, amplitude: f32) -> f32 {
        self.base_radius + amplitude * self.phase.sin()
    }

    /// Drift, pulse, and bounce once the edge (position ± radius) leaves the
    /// viewport, turning back only if still heading outward.
    pub fn step(&mut self, viewport: Viewport, pulse_rate: f32, amplitude: f32) {
        self.position += self.velocity;
        self.phase = (self.phase + pulse_rate) % std::f32::consts::TAU;
        let r = self.radius(amplitude);

        if self.position.x - r < 0.0 && self.velocity.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        } else if self.position.x + r > viewport.width && self.velocity.x > 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - r < 0.0 && self.velocity.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        } else if self.position.y + r > viewport.height && self.velocity.y > 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Small drifting point pulled toward the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn step(&mut self, viewport: Viewport, pointer: Vec2, radius: f32, strength: f32) {
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, viewport.width);
        self.position.y = wrap(self.position.y, viewport.height);

        let to_pointer = pointer - self.position;
        let distance = to_pointer.length();
        if distance < radius && distance > f32::EPSILON {
            let pull = (radius - distance) / radius;
            self.position += to_pointer / distance * pull * strength;
        }
    }
}

/// Opacity of the line from a particle at `distance` to the pointer: 1 on top
/// of it, fading to 0 at `radius`.
#[inline]
pub fn connection_opacity(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}
