//! Ambient particle field: blurred background blobs plus a swarm of small
//! particles drawn toward the pointer.
//!
//! Entity counts are fixed when the field is built. Resizing only moves the
//! bounds, so density drifts if the viewport changes after mount; a theme
//! change rebuilds the whole field with the same counts.

pub mod entities;
pub mod surface;

pub use entities::{connection_opacity, Blob, Particle};
pub use surface::{DrawOp, RecordingSurface, Surface};

use crate::constants::*;
use crate::input::{PointerSample, Viewport};
use crate::theme::{field_palette, BlendMode, FieldPalette, Theme};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub blob_count: usize,
    pub area_per_particle: f32,
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub particle_max_size: f32,
    pub particle_max_speed: f32,
    pub blob_min_radius: f32,
    pub blob_radius_span: f32,
    pub blob_max_speed: f32,
    pub blob_pulse_amplitude: f32,
    pub blob_pulse_rate: f32,
    pub blob_blur_px: f32,
    pub line_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blob_count: BLOB_COUNT,
            area_per_particle: PARTICLE_AREA_PER_PARTICLE,
            attraction_radius: ATTRACTION_RADIUS,
            attraction_strength: ATTRACTION_STRENGTH,
            particle_max_size: PARTICLE_MAX_SIZE,
            particle_max_speed: PARTICLE_MAX_SPEED,
            blob_min_radius: BLOB_MIN_RADIUS,
            blob_radius_span: BLOB_RADIUS_SPAN,
            blob_max_speed: BLOB_MAX_SPEED,
            blob_pulse_amplitude: BLOB_PULSE_AMPLITUDE,
            blob_pulse_rate: BLOB_PULSE_RATE,
            blob_blur_px: BLOB_BLUR_PX,
            line_width: CONNECTION_LINE_WIDTH,
        }
    }
}

impl FieldConfig {
    /// `floor(area / area_per_particle)`.
    pub fn particle_count(&self, viewport: Viewport) -> usize {
        if self.area_per_particle <= 0.0 {
            return 0;
        }
        (viewport.area() / self.area_per_particle).floor() as usize
    }
}

pub struct ParticleField {
    cfg: FieldConfig,
    theme: Theme,
    palette: FieldPalette,
    viewport: Viewport,
    pointer: Vec2,
    pub blobs: Vec<Blob>,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Build a field for `viewport`, sizing the particle swarm from its area.
    pub fn new(cfg: FieldConfig, theme: Theme, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let particle_count = cfg.particle_count(viewport);
        let blob_count = cfg.blob_count;
        Self::with_counts(cfg, theme, viewport, blob_count, particle_count, rng)
    }

    fn with_counts(
        cfg: FieldConfig,
        theme: Theme,
        viewport: Viewport,
        blob_count: usize,
        particle_count: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let palette = field_palette(theme);
        let blobs = (0..blob_count)
            .map(|_| spawn_blob(&cfg, &palette, viewport, rng))
            .collect();
        let particles = (0..particle_count)
            .map(|_| spawn_particle(&cfg, &palette, viewport, rng))
            .collect();
        Self {
            cfg,
            theme,
            palette,
            viewport,
            pointer: Vec2::new(POINTER_IDLE_X, POINTER_IDLE_Y),
            blobs,
            particles,
        }
    }

    /// Fresh entities and colors for `theme`, keeping this field's blob and
    /// particle counts and current bounds.
    pub fn reinitialize(&self, theme: Theme, rng: &mut impl Rng) -> Self {
        Self::with_counts(
            self.cfg.clone(),
            theme,
            self.viewport,
            self.blobs.len(),
            self.particles.len(),
            rng,
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, sample: PointerSample) {
        self.pointer = sample.position();
    }

    /// Update bounds only; counts and positions are left alone.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every blob and particle by one frame.
    pub fn step(&mut self) {
        let cfg = &self.cfg;
        for blob in &mut self.blobs {
            blob.step(self.viewport, cfg.blob_pulse_rate, cfg.blob_pulse_amplitude);
        }
        for p in &mut self.particles {
            p.step(
                self.viewport,
                self.pointer,
                cfg.attraction_radius,
                cfg.attraction_strength,
            );
        }
    }

    /// Particles close enough to the pointer to be linked, with line opacity.
    pub fn connections(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let radius = self.cfg.attraction_radius;
        self.particles.iter().filter_map(move |p| {
            let d = p.position.distance(self.pointer);
            (d < radius).then(|| (p.position, connection_opacity(d, radius)))
        })
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.clear(self.viewport);

        surface.set_blur(self.cfg.blob_blur_px);
        surface.set_blend(self.palette.blob_blend);
        for blob in &self.blobs {
            surface.fill_circle(
                blob.position,
                blob.radius(self.cfg.blob_pulse_amplitude).max(0.0),
                blob.color,
            );
        }
        surface.set_blend(BlendMode::Normal);
        surface.set_blur(0.0);

        for p in &self.particles {
            surface.fill_circle(p.position, p.size, p.color);
        }

        for (from, opacity) in self.connections() {
            surface.stroke_line(
                from,
                self.pointer,
                self.cfg.line_width,
                self.palette.connection.with_alpha(opacity),
            );
        }
    }

    /// Step then draw: one display refresh.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        self.step();
        self.draw(surface);
    }
}

fn symmetric(rng: &mut impl Rng, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-max..max)
}

fn spawn_blob(
    cfg: &FieldConfig,
    palette: &FieldPalette,
    viewport: Viewport,
    rng: &mut impl Rng,
) -> Blob {
    Blob {
        position: Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        ),
        velocity: Vec2::new(
            symmetric(rng, cfg.blob_max_speed),
            symmetric(rng, cfg.blob_max_speed),
        ),
        base_radius: cfg.blob_min_radius + rng.gen::<f32>() * cfg.blob_radius_span,
        phase: rng.gen::<f32>() * std::f32::consts::TAU,
        color: palette.blobs[rng.gen_range(0..palette.blobs.len())],
    }
}

fn spawn_particle(
    cfg: &FieldConfig,
    palette: &FieldPalette,
    viewport: Viewport,
    rng: &mut impl Rng,
) -> Particle {
    Particle {
        position: Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        ),
        velocity: Vec2::new(
            symmetric(rng, cfg.particle_max_speed),
            symmetric(rng, cfg.particle_max_speed),
        ),
        size: rng.gen::<f32>() * cfg.particle_max_size,
        color: palette.particles[rng.gen_range(0..palette.particles.len())],
    }
}
