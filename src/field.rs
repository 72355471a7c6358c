// The particle field: owns the batch, the pointer and the random source,
// and advances everything one step per animation frame.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::{Surface, Viewport};
use rand::Rng;

pub struct ParticleField<R> {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// Creates an empty field. Nothing is drawn until the first `resize`.
    pub fn new(config: FieldConfig, rng: R) -> ParticleField<R> {
        ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: Pointer::far_away(),
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn move_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn release_pointer(&mut self) {
        self.pointer.reset();
    }

    /// Resizes the surface for the new viewport and throws the old batch away.
    /// The pixel ratio is capped before it reaches the surface.
    pub fn resize<S: Surface>(&mut self, surface: &mut S, viewport: Viewport) -> Result<(), S::Error> {
        let viewport = Viewport {
            pixel_ratio: self.config.cap_pixel_ratio(viewport.pixel_ratio),
            ..viewport
        };
        surface.resize(&viewport)?;
        self.reseed(viewport.width, viewport.height);
        Ok(())
    }

    /// Replaces the whole batch with fresh particles for a `width` by `height` area.
    pub fn reseed(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let count = self.config.particle_count(width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, width, height, &self.config);
            self.particles.push(p);
        }
    }

    /// Advances every particle once without drawing.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update(&self.pointer, self.width, self.height, &self.config);
        }
    }

    /// One animation frame: fade the previous frame, then move and draw each particle.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.width, self.height);
        surface.fill_rect(self.width, self.height, &self.config.backdrop);
        for particle in &mut self.particles {
            particle.update(&self.pointer, self.width, self.height, &self.config);
            surface.fill_glow(&particle.glow(&self.config))?;
        }
        Ok(())
    }
}
