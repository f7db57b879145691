use super::config::{ConfigError, FieldConfig};
use super::links::{particle_links, pointer_links};
use super::particle::Particle;
use super::pointer::{next_pointer, PointerKind, PointerSignal};
use super::surface::{Rgb, Surface};
use super::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// A batch of particles simulated over one viewport.
///
/// Owns its pointer state and random source, so separate instances never share
/// anything.
pub struct ParticleField<R> {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    rng: R,
    generation: u64,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: FieldConfig, viewport: Viewport, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            config,
            viewport,
            particles: Vec::new(),
            pointer: None,
            rng,
            generation: 0,
        };
        field.reseed();
        Ok(field)
    }

    /// Replace the whole batch for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.generation += 1;
        self.reseed();
    }

    fn reseed(&mut self) {
        let count = self.config.particle_count(self.viewport.width);
        let bounds = self.viewport.size();
        let config = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(&mut *rng, bounds, config))
            .collect();
        log::debug!(
            "[field] generation {} seeded {} particles over {:.0}x{:.0}",
            self.generation,
            count,
            bounds.x,
            bounds.y
        );
    }

    pub fn step(&mut self) {
        let bounds = self.viewport.size();
        let boundary = self.config.boundary;
        for p in &mut self.particles {
            p.step(bounds, boundary);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.viewport.size());
        for p in &self.particles {
            surface.fill_disc(p.pos, p.size, self.color_of(p));
        }
        let Some(conn) = &self.config.connections else {
            return;
        };
        let width = self.config.line_width;
        for link in particle_links(&self.particles, &conn.between) {
            surface.stroke_line(link.from, link.to, conn.between.color, link.alpha, width);
        }
        for link in pointer_links(&self.particles, self.pointer, &conn.pointer) {
            surface.stroke_line(link.from, link.to, conn.pointer.color, link.alpha, width);
        }
    }

    /// One frame: step then draw. Does nothing while there is no surface.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        self.step();
        self.draw(surface);
        true
    }

    #[inline]
    fn color_of(&self, p: &Particle) -> Rgb {
        self.config.palette[p.color % self.config.palette.len()]
    }
}

impl<R> ParticleField<R> {
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Feed one pointer event into the presence state.
    pub fn pointer_input(&mut self, kind: PointerKind, signal: PointerSignal) {
        self.pointer = next_pointer(self.pointer, kind, signal);
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of resizes since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// In-place access to the current batch; the count stays fixed.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
