use super::config::{Boundary, FieldConfig, VelocityInit};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame.
    pub vel: Vec2,
    /// Disc radius in pixels.
    pub size: f32,
    /// Index into the config palette.
    pub color: usize,
}

impl Particle {
    /// Uniformly placed particle inside `[0, bounds.x] x [0, bounds.y]`.
    ///
    /// `config` must have passed validation (non-empty palette).
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &FieldConfig) -> Self {
        let pos = Vec2::new(rng.gen_range(0.0..=bounds.x), rng.gen_range(0.0..=bounds.y));
        let vel = match config.velocity {
            VelocityInit::Uniform { max_speed } => {
                let half = max_speed * 0.5;
                Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half))
            }
            VelocityInit::Fixed { speed } => Vec2::from_angle(rng.gen_range(0.0..TAU)) * speed,
        };
        let size = config.radius_min + rng.gen::<f32>() * config.radius_span;
        let color = rng.gen_range(0..config.palette.len().max(1));
        Self {
            pos,
            vel,
            size,
            color,
        }
    }

    /// Advance one frame and keep the particle inside `bounds`.
    pub fn step(&mut self, bounds: Vec2, boundary: Boundary) {
        self.pos += self.vel;
        match boundary {
            Boundary::Bounce => {
                bounce_axis(&mut self.pos.x, &mut self.vel.x, bounds.x);
                bounce_axis(&mut self.pos.y, &mut self.vel.y, bounds.y);
            }
            Boundary::Wrap => {
                wrap_axis(&mut self.pos.x, bounds.x);
                wrap_axis(&mut self.pos.y, bounds.y);
            }
        }
    }
}

#[inline]
fn bounce_axis(p: &mut f32, v: &mut f32, max: f32) {
    if *p < 0.0 {
        *p = 0.0;
        *v = v.abs();
    } else if *p > max {
        *p = max;
        *v = -v.abs();
    }
}

#[inline]
fn wrap_axis(p: &mut f32, max: f32) {
    if *p < 0.0 {
        *p = max;
    } else if *p > max {
        *p = 0.0;
    }
}
