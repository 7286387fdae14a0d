//! The particle field and its drawing surface.

use rand::Rng;

use crate::canvas::{Canvas, CellMetrics};
use crate::color::SNOW_WHITE;
use crate::particle::Particle;

/// Surface area (in square pixels) per particle.
pub const PX_PER_PARTICLE: f64 = 8000.0;

/// Upper bound on the number of particles, whatever the surface size.
pub const MAX_PARTICLES: usize = 120;

/// Drawing surface dimensions in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface covering `columns` x `rows` terminal cells.
    pub fn from_cells(columns: u16, rows: u16, metrics: CellMetrics) -> Self {
        Self {
            width: columns as f32 * metrics.width_px,
            height: rows as f32 * metrics.height_px,
        }
    }
}

/// Number of particles for a surface: one per [`PX_PER_PARTICLE`], capped at
/// [`MAX_PARTICLES`]. Empty or negative surfaces get none.
pub fn particle_count(surface: Surface) -> usize {
    if surface.width <= 0.0 || surface.height <= 0.0 {
        return 0;
    }
    let count = (surface.width as f64 * surface.height as f64 / PX_PER_PARTICLE).floor();
    (count as usize).min(MAX_PARTICLES)
}

/// All particles currently falling across one surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    surface: Surface,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a freshly sampled field for `surface`.
    pub fn new<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> Self {
        let mut field = Self {
            surface,
            particles: Vec::new(),
        };
        field.regenerate(surface, rng);
        field
    }

    /// Field with explicit particles.
    pub fn from_particles(surface: Surface, particles: Vec<Particle>) -> Self {
        Self {
            surface,
            particles,
        }
    }

    /// Replace the surface and resample every particle. Nothing from the
    /// previous set is kept.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, surface: Surface, rng: &mut R) {
        let count = particle_count(surface);
        self.surface = surface;
        self.particles = (0..count).map(|_| Particle::sample(rng, surface)).collect();
        log::debug!(
            "snow field regenerated: {count} particles on {}x{} surface",
            surface.width,
            surface.height
        );
    }

    /// Advance every particle by one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let surface = self.surface;
        for particle in &mut self.particles {
            particle.advance(rng, surface);
        }
    }

    /// Clear the canvas and draw every particle at its current position.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();
        for particle in &self.particles {
            canvas.fill_circle(
                particle.x(),
                particle.y(),
                particle.radius(),
                SNOW_WHITE.with_alpha(particle.opacity()),
            );
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
