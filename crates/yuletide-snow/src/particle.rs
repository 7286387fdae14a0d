//! A single snowflake.

use std::ops::Range;

use rand::Rng;

use crate::field::Surface;

/// Distance past each edge a flake may travel before it wraps.
pub const MARGIN: f32 = 5.0;

/// Radius in surface pixels.
pub const RADIUS_RANGE: Range<f32> = 0.8..3.3;

/// Downward movement per frame.
pub const SPEED_RANGE: Range<f32> = 0.2..0.8;

/// Constant horizontal movement per frame.
pub const DRIFT_RANGE: Range<f32> = -0.2..0.2;

/// Fill alpha.
pub const OPACITY_RANGE: Range<f32> = 0.2..0.7;

/// Sway amplitude added on top of the drift.
const SWAY_AMPLITUDE: f32 = 0.3;

/// Sway frequency against the vertical position.
const SWAY_FREQUENCY: f32 = 0.01;

/// One simulated snowflake.
///
/// Only the position changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f32,
    y: f32,
    radius: f32,
    speed: f32,
    drift: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, radius: f32, speed: f32, drift: f32, opacity: f32) -> Self {
        Self {
            x,
            y,
            radius,
            speed,
            drift,
            opacity,
        }
    }

    /// Sample a fresh flake anywhere on `surface`.
    ///
    /// `surface` must have a positive area.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, surface: Surface) -> Self {
        Self {
            x: rng.gen_range(0.0..surface.width),
            y: rng.gen_range(0.0..surface.height),
            radius: rng.gen_range(RADIUS_RANGE),
            speed: rng.gen_range(SPEED_RANGE),
            drift: rng.gen_range(DRIFT_RANGE),
            opacity: rng.gen_range(OPACITY_RANGE),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn drift(&self) -> f32 {
        self.drift
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Advance one frame and wrap around the surface edges.
    ///
    /// Falling past the bottom re-enters at the top with a new random `x`.
    /// Leaving either side re-enters on the opposite side at the same `y`.
    pub(crate) fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: Surface) {
        self.y += self.speed;
        self.x += self.drift + (self.y * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE;

        if self.y > surface.height + MARGIN {
            self.y = -MARGIN;
            self.x = rng.gen_range(0.0..surface.width);
        }
        if self.x > surface.width + MARGIN {
            self.x = -MARGIN;
        }
        if self.x < -MARGIN {
            self.x = surface.width + MARGIN;
        }
    }
}
