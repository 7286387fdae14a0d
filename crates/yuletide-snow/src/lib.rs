//! Snow particle field for the yuletide greeting card.
//!
//! The field is simulated in a virtual pixel space (the drawing surface) and
//! drawn through the [`Canvas`] seam. [`Snowfall`] ties the field to a host:
//! it is mounted once, advanced by frame callbacks requested from a
//! [`FrameScheduler`], regenerated on resize and cancelled on unmount.
//! [`CellCanvas`] renders the field into a ratatui buffer.

mod canvas;
mod chars;
mod color;
mod field;
mod particle;
mod snowfall;

pub use canvas::{Canvas, CellCanvas, CellMetrics};
pub use color::{BACKDROP, Rgba, SNOW_WHITE, blend};
pub use field::{MAX_PARTICLES, PX_PER_PARTICLE, ParticleField, Surface, particle_count};
pub use particle::{DRIFT_RANGE, MARGIN, OPACITY_RANGE, Particle, RADIUS_RANGE, SPEED_RANGE};
pub use snowfall::{DrawingContext, FrameHandle, FrameScheduler, Snowfall};
