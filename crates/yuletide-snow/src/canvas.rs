//! Drawing seam between the simulation and the host.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

use crate::chars::flake_char;
use crate::color::{Rgba, blend};

/// A 2D surface flakes are painted on.
pub trait Canvas {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Paint a filled circle centered at (`x`, `y`) in surface pixels.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Virtual pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f32,
    pub height_px: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8.0,
            height_px: 16.0,
        }
    }
}

/// [`Canvas`] over a region of a ratatui buffer.
///
/// Each flake lands in the cell containing its center, drawn as a glyph
/// sized by radius and blended over the backdrop by alpha.
pub struct CellCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    metrics: CellMetrics,
    backdrop: (u8, u8, u8),
}

impl<'a> CellCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, metrics: CellMetrics, backdrop: (u8, u8, u8)) -> Self {
        Self {
            buf,
            area,
            metrics,
            backdrop,
        }
    }

    /// Cell containing the surface point, if it is inside the area.
    fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let column = (x / self.metrics.width_px) as u32;
        let row = (y / self.metrics.height_px) as u32;
        if column >= self.area.width as u32 || row >= self.area.height as u32 {
            return None;
        }
        Some(Position::new(
            self.area.x + column as u16,
            self.area.y + row as u16,
        ))
    }
}

impl Canvas for CellCanvas<'_> {
    fn clear(&mut self) {
        let (r, g, b) = self.backdrop;
        for position in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(position) {
                cell.reset();
                cell.set_bg(Color::Rgb(r, g, b));
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let Some(position) = self.cell_at(x, y) else {
            return;
        };
        let fg = blend(color, self.backdrop);
        if let Some(cell) = self.buf.cell_mut(position) {
            cell.set_char(flake_char(radius)).set_fg(fg);
        }
    }
}
