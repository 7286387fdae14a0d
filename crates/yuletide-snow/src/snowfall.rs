//! The mountable snow effect.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::canvas::{Canvas, CellCanvas, CellMetrics};
use crate::field::{ParticleField, Surface};

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Host primitive that calls back once on the next frame.
pub trait FrameScheduler {
    /// Ask for one callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a pending request. Unknown or fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// What the host must provide before snow can be drawn at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingContext {
    metrics: CellMetrics,
}

impl DrawingContext {
    /// Acquire a context for a terminal identified by `term`.
    ///
    /// Dumb terminals cannot position or color glyphs, so there is no context.
    pub fn acquire(metrics: CellMetrics, term: Option<&str>) -> Option<Self> {
        if term.is_some_and(|t| t == "dumb") {
            return None;
        }
        Some(Self { metrics })
    }
}

/// A running snow effect.
///
/// Owns its particles, random source and pending frame. Dropping the value
/// through [`Snowfall::unmount`] is the only way to stop it.
#[derive(Debug)]
pub struct Snowfall {
    field: ParticleField,
    rng: SmallRng,
    context: DrawingContext,
    /// Cell area the field was last generated for.
    columns: u16,
    rows: u16,
    pending: Option<FrameHandle>,
}

impl Snowfall {
    /// Mount the effect on a `columns` x `rows` viewport and request the first
    /// frame. Without a drawing context nothing is mounted.
    pub fn mount<S: FrameScheduler + ?Sized>(
        context: Option<DrawingContext>,
        columns: u16,
        rows: u16,
        seed: u64,
        scheduler: &mut S,
    ) -> Option<Self> {
        let Some(context) = context else {
            log::info!("no drawing context, snow disabled");
            return None;
        };

        let mut rng = SmallRng::seed_from_u64(seed);
        let surface = Surface::from_cells(columns, rows, context.metrics);
        let field = ParticleField::new(surface, &mut rng);

        Some(Self {
            field,
            rng,
            context,
            columns,
            rows,
            pending: Some(scheduler.request_frame()),
        })
    }

    /// Handle a viewport resize: the whole field is regenerated.
    pub fn on_resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        let surface = Surface::from_cells(columns, rows, self.context.metrics);
        self.field.regenerate(surface, &mut self.rng);
    }

    /// Frame callback: draw, advance, then request the next frame.
    pub fn on_frame<C: Canvas + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        canvas: &mut C,
        scheduler: &mut S,
    ) {
        self.pending = None;
        self.field.draw(canvas);
        self.field.step(&mut self.rng);
        self.pending = Some(scheduler.request_frame());
    }

    /// Draw the current state without advancing it.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.field.draw(canvas);
    }

    /// Render into a ratatui buffer.
    ///
    /// Regenerates first if `area` no longer matches the field. Advances only
    /// when `due` holds this effect's pending frame.
    pub fn render<S: FrameScheduler + ?Sized>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        backdrop: (u8, u8, u8),
        due: &[FrameHandle],
        scheduler: &mut S,
    ) {
        if area.width != self.columns || area.height != self.rows {
            self.on_resize(area.width, area.height);
        }

        let mut canvas = CellCanvas::new(buf, area, self.context.metrics, backdrop);
        match self.pending {
            Some(handle) if due.contains(&handle) => self.on_frame(&mut canvas, scheduler),
            _ => self.paint(&mut canvas),
        }
    }

    /// Stop the effect: cancel the pending frame. Consumes the effect so no
    /// further drawing or stepping can happen.
    pub fn unmount<S: FrameScheduler + ?Sized>(mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        log::debug!("snow unmounted");
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BACKDROP, Rgba};
    use crate::field::particle_count;

    #[derive(Default)]
    struct RecordingScheduler {
        next_id: u64,
        requested: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl FrameScheduler for RecordingScheduler {
        fn request_frame(&mut self) -> FrameHandle {
            self.next_id += 1;
            let handle = FrameHandle::new(self.next_id);
            self.requested.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
        }
    }

    #[derive(Default)]
    struct CountingCanvas {
        clears: usize,
        fills: usize,
    }

    impl Canvas for CountingCanvas {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Rgba) {
            self.fills += 1;
        }
    }

    fn context() -> Option<DrawingContext> {
        DrawingContext::acquire(CellMetrics::default(), Some("xterm-256color"))
    }

    #[test]
    fn test_mount_without_context_is_noop() {
        let mut scheduler = RecordingScheduler::default();
        let context = DrawingContext::acquire(CellMetrics::default(), Some("dumb"));
        let snow = Snowfall::mount(context, 80, 24, 1, &mut scheduler);
        assert!(snow.is_none());
        assert!(scheduler.requested.is_empty());
    }

    #[test]
    fn test_mount_generates_field_and_requests_frame() {
        let mut scheduler = RecordingScheduler::default();
        let snow = Snowfall::mount(context(), 80, 24, 1, &mut scheduler).unwrap();
        assert_eq!(snow.field().len(), 30);
        assert_eq!(scheduler.requested.len(), 1);
        assert_eq!(snow.pending_frame(), Some(scheduler.requested[0]));
    }

    #[test]
    fn test_frame_draws_steps_and_reschedules() {
        let mut scheduler = RecordingScheduler::default();
        let mut snow = Snowfall::mount(context(), 80, 24, 3, &mut scheduler).unwrap();
        let before: Vec<f32> = snow.field().particles().iter().map(|p| p.y()).collect();

        let mut canvas = CountingCanvas::default();
        snow.on_frame(&mut canvas, &mut scheduler);

        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.fills, 30);
        assert_eq!(scheduler.requested.len(), 2);
        assert_eq!(snow.pending_frame(), Some(scheduler.requested[1]));
        let after: Vec<f32> = snow.field().particles().iter().map(|p| p.y()).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_resize_regenerates_for_new_dimensions() {
        let mut scheduler = RecordingScheduler::default();
        let mut snow = Snowfall::mount(context(), 80, 24, 5, &mut scheduler).unwrap();
        let old = snow.field().particles().to_vec();

        snow.on_resize(200, 60);
        let surface = Surface::new(1600.0, 960.0);
        assert_eq!(snow.field().surface(), surface);
        assert_eq!(snow.field().len(), particle_count(surface));
        for p in snow.field().particles() {
            assert!(!old.contains(p));
        }
    }

    #[test]
    fn test_zero_viewport_keeps_running_empty() {
        let mut scheduler = RecordingScheduler::default();
        let mut snow = Snowfall::mount(context(), 0, 0, 5, &mut scheduler).unwrap();
        assert!(snow.field().is_empty());

        let mut canvas = CountingCanvas::default();
        snow.on_frame(&mut canvas, &mut scheduler);
        assert_eq!(canvas.fills, 0);
        assert!(snow.pending_frame().is_some());
    }

    #[test]
    fn test_unmount_cancels_pending_frame_once() {
        let mut scheduler = RecordingScheduler::default();
        let mut snow = Snowfall::mount(context(), 80, 24, 7, &mut scheduler).unwrap();
        let mut canvas = CountingCanvas::default();
        snow.on_frame(&mut canvas, &mut scheduler);
        let pending = snow.pending_frame().unwrap();

        snow.unmount(&mut scheduler);
        assert_eq!(scheduler.cancelled, vec![pending]);
        // No further frames were requested by teardown.
        assert_eq!(scheduler.requested.len(), 2);
    }

    #[test]
    fn test_render_steps_only_when_due() {
        let mut scheduler = RecordingScheduler::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut snow = Snowfall::mount(context(), 80, 24, 9, &mut scheduler).unwrap();
        let first = snow.pending_frame().unwrap();
        let positions = |s: &Snowfall| -> Vec<(f32, f32)> {
            s.field().particles().iter().map(|p| (p.x(), p.y())).collect()
        };

        let start = positions(&snow);
        snow.render(area, &mut buf, BACKDROP, &[], &mut scheduler);
        assert_eq!(positions(&snow), start);
        assert_eq!(snow.pending_frame(), Some(first));

        snow.render(area, &mut buf, BACKDROP, &[first], &mut scheduler);
        assert_ne!(positions(&snow), start);
        assert_ne!(snow.pending_frame(), Some(first));
    }

    #[test]
    fn test_render_regenerates_on_area_change() {
        let mut scheduler = RecordingScheduler::default();
        let mut snow = Snowfall::mount(context(), 80, 24, 9, &mut scheduler).unwrap();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        snow.render(area, &mut buf, BACKDROP, &[], &mut scheduler);
        assert_eq!(snow.field().surface(), Surface::new(320.0, 160.0));
        assert_eq!(snow.field().len(), 6);
    }
}
