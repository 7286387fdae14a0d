//! Fixed-rate frame scheduling for the terminal.
//!
//! Terminals have no refresh callback, so frames are ticked at a fixed
//! interval. Requests made before a tick all fire on that tick.

use std::time::{Duration, Instant};

use yuletide_snow::{FrameHandle, FrameScheduler};

/// Frame scheduler driven by the event loop.
#[derive(Debug)]
pub struct FrameClock {
    /// Time between ticks.
    interval: Duration,
    /// When the next tick is due.
    next_tick: Instant,
    /// Last handle id handed out.
    last_id: u64,
    /// Requests waiting for the next tick.
    pending: Vec<FrameHandle>,
}

impl FrameClock {
    /// Create a clock ticking `fps` times per second, starting at `now`.
    pub fn new(fps: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / fps.max(1);
        Self {
            interval,
            next_tick: now + interval,
            last_id: 0,
            pending: Vec::new(),
        }
    }

    /// How long the event loop may block waiting for input.
    pub fn timeout(&self, now: Instant) -> Duration {
        if self.pending.is_empty() {
            return self.interval;
        }
        self.next_tick.saturating_duration_since(now)
    }

    /// Fire the tick if it is due, returning every request it satisfies.
    ///
    /// A late tick does not try to catch up; the next one is scheduled a
    /// full interval after `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<FrameHandle> {
        if now < self.next_tick || self.pending.is_empty() {
            return Vec::new();
        }

        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        std::mem::take(&mut self.pending)
    }

    #[cfg(test)]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.last_id += 1;
        let handle = FrameHandle::new(self.last_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&pending| pending != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        let now = Instant::now();
        assert_eq!(FrameClock::new(50, now).timeout(now), Duration::from_millis(20));
        assert_eq!(FrameClock::new(0, now).timeout(now), Duration::from_secs(1));
    }

    #[test]
    fn test_requests_fire_on_next_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50, start);
        let a = clock.request_frame();
        let b = clock.request_frame();
        assert_ne!(a, b);

        assert!(clock.take_due(start + Duration::from_millis(10)).is_empty());
        assert_eq!(clock.take_due(start + Duration::from_millis(20)), vec![a, b]);
        assert!(clock.pending().is_empty());
    }

    #[test]
    fn test_cancelled_request_never_fires() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50, start);
        let a = clock.request_frame();
        let b = clock.request_frame();
        clock.cancel_frame(a);
        clock.cancel_frame(a);
        clock.cancel_frame(FrameHandle::new(99));

        assert_eq!(clock.take_due(start + Duration::from_millis(20)), vec![b]);
    }

    #[test]
    fn test_timeout_tracks_next_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50, start);
        assert_eq!(clock.timeout(start), Duration::from_millis(20));

        clock.request_frame();
        assert_eq!(
            clock.timeout(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert_eq!(clock.timeout(start + Duration::from_millis(30)), Duration::ZERO);
    }

    #[test]
    fn test_late_tick_does_not_burst() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50, start);
        clock.request_frame();
        let late = start + Duration::from_millis(200);
        assert_eq!(clock.take_due(late).len(), 1);

        clock.request_frame();
        assert!(clock.take_due(late + Duration::from_millis(10)).is_empty());
        assert_eq!(clock.take_due(late + Duration::from_millis(20)).len(), 1);
    }
}
