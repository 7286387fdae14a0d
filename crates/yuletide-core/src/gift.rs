//! Gift box stage machine.

/// How long the locked box shakes after a press.
pub const SHAKE_DURATION_MS: u64 = 600;

/// How long the lid takes to come off before the card shows.
pub const UNWRAP_DURATION_MS: u64 = 800;

/// Horizontal offsets (in cells) the box walks through while shaking.
pub const SHAKE_OFFSETS: [i16; 8] = [0, -2, 2, -2, 2, -1, 1, 0];

/// Where the gift box is in its reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GiftStage {
    #[default]
    Wrapped,
    Unwrapping,
    Revealed,
}

/// Gift box state driven by presses and elapsed time.
#[derive(Debug, Clone, Default)]
pub struct GiftState {
    stage: GiftStage,
    /// When the current shake began.
    shake_started_ms: Option<u64>,
    /// When unwrapping began.
    unwrap_started_ms: Option<u64>,
}

impl GiftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> GiftStage {
        self.stage
    }

    /// Handle a press on the box.
    ///
    /// A locked box only shakes. An unlocked, wrapped box starts unwrapping.
    /// Presses in any other stage are ignored.
    pub fn press(&mut self, elapsed_ms: u64, unlocked: bool) {
        if !unlocked {
            self.shake_started_ms = Some(elapsed_ms);
            return;
        }
        if self.stage == GiftStage::Wrapped {
            self.stage = GiftStage::Unwrapping;
            self.unwrap_started_ms = Some(elapsed_ms);
        }
    }

    /// Advance timers.
    pub fn update(&mut self, elapsed_ms: u64) {
        if let Some(start) = self.shake_started_ms
            && elapsed_ms.saturating_sub(start) >= SHAKE_DURATION_MS
        {
            self.shake_started_ms = None;
        }

        if self.stage == GiftStage::Unwrapping
            && let Some(start) = self.unwrap_started_ms
            && elapsed_ms.saturating_sub(start) >= UNWRAP_DURATION_MS
        {
            self.stage = GiftStage::Revealed;
            self.unwrap_started_ms = None;
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_started_ms.is_some()
    }

    /// Current horizontal shake offset in cells.
    pub fn shake_offset(&self, elapsed_ms: u64) -> i16 {
        let Some(start) = self.shake_started_ms else {
            return 0;
        };
        let progress = elapsed_ms.saturating_sub(start).min(SHAKE_DURATION_MS);
        let last = SHAKE_OFFSETS.len() - 1;
        let idx = (progress as usize * last) / SHAKE_DURATION_MS as usize;
        SHAKE_OFFSETS[idx.min(last)]
    }

    /// Unwrap progress in 0.0..=1.0 (0 before unwrapping, 1 once revealed).
    pub fn unwrap_progress(&self, elapsed_ms: u64) -> f32 {
        match (self.stage, self.unwrap_started_ms) {
            (GiftStage::Wrapped, _) => 0.0,
            (GiftStage::Revealed, _) => 1.0,
            (GiftStage::Unwrapping, Some(start)) => {
                (elapsed_ms.saturating_sub(start) as f32 / UNWRAP_DURATION_MS as f32).min(1.0)
            }
            (GiftStage::Unwrapping, None) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_press_only_shakes() {
        let mut gift = GiftState::new();
        gift.press(1_000, false);
        assert!(gift.is_shaking());
        assert_eq!(gift.stage(), GiftStage::Wrapped);

        gift.update(1_000 + SHAKE_DURATION_MS - 1);
        assert!(gift.is_shaking());
        gift.update(1_000 + SHAKE_DURATION_MS);
        assert!(!gift.is_shaking());
        assert_eq!(gift.shake_offset(2_000), 0);
    }

    #[test]
    fn test_unlocked_press_reveals_after_delay() {
        let mut gift = GiftState::new();
        gift.press(500, true);
        assert_eq!(gift.stage(), GiftStage::Unwrapping);

        gift.update(500 + UNWRAP_DURATION_MS / 2);
        assert_eq!(gift.stage(), GiftStage::Unwrapping);
        assert!((gift.unwrap_progress(500 + UNWRAP_DURATION_MS / 2) - 0.5).abs() < 1e-6);

        gift.update(500 + UNWRAP_DURATION_MS);
        assert_eq!(gift.stage(), GiftStage::Revealed);
        assert_eq!(gift.unwrap_progress(10_000), 1.0);
    }

    #[test]
    fn test_presses_ignored_after_wrapped() {
        let mut gift = GiftState::new();
        gift.press(0, true);
        gift.press(100, true);
        gift.update(UNWRAP_DURATION_MS);
        // Second press did not restart the timer.
        assert_eq!(gift.stage(), GiftStage::Revealed);

        gift.press(5_000, true);
        assert_eq!(gift.stage(), GiftStage::Revealed);
    }

    #[test]
    fn test_shake_offsets_follow_pattern() {
        let mut gift = GiftState::new();
        gift.press(0, false);
        assert_eq!(gift.shake_offset(0), SHAKE_OFFSETS[0]);
        assert_eq!(gift.shake_offset(SHAKE_DURATION_MS), SHAKE_OFFSETS[7]);
        assert_eq!(gift.shake_offset(100), SHAKE_OFFSETS[1]);
        assert_eq!(gift.shake_offset(300), SHAKE_OFFSETS[3]);
    }
}
