//! Time-driven reel spin animation.
//!
//! The round is already resolved when an animation starts; this only decides
//! which face each reel shows at a given millisecond. Reels cycle through the
//! symbol set and lock onto their final face left to right.

use crate::constants::{REEL_CYCLE_MS, REEL_SETTLE_MS, REEL_STAGGER_MS};
use crate::machine::{SpinOutcome, Symbol};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current time in milliseconds since UNIX epoch.
pub fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// A spin in progress, revealing `outcome` reel by reel.
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    outcome: SpinOutcome,
    started_ms: u128,
}

impl SpinAnimation {
    pub fn new(outcome: SpinOutcome, now_ms: u128) -> Self {
        Self { outcome, started_ms: now_ms }
    }

    /// Milliseconds after the start at which a reel locks in.
    fn settle_deadline(reel: usize) -> u128 {
        REEL_SETTLE_MS + reel as u128 * REEL_STAGGER_MS
    }

    pub fn is_reel_settled(&self, reel: usize, now_ms: u128) -> bool {
        now_ms.saturating_sub(self.started_ms) >= Self::settle_deadline(reel)
    }

    /// True once the last reel has locked in.
    pub fn is_finished(&self, now_ms: u128) -> bool {
        self.is_reel_settled(2, now_ms)
    }

    /// The glyph a reel shows at `now_ms`: a cycling symbol while spinning,
    /// the final face once settled.
    pub fn face(&self, reel: usize, now_ms: u128) -> &'static str {
        if self.is_reel_settled(reel, now_ms) {
            return self.outcome.glyphs()[reel];
        }
        let elapsed = now_ms.saturating_sub(self.started_ms);
        // Offset per reel so the columns don't flip in unison
        let index = (elapsed / REEL_CYCLE_MS) as usize + reel * 2;
        Symbol::ALL[index % Symbol::ALL.len()].glyph()
    }

    pub fn faces(&self, now_ms: u128) -> [&'static str; 3] {
        [
            self.face(0, now_ms),
            self.face(1, now_ms),
            self.face(2, now_ms),
        ]
    }

    /// Final faces regardless of clock, for callers finishing early.
    pub fn final_faces(&self) -> [&'static str; 3] {
        self.outcome.glyphs()
    }
}
