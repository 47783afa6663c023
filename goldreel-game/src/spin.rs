//! Spin lifecycle: gating, reel draws, and the single settlement join
//! point.
use rand::Rng;
use thiserror::Error;

use crate::constants::{REEL_COUNT, REVEAL_BASE_DELAY_MS, REVEAL_STEP_DELAY_MS};
use crate::icons::Icon;
use crate::win::WinResult;

/// Why a spin request was turned away. Callers treat this as a silent
/// no-op; nothing about the session changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpinBlocked {
    #[error("a spin is already in progress")]
    Busy,
    #[error("no attempts remaining")]
    NoAttempts,
}

/// The three reel results of one spin, with advisory reveal pacing.
/// Ephemeral: consumed by win evaluation and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub reels: [Icon; REEL_COUNT],
    /// Staggered delays the adapter may use to land the reels one after
    /// another. Presentation pacing only; settlement does not depend on
    /// wall time.
    pub reveal_delays_ms: [u32; REEL_COUNT],
}

impl SpinOutcome {
    pub(crate) fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut reels = [Icon::Gift; REEL_COUNT];
        let mut reveal_delays_ms = [0u32; REEL_COUNT];
        for (index, reel) in reels.iter_mut().enumerate() {
            *reel = Icon::weighted(rng);
            reveal_delays_ms[index] = REVEAL_BASE_DELAY_MS
                + u32::try_from(index).unwrap_or(u32::MAX) * REVEAL_STEP_DELAY_MS;
        }
        Self {
            reels,
            reveal_delays_ms,
        }
    }
}

/// Tracks one outstanding spin between start and settlement.
///
/// The reveal counter is the join point: win evaluation runs exactly
/// once, after the third reveal, and stray reveal calls while idle are
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SpinProgress {
    outcome: Option<SpinOutcome>,
    revealed: usize,
}

impl SpinProgress {
    pub(crate) const fn is_spinning(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn begin(&mut self, outcome: SpinOutcome) {
        self.outcome = Some(outcome);
        self.revealed = 0;
    }

    /// Record one reel landing. Returns the finished triple once the
    /// last reveal arrives, clearing the busy flag in the same step.
    pub(crate) fn reveal_one(&mut self) -> Option<[Icon; REEL_COUNT]> {
        let outcome = self.outcome?;
        self.revealed += 1;
        if self.revealed < REEL_COUNT {
            return None;
        }
        self.outcome = None;
        Some(outcome.reels)
    }
}

/// A fully settled spin, handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResolution {
    pub win: WinResult,
    /// Jackpot-only notification: the adapter should surface the
    /// prize-fulfillment contact details. Fulfillment itself is out of
    /// scope for the engine.
    pub contact_prize_desk: bool,
}
