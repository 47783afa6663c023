//! Centralized balance and tuning constants for Goldreel game logic.
//!
//! These values define the reward math and gating rules for the slot
//! machine. Keeping them together ensures payouts can only be adjusted
//! via code changes reviewed in version control.

// Time units ---------------------------------------------------------------
pub(crate) const MS_PER_MINUTE: u64 = 60 * 1000;
pub(crate) const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

// Attempt gating -----------------------------------------------------------
pub(crate) const ATTEMPT_CEILING: u8 = 3;
pub(crate) const ATTEMPT_COOLDOWN_MS: u64 = 8 * MS_PER_HOUR;

// Rewards ------------------------------------------------------------------
pub(crate) const WELCOME_BONUS_POINTS: u64 = 500;
pub(crate) const JACKPOT_POINTS: u64 = 500;
pub(crate) const TRIPLE_PUMPKIN_POINTS: u64 = 100;
pub(crate) const TRIPLE_STAR_POINTS: u64 = 50;
pub(crate) const TRIPLE_CHERRY_POINTS: u64 = 40;
pub(crate) const TRIPLE_GIFT_POINTS: u64 = 30;
/// Pair rewards are re-rolled uniformly in `[0, PAIR_REWARD_BOUND)`.
pub(crate) const PAIR_REWARD_BOUND: u64 = 60;

// Reel pacing --------------------------------------------------------------
pub(crate) const REEL_COUNT: usize = 3;
pub(crate) const REVEAL_BASE_DELAY_MS: u32 = 1_000;
pub(crate) const REVEAL_STEP_DELAY_MS: u32 = 500;
