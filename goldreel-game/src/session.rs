//! Persistent session state and its storage codec.
//!
//! The serialized field names match the record the original browser
//! build wrote to local storage, so an existing save keeps working.
//! Every field carries its own default: zero and `false` are legitimate
//! stored values, so a partially-missing record is repaired per field
//! rather than rejected wholesale.
use serde::{Deserialize, Serialize};

use crate::constants::ATTEMPT_CEILING;

fn default_attempts() -> u8 {
    ATTEMPT_CEILING
}

fn default_first_visit() -> bool {
    true
}

/// The sole persisted entity: score, attempts, last-spin time, and the
/// one-shot welcome flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Cumulative points. Only ever increases; there is no spend
    /// operation.
    #[serde(default)]
    pub score: u64,
    /// Spins left before the cooldown gate locks. Never exceeds the
    /// refill ceiling of 3.
    #[serde(default = "default_attempts")]
    pub attempts: u8,
    /// Epoch milliseconds of the most recent spin start. 0 means the
    /// player has never spun.
    #[serde(rename = "lastSpinTime", default)]
    pub last_spin_ms: u64,
    /// True exactly once, until the welcome bonus is acknowledged.
    #[serde(rename = "firstVisit", default = "default_first_visit")]
    pub first_visit: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            attempts: ATTEMPT_CEILING,
            last_spin_ms: 0,
            first_visit: true,
        }
    }
}

impl SessionState {
    /// Pin loaded values back into their documented ranges.
    pub fn clamp(&mut self) {
        self.attempts = self.attempts.min(ATTEMPT_CEILING);
    }
}
