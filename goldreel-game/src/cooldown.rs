//! Attempt refill gate.
//!
//! The gate is a pure function of `(now, state)` and is re-evaluated on
//! every query. There is no background timer; the refill happens the
//! next time anyone looks.
use crate::constants::{ATTEMPT_CEILING, ATTEMPT_COOLDOWN_MS, MS_PER_HOUR, MS_PER_MINUTE};
use crate::session::SessionState;

/// Whole hours and minutes until the attempt refill, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownRemaining {
    pub hours: u64,
    pub minutes: u64,
}

/// Current answer to "may the player spin?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    Playable,
    Locked(CooldownRemaining),
}

impl GateStatus {
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Playable)
    }
}

const fn refill_due(state: &SessionState, now_ms: u64) -> bool {
    // last_spin_ms == 0 means the player has never spun, so there is no
    // cooldown window to measure from.
    state.attempts == 0
        && state.last_spin_ms > 0
        && now_ms.saturating_sub(state.last_spin_ms) >= ATTEMPT_COOLDOWN_MS
}

/// Reset attempts to the ceiling when the cooldown has fully elapsed.
/// Returns whether the refill fired so callers know to persist.
pub fn refill_if_due(state: &mut SessionState, now_ms: u64) -> bool {
    if refill_due(state, now_ms) {
        state.attempts = ATTEMPT_CEILING;
        return true;
    }
    false
}

/// Report the gate state without mutating the session.
#[must_use]
pub fn gate_status(state: &SessionState, now_ms: u64) -> GateStatus {
    if state.attempts > 0 || refill_due(state, now_ms) {
        return GateStatus::Playable;
    }
    let elapsed = now_ms.saturating_sub(state.last_spin_ms);
    let left = ATTEMPT_COOLDOWN_MS.saturating_sub(elapsed);
    GateStatus::Locked(CooldownRemaining {
        hours: left / MS_PER_HOUR,
        minutes: (left % MS_PER_HOUR) / MS_PER_MINUTE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    fn locked_state(last_spin_ms: u64) -> SessionState {
        SessionState {
            attempts: 0,
            last_spin_ms,
            ..SessionState::default()
        }
    }

    #[test]
    fn playable_while_attempts_remain() {
        let state = SessionState::default();
        assert!(gate_status(&state, NOW).is_playable());
    }

    #[test]
    fn locked_one_millisecond_short_of_cooldown() {
        let state = locked_state(NOW - ATTEMPT_COOLDOWN_MS + 1);
        match gate_status(&state, NOW) {
            GateStatus::Locked(remaining) => {
                assert_eq!(remaining.hours, 0);
                assert_eq!(remaining.minutes, 0);
            }
            GateStatus::Playable => panic!("gate opened early"),
        }
    }

    #[test]
    fn playable_exactly_at_cooldown_boundary() {
        let mut state = locked_state(NOW - ATTEMPT_COOLDOWN_MS);
        assert!(gate_status(&state, NOW).is_playable());
        assert!(refill_if_due(&mut state, NOW));
        assert_eq!(state.attempts, 3);
    }

    #[test]
    fn remaining_time_uses_floor_math() {
        // 7h59m of the 8h window still to wait.
        let state = locked_state(NOW - MS_PER_MINUTE + 1);
        match gate_status(&state, NOW) {
            GateStatus::Locked(remaining) => {
                assert_eq!(remaining.hours, 7);
                assert_eq!(remaining.minutes, 59);
            }
            GateStatus::Playable => panic!("gate opened early"),
        }
    }

    #[test]
    fn refill_needs_a_prior_spin() {
        let mut state = locked_state(0);
        assert!(!refill_if_due(&mut state, NOW));
        assert_eq!(state.attempts, 0);
    }

    #[test]
    fn refill_is_a_no_op_while_attempts_remain() {
        let mut state = SessionState {
            attempts: 2,
            last_spin_ms: NOW - 2 * ATTEMPT_COOLDOWN_MS,
            ..SessionState::default()
        };
        assert!(!refill_if_due(&mut state, NOW));
        assert_eq!(state.attempts, 2);
    }
}
