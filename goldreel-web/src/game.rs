//! Web-specific engine wiring
//!
//! This module provides the browser implementations of the
//! goldreel-game traits and re-exports the core game logic types.

use gloo::storage::{LocalStorage, Storage};
use rand::SeedableRng;
use rand::rngs::SmallRng;

// Re-export all types from goldreel-game
pub use goldreel_game::*;

/// Local-storage key holding the single session record.
const SAVE_KEY: &str = "goldreel.session";

/// Session store backed by browser localStorage.
pub struct WebSessionStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl SessionStore for WebSessionStore {
    type Error = WebStorageError;

    fn save(&self, state: &SessionState) -> Result<(), Self::Error> {
        LocalStorage::set(SAVE_KEY, state)
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
    }

    fn load(&self) -> Result<Option<SessionState>, Self::Error> {
        match LocalStorage::get(SAVE_KEY) {
            Ok(state) => Ok(Some(state)),
            // Absent or unreadable record: let the engine rebuild the
            // per-field defaults and write them back.
            Err(_) => Ok(None),
        }
    }
}

/// Wall clock in epoch milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Random source for reel draws and pair rewards, seeded off the clock.
/// Avoids pulling OS entropy into the wasm build.
#[must_use]
pub fn spin_rng() -> SmallRng {
    SmallRng::seed_from_u64(now_ms())
}

/// Create the machine the browser build plays on: localStorage record,
/// wall clock, clock-seeded rng.
#[must_use]
pub fn create_web_slot_machine() -> SlotMachine<WebSessionStore> {
    SlotMachine::load(WebSessionStore, now_ms())
}
