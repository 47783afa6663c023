//! Goldreel Game Engine
//!
//! Platform-agnostic core logic for the Goldreel slot-machine mini-game.
//! This crate owns the weighted reel draws, the win rule table, the
//! attempt/cooldown gate, and the session persistence codec, without UI
//! or platform-specific dependencies. The presentation layer supplies
//! the clock (`now_ms`) and the random source (`rand::Rng`) and renders
//! whatever the engine hands back.

pub mod constants;
pub mod cooldown;
pub mod icons;
pub mod session;
pub mod spin;
pub mod win;

// Re-export commonly used types
pub use cooldown::{CooldownRemaining, GateStatus, gate_status, refill_if_due};
pub use icons::{ICON_ORDER, Icon};
pub use session::SessionState;
pub use spin::{SpinBlocked, SpinOutcome, SpinResolution};
pub use win::{OutcomeKind, WinResult, evaluate};

use rand::Rng;

use crate::constants::WELCOME_BONUS_POINTS;
use crate::spin::SpinProgress;

/// Trait for abstracting session save/load operations.
/// Platform-specific implementations should provide this.
pub trait SessionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, state: &SessionState) -> Result<(), Self::Error>;

    /// Load the session record, `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self) -> Result<Option<SessionState>, Self::Error>;
}

/// The session engine: owns the [`SessionState`], executes spins,
/// evaluates wins, and enforces the attempt/cooldown gate. Every
/// mutation is written back through the store; a failing store degrades
/// to an in-memory session rather than interrupting play.
pub struct SlotMachine<S: SessionStore> {
    store: S,
    state: SessionState,
    progress: SpinProgress,
}

impl<S: SessionStore> SlotMachine<S> {
    /// Build a machine from whatever the store holds. An absent record
    /// initializes to defaults and is written back immediately; an
    /// unreadable store is logged and the session continues in memory.
    /// The cooldown gate is re-checked as part of loading.
    pub fn load(store: S, now_ms: u64) -> Self {
        let (mut state, fresh) = match store.load() {
            Ok(Some(state)) => (state, false),
            Ok(None) => (SessionState::default(), true),
            Err(err) => {
                log::warn!("session store unavailable, starting fresh: {err}");
                (SessionState::default(), false)
            }
        };
        state.clamp();

        let mut machine = Self {
            store,
            state,
            progress: SpinProgress::default(),
        };
        if fresh {
            machine.persist();
        }
        machine.refresh_gate(now_ms);
        machine
    }

    /// Build a machine, propagating storage failures instead of
    /// degrading. Useful where a broken store should be loud.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn load_strict(store: S, now_ms: u64) -> Result<Self, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let record = store.load().map_err(Into::into)?;
        let fresh = record.is_none();
        let mut state = record.unwrap_or_default();
        state.clamp();

        let mut machine = Self {
            store,
            state,
            progress: SpinProgress::default(),
        };
        if fresh {
            machine.persist();
        }
        machine.refresh_gate(now_ms);
        Ok(machine)
    }

    /// Current session snapshot for display.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a spin is outstanding.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.progress.is_spinning()
    }

    /// Re-evaluate the attempt gate against the clock, applying the
    /// refill when the cooldown has elapsed. Safe to call on every UI
    /// refresh; the check is pull-based by design.
    pub fn refresh_gate(&mut self, now_ms: u64) -> GateStatus {
        if cooldown::refill_if_due(&mut self.state, now_ms) {
            self.persist();
        }
        cooldown::gate_status(&self.state, now_ms)
    }

    /// Whether the one-shot welcome bonus is still pending.
    #[must_use]
    pub const fn welcome_bonus_available(&self) -> bool {
        self.state.first_visit
    }

    /// Grant the welcome bonus once the presentation layer has shown
    /// the welcome screen. Returns the granted points, or `None` on any
    /// later call.
    pub fn acknowledge_welcome_bonus(&mut self) -> Option<u64> {
        if !self.state.first_visit {
            return None;
        }
        self.state.first_visit = false;
        self.state.score += WELCOME_BONUS_POINTS;
        self.persist();
        Some(WELCOME_BONUS_POINTS)
    }

    /// Start a spin: consume one attempt, stamp the spin time, persist,
    /// and draw the three reel results up front. The machine stays busy
    /// until all three reveals have been reported back.
    ///
    /// # Errors
    ///
    /// Returns [`SpinBlocked`] while a spin is outstanding or when no
    /// attempts remain. Neither case changes any state.
    pub fn start_spin<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
    ) -> Result<SpinOutcome, SpinBlocked> {
        if self.progress.is_spinning() {
            return Err(SpinBlocked::Busy);
        }
        if self.state.attempts == 0 {
            return Err(SpinBlocked::NoAttempts);
        }

        self.state.attempts -= 1;
        self.state.last_spin_ms = now_ms;
        self.persist();

        let outcome = SpinOutcome::draw(rng);
        self.progress.begin(outcome);
        Ok(outcome)
    }

    /// Report one reel landing. The third report settles the spin:
    /// the win table runs exactly once, the score is credited and
    /// persisted, and the resolution is returned. Calls while no spin
    /// is outstanding are ignored.
    pub fn reel_revealed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinResolution> {
        let reels = self.progress.reveal_one()?;
        let win = win::evaluate(reels, rng);
        self.state.score += win.points;
        self.persist();
        Some(SpinResolution {
            win,
            contact_prize_desk: matches!(win.kind, OutcomeKind::Jackpot),
        })
    }

    /// Consume the machine, handing back the session state.
    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state) {
            log::warn!("failed to persist session: {err}");
        }
    }
}
