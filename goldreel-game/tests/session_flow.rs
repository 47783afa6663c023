//! End-to-end session scenarios driven through the public engine API,
//! backed by a serde store that round-trips every record through JSON
//! the way browser storage does.

use goldreel_game::{GateStatus, SessionState, SessionStore, SlotMachine, SpinBlocked};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;

const NOW: u64 = 1_700_000_000_000;
const EIGHT_HOURS_MS: u64 = 8 * 60 * 60 * 1000;

/// Store that serializes to JSON on every save, like localStorage.
#[derive(Clone, Default)]
struct JsonStore {
    record: Rc<RefCell<Option<String>>>,
}

impl SessionStore for JsonStore {
    type Error = serde_json::Error;

    fn save(&self, state: &SessionState) -> Result<(), Self::Error> {
        let json = serde_json::to_string(state)?;
        *self.record.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionState>, Self::Error> {
        match self.record.borrow().as_deref() {
            Some(json) => serde_json::from_str(json).map(Some),
            None => Ok(None),
        }
    }
}

fn settle(machine: &mut SlotMachine<JsonStore>, rng: &mut SmallRng) {
    while machine.is_spinning() {
        let _ = machine.reel_revealed(rng);
    }
}

#[test]
fn full_session_survives_reloads() {
    let store = JsonStore::default();
    let mut rng = SmallRng::seed_from_u64(0xFACADE);

    // Fresh visit: defaults, welcome bonus pending.
    let mut machine = SlotMachine::load(store.clone(), NOW);
    assert_eq!(machine.state(), &SessionState::default());
    assert!(machine.welcome_bonus_available());
    assert_eq!(machine.acknowledge_welcome_bonus(), Some(500));

    // Burn all three attempts.
    let mut expected_score = 500;
    for i in 0..3_u64 {
        let outcome = machine
            .start_spin(NOW + i, &mut rng)
            .expect("attempt available");
        assert_eq!(outcome.reels.len(), 3);
        settle(&mut machine, &mut rng);
        expected_score = machine.state().score;
    }
    assert_eq!(machine.state().attempts, 0);

    // Reload mid-cooldown: same record, gate locked, no welcome re-run.
    let mut machine = SlotMachine::load(store.clone(), NOW + 10);
    assert_eq!(machine.state().score, expected_score);
    assert!(!machine.welcome_bonus_available());
    assert!(matches!(
        machine.refresh_gate(NOW + 10),
        GateStatus::Locked(_)
    ));
    assert_eq!(
        machine.start_spin(NOW + 10, &mut rng),
        Err(SpinBlocked::NoAttempts)
    );

    // Reload after the cooldown: attempts refilled and persisted.
    let machine = SlotMachine::load(store.clone(), NOW + 2 + EIGHT_HOURS_MS);
    assert_eq!(machine.state().attempts, 3);
    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved.attempts, 3);
    assert_eq!(saved.score, expected_score);
}

#[test]
fn locked_gate_reports_wait_in_hours_and_minutes() {
    let store = JsonStore::default();
    store
        .save(&SessionState {
            attempts: 0,
            last_spin_ms: NOW,
            first_visit: false,
            score: 70,
        })
        .unwrap();

    // 90 minutes into the 8 hour window: 6h30m left.
    let mut machine = SlotMachine::load(store, NOW + 90 * 60 * 1000);
    match machine.refresh_gate(NOW + 90 * 60 * 1000) {
        GateStatus::Locked(remaining) => {
            assert_eq!(remaining.hours, 6);
            assert_eq!(remaining.minutes, 30);
        }
        GateStatus::Playable => panic!("gate opened early"),
    }
}

#[test]
fn score_never_decreases_across_many_spins() {
    let store = JsonStore::default();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut machine = SlotMachine::load(store, NOW);
    let _ = machine.acknowledge_welcome_bonus();

    let mut last_score = machine.state().score;
    let mut clock = NOW;
    for _ in 0..50 {
        clock += 1;
        if machine.start_spin(clock, &mut rng).is_err() {
            clock += EIGHT_HOURS_MS;
            assert!(machine.refresh_gate(clock).is_playable());
            continue;
        }
        settle(&mut machine, &mut rng);
        let score = machine.state().score;
        assert!(score >= last_score, "score went backwards");
        assert!(machine.state().attempts <= 3);
        last_score = score;
    }
}
