//! The machine page: reels, spin button, score/attempt displays, and
//! the welcome/prize modals. All animation timing lives here; the
//! engine itself settles synchronously once the third reel lands.
use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::reel::Reel;
use crate::game::{
    self, CooldownRemaining, GateStatus, Icon, OutcomeKind, SessionState, SlotMachine,
    SpinResolution, WebSessionStore,
};

const REEL_COUNT: usize = 3;
const FLICKER_INTERVAL_MS: u32 = 100;

type Machine = Rc<RefCell<SlotMachine<WebSessionStore>>>;

#[derive(Clone, PartialEq)]
enum ModalKind {
    None,
    Welcome,
    Prize { message: String, points: u64 },
}

#[derive(Clone, PartialEq)]
struct View {
    reels: [Icon; REEL_COUNT],
    spinning: [bool; REEL_COUNT],
    score: u64,
    attempts: u8,
    result_line: String,
    cooldown: Option<CooldownRemaining>,
    modal: ModalKind,
    show_contact: bool,
    busy: bool,
}

impl View {
    fn initial() -> Self {
        Self {
            reels: [Icon::Star; REEL_COUNT],
            spinning: [false; REEL_COUNT],
            score: 0,
            attempts: 0,
            result_line: String::new(),
            cooldown: None,
            modal: ModalKind::None,
            show_contact: false,
            busy: false,
        }
    }

    fn sync_session(&mut self, state: &SessionState, gate: GateStatus) {
        self.score = state.score;
        self.attempts = state.attempts;
        self.cooldown = match gate {
            GateStatus::Playable => None,
            GateStatus::Locked(remaining) => Some(remaining),
        };
    }
}

enum Action {
    Sync {
        state: SessionState,
        gate: GateStatus,
        welcome_pending: bool,
    },
    WelcomeAccepted {
        state: SessionState,
    },
    SpinStarted {
        state: SessionState,
    },
    Flicker {
        reel: usize,
        icon: Icon,
    },
    ReelLanded {
        reel: usize,
        icon: Icon,
    },
    Settled {
        state: SessionState,
        gate: GateStatus,
        resolution: SpinResolution,
    },
    CloseModal,
}

impl Reducible for View {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::Sync {
                state,
                gate,
                welcome_pending,
            } => {
                next.sync_session(&state, gate);
                if welcome_pending {
                    next.modal = ModalKind::Welcome;
                }
            }
            Action::WelcomeAccepted { state } => {
                next.score = state.score;
                next.modal = ModalKind::None;
            }
            Action::SpinStarted { state } => {
                next.busy = true;
                next.spinning = [true; REEL_COUNT];
                next.result_line = "Spinning...".to_string();
                next.cooldown = None;
                next.score = state.score;
                next.attempts = state.attempts;
            }
            Action::Flicker { reel, icon } => {
                if next.spinning.get(reel).copied().unwrap_or(false) {
                    next.reels[reel] = icon;
                }
            }
            Action::ReelLanded { reel, icon } => {
                if reel < REEL_COUNT {
                    next.reels[reel] = icon;
                    next.spinning[reel] = false;
                }
            }
            Action::Settled {
                state,
                gate,
                resolution,
            } => {
                next.busy = false;
                next.spinning = [false; REEL_COUNT];
                next.sync_session(&state, gate);
                next.result_line = result_line(&resolution);
                if let Some(message) = prize_message(&resolution) {
                    next.modal = ModalKind::Prize {
                        message,
                        points: resolution.win.points,
                    };
                }
                if resolution.contact_prize_desk {
                    next.show_contact = true;
                }
            }
            Action::CloseModal => {
                next.modal = ModalKind::None;
            }
        }
        Rc::new(next)
    }
}

fn result_line(resolution: &SpinResolution) -> String {
    let points = resolution.win.points;
    match resolution.win.kind {
        OutcomeKind::Loss => "No luck this time - try again!".to_string(),
        OutcomeKind::Jackpot => {
            let g = Icon::Heart.glyph();
            format!("Jackpot! {g}{g}{g}")
        }
        OutcomeKind::Pair => {
            let g = resolution.win.matched.map_or("", Icon::glyph);
            format!("{g}{g} pair - you won {points} points!")
        }
        OutcomeKind::TriplePumpkin
        | OutcomeKind::TripleGift
        | OutcomeKind::TripleStar
        | OutcomeKind::TripleCherry => {
            let g = resolution.win.matched.map_or("", Icon::glyph);
            format!("{g}{g}{g} You won {points} points!")
        }
    }
}

fn prize_message(resolution: &SpinResolution) -> Option<String> {
    let matched = resolution.win.matched.map_or("", Icon::glyph);
    match resolution.win.kind {
        OutcomeKind::Loss => None,
        OutcomeKind::Jackpot => Some("The grand prize - three hearts!".to_string()),
        OutcomeKind::Pair => Some(format!("Two matching {matched}!")),
        OutcomeKind::TriplePumpkin
        | OutcomeKind::TripleGift
        | OutcomeKind::TripleStar
        | OutcomeKind::TripleCherry => Some(format!("Three {matched}!")),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let machine: Machine = use_mut_ref(game::create_web_slot_machine);
    let rng: Rc<RefCell<SmallRng>> = use_mut_ref(game::spin_rng);
    let view = use_reducer(View::initial);

    {
        let machine = machine.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            let mut m = machine.borrow_mut();
            let gate = m.refresh_gate(game::now_ms());
            let state = *m.state();
            let welcome_pending = m.welcome_bonus_available();
            drop(m);
            view.dispatch(Action::Sync {
                state,
                gate,
                welcome_pending,
            });
            || {}
        });
    }

    let on_spin = {
        let machine = machine.clone();
        let rng = rng.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = {
                let mut m = machine.borrow_mut();
                match m.start_spin(game::now_ms(), &mut *rng.borrow_mut()) {
                    Ok(outcome) => {
                        view.dispatch(Action::SpinStarted { state: *m.state() });
                        outcome
                    }
                    // Busy or out of attempts: a silent no-op.
                    Err(_) => return,
                }
            };

            for reel in 0..REEL_COUNT {
                let landed = outcome.reels[reel];
                let delay = outcome.reveal_delays_ms[reel];
                let flicker = Interval::new(FLICKER_INTERVAL_MS, {
                    let view = view.clone();
                    let rng = rng.clone();
                    move || {
                        let icon = Icon::uniform(&mut *rng.borrow_mut());
                        view.dispatch(Action::Flicker { reel, icon });
                    }
                });
                Timeout::new(delay, {
                    let machine = machine.clone();
                    let rng = rng.clone();
                    let view = view.clone();
                    move || {
                        drop(flicker);
                        view.dispatch(Action::ReelLanded { reel, icon: landed });
                        let mut m = machine.borrow_mut();
                        if let Some(resolution) = m.reel_revealed(&mut *rng.borrow_mut()) {
                            let gate = m.refresh_gate(game::now_ms());
                            let state = *m.state();
                            drop(m);
                            view.dispatch(Action::Settled {
                                state,
                                gate,
                                resolution,
                            });
                        }
                    }
                })
                .forget();
            }
        })
    };

    let on_welcome_ok = {
        let machine = machine.clone();
        let view = view.clone();
        Callback::from(move |()| {
            let mut m = machine.borrow_mut();
            let _ = m.acknowledge_welcome_bonus();
            let state = *m.state();
            drop(m);
            view.dispatch(Action::WelcomeAccepted { state });
        })
    };

    let on_close_modal = {
        let view = view.clone();
        Callback::from(move |()| view.dispatch(Action::CloseModal))
    };

    let spin_disabled = view.busy || view.attempts == 0;

    let cooldown_notice = view.cooldown.map_or_else(Html::default, |remaining| {
        html! {
            <p id="timer" class="timer">
                { format!(
                    "Attempts refill in {}h {}m",
                    remaining.hours, remaining.minutes
                ) }
            </p>
        }
    });

    let contact_info = if view.show_contact {
        html! {
            <aside id="contact-info" class="contact-info">
                <h3>{ "Jackpot! You hit the grand prize!" }</h3>
                <p>{ "This prize is virtual and for entertainment only." }</p>
            </aside>
        }
    } else {
        Html::default()
    };

    let modal = match &view.modal {
        ModalKind::None => Html::default(),
        ModalKind::Welcome => html! {
            <Modal
                open={true}
                title="Welcome to the Golden Luck Machine!"
                on_close={on_welcome_ok}
            >
                <p>{ "A casual game of luck - enjoy 500 welcome points on the house!" }</p>
            </Modal>
        },
        ModalKind::Prize { message, points } => html! {
            <Modal open={true} title="Congratulations!" on_close={on_close_modal}>
                <p>{ message.clone() }</p>
                <p>{ format!("You won {points} points!") }</p>
            </Modal>
        },
    };

    html! {
        <main class="slot-machine">
            <h1>{ "Golden Luck Machine" }</h1>
            <section class="scoreboard">
                <span class="scoreboard__label">{ "Score" }</span>
                <span id="score" class="scoreboard__value">{ view.score }</span>
                <span class="scoreboard__label">{ "Attempts" }</span>
                <span id="attempts" class="scoreboard__value">{ view.attempts }</span>
            </section>
            <section class="reels">
                { for (0..REEL_COUNT).map(|i| html! {
                    <Reel icon={view.reels[i]} spinning={view.spinning[i]} />
                }) }
            </section>
            <button id="spin-btn" class="spin-btn" disabled={spin_disabled} onclick={on_spin}>
                { "Spin" }
            </button>
            <p id="result" class="result" aria-live="polite">{ view.result_line.clone() }</p>
            { cooldown_notice }
            { contact_info }
            { modal }
        </main>
    }
}
