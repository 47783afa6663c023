//! Win evaluation for a settled triple of reels.
use rand::Rng;

use crate::constants::{
    JACKPOT_POINTS, PAIR_REWARD_BOUND, TRIPLE_CHERRY_POINTS, TRIPLE_GIFT_POINTS,
    TRIPLE_PUMPKIN_POINTS, TRIPLE_STAR_POINTS,
};
use crate::icons::Icon;

/// Classification of one spin, ordered by rule precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Jackpot,
    TriplePumpkin,
    TripleGift,
    TripleStar,
    TripleCherry,
    Pair,
    Loss,
}

impl OutcomeKind {
    #[must_use]
    pub const fn is_win(self) -> bool {
        !matches!(self, Self::Loss)
    }
}

/// Points and classification for one evaluated triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinResult {
    pub points: u64,
    pub kind: OutcomeKind,
    /// The repeated icon for triple and pair outcomes.
    pub matched: Option<Icon>,
}

/// Walk the payout table top to bottom; the first matching rule wins.
///
/// The five named triples are checked before the generic pair rule so
/// an all-equal triple can never fall through to a pair payout. Triples
/// of the three unlisted icons (Clover, Dart, Trophy) have no dedicated
/// rule and deliberately pay out through the pair branch, as the
/// original machine did. Pair rewards are re-rolled uniformly in
/// `[0, 60)` on every occurrence.
pub fn evaluate<R: Rng + ?Sized>(reels: [Icon; 3], rng: &mut R) -> WinResult {
    let [a, b, c] = reels;

    if a == b && b == c {
        let named = match a {
            Icon::Heart => Some((JACKPOT_POINTS, OutcomeKind::Jackpot)),
            Icon::Pumpkin => Some((TRIPLE_PUMPKIN_POINTS, OutcomeKind::TriplePumpkin)),
            Icon::Gift => Some((TRIPLE_GIFT_POINTS, OutcomeKind::TripleGift)),
            Icon::Star => Some((TRIPLE_STAR_POINTS, OutcomeKind::TripleStar)),
            Icon::Cherry => Some((TRIPLE_CHERRY_POINTS, OutcomeKind::TripleCherry)),
            Icon::Clover | Icon::Dart | Icon::Trophy => None,
        };
        if let Some((points, kind)) = named {
            return WinResult {
                points,
                kind,
                matched: Some(a),
            };
        }
    }

    if a == b || a == c || b == c {
        let matched = if a == b || a == c { a } else { b };
        return WinResult {
            points: rng.gen_range(0..PAIR_REWARD_BOUND),
            kind: OutcomeKind::Pair,
            matched: Some(matched),
        };
    }

    WinResult {
        points: 0,
        kind: OutcomeKind::Loss,
        matched: None,
    }
}
