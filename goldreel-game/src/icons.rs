//! Reel icons and the weighted draw that resolves each reel.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the eight symbols a reel can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Gift,
    Pumpkin,
    /// The rare jackpot symbol.
    Heart,
    Star,
    Cherry,
    Clover,
    Dart,
    Trophy,
}

/// Display order on the machine face.
pub const ICON_ORDER: [Icon; 8] = [
    Icon::Gift,
    Icon::Pumpkin,
    Icon::Heart,
    Icon::Star,
    Icon::Cherry,
    Icon::Clover,
    Icon::Dart,
    Icon::Trophy,
];

/// Cumulative upper bounds over a unit draw. Evaluated in this exact
/// order; the first band containing the draw wins, so the band widths
/// are the per-icon probabilities (Heart 0.0001, Pumpkin 0.2999, ...).
const WEIGHT_BANDS: [(f64, Icon); 8] = [
    (0.0001, Icon::Heart),
    (0.30, Icon::Pumpkin),
    (0.60, Icon::Gift),
    (0.75, Icon::Star),
    (0.85, Icon::Cherry),
    (0.92, Icon::Clover),
    (0.97, Icon::Dart),
    (1.0, Icon::Trophy),
];

impl Icon {
    /// Emoji face shown on the reel.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Gift => "\u{1F381}",
            Self::Pumpkin => "\u{1F383}",
            Self::Heart => "\u{1F48C}",
            Self::Star => "\u{2B50}",
            Self::Cherry => "\u{1F352}",
            Self::Clover => "\u{1F340}",
            Self::Dart => "\u{1F3AF}",
            Self::Trophy => "\u{1F3C6}",
        }
    }

    /// Map a uniform draw in `[0, 1)` onto the weighted band table.
    #[must_use]
    pub fn from_unit_draw(draw: f64) -> Self {
        for (bound, icon) in WEIGHT_BANDS {
            if draw < bound {
                return icon;
            }
        }
        Self::Trophy
    }

    /// Resolve one reel using the weighted distribution.
    pub fn weighted<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_unit_draw(rng.r#gen::<f64>())
    }

    /// Uniform pick over all icons. Used only for the spin-flicker
    /// animation, never for the settled reel result.
    pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ICON_ORDER[rng.gen_range(0..ICON_ORDER.len())]
    }
}
