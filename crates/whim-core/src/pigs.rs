//! Pass the Pigs.
//!
//! Two pig-shaped dice are tossed; each lands in one of six positions with
//! fixed odds, and the pair is scored from a fixed table. Rarely the pigs
//! land touching and the player loses everything.

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;

/// The command that triggers a pig roll.
pub const COMMAND: &str = "roll pigs";

/// Reply when the pigs land touching.
pub const TOUCHING: &str = "They're touching! You're back to zero points. Pass the pigs.";

/// Reply for a zero-point toss.
pub const OINKER: &str = "Oinker.  No points for you this round.  Pass the pigs.";

/// One in this many rolls lands the pigs touching.
const TOUCHING_ODDS: u32 = 500;

/// Resolution of a single toss draw.
const TOSS_SCALE: i64 = 10_000;

/// How a single pig can land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PigToss {
    /// On its left side.
    SideLeft,
    /// On its right side.
    SideRight,
    /// Standing upright.
    Trotter,
    /// On its back.
    Razorback,
    /// Balanced on snout and front legs.
    Snouter,
    /// Balanced on snout, ear and leg.
    LeaningJowler,
}

/// Exclusive upper bounds of each toss over a `0..10_000` draw.
const TOSS_THRESHOLDS: [(i64, PigToss); 6] = [
    (3497, PigToss::SideRight),
    (6514, PigToss::SideLeft),
    (8751, PigToss::Razorback),
    (9635, PigToss::Trotter),
    (9939, PigToss::Snouter),
    (10_000, PigToss::LeaningJowler),
];

/// Points for each pair: `SCORES[first.index()][second.index()]`.
///
/// Rows and columns follow SideLeft, SideRight, Trotter, Razorback, Snouter,
/// LeaningJowler.
const SCORES: [[u32; 6]; 6] = [
    // SL SR  Tr  Rb  Sn  LJ
    [1, 0, 5, 5, 10, 15],       // SideLeft
    [0, 1, 5, 5, 10, 15],       // SideRight
    [5, 5, 20, 10, 15, 20],     // Trotter
    [5, 5, 10, 20, 15, 20],     // Razorback
    [10, 10, 15, 15, 40, 25],   // Snouter
    [15, 15, 20, 20, 25, 60],   // LeaningJowler
];

impl PigToss {
    /// All tosses in table order.
    pub fn all() -> &'static [Self] {
        &[
            Self::SideLeft,
            Self::SideRight,
            Self::Trotter,
            Self::Razorback,
            Self::Snouter,
            Self::LeaningJowler,
        ]
    }

    fn index(self) -> usize {
        match self {
            Self::SideLeft => 0,
            Self::SideRight => 1,
            Self::Trotter => 2,
            Self::Razorback => 3,
            Self::Snouter => 4,
            Self::LeaningJowler => 5,
        }
    }

    /// Whether the pig landed on a side.
    pub fn is_side(self) -> bool {
        matches!(self, Self::SideLeft | Self::SideRight)
    }

    /// Map a draw in `0..10_000` to a toss.
    pub fn from_draw(draw: i64) -> Self {
        TOSS_THRESHOLDS
            .iter()
            .find(|(bound, _)| draw < *bound)
            .map_or(Self::LeaningJowler, |&(_, toss)| toss)
    }

    /// Toss one pig.
    pub fn toss(rng: &mut dyn Entropy) -> Self {
        Self::from_draw(rng.between(0, TOSS_SCALE - 1))
    }
}

impl std::fmt::Display for PigToss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SideLeft => write!(f, "Left Side"),
            Self::SideRight => write!(f, "Right Side"),
            Self::Trotter => write!(f, "Trotter"),
            Self::Razorback => write!(f, "Razorback"),
            Self::Snouter => write!(f, "Snouter"),
            Self::LeaningJowler => write!(f, "Leaning Jowler"),
        }
    }
}

/// Points scored by a pair of tosses.
pub fn score(first: PigToss, second: PigToss) -> u32 {
    SCORES[first.index()][second.index()]
}

/// Describe a scored pair, e.g. "Double Trotter!" or "Snouter and Left Side.".
pub fn describe(first: PigToss, second: PigToss) -> String {
    if first == second {
        if first.is_side() {
            "Sider.".to_string()
        } else {
            format!("Double {first}!")
        }
    } else {
        format!("{first} and {second}.")
    }
}

/// The full reply for a pair of tosses.
pub fn announce(first: PigToss, second: PigToss) -> String {
    let points = score(first, second);
    if points == 0 {
        return OINKER.to_string();
    }
    let plural = if points == 1 { "" } else { "s" };
    format!(
        "You got a {} {points} point{plural}.",
        describe(first, second)
    )
}

/// Roll the pigs.
pub fn respond(rng: &mut dyn Entropy) -> String {
    if rng.one_in(TOUCHING_ODDS) {
        return TOUCHING.to_string();
    }
    let first = PigToss::toss(rng);
    let second = PigToss::toss(rng);
    tracing::trace!(%first, %second, "pigs tossed");
    announce(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn table_is_symmetric() {
        for &a in PigToss::all() {
            for &b in PigToss::all() {
                assert_eq!(score(a, b), score(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn double_trotter() {
        assert_eq!(score(PigToss::Trotter, PigToss::Trotter), 20);
        assert_eq!(
            announce(PigToss::Trotter, PigToss::Trotter),
            "You got a Double Trotter! 20 points."
        );
    }

    #[test]
    fn opposite_sides_oink() {
        assert_eq!(score(PigToss::SideLeft, PigToss::SideRight), 0);
        assert_eq!(announce(PigToss::SideLeft, PigToss::SideRight), OINKER);
        assert_eq!(announce(PigToss::SideRight, PigToss::SideLeft), OINKER);
    }

    #[test]
    fn sider_is_singular() {
        assert_eq!(
            announce(PigToss::SideRight, PigToss::SideRight),
            "You got a Sider. 1 point."
        );
    }

    #[test]
    fn mixed_pair() {
        assert_eq!(
            announce(PigToss::Snouter, PigToss::SideLeft),
            "You got a Snouter and Left Side. 10 points."
        );
        assert_eq!(
            announce(PigToss::LeaningJowler, PigToss::Razorback),
            "You got a Leaning Jowler and Razorback. 20 points."
        );
    }

    #[test]
    fn thresholds() {
        assert_eq!(PigToss::from_draw(0), PigToss::SideRight);
        assert_eq!(PigToss::from_draw(3496), PigToss::SideRight);
        assert_eq!(PigToss::from_draw(3497), PigToss::SideLeft);
        assert_eq!(PigToss::from_draw(6514), PigToss::Razorback);
        assert_eq!(PigToss::from_draw(8751), PigToss::Trotter);
        assert_eq!(PigToss::from_draw(9635), PigToss::Snouter);
        assert_eq!(PigToss::from_draw(9939), PigToss::LeaningJowler);
        assert_eq!(PigToss::from_draw(9999), PigToss::LeaningJowler);
    }

    #[test]
    fn touching_wins_first() {
        let mut script = ScriptedEntropy::new([1]);
        assert_eq!(respond(&mut script), TOUCHING);
        assert_eq!(script.drawn(), 1);
    }

    #[test]
    fn scripted_double_snouter() {
        let mut script = ScriptedEntropy::new([2, 9700, 9800]);
        assert_eq!(respond(&mut script), "You got a Double Snouter! 40 points.");
    }

    #[test]
    fn every_toss_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..20_000 {
            seen.insert(PigToss::toss(&mut rng));
        }
        assert_eq!(seen.len(), 6, "missing tosses: {seen:?}");
    }
}
