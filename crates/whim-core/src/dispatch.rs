//! Ordered category dispatch.
//!
//! Each rule pairs a [`Category`] with a matcher that inspects the trimmed
//! utterance and, on success, returns the parsed [`Intent`]. Rules are tried
//! in [`RULES`] order and the first match wins, so an utterance like
//! "2 picks from tea or coffee" is a list sample even though it contains
//! "or".

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::WhimConfig;
use crate::dice::{self, DiceSpec};
use crate::entropy::Entropy;
use crate::sample::SampleRequest;
use crate::{choice, oracle, pigs};

/// The kinds of utterance the responder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// "3 cards from ace, king, queen, jack".
    ListSample,
    /// "tea or coffee?".
    OrChoice,
    /// "roll pigs".
    PigRoll,
    /// "roll 2d6+1".
    DiceRoll,
    /// "will it rain?".
    YesNo,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListSample => write!(f, "list-sample"),
            Self::OrChoice => write!(f, "or-choice"),
            Self::PigRoll => write!(f, "pig-roll"),
            Self::DiceRoll => write!(f, "dice-roll"),
            Self::YesNo => write!(f, "yes-no"),
        }
    }
}

/// A matched utterance with whatever its matcher parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Draw from a described pool.
    Sample(SampleRequest),
    /// Choose between "or"-separated options.
    Choice,
    /// Toss the pigs.
    Pigs,
    /// Roll the extracted dice expressions.
    Dice(Vec<DiceSpec>),
    /// Answer a yes/no question.
    Question,
}

impl Intent {
    /// The category this intent belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Sample(_) => Category::ListSample,
            Self::Choice => Category::OrChoice,
            Self::Pigs => Category::PigRoll,
            Self::Dice(_) => Category::DiceRoll,
            Self::Question => Category::YesNo,
        }
    }

    /// Generate the response lines for `input`.
    pub fn respond(&self, input: &str, rng: &mut dyn Entropy) -> Vec<String> {
        match self {
            Self::Sample(request) => vec![request.respond(rng)],
            Self::Choice => vec![choice::respond(input, rng)],
            Self::Pigs => vec![pigs::respond(rng)],
            Self::Dice(specs) => dice::respond(specs, rng),
            Self::Question => vec![oracle::respond(input, rng)],
        }
    }
}

/// A category test over a trimmed utterance.
pub type Matcher = fn(&str) -> Option<Intent>;

/// Dispatch rules in priority order.
pub const RULES: [(Category, Matcher); 5] = [
    (Category::ListSample, match_sample),
    (Category::OrChoice, match_choice),
    (Category::PigRoll, match_pigs),
    (Category::DiceRoll, match_dice),
    (Category::YesNo, match_question),
];

fn match_sample(input: &str) -> Option<Intent> {
    SampleRequest::parse(input).map(Intent::Sample)
}

fn match_choice(input: &str) -> Option<Intent> {
    choice::is_choice(input).then_some(Intent::Choice)
}

fn match_pigs(input: &str) -> Option<Intent> {
    input.eq_ignore_ascii_case(pigs::COMMAND).then_some(Intent::Pigs)
}

fn match_dice(input: &str) -> Option<Intent> {
    dice::has_dice_expression(input).then(|| Intent::Dice(dice::extract(input)))
}

fn match_question(input: &str) -> Option<Intent> {
    oracle::is_question(input).then_some(Intent::Question)
}

/// Find the first rule matching `input` (trimmed before matching).
pub fn classify(input: &str) -> Option<Intent> {
    let input = input.trim();
    RULES.iter().find_map(|(_, matcher)| matcher(input))
}

/// Classify and respond, reporting the category that fired.
pub fn dispatch(input: &str, rng: &mut dyn Entropy) -> (Option<Category>, Vec<String>) {
    let input = input.trim();
    match classify(input) {
        Some(intent) => {
            let category = intent.category();
            tracing::debug!(%category, "dispatching");
            (Some(category), intent.respond(input, rng))
        }
        None => {
            tracing::trace!("no category matched");
            (None, Vec::new())
        }
    }
}

/// Respond to `input` using the given entropy.
pub fn respond(input: &str, rng: &mut dyn Entropy) -> Vec<String> {
    dispatch(input, rng).1
}

/// Respond to `input` using the thread-local RNG.
pub fn transform(input: &str) -> Vec<String> {
    respond(input, &mut rand::rng())
}

/// A responder that owns its RNG, seeded once at construction.
pub struct Responder {
    rng: StdRng,
}

impl Responder {
    /// Create a responder; unseeded configs draw their seed from the OS.
    pub fn new(config: &WhimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Respond to one utterance.
    pub fn respond(&mut self, input: &str) -> Vec<String> {
        respond(input, &mut self.rng)
    }

    /// Respond to one utterance, also reporting the matched category.
    pub fn dispatch(&mut self, input: &str) -> (Option<Category>, Vec<String>) {
        dispatch(input, &mut self.rng)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(&WhimConfig::default())
    }
}
