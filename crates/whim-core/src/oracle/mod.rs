//! Yes/no oracle.
//!
//! Open questions ("why is the sky blue?") get an honest "I don't know."
//! Closed questions get one uniform draw from a pool where each answer is
//! repeated by its group weight, so positive and negative answers dominate
//! and the silly ones turn up about once in a hundred questions.

pub mod tables;

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;
use crate::text::starts_with_word;

pub use tables::ANSWER_POOL;

/// Reply to open questions.
pub const DONT_KNOW: &str = "I don't know.";

/// Question words that make a question open.
pub const INTERROGATIVES: &[&str] = &["how", "why", "what", "who", "when", "where"];

/// The flavour of a canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerKind {
    /// Affirmative.
    Positive,
    /// Negative.
    Negative,
    /// Noncommittal.
    Neutral,
    /// A joke.
    Silly,
}

impl std::fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
            Self::Silly => write!(f, "silly"),
        }
    }
}

/// Whether `input` reads as a question.
pub fn is_question(input: &str) -> bool {
    input.ends_with('?')
}

/// Whether `input` opens with a question word.
pub fn is_open_question(input: &str) -> bool {
    INTERROGATIVES.iter().any(|word| starts_with_word(input, word))
}

/// Draw one weighted canned answer.
pub fn draw_answer(rng: &mut dyn Entropy) -> (AnswerKind, &'static str) {
    ANSWER_POOL[rng.index(ANSWER_POOL.len())]
}

/// Answer a question.
pub fn respond(input: &str, rng: &mut dyn Entropy) -> String {
    if is_open_question(input) {
        return DONT_KNOW.to_string();
    }
    let (kind, answer) = draw_answer(rng);
    tracing::trace!(%kind, "oracle answer");
    answer.to_string()
}
