//! "This or that" choices.

use crate::entropy::Entropy;
use crate::text::{contains_word, split_marker, split_word};

/// Explicit option separator, for options that themselves contain "or".
pub const OR_MARKER: &str = "<or>";

/// Occasional answers given instead of picking an option.
pub const NOVELTY_ANSWERS: [&str; 3] = ["Neither", "Both", "Doesn't matter to me"];

/// One in this many choices gets a novelty answer.
const NOVELTY_ODDS: u32 = 100;

/// Whether `input` offers a choice.
pub fn is_choice(input: &str) -> bool {
    contains_word(input, "or")
}

/// The cleaned options offered by `input`, in order.
pub fn options(input: &str) -> Vec<&str> {
    let parts = if input.to_ascii_lowercase().contains(OR_MARKER) {
        split_marker(input, OR_MARKER)
    } else {
        split_word(input, "or")
    };
    parts.into_iter().map(clean_option).collect()
}

fn clean_option(option: &str) -> &str {
    option
        .trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '?' || c == '.')
}

/// Pick one option from `input`, uniformly over every split option.
///
/// Input with nothing but separators ("or?") gets a novelty answer.
pub fn respond(input: &str, rng: &mut dyn Entropy) -> String {
    if rng.one_in(NOVELTY_ODDS) {
        return novelty(rng);
    }
    let options = options(input);
    if options.iter().all(|option| option.is_empty()) {
        return novelty(rng);
    }
    options[rng.index(options.len())].to_string()
}

fn novelty(rng: &mut dyn Entropy) -> String {
    NOVELTY_ANSWERS[rng.index(NOVELTY_ANSWERS.len())].to_string()
}
