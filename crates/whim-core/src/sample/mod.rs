//! List sampling: "give me 3 random numbers from 1 to 50".
//!
//! A request names a count, a thing type and a description of the candidate
//! pool. Thing types mentioning "number" read the description as numeric
//! ranges; anything else reads it as a delimited list. Picks are sorted
//! unless the request ends with a "don't sort" marker.

pub mod draw;
pub mod list;
pub mod range;

pub use draw::draw_unique;

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;
use crate::text::strip_word_prefix;

/// Reply when nothing could be drawn.
pub const NO_ELEMENTS: &str = "No elements could be selected.";

const VERBS: &[&str] = &["give me", "select", "get"];
const DOMAIN_WORDS: &[&str] = &["from", "in", "of"];
const NO_SORT_MARKERS: &[&str] = &[
    "don't sort",
    "don\u{2019}t sort",
    "dont sort",
    "do not sort",
    "no sort",
    "unsorted",
];

/// A parsed sampling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// How many picks were asked for.
    pub count: usize,
    /// The thing type, e.g. "numbers" or "cards".
    pub thing: String,
    /// Free text describing the candidate pool.
    pub description: String,
    /// Keep picks in draw order.
    pub no_sort: bool,
}

impl SampleRequest {
    /// Parse `[give me|select|get] <N> [random] <thing...> (from|in|of) <description>`.
    pub fn parse(input: &str) -> Option<Self> {
        let mut rest = input.trim();
        if let Some(after) = VERBS.iter().find_map(|verb| strip_word_prefix(rest, verb)) {
            rest = after;
        }

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 || !rest[digits_end..].starts_with(char::is_whitespace) {
            return None;
        }
        let count = rest[..digits_end].parse().unwrap_or(usize::MAX);

        let mut thing_words: Vec<&str> = Vec::new();
        let mut cursor = rest[digits_end..].trim_start();
        let description = loop {
            let word_end = cursor.find(char::is_whitespace).unwrap_or(cursor.len());
            let word = &cursor[..word_end];
            let after = cursor[word_end..].trim_start();
            let is_domain = DOMAIN_WORDS.iter().any(|d| word.eq_ignore_ascii_case(d));
            if is_domain && !thing_words.is_empty() && !after.is_empty() {
                break after;
            }
            if !word.chars().all(is_thing_char) || after.is_empty() {
                return None;
            }
            thing_words.push(word);
            cursor = after;
        };

        if thing_words.len() > 1 && thing_words[0].eq_ignore_ascii_case("random") {
            thing_words.remove(0);
        }
        let (description, no_sort) = split_no_sort(description);

        Some(Self {
            count,
            thing: thing_words.join(" "),
            description: description.to_string(),
            no_sort,
        })
    }

    /// Whether the description should be read as numeric ranges.
    pub fn is_numeric(&self) -> bool {
        self.thing.to_lowercase().contains("number")
    }

    /// Draw the picks and render them as a single line.
    pub fn respond(&self, rng: &mut dyn Entropy) -> String {
        let picks: Vec<String> = if self.is_numeric() {
            let mut picks = draw_unique(range::parse(&self.description), self.count, rng);
            if !self.no_sort {
                picks.sort_unstable();
            }
            picks.iter().map(ToString::to_string).collect()
        } else {
            let mut picks = draw_unique(list::parse(&self.description), self.count, rng);
            if !self.no_sort {
                picks.sort_by_cached_key(|p| p.to_lowercase());
            }
            picks
        };
        tracing::trace!(thing = %self.thing, picked = picks.len(), "sampled");
        format_picks(&picks)
    }
}

fn is_thing_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '\'' | '\u{2019}' | '-')
}

/// Strip sentence punctuation and a trailing "don't sort" marker, reporting
/// whether the marker was found.
fn split_no_sort(description: &str) -> (&str, bool) {
    let body = description
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '!' | '?'));
    let lower = body.to_ascii_lowercase();
    for marker in NO_SORT_MARKERS {
        if !lower.ends_with(marker) {
            continue;
        }
        let head = &body[..body.len() - marker.len()];
        if head.chars().next_back().is_some_and(crate::text::is_word_char) {
            continue;
        }
        let head = head.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == ';');
        if !head.is_empty() {
            return (head, true);
        }
    }
    (body, false)
}

/// Render picks as "a", "a and b" or "a, b and c".
pub fn format_picks(picks: &[String]) -> String {
    match picks {
        [] => NO_ELEMENTS.to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
