//! Canned answers for yes/no questions.

use std::sync::LazyLock;

use super::AnswerKind;

/// Affirmative answers.
pub const POSITIVE: &[&str] = &["Yes.", "Definitely.", "Absolutely.", "Of course."];

/// Negative answers.
pub const NEGATIVE: &[&str] = &["No.", "Definitely not.", "No way."];

/// Noncommittal answers.
pub const NEUTRAL: &[&str] = &["Maybe.", "Possibly.", "Ask again later."];

/// Rare joke answers.
pub const SILLY: &[&str] = &[
    "The answer is clearly 42.",
    "Only on Tuesdays.",
    "My sources say... bananas.",
];

/// Each group with the number of copies every answer in it gets.
pub const WEIGHTED_GROUPS: &[(AnswerKind, &[&str], usize)] = &[
    (AnswerKind::Positive, POSITIVE, 10),
    (AnswerKind::Negative, NEGATIVE, 10),
    (AnswerKind::Neutral, NEUTRAL, 3),
    (AnswerKind::Silly, SILLY, 1),
];

/// The weighted pool: every answer repeated by its group weight.
pub static ANSWER_POOL: LazyLock<Vec<(AnswerKind, &'static str)>> = LazyLock::new(|| {
    WEIGHTED_GROUPS
        .iter()
        .flat_map(|&(kind, answers, copies)| {
            answers
                .iter()
                .flat_map(move |&answer| std::iter::repeat_n((kind, answer), copies))
        })
        .collect()
});

/// Every distinct canned answer.
pub fn all_answers() -> impl Iterator<Item = &'static str> {
    WEIGHTED_GROUPS
        .iter()
        .flat_map(|&(_, answers, _)| answers.iter().copied())
}
