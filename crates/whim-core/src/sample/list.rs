//! Delimited text lists.

use crate::text::strip_word_prefix;

/// Split a free-text list into candidates.
///
/// Semicolons win over commas, commas over whitespace. A leading "and" or
/// "or" is dropped from each item, and blank items are skipped. Duplicates
/// are kept.
pub fn parse(description: &str) -> Vec<String> {
    let items: Vec<&str> = if description.contains(';') {
        description.split(';').collect()
    } else if description.contains(',') {
        description.split(',').collect()
    } else {
        description.split_whitespace().collect()
    };

    items
        .into_iter()
        .map(|item| without_conjunction(item.trim()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn without_conjunction(item: &str) -> &str {
    strip_word_prefix(item, "and")
        .or_else(|| strip_word_prefix(item, "or"))
        .unwrap_or(item)
}
