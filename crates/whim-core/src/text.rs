//! Small text scanning helpers shared by the matchers.

/// Whether `c` counts as part of a word for boundary checks.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte ranges of every standalone, case-insensitive occurrence of `word`.
///
/// `word` must be ASCII. An occurrence is standalone when neither neighbour
/// is a word character.
pub fn find_word(haystack: &str, word: &str) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let bytes = haystack.as_bytes();
    let len = word.len();
    let mut start = 0;
    while start + len <= bytes.len() {
        let end = start + len;
        if haystack.is_char_boundary(start)
            && haystack.is_char_boundary(end)
            && haystack[start..end].eq_ignore_ascii_case(word)
            && !haystack[..start].chars().next_back().is_some_and(is_word_char)
            && !haystack[end..].chars().next().is_some_and(is_word_char)
        {
            found.push((start, end));
            start = end;
        } else {
            start += 1;
        }
    }
    found
}

/// Whether `haystack` contains `word` as a standalone word.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    !find_word(haystack, word).is_empty()
}

/// Split `haystack` at every standalone occurrence of `word`.
pub fn split_word<'a>(haystack: &'a str, word: &str) -> Vec<&'a str> {
    split_at_ranges(haystack, &find_word(haystack, word))
}

/// Split `haystack` at every case-insensitive occurrence of `marker`.
pub fn split_marker<'a>(haystack: &'a str, marker: &str) -> Vec<&'a str> {
    let lower = haystack.to_ascii_lowercase();
    let marker = marker.to_ascii_lowercase();
    let ranges: Vec<(usize, usize)> = lower
        .match_indices(&marker)
        .map(|(at, m)| (at, at + m.len()))
        .collect();
    split_at_ranges(haystack, &ranges)
}

fn split_at_ranges<'a>(haystack: &'a str, ranges: &[(usize, usize)]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(ranges.len() + 1);
    let mut last = 0;
    for &(start, end) in ranges {
        parts.push(&haystack[last..start]);
        last = end;
    }
    parts.push(&haystack[last..]);
    parts
}

/// If `s` starts with the standalone word `word` (case-insensitive), return
/// the rest with leading whitespace removed.
pub fn strip_word_prefix<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let head = s.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    let rest = &s[word.len()..];
    if rest.chars().next().is_some_and(is_word_char) {
        return None;
    }
    Some(rest.trim_start())
}

/// Whether `s` starts with the standalone word `word` (case-insensitive).
pub fn starts_with_word(s: &str, word: &str) -> bool {
    strip_word_prefix(s, word).is_some()
}
