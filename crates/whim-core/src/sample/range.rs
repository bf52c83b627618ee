//! Numeric range descriptions.
//!
//! Two forms are understood:
//! - `up to N` → 1 through N
//! - a list of signed integers where `to`, `:`, `..` or `-` join two values
//!   into an inclusive range and commas/whitespace separate entries, e.g.
//!   `1-5, 8, 10 to 12`
//!
//! A hyphen directly after a digit always joins a range, so `-3-3` is the
//! range -3 through 3. Ranges are normalized ascending.

use std::collections::HashSet;

use crate::text::{is_word_char, strip_word_prefix};

/// Largest pool a description may expand to. Bigger descriptions yield nothing.
pub const MAX_POOL: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Num(i64),
    Range,
    List,
}

/// Expand a description into its deduplicated pool of integers.
///
/// Unrecognized descriptions yield an empty pool.
pub fn parse(description: &str) -> Vec<i64> {
    let text = description.trim();
    let entries = parse_up_to(text)
        .or_else(|| parse_entries(text))
        .unwrap_or_default();
    expand(&entries)
}

/// `up to N` as a single entry, or `None` when the text has another shape.
fn parse_up_to(text: &str) -> Option<Vec<(i64, i64)>> {
    let rest = strip_word_prefix(text, "up")?;
    let bound = strip_word_prefix(rest, "to")?.trim();
    let n: i64 = bound.parse().ok()?;
    Some(if n >= 1 { vec![(1, n)] } else { Vec::new() })
}

fn parse_entries(text: &str) -> Option<Vec<(i64, i64)>> {
    let tokens = without_padding(tokenize(text)?);
    if tokens.is_empty() {
        return None;
    }

    let mut entries = Vec::new();
    let mut i = 0;
    loop {
        let Token::Num(low) = *tokens.get(i)? else {
            return None;
        };
        i += 1;
        if tokens.get(i) == Some(&Token::Range) {
            let Token::Num(high) = *tokens.get(i + 1)? else {
                return None;
            };
            entries.push((low.min(high), low.max(high)));
            i += 2;
        } else {
            entries.push((low, low));
        }

        match tokens.get(i) {
            None => return Some(entries),
            Some(Token::List) => i += 1,
            Some(_) => return None,
        }
    }
}

/// Drop list separators at either end and around range separators.
fn without_padding(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        if *token == Token::List {
            let next = tokens.get(i + 1);
            if out.is_empty() || next.is_none() || next == Some(&Token::Range) {
                continue;
            }
            if out.last() == Some(&Token::Range) {
                continue;
            }
        }
        out.push(*token);
    }
    out
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        match c {
            c if c.is_whitespace() || c == ',' => {
                if tokens.last() != Some(&Token::List) {
                    tokens.push(Token::List);
                }
                i += 1;
            }
            ':' => {
                tokens.push(Token::Range);
                i += 1;
            }
            '.' if next == Some('.') => {
                tokens.push(Token::Range);
                i += 2;
            }
            '-' if prev.is_some_and(|p| p.is_ascii_digit()) => {
                tokens.push(Token::Range);
                i += 1;
            }
            '-' | '+' if next.is_some_and(|n| n.is_ascii_digit()) => {
                let (value, end) = read_number(&chars, i)?;
                tokens.push(Token::Num(value));
                i = end;
            }
            '-' => {
                tokens.push(Token::Range);
                i += 1;
            }
            '0'..='9' => {
                let (value, end) = read_number(&chars, i)?;
                tokens.push(Token::Num(value));
                i = end;
            }
            't' | 'T' if matches!(next, Some('o' | 'O'))
                && !chars.get(i + 2).is_some_and(|&n| is_word_char(n)) =>
            {
                tokens.push(Token::Range);
                i += 2;
            }
            _ => return None,
        }
    }
    Some(tokens)
}

/// Read an optionally signed integer starting at `start`.
fn read_number(chars: &[char], start: usize) -> Option<(i64, usize)> {
    let mut end = start + 1;
    while chars.get(end).is_some_and(char::is_ascii_digit) {
        end += 1;
    }
    let literal: String = chars[start..end].iter().collect();
    literal.parse().ok().map(|value| (value, end))
}

fn expand(entries: &[(i64, i64)]) -> Vec<i64> {
    let total: i128 = entries
        .iter()
        .map(|&(low, high)| i128::from(high) - i128::from(low) + 1)
        .sum();
    if total > MAX_POOL as i128 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for &(low, high) in entries {
        for value in low..=high {
            if seen.insert(value) {
                pool.push(value);
            }
        }
    }
    pool
}
