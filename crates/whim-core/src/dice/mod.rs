//! Dice expressions and rolling.
//!
//! Recognizes `[count]d<faces>[(+|-)modifier]` anywhere in an utterance,
//! e.g. "roll 2d6+1 and d20". Malformed numbers never fail: counts and faces
//! default to 1, modifiers to 0, and oversized values saturate.

pub mod roll;

pub use roll::RollResult;

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;

/// Upper bound on dice rolled for a single expression.
pub const MAX_DICE: u32 = 1000;

/// A parsed dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSpec {
    /// Number of dice to roll.
    pub count: u32,
    /// Sides per die, always at least 1.
    pub faces: u32,
    /// Added to the sum of the dice.
    pub modifier: i64,
}

impl DiceSpec {
    /// Create a spec, clamping `count` to [`MAX_DICE`] and `faces` to at least 1.
    pub fn new(count: u32, faces: u32, modifier: i64) -> Self {
        Self {
            count: count.min(MAX_DICE),
            faces: faces.max(1),
            modifier,
        }
    }

    /// Roll every die and apply the modifier.
    pub fn roll(&self, rng: &mut dyn Entropy) -> RollResult {
        let faces = i64::from(self.faces);
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| u32::try_from(rng.between(1, faces)).unwrap_or(1))
            .collect();
        RollResult::new(*self, rolls)
    }
}

impl Default for DiceSpec {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

/// Whether `input` contains a digit, a `d`, and a digit in a row.
pub fn has_dice_expression(input: &str) -> bool {
    input
        .as_bytes()
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && w[1] == b'd' && w[2].is_ascii_digit())
}

/// Extract every non-overlapping dice expression in `input`, left to right.
///
/// Expressions are found wherever they occur, so "roll2d6" yields `2d6`.
/// A modifier binds greedily: "2d6+1d4" is `2d6+1` followed by `d4`.
pub fn extract(input: &str) -> Vec<DiceSpec> {
    let bytes = input.as_bytes();
    let mut specs = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        match scan_at(bytes, pos) {
            Some((spec, end)) => {
                specs.push(spec);
                pos = end;
            }
            // Every start inside a digit run reaches the same end, so skip it.
            None => pos = digits_end(bytes, pos).max(pos + 1),
        }
    }
    specs
}

/// Scan one expression starting at `start`, returning it and its end offset.
fn scan_at(bytes: &[u8], start: usize) -> Option<(DiceSpec, usize)> {
    let count_end = digits_end(bytes, start);
    if bytes.get(count_end) != Some(&b'd') {
        return None;
    }
    let faces_start = count_end + 1;
    let faces_end = digits_end(bytes, faces_start);
    if faces_end == faces_start {
        return None;
    }

    let count = if count_end == start {
        1
    } else {
        saturating_parse(&bytes[start..count_end])
    };
    let faces = saturating_parse(&bytes[faces_start..faces_end]);

    let mut end = faces_end;
    let mut modifier = 0i64;
    if let Some(&sign @ (b'+' | b'-')) = bytes.get(faces_end) {
        let mod_start = faces_end + 1;
        let mod_end = digits_end(bytes, mod_start);
        if mod_end > mod_start {
            let magnitude = i64::try_from(saturating_parse(&bytes[mod_start..mod_end]))
                .unwrap_or(i64::MAX);
            modifier = if sign == b'-' { -magnitude } else { magnitude };
            end = mod_end;
        }
    }

    let spec = DiceSpec::new(
        u32::try_from(count).unwrap_or(u32::MAX),
        u32::try_from(faces).unwrap_or(u32::MAX),
        modifier,
    );
    Some((spec, end))
}

fn digits_end(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| from + offset)
}

fn saturating_parse(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |acc, d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}

/// Roll every expression in `specs` and render the response lines.
///
/// Adds a trailing grand-total line when more than one expression was rolled.
pub fn respond(specs: &[DiceSpec], rng: &mut dyn Entropy) -> Vec<String> {
    let results: Vec<RollResult> = specs.iter().map(|spec| spec.roll(rng)).collect();
    let mut lines: Vec<String> = results.iter().map(ToString::to_string).collect();
    if results.len() > 1 {
        let grand_total = results
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.total));
        lines.push(format!("grand total: {grand_total}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    #[test]
    fn detects_digit_d_digit() {
        assert!(has_dice_expression("roll 2d6"));
        assert!(has_dice_expression("3d8 please"));
        assert!(!has_dice_expression("3D8 please"));
        assert!(!has_dice_expression("roll d20"));
        assert!(!has_dice_expression("2 d6"));
        assert!(!has_dice_expression(""));
    }

    #[test]
    fn extract_full_expression() {
        assert_eq!(extract("2d6+1"), vec![DiceSpec::new(2, 6, 1)]);
        assert_eq!(extract("roll 4d10-3 now"), vec![DiceSpec::new(4, 10, -3)]);
    }

    #[test]
    fn count_defaults_to_one() {
        assert_eq!(extract("1d4 and d20"), vec![
            DiceSpec::new(1, 4, 0),
            DiceSpec::new(1, 20, 0)
        ]);
    }

    #[test]
    fn zero_faces_becomes_one() {
        assert_eq!(extract("2d0"), vec![DiceSpec::new(2, 1, 0)]);
    }

    #[test]
    fn zero_count_is_kept() {
        assert_eq!(extract("0d6+2"), vec![DiceSpec::new(0, 6, 2)]);
    }

    #[test]
    fn glued_prefix_is_skipped() {
        assert_eq!(extract("roll2d6"), vec![DiceSpec::new(2, 6, 0)]);
        assert_eq!(extract("x2d6+1"), vec![DiceSpec::new(2, 6, 1)]);
        assert_eq!(extract("rolled 3d8"), vec![DiceSpec::new(3, 8, 0)]);
    }

    #[test]
    fn uppercase_d_is_not_a_die() {
        assert!(extract("2D6").is_empty());
    }

    #[test]
    fn dangling_sign_is_not_a_modifier() {
        assert_eq!(extract("1d6+"), vec![DiceSpec::new(1, 6, 0)]);
        assert_eq!(extract("1d6-x"), vec![DiceSpec::new(1, 6, 0)]);
    }

    #[test]
    fn modifier_binds_before_next_expression() {
        assert_eq!(extract("2d6+1d4"), vec![
            DiceSpec::new(2, 6, 1),
            DiceSpec::new(1, 4, 0)
        ]);
        assert_eq!(extract("1d8-2d10"), vec![
            DiceSpec::new(1, 8, -2),
            DiceSpec::new(1, 10, 0)
        ]);
    }

    #[test]
    fn oversized_numbers_saturate() {
        let specs = extract("99999999999999999999d99999999999999999999+99999999999999999999");
        assert_eq!(specs, vec![DiceSpec::new(MAX_DICE, u32::MAX, i64::MAX)]);
    }

    #[test]
    fn spec_display() {
        assert_eq!(DiceSpec::new(2, 6, 1).to_string(), "2d6+1");
        assert_eq!(DiceSpec::new(1, 20, -2).to_string(), "1d20-2");
        assert_eq!(DiceSpec::new(3, 8, 0).to_string(), "3d8");
    }

    #[test]
    fn single_expression_has_no_grand_total() {
        let mut rng = ScriptedEntropy::new([3, 5]);
        let lines = respond(&[DiceSpec::new(2, 6, 1)], &mut rng);
        assert_eq!(lines, vec!["2d6+1 = 9: 3, 5  (+1)".to_string()]);
    }

    #[test]
    fn multiple_expressions_add_grand_total() {
        let mut rng = ScriptedEntropy::new([4, 2, 17]);
        let lines = respond(&[DiceSpec::new(2, 6, 0), DiceSpec::new(1, 20, -1)], &mut rng);
        assert_eq!(lines, vec![
            "2d6 = 6: 4, 2".to_string(),
            "1d20-1 = 16: 17  (-1)".to_string(),
            "grand total: 22".to_string(),
        ]);
    }
}
