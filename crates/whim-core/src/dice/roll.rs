//! Dice roll results.

use serde::{Deserialize, Serialize};

use super::DiceSpec;

/// The result of rolling one dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The expression that was rolled.
    pub spec: DiceSpec,
    /// Individual die values, in roll order.
    pub rolls: Vec<u32>,
    /// Sum of the rolls plus the modifier.
    pub total: i64,
}

impl RollResult {
    /// Build a result, computing the total from the rolls.
    pub fn new(spec: DiceSpec, rolls: Vec<u32>) -> Self {
        let sum: i64 = rolls.iter().map(|&r| i64::from(r)).sum();
        Self {
            spec,
            rolls,
            total: sum.saturating_add(spec.modifier),
        }
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(ToString::to_string).collect();
        write!(f, "{} = {}: {}", self.spec, self.total, values.join(", "))?;
        if self.spec.modifier != 0 {
            write!(f, "  ({:+})", self.spec.modifier)?;
        }
        Ok(())
    }
}
