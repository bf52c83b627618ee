//! Injectable randomness.
//!
//! Every handler draws through [`Entropy`] instead of a global RNG, so tests
//! can replay a fixed sequence with [`ScriptedEntropy`] while production code
//! passes any [`rand::Rng`].

use rand::Rng;

/// A source of uniform random integers.
pub trait Entropy {
    /// Uniform integer in `low..=high`. Returns `low` when `high <= low`.
    fn between(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let high = i64::try_from(len - 1).unwrap_or(i64::MAX);
        usize::try_from(self.between(0, high)).unwrap_or(0)
    }

    /// True with probability `1 / n`.
    fn one_in(&mut self, n: u32) -> bool {
        self.between(1, i64::from(n.max(1))) == 1
    }
}

impl<R: Rng + ?Sized> Entropy for R {
    fn between(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a script of `[0]`
/// always yields the low end and a script of `[i64::MAX]` the high end.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedEntropy {
    /// Create a script from the given values.
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl Entropy for ScriptedEntropy {
    fn between(&mut self, low: i64, high: i64) -> i64 {
        if self.values.is_empty() || high <= low {
            self.cursor += 1;
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}

/// Shuffle `items` in place (Fisher-Yates).
///
/// Written against [`Entropy`] rather than `rand::seq::SliceRandom` so a
/// [`ScriptedEntropy`] can drive it through the same integer draws.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn Entropy) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_between_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = rng.between(-3, 3);
            assert!((-3..=3).contains(&v));
        }
    }

    #[test]
    fn rng_between_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.between(5, 5), 5);
        assert_eq!(rng.between(5, 2), 5);
    }

    #[test]
    fn scripted_sequence_cycles_and_clamps() {
        let mut script = ScriptedEntropy::new([1, 50, 7]);
        assert_eq!(script.between(1, 20), 1);
        assert_eq!(script.between(1, 20), 20);
        assert_eq!(script.between(1, 20), 7);
        assert_eq!(script.between(1, 20), 1);
        assert_eq!(script.drawn(), 4);
    }

    #[test]
    fn empty_script_yields_low() {
        let mut script = ScriptedEntropy::new(Vec::new());
        assert_eq!(script.between(3, 9), 3);
    }

    #[test]
    fn index_and_one_in() {
        let mut script = ScriptedEntropy::new([0, 1, 2]);
        assert_eq!(script.index(5), 0);
        assert!(script.one_in(100));
        assert!(!script.one_in(100));
        assert_eq!(script.index(0), 0);
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_with_low_script_rotates() {
        // Always swapping with index 0 walks the first element to the back.
        let mut script = ScriptedEntropy::new([0]);
        let mut items = vec!['a', 'b', 'c'];
        shuffle(&mut items, &mut script);
        assert_eq!(items, vec!['b', 'c', 'a']);
    }
}
