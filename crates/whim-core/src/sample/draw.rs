//! Random unique subset draws.

use crate::entropy::{Entropy, shuffle};

/// Draw `count` distinct positions from `pool`.
///
/// Returns an empty result when `count` is zero or exceeds the pool. The
/// pool itself is permuted, so duplicate values at different positions are
/// independently eligible.
pub fn draw_unique<T>(mut pool: Vec<T>, count: usize, rng: &mut dyn Entropy) -> Vec<T> {
    let size = pool.len();
    if count == 0 || count > size {
        return Vec::new();
    }
    if count == 1 && size > 1 {
        let picked = rng.index(size);
        return vec![pool.swap_remove(picked)];
    }
    shuffle(&mut pool, rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_or_too_many_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw_unique(vec![1, 2, 3], 0, &mut rng).is_empty());
        assert!(draw_unique(vec![1, 2, 3], 4, &mut rng).is_empty());
        assert!(draw_unique(Vec::<u8>::new(), 1, &mut rng).is_empty());
    }

    #[test]
    fn single_pick_uses_one_draw() {
        let mut script = ScriptedEntropy::new([2]);
        let picked = draw_unique(vec!["a", "b", "c", "d"], 1, &mut script);
        assert_eq!(picked, vec!["c"]);
        assert_eq!(script.drawn(), 1);
    }

    #[test]
    fn full_draw_returns_whole_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut picked = draw_unique((1..=10).collect::<Vec<u32>>(), 10, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn partial_draw_has_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let mut picked = draw_unique((0..20).collect::<Vec<u32>>(), 7, &mut rng);
            assert_eq!(picked.len(), 7);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 7);
        }
    }

    #[test]
    fn duplicate_values_can_both_be_drawn() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = draw_unique(vec!["x", "x"], 2, &mut rng);
        assert_eq!(picked, vec!["x", "x"]);
    }

    #[test]
    fn single_element_pool() {
        let mut script = ScriptedEntropy::new([0]);
        assert_eq!(draw_unique(vec![42], 1, &mut script), vec![42]);
        assert_eq!(script.drawn(), 0);
    }
}
