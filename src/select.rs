use crate::error::{FortuneError, Result};
use crate::rng::SeededRng;

/// Pick one entry from a non-empty pool, consuming one draw from the stream.
pub fn pick<'a, T>(pool: &'a [T], rng: &mut SeededRng) -> &'a T {
    debug_assert!(!pool.is_empty());
    &pool[rng.next_index(pool.len())]
}

/// Pick an ordered subset of `count` distinct entries via a partial
/// Fisher-Yates shuffle over the same rng stream. The stream is consumed
/// monotonically, so a synthesizer sequencing several picks against one rng
/// gets one reproducible batch per seed.
pub fn pick_distinct<'a, T>(pool: &'a [T], count: usize, rng: &mut SeededRng) -> Result<Vec<&'a T>> {
    if count > pool.len() {
        return Err(FortuneError::InvalidInput(format!(
            "requested {} distinct entries from a pool of {}",
            count,
            pool.len()
        )));
    }

    let mut indices: Vec<usize> = (0..pool.len()).collect();
    for i in 0..count {
        let j = i + rng.next_index(pool.len() - i);
        indices.swap(i, j);
    }

    Ok(indices[..count].iter().map(|&i| &pool[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚"];

    #[test]
    fn test_pick_is_deterministic() {
        let mut a = SeededRng::new("pick-seed");
        let mut b = SeededRng::new("pick-seed");
        assert_eq!(pick(POOL, &mut a), pick(POOL, &mut b));
    }

    #[test]
    fn test_pick_distinct_no_duplicates() {
        for seed in ["a", "b", "c", "2025-01-01-测试-狮子座"] {
            let mut rng = SeededRng::new(seed);
            let chosen = pick_distinct(POOL, 5, &mut rng).unwrap();
            assert_eq!(chosen.len(), 5);
            for i in 0..chosen.len() {
                for j in (i + 1)..chosen.len() {
                    assert_ne!(chosen[i], chosen[j], "seed {seed} produced a duplicate");
                }
            }
        }
    }

    #[test]
    fn test_pick_distinct_full_pool() {
        let mut rng = SeededRng::new("full");
        let chosen = pick_distinct(POOL, POOL.len(), &mut rng).unwrap();
        assert_eq!(chosen.len(), POOL.len());
    }

    #[test]
    fn test_pick_distinct_rejects_oversized_request() {
        let mut rng = SeededRng::new("too-many");
        let result = pick_distinct(POOL, POOL.len() + 1, &mut rng);
        assert!(matches!(result, Err(FortuneError::InvalidInput(_))));
    }

    #[test]
    fn test_shared_stream_is_reproducible() {
        let mut a = SeededRng::new("batch");
        let mut b = SeededRng::new("batch");

        let first_a = *pick(POOL, &mut a);
        let rest_a: Vec<&str> = pick_distinct(POOL, 3, &mut a).unwrap().into_iter().copied().collect();
        let first_b = *pick(POOL, &mut b);
        let rest_b: Vec<&str> = pick_distinct(POOL, 3, &mut b).unwrap().into_iter().copied().collect();

        assert_eq!(first_a, first_b);
        assert_eq!(rest_a, rest_b);
    }
}
