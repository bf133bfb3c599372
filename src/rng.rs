/// Deterministic pseudo-random stream derived from a string seed.
///
/// The same seed always produces the same sequence, which is what keeps a
/// user's fortune stable across re-renders within one calendar day. Not
/// cryptographic, and doesn't need to be.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        // FNV-1a over the seed bytes gives a stable starting state,
        // unlike std's DefaultHasher which may change between releases.
        let mut state: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in seed.as_bytes() {
            state ^= u64::from(*byte);
            state = state.wrapping_mul(0x0000_0100_0000_01b3);
        }
        // Never start from zero
        SeededRng { state: state | 1 }
    }

    fn next_u64(&mut self) -> u64 {
        // splitmix64 step
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Next float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next index in [0, bound). `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_f64() * bound as f64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new("2025-06-01-小明-水瓶座");
        let mut b = SeededRng::new("2025-06-01-小明-水瓶座");

        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new("2025-06-01-小明-水瓶座");
        let mut b = SeededRng::new("2025-06-02-小明-水瓶座");

        let same = (0..20).filter(|_| a.next_u64() == b.next_u64()).count();
        assert!(same < 20);
    }

    #[test]
    fn test_float_range() {
        let mut rng = SeededRng::new("range-check");
        for _ in 0..1000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_index_in_bounds() {
        let mut rng = SeededRng::new("index-check");
        for _ in 0..1000 {
            assert!(rng.next_index(7) < 7);
        }
    }
}
