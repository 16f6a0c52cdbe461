use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Rejection-samples a value in `[0, max)` from `next_u64() & mask`.
    /// `mask` must cover `max - 1`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Uniform index in `[0, n)`.
    #[inline(always)]
    pub fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        let mask: u64 = (n as u64).next_power_of_two() - 1;
        self.next_u64n(n as u64, mask) as usize
    }

    #[inline(always)]
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_stays_in_range() {
        let mut source: Source = Source::new([7u8; 32]);
        for n in [1usize, 2, 3, 31, 32, 500, 512] {
            for _ in 0..256 {
                assert!(source.next_index(n) < n);
            }
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut s0: Source = Source::new([1u8; 32]);
        let mut s1: Source = Source::new([1u8; 32]);
        for _ in 0..16 {
            assert_eq!(s0.next_index(512), s1.next_index(512));
        }
    }
}
