use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed drawn from OS entropy, kept so the layout can be reproduced.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Fair coin.
    pub fn flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Fisher-Yates from the last index down, each slot swapped with a
    /// uniformly chosen index at or below it.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// `count` distinct indices out of `0..len`, uniformly without replacement.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        self.shuffle(&mut indices);
        indices.truncate(count.min(len));
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngState::from_seed(7);
        let mut b = RngState::from_seed(7);
        let mut left: Vec<u32> = (0..20).collect();
        let mut right = left.clone();
        a.shuffle(&mut left);
        b.shuffle(&mut right);
        assert_eq!(left, right);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn sample_indices_are_distinct_and_bounded() {
        let mut rng = RngState::from_seed(99);
        let picked = rng.sample_indices(78, 13);
        assert_eq!(picked.len(), 13);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 13);
        assert!(picked.iter().all(|idx| *idx < 78));
        assert_eq!(rng.sample_indices(5, 10).len(), 5);
    }
}
