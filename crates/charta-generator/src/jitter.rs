use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The only source of randomness in generation. Drives micro-variation
/// (ROM wobble, point rotation, phrase choice), never the macro trend.
pub struct Jitter {
    rng: ChaCha8Rng,
}

impl Jitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One of -1, 0, +1.
    pub fn tri(&mut self) -> i8 {
        self.rng.gen_range(-1..=1)
    }

    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform in `0..=max`.
    pub fn up_to(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..=max)
    }

    /// `count` distinct items in random order.
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
