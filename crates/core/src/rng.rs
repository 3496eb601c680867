//! Sequential pseudo-random stream threaded through every generation stage.
//!
//! Reproducibility depends on a single stream consumed in one fixed order:
//! partition axis/cut draws, room size/offset draws, spanning-corridor carve
//! directions, loop-edge picks with their carve directions, enemy
//! probability/prototype rolls, then loot rolls. Stages receive
//! `&mut GenerationRng`; nothing draws from ambient state.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct GenerationRng {
    stream: ChaCha8Rng,
}

impl GenerationRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { stream: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        (self.stream.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }

    /// Uniform draw in `[min, max_exclusive)`.
    pub fn range_i32(&mut self, min: i32, max_exclusive: i32) -> i32 {
        debug_assert!(min < max_exclusive);
        let span = (max_exclusive - min) as u64;
        min + (self.stream.next_u64() % span) as i32
    }

    /// Uniform index into a collection of `len` elements.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.stream.next_u64() as usize % len
    }

    pub fn coin_flip(&mut self) -> bool {
        self.next_unit() < 0.5
    }
}
