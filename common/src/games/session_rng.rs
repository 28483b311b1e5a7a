use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single source of randomness for a play session. Everything random in a
/// session (dice, easy moves, medium fallback) draws from here, so a session
/// replays identically from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniform pick from a non-empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_range(0..items.len());
        Some(items[idx])
    }

    pub fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }

    /// Independent generator whose seed is drawn from this one.
    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random())
    }
}
