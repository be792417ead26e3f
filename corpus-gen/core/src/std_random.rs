// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Random for StdRandom {
    fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.rng.random_range(range)
    }
}
