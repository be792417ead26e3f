// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{FastrandRandom, StdRandom};
use serde::{Deserialize, Serialize};

/// Source of randomness consumed by the corpus generator.
///
/// Every draw advances the underlying state, so two sources built from the
/// same seed yield the same sequence of draws.
pub trait Random {
    /// Uniform index in `range`. The range must not be empty.
    fn usize(&mut self, range: std::ops::Range<usize>) -> usize;
}

impl<R: Random + ?Sized> Random for &mut R {
    fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
        (**self).usize(range)
    }
}

impl<R: Random + ?Sized> Random for Box<R> {
    fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
        (**self).usize(range)
    }
}

/// Concrete generator behind a [`Random`] source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RandomEngine {
    /// wyrand, via `fastrand`
    #[default]
    Fastrand,
    /// `rand`'s `StdRng`
    Std,
}

impl RandomEngine {
    pub fn name(&self) -> &'static str {
        match self {
            RandomEngine::Fastrand => "fastrand",
            RandomEngine::Std => "std",
        }
    }

    pub fn seeded(&self, seed: u64) -> Box<dyn Random> {
        match self {
            RandomEngine::Fastrand => Box::new(FastrandRandom::with_seed(seed)),
            RandomEngine::Std => Box::new(StdRandom::with_seed(seed)),
        }
    }
}

/// Draws a fresh seed from process entropy.
pub fn entropy_seed() -> u64 {
    fastrand::u64(..)
}

impl std::fmt::Display for RandomEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
