// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Alphabet, CorpusError, CorpusParams};
use serde::{Deserialize, Serialize};

const DIGITS: &str = "0123456789";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fixed corpus configurations, one per downstream map-reduce job.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Input for the word-count job: 1,000,000 words of 5 characters
    #[default]
    WordCount,
    /// Input for the distributed sort job: 100,000 words of 10 characters
    Sort,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::WordCount, Preset::Sort]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::WordCount => "word-count",
            Preset::Sort => "sort",
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            Preset::WordCount => 1_000_000,
            Preset::Sort => 100_000,
        }
    }

    pub fn word_length(&self) -> usize {
        match self {
            Preset::WordCount => 5,
            Preset::Sort => 10,
        }
    }

    /// Letters appear twice, so each is twice as likely as a digit or symbol.
    pub fn alphabet(&self) -> Alphabet {
        match self {
            Preset::WordCount => Alphabet::from(DIGITS)
                .extended("_-+=", 1)
                .extended(UPPERCASE, 2),
            Preset::Sort => Alphabet::default()
                .extended(UPPERCASE, 2)
                .extended(DIGITS, 1)
                .extended("_-", 1),
        }
    }

    pub fn default_output(&self) -> &'static str {
        match self {
            Preset::WordCount => "random_words",
            Preset::Sort => "random_words_sort",
        }
    }

    pub fn params(&self) -> CorpusParams {
        CorpusParams::preset(self.count(), self.word_length(), self.alphabet())
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CorpusError::invalid(format!("unknown preset '{}'", s)))
    }
}
