// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Ordered sequence of characters words are sampled from.
///
/// Sampling is uniform over positions, so a character listed twice is drawn
/// twice as often as one listed once. Duplicates are therefore kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of positions holding `c`.
    pub fn multiplicity(&self, c: char) -> usize {
        self.chars.iter().filter(|&&x| x == c).count()
    }

    /// Distinct characters, sorted.
    pub fn distinct(&self) -> BTreeSet<char> {
        self.chars.iter().copied().collect()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Appends every character of `chars`, repeated `times` times.
    pub fn extended(mut self, chars: &str, times: usize) -> Self {
        for _ in 0..times {
            self.chars.extend(chars.chars());
        }
        self
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

impl From<String> for Alphabet {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Alphabet::from(s))
    }
}
