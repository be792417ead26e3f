// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Alphabet, CorpusError};

/// Longest word, in characters, a request may ask for.
///
/// Every word is built in memory before it is written, so the limit keeps a
/// single word to a few tens of MiB instead of aborting on allocation.
pub const MAX_WORD_LENGTH: usize = 1 << 24;

/// A validated generation request.
///
/// # Invariants
/// - the alphabet is non-empty whenever `count > 0` and `word_length > 0`
/// - `word_length <= MAX_WORD_LENGTH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusParams {
    count: u64,
    word_length: usize,
    alphabet: Alphabet,
}

impl CorpusParams {
    /// Validates a request before anything is generated.
    ///
    /// Signed inputs are accepted so that negative values coming from a config
    /// file or the command line surface as `InvalidParameter`.
    pub fn new(count: i64, word_length: i64, alphabet: Alphabet) -> Result<Self, CorpusError> {
        if count < 0 {
            return Err(CorpusError::invalid(format!(
                "count must be non-negative, got {}",
                count
            )));
        }
        if word_length < 0 {
            return Err(CorpusError::invalid(format!(
                "word_length must be non-negative, got {}",
                word_length
            )));
        }
        let word_length = usize::try_from(word_length).map_err(|_| {
            CorpusError::invalid(format!("word_length {} does not fit in memory", word_length))
        })?;

        Self::from_unsigned(count as u64, word_length, alphabet)
    }

    pub fn from_unsigned(
        count: u64,
        word_length: usize,
        alphabet: Alphabet,
    ) -> Result<Self, CorpusError> {
        if word_length > MAX_WORD_LENGTH {
            return Err(CorpusError::invalid(format!(
                "word_length {} exceeds the limit of {}",
                word_length, MAX_WORD_LENGTH
            )));
        }
        if alphabet.is_empty() && count > 0 && word_length > 0 {
            return Err(CorpusError::invalid(format!(
                "alphabet is empty but {} words of length {} were requested",
                count, word_length
            )));
        }

        Ok(Self {
            count,
            word_length,
            alphabet,
        })
    }

    // Built-in presets only; their alphabets are never empty.
    pub(crate) fn preset(count: u64, word_length: usize, alphabet: Alphabet) -> Self {
        Self {
            count,
            word_length,
            alphabet,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
