// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Alphabet, CorpusError, CorpusParams, Random};
use std::iter::FusedIterator;

/// Starts a lazy corpus over `params`, drawing from `rng`.
///
/// Nothing is sampled until the iterator is advanced. Re-running with a
/// source seeded identically reproduces the same words in the same order.
pub fn generate<'a, R: Random + ?Sized>(
    params: &'a CorpusParams,
    rng: &'a mut R,
) -> Words<'a, R> {
    log::debug!(
        "Generating {} words of length {} over {} alphabet positions",
        params.count(),
        params.word_length(),
        params.alphabet().len()
    );
    Words {
        alphabet: params.alphabet(),
        word_length: params.word_length(),
        remaining: params.count(),
        rng,
    }
}

/// Generates a single word of `word_length` characters.
pub fn generate_word<R: Random + ?Sized>(
    alphabet: &Alphabet,
    word_length: usize,
    rng: &mut R,
) -> Result<String, CorpusError> {
    if alphabet.is_empty() && word_length > 0 {
        return Err(CorpusError::invalid(
            "cannot sample a non-empty word from an empty alphabet",
        ));
    }
    Ok(sample_word(alphabet, word_length, rng))
}

// Caller guarantees the alphabet is non-empty when word_length > 0.
fn sample_word<R: Random + ?Sized>(
    alphabet: &Alphabet,
    word_length: usize,
    rng: &mut R,
) -> String {
    let chars = alphabet.chars();
    (0..word_length)
        .map(|_| chars[rng.usize(0..chars.len())])
        .collect()
}

/// Single-pass sequence of generated words.
pub struct Words<'a, R: ?Sized> {
    alphabet: &'a Alphabet,
    word_length: usize,
    remaining: u64,
    rng: &'a mut R,
}

impl<'a, R: ?Sized> Words<'a, R> {
    /// Words not yet produced.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<'a, R: Random + ?Sized> Iterator for Words<'a, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(sample_word(self.alphabet, self.word_length, &mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<'a, R: Random + ?Sized> FusedIterator for Words<'a, R> {}
