// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod alphabet;
pub use alphabet::Alphabet;

mod corpus_error;
pub use corpus_error::CorpusError;

mod corpus_params;
pub use corpus_params::{CorpusParams, MAX_WORD_LENGTH};

mod corpus_generator;
pub use corpus_generator::{generate, generate_word, Words};

mod corpus_writer;
pub use corpus_writer::{
    write_corpus, write_corpus_atomically, write_corpus_to_path, CorpusWriter, Staged,
    DEFAULT_PROGRESS_INTERVAL,
};

mod preset;
pub use preset::Preset;

mod corpus_config;
pub use corpus_config::{CorpusConfig, GenerationSettings};

mod driver;
pub use driver::{run, RunSummary};

pub mod verify;
pub use verify::{verify_corpus, verify_corpus_file, CorpusReport, Expectations, Violation};

pub mod random;
pub use random::{Random, RandomEngine};

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod std_random;
pub use std_random::StdRandom;
