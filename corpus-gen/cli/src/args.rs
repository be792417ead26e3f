// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{Args, Parser, Subcommand};
use corpus_gen_core::{Alphabet, CorpusConfig, Preset, RandomEngine};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random-word corpora for the map-reduce benchmarks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a corpus and write it one word per line
    Generate(GenerateArgs),
    /// Check an existing corpus file
    Verify(VerifyArgs),
    /// List the built-in presets
    Presets,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Preset supplying defaults for anything not set explicitly
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// JSON file with generation settings; flags take precedence over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of words to generate
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Characters per word
    #[arg(long, allow_negative_numbers = true)]
    pub word_length: Option<i64>,

    /// Characters to sample from; repeat a character to make it more likely
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub engine: Option<RandomEngine>,

    /// Write to a temporary file and rename it into place only on success
    #[arg(long)]
    pub atomic: bool,

    /// Log progress every N words (0 disables)
    #[arg(long)]
    pub progress_interval: Option<u64>,
}

impl GenerateArgs {
    /// Settings given on the command line, as a config layer.
    pub fn overrides(&self) -> CorpusConfig {
        CorpusConfig {
            preset: self.preset,
            count: self.count,
            word_length: self.word_length,
            alphabet: self.alphabet.as_deref().map(Alphabet::from),
            output: self.output.clone(),
            seed: self.seed,
            engine: self.engine,
            atomic: self.atomic.then_some(true),
            progress_interval: self.progress_interval,
        }
    }
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Corpus file to check
    pub path: PathBuf,

    /// Check against a preset's count, word length and alphabet
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    #[arg(long)]
    pub count: Option<u64>,

    #[arg(long)]
    pub word_length: Option<usize>,

    #[arg(long)]
    pub alphabet: Option<String>,
}
