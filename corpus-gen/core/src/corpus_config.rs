// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    Alphabet, CorpusError, CorpusParams, Preset, RandomEngine, DEFAULT_PROGRESS_INTERVAL,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Partial generation settings, as read from a JSON file or the command line.
///
/// Every field is optional; anything left unset falls back to the selected
/// preset (word-count when none is selected). Counts stay signed so that a
/// negative value is reported as an invalid parameter rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    pub preset: Option<Preset>,
    pub count: Option<i64>,
    pub word_length: Option<i64>,
    pub alphabet: Option<Alphabet>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub engine: Option<RandomEngine>,
    pub atomic: Option<bool>,
    pub progress_interval: Option<u64>,
}

impl CorpusConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        let config: CorpusConfig =
            serde_json::from_str(&contents).map_err(|e| CorpusError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        log::debug!("Loaded config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    /// Layers `overrides` on top of `self`, field by field.
    pub fn merge(self, overrides: CorpusConfig) -> CorpusConfig {
        CorpusConfig {
            preset: overrides.preset.or(self.preset),
            count: overrides.count.or(self.count),
            word_length: overrides.word_length.or(self.word_length),
            alphabet: overrides.alphabet.or(self.alphabet),
            output: overrides.output.or(self.output),
            seed: overrides.seed.or(self.seed),
            engine: overrides.engine.or(self.engine),
            atomic: overrides.atomic.or(self.atomic),
            progress_interval: overrides.progress_interval.or(self.progress_interval),
        }
    }

    /// Fills gaps from the preset and validates the result.
    pub fn resolve(self) -> Result<GenerationSettings, CorpusError> {
        let preset = self.preset.unwrap_or_default();
        let count = self.count.unwrap_or(preset.count() as i64);
        let word_length = self.word_length.unwrap_or(preset.word_length() as i64);
        let alphabet = self.alphabet.unwrap_or_else(|| preset.alphabet());
        let params = CorpusParams::new(count, word_length, alphabet)?;

        Ok(GenerationSettings {
            params,
            output: self
                .output
                .unwrap_or_else(|| PathBuf::from(preset.default_output())),
            seed: self.seed,
            engine: self.engine.unwrap_or_default(),
            atomic: self.atomic.unwrap_or(false),
            progress_interval: self.progress_interval.unwrap_or(DEFAULT_PROGRESS_INTERVAL),
        })
    }
}

/// Fully resolved and validated settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub params: CorpusParams,
    pub output: PathBuf,
    /// `None` draws a fresh seed from entropy at run time.
    pub seed: Option<u64>,
    pub engine: RandomEngine,
    /// Stage the corpus in a temporary file and rename it into place on success.
    pub atomic: bool,
    pub progress_interval: u64,
}

impl GenerationSettings {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            params: preset.params(),
            output: PathBuf::from(preset.default_output()),
            seed: None,
            engine: RandomEngine::default(),
            atomic: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
