// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::random::entropy_seed;
use crate::{generate, CorpusError, CorpusWriter, GenerationSettings, RandomEngine};
use std::path::PathBuf;

/// Outcome of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub words: u64,
    pub output: PathBuf,
    /// Seed the corpus was generated from; feed it back to reproduce the file.
    pub seed: u64,
    pub engine: RandomEngine,
}

/// Generates the corpus described by `settings` and writes it to its output path.
pub fn run(settings: &GenerationSettings) -> Result<RunSummary, CorpusError> {
    let seed = match settings.seed {
        Some(seed) => seed,
        None => {
            let seed = entropy_seed();
            log::info!("No seed given, using {}", seed);
            seed
        }
    };
    let mut rng = settings.engine.seeded(seed);
    let words = generate(&settings.params, &mut rng);

    log::info!(
        "Writing {} words of length {} to '{}' (engine {}, seed {})",
        settings.params.count(),
        settings.params.word_length(),
        settings.output.display(),
        settings.engine,
        seed
    );

    let written = if settings.atomic {
        CorpusWriter::create_atomic(&settings.output)?
            .with_progress_interval(settings.progress_interval)
            .write_and_publish(words)?
    } else {
        let mut writer = CorpusWriter::create(&settings.output)?
            .with_progress_interval(settings.progress_interval);
        writer.write_all(words)?;
        writer.finish()?
    };

    Ok(RunSummary {
        words: written,
        output: settings.output.clone(),
        seed,
        engine: settings.engine,
    })
}
