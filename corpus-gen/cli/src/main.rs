// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod args;

use anyhow::{Context, Result};
use args::{Cli, Command, GenerateArgs, VerifyArgs};
use clap::Parser;
use corpus_gen_core::{verify_corpus_file, Alphabet, CorpusConfig, Expectations, Preset};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    ExitCode::from(exit_status(&dispatch(cli)))
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Verify(args) => verify(args),
        Command::Presets => {
            presets();
            Ok(())
        }
    }
}

/// 0 on success; any failure is logged with its full chain and maps to 1.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();

    let base = match &args.config {
        Some(path) => CorpusConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => CorpusConfig::default(),
    };
    let settings = base
        .merge(args.overrides())
        .resolve()
        .context("invalid generation request")?;

    let summary = corpus_gen_core::run(&settings).with_context(|| {
        format!(
            "failed to generate corpus '{}'",
            settings.output.display()
        )
    })?;

    log::info!(
        "Wrote {} words to '{}' in {:.2}s (engine {}, seed {})",
        summary.words,
        summary.output.display(),
        start_time.elapsed().as_secs_f64(),
        summary.engine,
        summary.seed
    );
    Ok(())
}

fn verify(args: VerifyArgs) -> Result<()> {
    let mut expected = match args.preset {
        Some(preset) => Expectations::from_params(&preset.params()),
        None => Expectations::default(),
    };
    if args.count.is_some() {
        expected.count = args.count;
    }
    if args.word_length.is_some() {
        expected.word_length = args.word_length;
    }
    if let Some(alphabet) = args.alphabet.as_deref() {
        expected.alphabet = Some(Alphabet::from(alphabet));
    }

    let report = verify_corpus_file(&args.path, &expected)
        .with_context(|| format!("failed to read corpus '{}'", args.path.display()))?;

    println!("=== {} ===", args.path.display());
    match report.expected_count {
        Some(count) => println!("Lines: {} (expected {})", report.lines, count),
        None => println!("Lines: {}", report.lines),
    }
    println!("Lines with wrong length: {}", report.bad_length_lines);
    println!("Lines with foreign characters: {}", report.foreign_char_lines);
    println!("Character frequencies:");
    for (c, n) in &report.frequencies {
        println!("  {:?}: {}", c, n);
    }

    if let Some(violation) = &report.first_violation {
        println!("First violation: {}", violation);
    }
    if !report.is_valid() {
        anyhow::bail!("corpus '{}' failed verification", args.path.display());
    }
    println!("OK");
    Ok(())
}

fn presets() {
    for preset in Preset::all() {
        println!("{}:", preset);
        println!("  - Count: {}", preset.count());
        println!("  - Word length: {}", preset.word_length());
        println!(
            "  - Alphabet ({} positions): {}",
            preset.alphabet().len(),
            preset.alphabet()
        );
        println!("  - Default output: {}", preset.default_output());
    }
}
