// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use corpus_gen_core::{
    generate, Alphabet, CorpusParams, FastrandRandom, Preset, RandomEngine, StdRandom,
    MAX_WORD_LENGTH,
};

fn collect(params: &CorpusParams, seed: u64) -> Vec<String> {
    let mut rng = FastrandRandom::with_seed(seed);
    generate(params, &mut rng).collect()
}

// ============================================================
// Validation
// ============================================================

#[test]
fn test_negative_count_is_invalid() {
    let err = CorpusParams::new(-1, 5, Alphabet::from("AB")).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_negative_word_length_is_invalid() {
    let err = CorpusParams::new(5, -3, Alphabet::from("AB")).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_empty_alphabet_with_non_trivial_request_is_invalid() {
    let err = CorpusParams::new(1, 2, Alphabet::from("")).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_empty_alphabet_is_fine_when_nothing_is_sampled() {
    assert!(CorpusParams::new(0, 5, Alphabet::default()).is_ok());
    assert!(CorpusParams::new(5, 0, Alphabet::default()).is_ok());
}

#[test]
fn test_word_length_above_limit_is_invalid() {
    let err = CorpusParams::new(1, MAX_WORD_LENGTH as i64 + 1, Alphabet::from("AB")).unwrap_err();
    assert!(err.is_invalid_parameter());

    let err = CorpusParams::new(1, i64::MAX, Alphabet::from("AB")).unwrap_err();
    assert!(err.is_invalid_parameter());

    let err = CorpusParams::from_unsigned(1, usize::MAX, Alphabet::from("AB")).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_word_length_at_limit_is_accepted() {
    let params = CorpusParams::new(0, MAX_WORD_LENGTH as i64, Alphabet::from("AB")).unwrap();
    assert_eq!(params.word_length(), MAX_WORD_LENGTH);
}

// ============================================================
// Shape
// ============================================================

#[test]
fn test_count_length_and_containment() {
    let params = CorpusParams::new(3, 4, Alphabet::from("AB")).unwrap();
    let words = collect(&params, 7);

    assert_eq!(words.len(), 3);
    for word in &words {
        assert_eq!(word.chars().count(), 4);
        assert!(word.chars().all(|c| c == 'A' || c == 'B'), "{}", word);
    }
}

#[test]
fn test_zero_count_yields_nothing() {
    let params = CorpusParams::new(0, 5, Alphabet::from("X")).unwrap();
    assert!(collect(&params, 1).is_empty());
}

#[test]
fn test_zero_length_yields_empty_words() {
    let params = CorpusParams::new(5, 0, Alphabet::from("X")).unwrap();
    assert_eq!(collect(&params, 1), vec![String::new(); 5]);
}

#[test]
fn test_multibyte_alphabet_counts_characters() {
    let params = CorpusParams::new(50, 6, Alphabet::from("éß€")).unwrap();
    for word in collect(&params, 3) {
        assert_eq!(word.chars().count(), 6);
        assert!(word.chars().all(|c| "éß€".contains(c)));
    }
}

#[test]
fn test_preset_words_stay_in_preset_alphabet() {
    for preset in Preset::all() {
        let params = CorpusParams::new(
            2_000,
            preset.word_length() as i64,
            preset.alphabet(),
        )
        .unwrap();
        let alphabet = preset.alphabet();
        for word in collect(&params, 11) {
            assert_eq!(word.len(), preset.word_length());
            assert!(word.chars().all(|c| alphabet.contains(c)));
        }
    }
}

// ============================================================
// Reproducibility
// ============================================================

#[test]
fn test_same_seed_same_corpus() {
    let params = CorpusParams::new(1_000, 8, Preset::Sort.alphabet()).unwrap();
    assert_eq!(collect(&params, 42), collect(&params, 42));
}

#[test]
fn test_different_seeds_differ() {
    let params = CorpusParams::new(1_000, 8, Preset::Sort.alphabet()).unwrap();
    assert_ne!(collect(&params, 1), collect(&params, 2));
}

#[test]
fn test_std_engine_is_reproducible() {
    let params = CorpusParams::new(500, 10, Preset::WordCount.alphabet()).unwrap();
    let mut a = StdRandom::with_seed(9);
    let mut b = StdRandom::with_seed(9);
    let first: Vec<String> = generate(&params, &mut a).collect();
    let second: Vec<String> = generate(&params, &mut b).collect();
    assert_eq!(first, second);
}

#[test]
fn test_boxed_engines_are_reproducible() {
    let params = CorpusParams::new(200, 5, Alphabet::from("ABCDEF")).unwrap();
    for engine in [RandomEngine::Fastrand, RandomEngine::Std] {
        let mut a = engine.seeded(5);
        let mut b = engine.seeded(5);
        let first: Vec<String> = generate(&params, &mut a).collect();
        let second: Vec<String> = generate(&params, &mut b).collect();
        assert_eq!(first, second, "engine {}", engine);
    }
}

#[test]
fn test_generation_is_lazy() {
    let params = CorpusParams::from_unsigned(u64::MAX, 3, Alphabet::from("AB")).unwrap();
    let mut rng = FastrandRandom::with_seed(0);
    let words: Vec<String> = generate(&params, &mut rng).take(3).collect();
    assert_eq!(words.len(), 3);
}

// ============================================================
// Probability weighting
// ============================================================

#[test]
fn test_duplicated_characters_are_drawn_proportionally() {
    let alphabet = Preset::WordCount.alphabet();
    let params = CorpusParams::new(200_000, 5, alphabet.clone()).unwrap();

    let mut letters = 0u64;
    let mut others = 0u64;
    for word in collect(&params, 2024) {
        for c in word.chars() {
            if c.is_ascii_uppercase() {
                letters += 1;
            } else {
                others += 1;
            }
        }
    }

    // 26 letters at weight 2 against 14 symbols at weight 1
    let per_letter = letters as f64 / 26.0;
    let per_other = others as f64 / 14.0;
    let ratio = per_letter / per_other;
    assert!((ratio - 2.0).abs() < 0.05, "ratio {}", ratio);
}

#[test]
fn test_single_duplicate_doubles_its_share() {
    let params = CorpusParams::new(100_000, 1, Alphabet::from("AAB")).unwrap();
    let a = collect(&params, 99)
        .iter()
        .filter(|w| w.as_str() == "A")
        .count() as f64;
    let share = a / 100_000.0;
    assert!((share - 2.0 / 3.0).abs() < 0.01, "share {}", share);
}
