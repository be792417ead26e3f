// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Checks an existing corpus file against the shape it was generated with.

use crate::{Alphabet, CorpusError, CorpusParams};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What a corpus is expected to look like. Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    pub count: Option<u64>,
    pub word_length: Option<usize>,
    pub alphabet: Option<Alphabet>,
}

impl Expectations {
    pub fn from_params(params: &CorpusParams) -> Self {
        Self {
            count: Some(params.count()),
            word_length: Some(params.word_length()),
            alphabet: Some(params.alphabet().clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    WrongLength {
        line: u64,
        expected: usize,
        actual: usize,
    },
    ForeignChar {
        line: u64,
        found: char,
    },
    /// The last line is not newline-terminated
    MissingTerminator {
        line: u64,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::WrongLength {
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {}: expected {} characters, found {}",
                line, expected, actual
            ),
            Violation::ForeignChar { line, found } => {
                write!(f, "line {}: character {:?} is not in the alphabet", line, found)
            }
            Violation::MissingTerminator { line } => {
                write!(f, "line {}: missing trailing newline", line)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    pub lines: u64,
    pub expected_count: Option<u64>,
    pub bad_length_lines: u64,
    pub foreign_char_lines: u64,
    pub missing_terminator: bool,
    pub first_violation: Option<Violation>,
    /// Occurrences of every character across all lines
    pub frequencies: BTreeMap<char, u64>,
}

impl CorpusReport {
    pub fn count_matches(&self) -> bool {
        self.expected_count.map_or(true, |count| count == self.lines)
    }

    pub fn is_valid(&self) -> bool {
        self.count_matches()
            && self.bad_length_lines == 0
            && self.foreign_char_lines == 0
            && !self.missing_terminator
    }

    fn record(&mut self, violation: Violation) {
        if self.first_violation.is_none() {
            self.first_violation = Some(violation);
        }
    }
}

/// Reads a newline-delimited corpus from `reader` and checks it against `expected`.
pub fn verify_corpus<R: BufRead>(
    mut reader: R,
    expected: &Expectations,
) -> Result<CorpusReport, CorpusError> {
    let allowed: Option<BTreeSet<char>> = expected.alphabet.as_ref().map(Alphabet::distinct);
    let mut report = CorpusReport {
        expected_count: expected.count,
        ..CorpusReport::default()
    };
    let mut buf = String::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(CorpusError::sink)?;
        if read == 0 {
            break;
        }
        report.lines += 1;
        let line = report.lines;

        let word = match buf.strip_suffix('\n') {
            Some(word) => word,
            None => {
                report.missing_terminator = true;
                report.record(Violation::MissingTerminator { line });
                buf.as_str()
            }
        };

        let mut length = 0;
        let mut foreign = None;
        for c in word.chars() {
            length += 1;
            *report.frequencies.entry(c).or_insert(0) += 1;
            if let Some(allowed) = &allowed {
                if foreign.is_none() && !allowed.contains(&c) {
                    foreign = Some(c);
                }
            }
        }

        if let Some(expected_length) = expected.word_length {
            if length != expected_length {
                report.bad_length_lines += 1;
                report.record(Violation::WrongLength {
                    line,
                    expected: expected_length,
                    actual: length,
                });
            }
        }
        if let Some(found) = foreign {
            report.foreign_char_lines += 1;
            report.record(Violation::ForeignChar { line, found });
        }
    }

    log::debug!(
        "Verified {} lines ({} with bad length, {} with foreign characters)",
        report.lines,
        report.bad_length_lines,
        report.foreign_char_lines
    );
    Ok(report)
}

pub fn verify_corpus_file<P: AsRef<Path>>(
    path: P,
    expected: &Expectations,
) -> Result<CorpusReport, CorpusError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
    verify_corpus(BufReader::new(file), expected).map_err(|e| match e {
        CorpusError::Io { path: None, source } => CorpusError::io(path, source),
        other => other,
    })
}
