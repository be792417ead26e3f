// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

#[derive(Debug)]
pub enum CorpusError {
    /// Malformed generation request (negative count or length, empty alphabet
    /// for a non-trivial corpus). Raised before anything is generated.
    InvalidParameter(String),

    /// The sink could not be opened, written, flushed or published.
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    Config { path: PathBuf, message: String },
}

impl CorpusError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CorpusError::InvalidParameter(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub(crate) fn sink(source: std::io::Error) -> Self {
        CorpusError::Io { path: None, source }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, CorpusError::InvalidParameter(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, CorpusError::Io { .. })
    }
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            CorpusError::Io {
                path: Some(path), ..
            } => write!(f, "I/O failure on '{}'", path.display()),
            CorpusError::Io { path: None, .. } => write!(f, "I/O failure on sink"),
            CorpusError::Config { path, message } => {
                write!(f, "Invalid config '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
