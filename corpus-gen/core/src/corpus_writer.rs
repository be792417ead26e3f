// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CorpusError;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Words written between two progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Writes words to a sink, one per line.
///
/// The sink is owned by the writer and buffered. It is released when the
/// writer is dropped, whether or not [`CorpusWriter::finish`] was reached, so
/// a failure half-way through never leaks an open handle. Lines already
/// written are not rolled back.
pub struct CorpusWriter<W: Write> {
    sink: BufWriter<W>,
    path: Option<PathBuf>,
    written: u64,
    progress_interval: u64,
}

impl CorpusWriter<File> {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| CorpusError::io(path, e))?;

        Ok(Self::new(file).at(path))
    }
}

impl CorpusWriter<Staged> {
    /// Stages the corpus in a temporary file next to `path`.
    ///
    /// `path` is only replaced by [`CorpusWriter::publish`]; dropping the
    /// writer before that deletes the temporary file.
    pub fn create_atomic<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let dest = path.as_ref().to_path_buf();
        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut builder = tempfile::Builder::new();
        // Same mode `create` gets from OpenOptions; the umask still applies.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let file = builder
            .tempfile_in(&dir)
            .map_err(|e| CorpusError::io(&dir, e))?;
        log::debug!(
            "Staging corpus for '{}' in '{}'",
            dest.display(),
            file.path().display()
        );

        Ok(Self::new(Staged {
            file,
            dest: dest.clone(),
        })
        .at(&dest))
    }

    /// Writes `words` and publishes them, or discards the staged file on failure.
    pub fn write_and_publish<I, S>(mut self, words: I) -> Result<u64, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Err(e) = self.write_all(words) {
            log::warn!(
                "Discarding partial corpus for '{}' after {} words",
                self.label(),
                self.written
            );
            return Err(e);
        }
        self.publish()
    }

    /// Flushes the staged corpus and renames it over the destination.
    pub fn publish(self) -> Result<u64, CorpusError> {
        let written = self.written;
        let staged = match self.sink.into_inner() {
            Ok(staged) => staged,
            Err(e) => {
                let (source, writer) = e.into_parts();
                return Err(CorpusError::io(&writer.get_ref().dest, source));
            }
        };

        let Staged { file, dest } = staged;
        file.persist(&dest).map_err(|e| CorpusError::io(&dest, e.error))?;
        log::info!("Published {} words to '{}'", written, dest.display());
        Ok(written)
    }
}

impl<W: Write> CorpusWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: BufWriter::new(sink),
            path: None,
            written: 0,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Logs progress every `interval` words; `0` disables progress logging.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    fn at(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    fn fail(&self, source: std::io::Error) -> CorpusError {
        match &self.path {
            Some(path) => CorpusError::io(path, source),
            None => CorpusError::sink(source),
        }
    }

    fn label(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "sink".to_owned(),
        }
    }

    pub fn write_word(&mut self, word: &str) -> Result<(), CorpusError> {
        let result = self
            .sink
            .write_all(word.as_bytes())
            .and_then(|_| self.sink.write_all(b"\n"));
        if let Err(e) = result {
            return Err(self.fail(e));
        }
        self.written += 1;

        if self.progress_interval > 0 && self.written % self.progress_interval == 0 {
            log::info!("{}: wrote {} words", self.label(), self.written);
        }
        Ok(())
    }

    /// Writes every word in order and returns how many were written by this call.
    pub fn write_all<I, S>(&mut self, words: I) -> Result<u64, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.written;
        for word in words {
            self.write_word(word.as_ref())?;
        }
        Ok(self.written - before)
    }

    /// Flushes the sink, releases it and returns the total word count.
    pub fn finish(mut self) -> Result<u64, CorpusError> {
        if let Err(e) = self.sink.flush() {
            return Err(self.fail(e));
        }
        Ok(self.written)
    }
}

/// Temporary file that replaces `dest` once the corpus is complete.
pub struct Staged {
    file: NamedTempFile,
    dest: PathBuf,
}

impl Write for Staged {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

/// Writes `words` to `sink`, one per line, and returns the number written.
pub fn write_corpus<W, I, S>(sink: W, words: I) -> Result<u64, CorpusError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = CorpusWriter::new(sink);
    writer.write_all(words)?;
    writer.finish()
}

/// Writes `words` to the file at `path`, truncating any previous content.
pub fn write_corpus_to_path<P, I, S>(path: P, words: I) -> Result<u64, CorpusError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = CorpusWriter::create(path)?;
    writer.write_all(words)?;
    writer.finish()
}

/// Like [`write_corpus_to_path`], but `path` only ever holds a complete corpus.
///
/// On failure the staged file is removed and an existing `path` is left as it was.
pub fn write_corpus_atomically<P, I, S>(path: P, words: I) -> Result<u64, CorpusError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CorpusWriter::create_atomic(path)?.write_and_publish(words)
}
