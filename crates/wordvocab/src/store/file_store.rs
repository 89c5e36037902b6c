//! # JSON File Store

use crate::DEFAULT_VOCAB_FILE;
use crate::store::VocabStore;
use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A [`VocabStore`] backed by a single JSON file.
///
/// Writes overwrite the whole file; there is no locking,
/// so concurrent writers race and the last one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for [`DEFAULT_VOCAB_FILE`] inside `dir`.
    ///
    /// A relative `dir` is resolved against the current working directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = std::path::absolute(dir.as_ref())
            .with_context(|| format!("failed to resolve directory: {}", dir.as_ref().display()))?;
        Ok(Self::new(dir.join(DEFAULT_VOCAB_FILE)))
    }

    /// The path of the vocabulary file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_document(&self) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read vocabulary file: {}", self.path.display())),
        }
    }

    fn write_document(
        &self,
        document: &str,
    ) -> anyhow::Result<()> {
        std::fs::write(&self.path, document)
            .with_context(|| format!("failed to write vocabulary file: {}", self.path.display()))
    }
}
