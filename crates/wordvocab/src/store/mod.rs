//! # Vocabulary Stores
//!
//! A [`VocabStore`] holds one persisted vocabulary document.
//! Implementations provide raw document access; loading and saving
//! policy is shared through the provided methods.

pub mod file_store;
pub mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;

use crate::types::TokenType;
use crate::vocab::WordVocab;
use crate::vocab::io::json_io::{word_vocab_from_json_str, word_vocab_to_json_string};

/// Trait for durable vocabulary storage.
pub trait VocabStore {
    /// A human readable description of where the vocabulary lives.
    fn location(&self) -> String;

    /// Read the persisted document.
    ///
    /// # Returns
    /// `None` if nothing has been persisted yet.
    fn read_document(&self) -> anyhow::Result<Option<String>>;

    /// Replace the persisted document.
    fn write_document(
        &self,
        document: &str,
    ) -> anyhow::Result<()>;

    /// Load the current vocabulary.
    ///
    /// Never fails:
    /// * nothing persisted yields a fresh vocabulary of special tokens;
    /// * an empty, unreadable, or unparseable document is logged,
    ///   and also yields a fresh vocabulary;
    /// * a parsed vocabulary missing special tokens is reconciled,
    ///   and the corrected vocabulary is persisted.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    fn load<T: TokenType>(&self) -> WordVocab<T> {
        let document = match self.read_document() {
            Ok(Some(document)) => document,
            Ok(None) => {
                log::debug!("no vocabulary at {}; starting fresh", self.location());
                return WordVocab::with_specials();
            }
            Err(err) => {
                log::warn!(
                    "failed to read vocabulary at {}; reinitializing: {err:#}",
                    self.location()
                );
                return WordVocab::with_specials();
            }
        };

        if document.trim().is_empty() {
            log::debug!("empty vocabulary at {}; starting fresh", self.location());
            return WordVocab::with_specials();
        }

        let mut vocab: WordVocab<T> = match word_vocab_from_json_str(&document) {
            Ok(vocab) => vocab,
            Err(err) => {
                log::warn!(
                    "failed to parse vocabulary at {}; reinitializing: {err:#}",
                    self.location()
                );
                return WordVocab::with_specials();
            }
        };

        if vocab.reconcile_specials() {
            log::info!("restored missing special tokens in {}", self.location());
            if let Err(err) = self.save(&vocab) {
                log::warn!(
                    "failed to persist restored special tokens to {}: {err:#}",
                    self.location()
                );
            }
        }

        log::debug!(
            "loaded {} words from {}",
            vocab.len(),
            self.location()
        );
        vocab
    }

    /// Persist the vocabulary, replacing the stored document.
    fn save<T: TokenType>(
        &self,
        vocab: &WordVocab<T>,
    ) -> anyhow::Result<()> {
        let document = word_vocab_to_json_string(vocab)?;
        self.write_document(&document)?;
        log::debug!("saved {} words to {}", vocab.len(), self.location());
        Ok(())
    }
}

impl<S: VocabStore + ?Sized> VocabStore for &S {
    fn location(&self) -> String {
        (**self).location()
    }

    fn read_document(&self) -> anyhow::Result<Option<String>> {
        (**self).read_document()
    }

    fn write_document(
        &self,
        document: &str,
    ) -> anyhow::Result<()> {
        (**self).write_document(document)
    }
}
