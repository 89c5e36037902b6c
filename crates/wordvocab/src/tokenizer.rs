//! # Word Tokenizer
//!
//! Train, encode, decode, and inspect against a [`VocabStore`].
//!
//! Every operation loads the vocabulary from the store when it starts,
//! and persists any change before it returns; nothing is cached in between.

use crate::segmentation::{split_words, unique_words};
use crate::store::VocabStore;
use crate::types::TokenType;
use crate::vocab::{SpecialToken, WordVocab};
use anyhow::Context;
use std::marker::PhantomData;
use std::path::Path;

/// A word-level tokenizer over a persisted vocabulary.
#[derive(Debug, Clone)]
pub struct WordTokenizer<T: TokenType, S: VocabStore> {
    store: S,
    _token: PhantomData<T>,
}

impl<T: TokenType, S: VocabStore> WordTokenizer<T, S> {
    /// Create a tokenizer over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            _token: PhantomData,
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the current vocabulary from the store.
    pub fn load_vocab(&self) -> WordVocab<T> {
        self.store.load()
    }

    /// Learn every word in the file at `path`.
    ///
    /// Invalid UTF-8 in the file is replaced with `U+FFFD`.
    ///
    /// # Returns
    /// The number of newly learned words.
    ///
    /// # Errors
    /// If the file cannot be read (the root cause is the [`std::io::Error`]),
    /// or the vocabulary cannot be saved.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path)))]
    pub fn train_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read train file: {}", path.display()))?;
        self.train_from_text(&String::from_utf8_lossy(&bytes))
    }

    /// Learn every word in `text`.
    ///
    /// Words are learned in order of first occurrence.
    /// The vocabulary is saved even if nothing new was learned.
    ///
    /// # Returns
    /// The number of newly learned words.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn train_from_text(
        &self,
        text: &str,
    ) -> anyhow::Result<usize> {
        let mut vocab = self.load_vocab();

        let mut added = 0;
        for word in unique_words(text) {
            if vocab.learn_word(word)?.is_some() {
                added += 1;
            }
        }

        self.store.save(&vocab)?;
        log::info!(
            "trained vocabulary: {added} new words, {} total",
            vocab.len()
        );
        Ok(added)
    }

    /// Encode text into tokens, framed by `<SOS>` and `<EOS>`.
    ///
    /// # Arguments
    /// * `text` - the text to encode.
    /// * `learn_new` - learn unknown words; otherwise they encode as `<UNK>`.
    ///
    /// The vocabulary is saved only if a word was learned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
        learn_new: bool,
    ) -> anyhow::Result<Vec<T>> {
        let mut vocab = self.load_vocab();
        let unk = vocab.special_token(SpecialToken::Unk);

        let mut tokens = vec![vocab.special_token(SpecialToken::Sos)];
        let mut learned = 0;
        for word in split_words(text) {
            let token = match vocab.lookup_token(word) {
                Some(token) => token,
                None if learn_new => {
                    learned += 1;
                    vocab.learn_word(word)?.unwrap_or(unk)
                }
                None => unk,
            };
            tokens.push(token);
        }
        tokens.push(vocab.special_token(SpecialToken::Eos));

        if learned > 0 {
            self.store.save(&vocab)?;
            log::info!("learned {learned} new words while encoding");
        }
        Ok(tokens)
    }

    /// Decode tokens into text.
    ///
    /// Unknown tokens decode as `<UNK>`; `<PAD>`, `<SOS>`, and `<EOS>`
    /// are dropped. Words are joined by single spaces.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.decode_options(tokens.iter().map(|&t| Some(t)))
    }

    /// Decode raw integer ids into text.
    ///
    /// As [`Self::decode`]; a `None` id, or an id which does not fit in `T`,
    /// decodes as `<UNK>`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    pub fn decode_raw(
        &self,
        ids: &[Option<u64>],
    ) -> String {
        self.decode_options(ids.iter().map(|id| id.and_then(T::from_u64)))
    }

    fn decode_options<I>(
        &self,
        tokens: I,
    ) -> String
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let vocab = self.load_vocab();
        let unk = SpecialToken::Unk.as_str();

        tokens
            .into_iter()
            .map(|token| token.and_then(|t| vocab.lookup_word(t)).unwrap_or(unk))
            .filter(|word| !SpecialToken::from_word(word).is_some_and(SpecialToken::is_silent))
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// The current ``(word, token)`` pairs, sorted by token.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn inspect(&self) -> Vec<(String, T)> {
        self.load_vocab()
            .sorted_words()
            .into_iter()
            .map(|(word, token)| (word.to_string(), token))
            .collect()
    }
}
