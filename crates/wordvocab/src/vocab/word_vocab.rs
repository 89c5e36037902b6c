//! # Word ``{ String <-> T }`` Token Vocabulary

use crate::types::{TokenToWordMap, TokenType, WordToTokenMap};
use crate::vocab::special::{SPECIAL_TOKEN_COUNT, SpecialToken};
use serde::{Serialize, Serializer};

/// Bidirectional ``{ word <-> T }`` vocabulary, with a next-token counter.
///
/// The forward and reverse maps are kept as exact inverses;
/// every mutation goes through methods which update both.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    /// Map of ``{ word -> T }``.
    words: WordToTokenMap<T>,

    /// Map of ``{ T -> word }``.
    tokens: TokenToWordMap<T>,

    /// The token the next learned word will receive.
    next_token: T,
}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self::with_specials()
    }
}

/// Serializes as a ``{ word: token }`` map, in ascending token order.
impl<T: TokenType> Serialize for WordVocab<T> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.sorted_words())
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary holding only the special tokens, at their canonical ids.
    pub fn with_specials() -> Self {
        let mut vocab = Self::empty();
        for special in SpecialToken::ALL {
            vocab.insert(special.as_str().to_string(), special.canonical_token());
        }
        vocab.next_token = special_count::<T>();
        vocab
    }

    fn empty() -> Self {
        Self {
            words: Default::default(),
            tokens: Default::default(),
            next_token: T::zero(),
        }
    }

    /// Adopt a ``(word, token)`` listing as the forward map.
    ///
    /// The reverse map is derived from the listing; when several words claim
    /// the same token, the first one keeps it and the rest are dropped.
    /// The next token is one past the largest token, or the special token
    /// count when the listing is empty. A token with no successor in `T`
    /// is dropped, so the next token always fits.
    ///
    /// Special tokens are *not* reconciled; see [`Self::reconcile_specials`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut vocab = Self::empty();
        for (word, token) in words {
            let word = word.into();
            if token.checked_add(&T::one()).is_none() {
                log::warn!("token {token} is the largest representable id; dropping {word:?}");
                continue;
            }
            if let Some(owner) = vocab.tokens.get(&token) {
                log::warn!(
                    "token {token} is claimed by both {owner:?} and {word:?}; dropping {word:?}"
                );
                continue;
            }
            if let Some(previous) = vocab.words.remove(&word) {
                vocab.tokens.remove(&previous);
            }
            vocab.insert(word, token);
        }

        vocab.next_token = match vocab.tokens.keys().max() {
            Some(&max) => max + T::one(),
            None => special_count::<T>(),
        };
        vocab
    }

    /// The number of words in the vocabulary, including special tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the vocabulary contains no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The token the next learned word will receive.
    pub fn next_token(&self) -> T {
        self.next_token
    }

    /// Iterate over the ``(word, token)`` pairs, in no particular order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a String, &'a T)> + 'a {
        self.words.iter()
    }

    /// The ``(word, token)`` pairs, sorted by token.
    pub fn sorted_words(&self) -> Vec<(&str, T)> {
        let mut items: Vec<(&str, T)> = self
            .words
            .iter()
            .map(|(word, &token)| (word.as_str(), token))
            .collect();
        items.sort_by_key(|&(_, token)| token);
        items
    }

    /// Is `word` in the vocabulary?
    pub fn contains_word(
        &self,
        word: &str,
    ) -> bool {
        self.words.contains_key(word)
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.words.get(word).copied()
    }

    /// Return the associated word for the token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.tokens.get(&token).map(String::as_str)
    }

    /// The token currently assigned to a special token.
    ///
    /// Falls back to the canonical token if the special is absent,
    /// which cannot happen after [`Self::reconcile_specials`].
    pub fn special_token(
        &self,
        special: SpecialToken,
    ) -> T {
        self.lookup_token(special.as_str())
            .unwrap_or_else(|| special.canonical_token())
    }

    /// Learn a word, if it is not already known.
    ///
    /// # Returns
    /// The newly assigned token; `None` if the word was already known.
    ///
    /// # Errors
    /// If every token of `T` is already taken.
    pub fn learn_word(
        &mut self,
        word: &str,
    ) -> anyhow::Result<Option<T>> {
        if self.contains_word(word) {
            return Ok(None);
        }
        let Some(token) = self.take_next_token() else {
            anyhow::bail!(
                "vocabulary is full: no token after {} for {word:?}",
                self.next_token
            );
        };
        self.insert(word.to_string(), token);
        Ok(Some(token))
    }

    /// Ensure all special tokens are present.
    ///
    /// A missing special token receives its canonical id, unless that id
    /// already belongs to another word; then it receives the next token.
    /// If no token is left, that other word is dropped instead.
    ///
    /// # Returns
    /// `true` if the vocabulary was changed.
    pub fn reconcile_specials(&mut self) -> bool {
        let mut changed = false;
        for special in SpecialToken::ALL {
            let word = special.as_str();
            if self.contains_word(word) {
                continue;
            }

            let canonical: T = special.canonical_token();
            let owner = self.lookup_word(canonical).map(str::to_string);
            let token = match owner {
                Some(owner) => match self.take_next_token() {
                    Some(token) => {
                        log::warn!(
                            "{word} is missing and its id {canonical} belongs to {owner:?}; \
                             assigning {word} id {token}"
                        );
                        token
                    }
                    None => {
                        log::warn!(
                            "{word} is missing, its id {canonical} belongs to {owner:?}, \
                             and no id is free; dropping {owner:?}"
                        );
                        self.words.remove(&owner);
                        canonical
                    }
                },
                None => {
                    if self.next_token <= canonical {
                        self.next_token = canonical + T::one();
                    }
                    canonical
                }
            };
            self.insert(word.to_string(), token);
            changed = true;
        }
        changed
    }

    /// Check the vocabulary invariants.
    ///
    /// * the forward and reverse maps are inverses;
    /// * every special token is present;
    /// * every token is below the next token.
    pub fn try_validate(&self) -> anyhow::Result<()> {
        if self.words.len() != self.tokens.len() {
            anyhow::bail!(
                "forward map has {} words, reverse map has {} tokens",
                self.words.len(),
                self.tokens.len()
            );
        }
        for (word, &token) in self.iter() {
            match self.tokens.get(&token) {
                Some(owner) if owner == word => {}
                owner => anyhow::bail!("{word:?} -> {token} but {token} -> {owner:?}"),
            }
            if token >= self.next_token {
                anyhow::bail!(
                    "{word:?} -> {token} is not below the next token {}",
                    self.next_token
                );
            }
        }
        for special in SpecialToken::ALL {
            if !self.contains_word(special.as_str()) {
                anyhow::bail!("special token {special} is missing");
            }
        }
        Ok(())
    }

    /// The largest id of `T` is never handed out; it only marks exhaustion.
    fn take_next_token(&mut self) -> Option<T> {
        let token = self.next_token;
        self.next_token = token.checked_add(&T::one())?;
        Some(token)
    }

    fn insert(
        &mut self,
        word: String,
        token: T,
    ) {
        self.tokens.insert(token, word.clone());
        self.words.insert(word, token);
    }
}

fn special_count<T: TokenType>() -> T {
    T::from(SPECIAL_TOKEN_COUNT as u8)
}
