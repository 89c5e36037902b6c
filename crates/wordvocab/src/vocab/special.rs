//! # Special Tokens
//!
//! Four reserved control tokens, each with a conventional token id:
//!
//! | Token   | Id |
//! |---------|----|
//! | `<PAD>` | 0  |
//! | `<UNK>` | 1  |
//! | `<SOS>` | 2  |
//! | `<EOS>` | 3  |
//!
//! The conventional id is a preference, not a guarantee; see
//! [`WordVocab::reconcile_specials`](crate::vocab::WordVocab::reconcile_specials).

use crate::types::TokenType;

/// Padding token text.
pub const PAD_TOKEN: &str = "<PAD>";

/// Unknown word token text.
pub const UNK_TOKEN: &str = "<UNK>";

/// Start of sequence token text.
pub const SOS_TOKEN: &str = "<SOS>";

/// End of sequence token text.
pub const EOS_TOKEN: &str = "<EOS>";

/// The number of special tokens.
pub const SPECIAL_TOKEN_COUNT: usize = SpecialToken::ALL.len();

/// A reserved control token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecialToken {
    /// Padding.
    Pad,
    /// Unknown word.
    Unk,
    /// Start of sequence.
    Sos,
    /// End of sequence.
    Eos,
}

impl SpecialToken {
    /// All special tokens, in canonical id order.
    pub const ALL: [SpecialToken; 4] = [
        SpecialToken::Pad,
        SpecialToken::Unk,
        SpecialToken::Sos,
        SpecialToken::Eos,
    ];

    /// The word text of the token.
    pub const fn as_str(self) -> &'static str {
        match self {
            SpecialToken::Pad => PAD_TOKEN,
            SpecialToken::Unk => UNK_TOKEN,
            SpecialToken::Sos => SOS_TOKEN,
            SpecialToken::Eos => EOS_TOKEN,
        }
    }

    /// The conventional token id.
    pub fn canonical_token<T: TokenType>(self) -> T {
        T::from(self as u8)
    }

    /// Look up the special token spelled by `word`, if any.
    pub fn from_word(word: &str) -> Option<SpecialToken> {
        SpecialToken::ALL.into_iter().find(|s| s.as_str() == word)
    }

    /// Is this token dropped from decoded text?
    ///
    /// Only `<UNK>` survives decoding.
    pub const fn is_silent(self) -> bool {
        !matches!(self, SpecialToken::Unk)
    }
}

impl std::fmt::Display for SpecialToken {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
