//! # Vocabulary

pub mod io;
pub mod special;
pub mod word_vocab;

pub use special::{SPECIAL_TOKEN_COUNT, SpecialToken};
pub use word_vocab::WordVocab;
