//! # Vocabulary IO

pub mod json_io;

pub use json_io::{parse_json_words, word_vocab_from_json_str, word_vocab_to_json_string};
