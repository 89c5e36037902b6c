//! # JSON Vocabulary IO
//!
//! The persisted form of a [`WordVocab`] is a single JSON object,
//! ``{ "word": token, ... }``, pretty-printed in ascending token order.

use crate::types::TokenType;
use crate::vocab::WordVocab;
use serde_json::Value;

/// Parse a JSON vocabulary document into ``(word, token)`` pairs, in document order.
///
/// Entries whose value is not a valid token are dropped with a warning.
/// A token is valid if it is a non-negative JSON integer, or a string
/// holding one (`"7"`), which fits in `T`.
///
/// # Errors
/// If the document is not JSON, or its top level is not an object.
pub fn parse_json_words<T: TokenType>(document: &str) -> anyhow::Result<Vec<(String, T)>> {
    let value: Value = serde_json::from_str(document)?;
    let Value::Object(map) = value else {
        anyhow::bail!("expected a JSON object, found: {}", json_kind(&value));
    };

    let mut words = Vec::with_capacity(map.len());
    for (word, value) in map {
        match token_from_json::<T>(&value) {
            Some(token) => words.push((word, token)),
            None => log::warn!("dropping vocabulary entry {word:?}: {value} is not a token id"),
        }
    }
    Ok(words)
}

/// Parse a JSON vocabulary document into a [`WordVocab`].
///
/// Special tokens are *not* reconciled.
pub fn word_vocab_from_json_str<T: TokenType>(document: &str) -> anyhow::Result<WordVocab<T>> {
    Ok(WordVocab::from_words(parse_json_words::<T>(document)?))
}

fn token_from_json<T: TokenType>(value: &Value) -> Option<T> {
    let token = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    T::from_u64(token)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a [`WordVocab`] as a pretty-printed JSON document.
pub fn word_vocab_to_json_string<T: TokenType>(vocab: &WordVocab<T>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(vocab)?)
}
