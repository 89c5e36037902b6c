//! # Text Splitting
//!
//! Words are maximal runs of non-separator characters.
//! Separators are the Unicode `White_Space` characters plus the
//! zero-width no-break space (`U+FEFF`), which shows up as a stray
//! byte-order mark at the start of many text files.

use ahash::AHashSet;

/// Is `c` a word separator?
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Split text into words; empty words are dropped.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|w| !w.is_empty())
}

/// Split text into unique words, in order of first occurrence.
pub fn unique_words(text: &str) -> Vec<&str> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    split_words(text).filter(|w| seen.insert(*w)).collect()
}
