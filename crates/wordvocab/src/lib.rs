//! # Word-Level Tokenizer
//!
//! A persistent ``{ word <-> token }`` vocabulary, with whitespace word
//! splitting, unknown-word learning, and reserved special tokens.
//!
//! # Example
//!
//! ```rust,no_run
//! use wordvocab::store::JsonFileStore;
//! use wordvocab::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::<u32, _>::new(JsonFileStore::in_dir(".")?);
//!
//! let added = tokenizer.train_from_path("corpus.txt")?;
//! println!("added {added} words");
//!
//! let tokens = tokenizer.encode("the cat sat", true)?;
//! assert_eq!(tokenizer.decode(&tokens), "the cat sat");
//! # Ok::<(), anyhow::Error>(())
//! ```
#![warn(missing_docs, unused)]

pub mod segmentation;
pub mod store;
pub mod tokenizer;
pub mod types;
pub mod vocab;

/// Default file name of the persisted vocabulary.
pub const DEFAULT_VOCAB_FILE: &str = "vocab.json";

/// Default file name of the training corpus.
pub const DEFAULT_CORPUS_FILE: &str = "corpus.txt";
