use std::io::ErrorKind;
use std::path::Path;
use tempdir::TempDir;
use wordvocab::segmentation::split_words;
use wordvocab::store::{JsonFileStore, VocabStore};
use wordvocab::tokenizer::WordTokenizer;
use wordvocab::vocab::{SpecialToken, WordVocab};

type T = u32;

fn file_tokenizer(dir: &Path) -> WordTokenizer<T, JsonFileStore> {
    WordTokenizer::new(JsonFileStore::in_dir(dir).expect("Failed to resolve dir"))
}

fn assert_specials_distinct(vocab: &WordVocab<T>) {
    vocab.try_validate().expect("invalid vocab");

    let mut tokens: Vec<T> = SpecialToken::ALL
        .iter()
        .map(|&s| vocab.special_token(s))
        .collect();
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 4, "special tokens share an id: {vocab:?}");
}

#[test]
fn test_concrete_scenario() {
    let dir = TempDir::new("contract").unwrap();
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, "the cat sat").unwrap();

    let tokenizer = file_tokenizer(dir.path());
    assert_eq!(tokenizer.train_from_path(&corpus).unwrap(), 3);
    assert_eq!(
        tokenizer
            .inspect()
            .iter()
            .map(|(w, t)| (w.as_str(), *t))
            .collect::<Vec<_>>(),
        vec![
            ("<PAD>", 0),
            ("<UNK>", 1),
            ("<SOS>", 2),
            ("<EOS>", 3),
            ("the", 4),
            ("cat", 5),
            ("sat", 6)
        ]
    );

    assert_eq!(tokenizer.encode("the dog", true).unwrap(), vec![2, 4, 7, 3]);

    // A fresh tokenizer sees what was persisted.
    let tokenizer = file_tokenizer(dir.path());
    assert_eq!(tokenizer.load_vocab().lookup_token("dog"), Some(7));
    assert_eq!(tokenizer.decode(&[2, 4, 7, 3]), "the dog");
}

#[test]
fn test_train_missing_file() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());
    let missing = dir.path().join("no_such_corpus.txt");

    let err = tokenizer.train_from_path(&missing).unwrap_err();
    let io_err = err
        .downcast_ref::<std::io::Error>()
        .expect("root cause should be an io::Error");
    assert_eq!(io_err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("no_such_corpus.txt"));

    // Nothing was persisted.
    assert!(!tokenizer.store().path().exists());
}

#[test]
fn test_train_non_utf8_file() {
    let dir = TempDir::new("contract").unwrap();
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, b"caf\xe9 au lait").unwrap();

    let tokenizer = file_tokenizer(dir.path());
    assert_eq!(tokenizer.train_from_path(&corpus).unwrap(), 3);

    let vocab = tokenizer.load_vocab();
    assert_eq!(vocab.lookup_token("caf\u{FFFD}"), Some(4));
    assert_eq!(vocab.lookup_token("lait"), Some(6));
}

#[test]
fn test_train_directory_is_not_a_corpus() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());

    let err = tokenizer.train_from_path(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to read train file: "));
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn test_training_is_additive_and_deduplicating() {
    let dir = TempDir::new("contract").unwrap();
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, "to be or not to be\nthat is the question").unwrap();

    let tokenizer = file_tokenizer(dir.path());
    assert_eq!(tokenizer.train_from_path(&corpus).unwrap(), 8);
    assert_eq!(tokenizer.train_from_path(&corpus).unwrap(), 0);
    assert_eq!(tokenizer.inspect().len(), 12);
}

#[test]
fn test_round_trip() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());

    let samples = [
        "hello world",
        "  leading and trailing   whitespace\t",
        "multi\nline\n\ntext with hello again",
        "punctuation, stays! attached.",
        "",
    ];
    for text in samples {
        let tokens = tokenizer.encode(text, true).unwrap();
        assert_eq!(tokens.len(), split_words(text).count() + 2);

        let expected = split_words(text).collect::<Vec<_>>().join(" ");
        assert_eq!(tokenizer.decode(&tokens), expected);
    }
}

#[test]
fn test_idempotent_re_encode() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());

    let first = tokenizer.encode("a rose is a rose", true).unwrap();
    let second = tokenizer.encode("a rose is a rose", true).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec![2, 4, 5, 6, 4, 5, 3]);
}

#[test]
fn test_disabled_learning_does_not_persist() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());
    tokenizer.train_from_text("something").unwrap();
    let before = std::fs::read_to_string(tokenizer.store().path()).unwrap();

    let tokens = tokenizer.encode("zzz_novel_word", false).unwrap();
    assert_eq!(tokens, vec![2, 1, 3]);

    let after = std::fs::read_to_string(tokenizer.store().path()).unwrap();
    assert_eq!(before, after);
    assert_eq!(tokenizer.load_vocab().lookup_token("zzz_novel_word"), None);
}

#[test]
fn test_unknown_id_decodes_as_unk() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());
    assert_eq!(tokenizer.decode(&[999_999]), "<UNK>");
}

#[test]
fn test_special_token_invariant() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());
    let store = tokenizer.store();

    assert_specials_distinct(&tokenizer.load_vocab());

    tokenizer.train_from_text("alpha beta").unwrap();
    assert_specials_distinct(&tokenizer.load_vocab());

    tokenizer.encode("gamma alpha", true).unwrap();
    assert_specials_distinct(&tokenizer.load_vocab());

    // Hand-edited: specials removed, a word squatting on <SOS>'s id.
    std::fs::write(store.path(), r#"{"alpha": 4, "squatter": 2}"#).unwrap();
    let vocab = tokenizer.load_vocab();
    assert_specials_distinct(&vocab);
    assert_eq!(vocab.lookup_token("squatter"), Some(2));
    assert_eq!(vocab.special_token(SpecialToken::Sos), 5);

    // The reconciled vocabulary was written back.
    let persisted = std::fs::read_to_string(store.path()).unwrap();
    assert!(persisted.contains("\"<SOS>\": 5"));

    tokenizer.encode("delta", true).unwrap();
    let vocab = tokenizer.load_vocab();
    assert_specials_distinct(&vocab);
    assert_eq!(vocab.lookup_token("delta"), Some(6));

    // Corrupt: falls back to a fresh vocabulary.
    std::fs::write(store.path(), "{ truncated").unwrap();
    let vocab = store.load::<T>();
    assert_specials_distinct(&vocab);
    assert_eq!(vocab.len(), 4);
    assert_eq!(tokenizer.decode(&[4]), "<UNK>");
}

#[test]
fn test_numeric_string_ids() {
    let dir = TempDir::new("contract").unwrap();
    let tokenizer = file_tokenizer(dir.path());
    std::fs::write(
        tokenizer.store().path(),
        r#"{"<PAD>": 0, "<UNK>": 1, "<SOS>": 2, "<EOS>": 3, "word": "10"}"#,
    )
    .unwrap();

    assert_eq!(tokenizer.encode("word next", true).unwrap(), vec![2, 10, 11, 3]);
}
