//! # In-Memory Store

use crate::store::VocabStore;
use std::cell::{Cell, RefCell};

/// A [`VocabStore`] holding its document in memory.
///
/// Counts writes, so callers can observe whether an operation persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `document`.
    pub fn with_document<S: Into<String>>(document: S) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
            writes: Cell::new(0),
        }
    }

    /// A copy of the current document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// The number of [`VocabStore::write_document`] calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl VocabStore for MemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read_document(&self) -> anyhow::Result<Option<String>> {
        Ok(self.document())
    }

    fn write_document(
        &self,
        document: &str,
    ) -> anyhow::Result<()> {
        *self.document.borrow_mut() = Some(document.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.read_document().unwrap(), None);
        assert_eq!(store.write_count(), 0);

        store.write_document("{}").unwrap();
        store.write_document("{\"a\": 4}").unwrap();
        assert_eq!(store.document().as_deref(), Some("{\"a\": 4}"));
        assert_eq!(store.write_count(), 2);

        let store = MemoryStore::with_document("x");
        assert_eq!(store.read_document().unwrap().as_deref(), Some("x"));
        assert_eq!(store.write_count(), 0);
    }
}
