use std::sync::atomic::{AtomicBool, Ordering};

use flashcards::core::{Flashcard, FlashcardRepository, KeyValueStore, MemoryStore, SqliteStore};

/// Creates a SqliteStore in a temporary directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("store.db");
    let store = SqliteStore::open(&path)
        .await
        .expect("Failed to create test store");
    (store, dir)
}

pub fn memory_repo() -> (FlashcardRepository<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    (FlashcardRepository::new(store.clone()), store)
}

pub fn card(question: &str, answer: &str) -> Flashcard {
    Flashcard::new(question, answer).expect("test card should be valid")
}

/// `n` cards named `Q0/A0`, `Q1/A1`, ...
pub fn numbered_cards(n: usize) -> Vec<Flashcard> {
    (0..n)
        .map(|i| card(&format!("Q{i}"), &format!("A{i}")))
        .collect()
}

pub fn questions(cards: &[Flashcard]) -> Vec<&str> {
    cards.iter().map(|c| c.question.as_str()).collect()
}

/// A MemoryStore whose reads and writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FailingStore {
    pub fn failing_writes(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(true),
        }
    }

    pub fn failing_reads(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(true),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("read of {key} refused");
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("write of {key} refused");
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("remove of {key} refused");
        }
        self.inner.remove(key).await
    }
}
