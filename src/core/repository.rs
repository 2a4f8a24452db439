use std::sync::Arc;

use anyhow::Context;

use crate::core::{card::Flashcard, store::KeyValueStore};

/// Key holding the whole collection.
pub const STORAGE_KEY: &str = "@flashcards";

/// Reads and writes the flashcard collection as one JSON blob.
///
/// Every save rewrites the whole collection; there are no per-card keys.
#[derive(Debug)]
pub struct FlashcardRepository<S> {
    store: Arc<S>,
}

impl<S> Clone for FlashcardRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> FlashcardRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored collection, or `None` if nothing has been stored yet.
    pub async fn load(&self) -> anyhow::Result<Option<Vec<Flashcard>>> {
        let Some(blob) = self.store.get(STORAGE_KEY).await? else {
            log::info!("no stored flashcards");
            return Ok(None);
        };
        let cards: Vec<Flashcard> =
            serde_json::from_str(&blob).context("Stored flashcards are not a valid collection")?;
        log::info!("loaded {} flashcards", cards.len());
        Ok(Some(cards))
    }

    /// Like [`load`](Self::load), but an empty store yields the sample card.
    /// The sample is not written back.
    pub async fn load_or_sample(&self) -> anyhow::Result<Vec<Flashcard>> {
        Ok(self
            .load()
            .await?
            .unwrap_or_else(|| vec![Flashcard::sample()]))
    }

    pub async fn save(&self, cards: &[Flashcard]) -> anyhow::Result<()> {
        let blob = serde_json::to_string(cards).context("Failed to serialize flashcards")?;
        self.store.set(STORAGE_KEY, blob).await?;
        log::info!("saved {} flashcards", cards.len());
        Ok(())
    }

    /// Removes the stored key entirely rather than storing an empty list.
    pub async fn clear(&self) -> anyhow::Result<()> {
        self.store.remove(STORAGE_KEY).await?;
        log::info!("cleared stored flashcards");
        Ok(())
    }
}
