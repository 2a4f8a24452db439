#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from flashcards for tests
pub use flashcards::core::{
    Flashcard, FlashcardRepository, FlashcardSession, KeyValueStore, MemoryStore, Notice,
    ReviewState, STORAGE_KEY, SqliteStore,
};
