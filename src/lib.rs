pub mod core;

pub use crate::core::{Flashcard, FlashcardRepository, KeyValueStore, Notice, ReviewState};

#[cfg(feature = "gui")]
pub mod gui;
