pub mod card;
pub mod notice;
pub mod repository;
pub mod review;
pub mod session;
pub mod store;

pub use card::{CardError, Flashcard};
pub use notice::Notice;
pub use repository::{FlashcardRepository, STORAGE_KEY};
pub use review::ReviewState;
pub use session::{FlashcardSession, clear_cards, load_cards, persist_cards};
pub use store::{AnyStore, KeyValueStore, MemoryStore, SqliteStore, default_store_path};
