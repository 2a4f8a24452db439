mod memory;
mod sqlite;

use std::{future::Future, path::PathBuf};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

const APP_NAME: &str = "flashcards";
const STORE_FILE_NAME: &str = "store.db";

/// `<local data dir>/flashcards/store.db`, or `./flashcards.db` on platforms
/// without a data directory.
pub fn default_store_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join(APP_NAME).join(STORE_FILE_NAME),
        None => PathBuf::from("flashcards.db"),
    }
}

/// String-valued key-value persistence supplied by the host.
///
/// Removing a key that does not exist is not an error.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: String) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn remove(&self, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Either of the built-in stores, picked at startup.
#[derive(Debug, Clone)]
pub enum AnyStore {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl KeyValueStore for AnyStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match self {
            AnyStore::Sqlite(store) => store.get(key).await,
            AnyStore::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        match self {
            AnyStore::Sqlite(store) => store.set(key, value).await,
            AnyStore::Memory(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        match self {
            AnyStore::Sqlite(store) => store.remove(key).await,
            AnyStore::Memory(store) => store.remove(key).await,
        }
    }
}
