use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tokio::fs as async_fs;

use super::KeyValueStore;

/// Key-value store kept in a single SQLite table.
///
/// The pool holds one connection: the app is the only writer and every
/// write replaces a whole value, so there is nothing to gain from more.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_file: Option<PathBuf>,
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the store at `db_file`, creating parent directories
    /// as needed.
    pub async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();
        if let Some(parent) = db_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create store directory {:?}", parent))?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open store {:?}", db_file))?;
        Self::migrate(&pool).await?;
        log::info!("opened store {:?}", db_file);
        Ok(Self {
            db_file: Some(db_file),
            pool,
        })
    }

    /// A store backed by a private in-memory database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let connect_opts = SqliteConnectOptions::new().in_memory(true);
        // A single connection that never idles out, or the database would vanish.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        Self::migrate(&pool).await?;
        Ok(Self {
            db_file: None,
            pool,
        })
    }

    async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .context("Failed to run store migrations")?;
        Ok(())
    }

    pub fn db_file(&self) -> Option<&Path> {
        self.db_file.as_deref()
    }

    /// Wait for pending writes and release the database file.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read key {key}"))?;
        log::debug!(
            "sqlite store: get {key} -> {}",
            value.as_ref().map_or("absent".to_string(), |v| format!("{} bytes", v.len()))
        );
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        log::debug!("sqlite store: set {key} ({} bytes)", value.len());
        sqlx::query(
            r#"INSERT INTO kv_store (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write key {key}"))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        log::debug!("sqlite store: remove {key}");
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to remove key {key}"))?;
        Ok(())
    }
}
