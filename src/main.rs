use clap::Parser;
use std::path::PathBuf;

use flashcards::core::{AnyStore, FlashcardRepository, MemoryStore, SqliteStore, default_store_path};
use flashcards::gui::FlashcardsApp;

#[derive(Parser)]
#[command(name = "flashcards")]
#[command(about = "Review and create question/answer flashcards")]
struct Cli {
    /// SQLite file holding the flashcards [default: local data dir]
    #[arg(long, value_name = "PATH", conflicts_with = "in_memory")]
    store: Option<PathBuf>,

    /// Keep flashcards in memory only; nothing is saved on exit
    #[arg(long)]
    in_memory: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Owns the store's background tasks; the GUI runs its own executor.
    let runtime = tokio::runtime::Runtime::new()?;

    let store = if args.in_memory {
        log::info!("using in-memory store");
        AnyStore::Memory(MemoryStore::new())
    } else {
        let path = args.store.unwrap_or_else(default_store_path);
        AnyStore::Sqlite(runtime.block_on(SqliteStore::open(&path))?)
    };

    let repo = FlashcardRepository::new(store);
    FlashcardsApp::run(repo.clone())?;

    if let AnyStore::Sqlite(store) = repo.store() {
        runtime.block_on(store.close());
    }
    Ok(())
}
