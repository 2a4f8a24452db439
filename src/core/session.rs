use crate::core::{
    card::{Flashcard, appended},
    notice::Notice,
    repository::FlashcardRepository,
    review::ReviewState,
    store::KeyValueStore,
};

/// The collection to review: what is stored, or the sample card when nothing
/// is. Any failure maps to [`Notice::LoadFailed`].
pub async fn load_cards<S: KeyValueStore>(
    repo: &FlashcardRepository<S>,
) -> Result<Vec<Flashcard>, Notice> {
    repo.load_or_sample().await.map_err(|e| {
        log::warn!("loading flashcards failed: {e:#}");
        Notice::LoadFailed
    })
}

/// Store `cards` and hand them back for committing to memory, or report
/// `failure` if the store refuses the write.
pub async fn persist_cards<S: KeyValueStore>(
    repo: &FlashcardRepository<S>,
    cards: Vec<Flashcard>,
    failure: Notice,
) -> Result<Vec<Flashcard>, Notice> {
    match repo.save(&cards).await {
        Ok(()) => Ok(cards),
        Err(e) => {
            log::warn!("{failure} {e:#}");
            Err(failure)
        }
    }
}

/// Remove the stored collection. Always returns a notice: the confirmation
/// on success.
pub async fn clear_cards<S: KeyValueStore>(repo: &FlashcardRepository<S>) -> Notice {
    match repo.clear().await {
        Ok(()) => Notice::Cleared,
        Err(e) => {
            log::warn!("clearing flashcards failed: {e:#}");
            Notice::ClearFailed
        }
    }
}

/// Review state bound to a repository: every mutating action persists first
/// and only touches memory once the store has accepted the write.
///
/// The GUI runs the same store calls as `iced` tasks; this type awaits them
/// inline for headless use.
#[derive(Debug)]
pub struct FlashcardSession<S> {
    repo: FlashcardRepository<S>,
    state: ReviewState,
}

impl<S: KeyValueStore> FlashcardSession<S> {
    pub fn new(repo: FlashcardRepository<S>) -> Self {
        Self {
            repo,
            state: ReviewState::new(),
        }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn repository(&self) -> &FlashcardRepository<S> {
        &self.repo
    }

    /// Load the stored collection. A failed load leaves the collection empty.
    pub async fn load(&mut self) -> Result<(), Notice> {
        match load_cards(&self.repo).await {
            Ok(cards) => {
                self.state = ReviewState::with_cards(cards);
                Ok(())
            }
            Err(notice) => {
                self.state = ReviewState::new();
                Err(notice)
            }
        }
    }

    pub fn toggle_answer(&mut self) {
        self.state.toggle_answer();
    }

    pub fn next(&mut self) {
        self.state.next();
    }

    pub async fn delete_current(&mut self) -> Result<(), Notice> {
        let Some(cards) = self.state.delete_candidate() else {
            return Ok(());
        };
        let cards = persist_cards(&self.repo, cards, Notice::DeleteFailed).await?;
        self.state.commit_delete(cards);
        Ok(())
    }

    pub async fn clear(&mut self) -> Notice {
        let notice = clear_cards(&self.repo).await;
        if notice == Notice::Cleared {
            self.state.commit_clear();
        }
        notice
    }

    /// Validate and append a new card, persisting the grown collection.
    pub async fn add(&mut self, question: &str, answer: &str) -> Result<(), Notice> {
        let card = Flashcard::new(question, answer)?;
        let cards = appended(self.state.cards(), card);
        let cards = persist_cards(&self.repo, cards, Notice::SaveFailed).await?;
        self.state.replace_cards(cards);
        Ok(())
    }
}
