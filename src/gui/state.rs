use crate::core::{AnyStore, FlashcardRepository, Notice};

/// State shared by every screen.
#[derive(Debug)]
pub struct AppState {
    pub repo: FlashcardRepository<AnyStore>,
    /// The notice currently shown, if any. A new one replaces the old.
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(repo: FlashcardRepository<AnyStore>) -> Self {
        Self { repo, notice: None }
    }

    pub fn notify(&mut self, notice: Notice) {
        log::debug!("notice: {notice}");
        self.notice = Some(notice);
    }

    /// Drop a notice left over from an earlier action.
    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}
