use std::fmt;

use crate::core::card::CardError;

/// One-shot messages shown to the user after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoadFailed,
    DeleteFailed,
    Cleared,
    ClearFailed,
    MissingField,
    SaveFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::LoadFailed => "Error loading flashcards",
            Notice::DeleteFailed => "Failed to delete flashcard.",
            Notice::Cleared => "Flashcards cleared!",
            Notice::ClearFailed => "Failed to clear flashcards.",
            Notice::MissingField => "Please fill in both question and answer.",
            Notice::SaveFailed => "Failed to save flashcard.",
        }
    }

    /// Everything except the clear confirmation reports a problem.
    pub fn is_error(self) -> bool {
        !matches!(self, Notice::Cleared)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<CardError> for Notice {
    fn from(error: CardError) -> Self {
        match error {
            CardError::MissingField => Notice::MissingField,
        }
    }
}
