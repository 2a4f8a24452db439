use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

const SAMPLE_QUESTION: &str = "This is a sample flashcard.\nPress \"Reveal\" to see the answer.";
const SAMPLE_ANSWER: &str = "Good job!\nNow you can add your own flashcards and delete this one.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("Please fill in both question and answer.")]
    MissingField,
}

/// A question/answer pair.
///
/// The `id` lives only in memory: the stored form is just
/// `{"question": ..., "answer": ...}`, and a fresh id is assigned every time a
/// card is created or loaded. Two cards are equal when their text is equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.question == other.question && self.answer == other.answer
    }
}

impl Eq for Flashcard {}

impl Flashcard {
    /// Builds a card from user input. Both fields must contain something other
    /// than whitespace, but the text is kept exactly as typed.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self, CardError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(CardError::MissingField);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            question,
            answer,
        })
    }

    /// The built-in card shown when nothing has been stored yet.
    pub fn sample() -> Self {
        Self {
            id: Uuid::new_v4(),
            question: SAMPLE_QUESTION.to_string(),
            answer: SAMPLE_ANSWER.to_string(),
        }
    }
}

/// Returns a copy of `cards` with `card` appended.
pub fn appended(cards: &[Flashcard], card: Flashcard) -> Vec<Flashcard> {
    let mut next = Vec::with_capacity(cards.len() + 1);
    next.extend_from_slice(cards);
    next.push(card);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(Flashcard::new("", "valid"), Err(CardError::MissingField));
        assert_eq!(Flashcard::new("valid", " \n\t"), Err(CardError::MissingField));
    }

    #[test]
    fn keeps_untrimmed_text() {
        let card = Flashcard::new("  What?\n", " That. ").unwrap();
        assert_eq!(card.question, "  What?\n");
        assert_eq!(card.answer, " That. ");
    }

    #[test]
    fn stored_form_has_no_id() {
        let card = Flashcard::new("Q1", "A1").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"question":"Q1","answer":"A1"}"#);
    }
}
