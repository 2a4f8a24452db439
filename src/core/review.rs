use crate::core::card::Flashcard;

/// In-memory state of the review screen.
///
/// Mutations that need persistence are split in two: a `*_candidate` method
/// computes the collection to store, and a `commit_*` method applies it once
/// the store has accepted it. Nothing changes if the write fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewState {
    cards: Vec<Flashcard>,
    index: usize,
    answer_visible: bool,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            index: 0,
            answer_visible: false,
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    /// 1-based position and total, for display.
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.cards.is_empty()).then(|| (self.index + 1, self.cards.len()))
    }

    pub fn toggle_answer(&mut self) {
        if !self.cards.is_empty() {
            self.answer_visible = !self.answer_visible;
        }
    }

    pub fn next(&mut self) {
        self.answer_visible = false;
        self.index = if self.cards.is_empty() {
            0
        } else {
            (self.index + 1) % self.cards.len()
        };
    }

    /// The collection without the current card, or `None` when there is no
    /// card to delete.
    pub fn delete_candidate(&self) -> Option<Vec<Flashcard>> {
        let current = self.current()?.id;
        Some(
            self.cards
                .iter()
                .filter(|card| card.id != current)
                .cloned()
                .collect(),
        )
    }

    /// Apply a delete that has been persisted. The next card slides into the
    /// freed slot; deleting the last card wraps around to the first.
    pub fn commit_delete(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        if self.index >= self.cards.len() {
            self.index = 0;
        }
        self.answer_visible = false;
    }

    pub fn commit_clear(&mut self) {
        self.cards.clear();
        self.index = 0;
        self.answer_visible = false;
    }

    /// Swap in a collection produced elsewhere (the add screen). Position and
    /// answer visibility are kept when still valid.
    pub fn replace_cards(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        if self.index >= self.cards.len() {
            self.index = 0;
            self.answer_visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> ReviewState {
        ReviewState::with_cards(
            (0..n)
                .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}")).unwrap())
                .collect(),
        )
    }

    #[test]
    fn next_on_empty_stays_at_zero() {
        let mut state = ReviewState::new();
        state.next();
        assert_eq!(state.index(), 0);
        assert!(state.current().is_none());
    }

    #[test]
    fn toggle_is_noop_without_cards() {
        let mut state = ReviewState::new();
        state.toggle_answer();
        assert!(!state.answer_visible());
    }

    #[test]
    fn delete_in_middle_keeps_index() {
        let mut state = deck(3);
        state.next();
        let candidate = state.delete_candidate().unwrap();
        state.commit_delete(candidate);
        assert_eq!(state.index(), 1);
        assert_eq!(state.current().unwrap().question, "Q2");
    }

    #[test]
    fn replace_keeps_position() {
        let mut state = deck(2);
        state.next();
        state.toggle_answer();
        let mut cards = state.cards().to_vec();
        cards.push(Flashcard::new("Q9", "A9").unwrap());
        state.replace_cards(cards);
        assert_eq!(state.index(), 1);
        assert!(state.answer_visible());
    }
}
