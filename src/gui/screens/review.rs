use iced::{
    Color, Element, Task,
    widget::{button, column, text},
};

use crate::{
    core::{Flashcard, Notice, ReviewState, clear_cards, load_cards, persist_cards},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::layout,
    },
};

pub const TITLE: &str = "Flashcards";

const ANSWER_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};
const PLACEHOLDER_COLOR: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

#[derive(Debug, Clone, Default)]
pub struct ReviewScreen {
    review: ReviewState,
    /// Set while a load or write is in flight; actions that depend on the
    /// current index or collection are ignored.
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum ReviewMessage {
    Loaded(Result<Vec<Flashcard>, Notice>),
    ToggleAnswer,
    Next,
    Delete,
    Deleted(Result<Vec<Flashcard>, Notice>),
    ClearAll,
    Cleared(Notice),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenAddFlashcard,
}

impl ReviewScreen {
    /// A screen that is waiting for its first load.
    pub fn loading() -> Self {
        Self {
            review: ReviewState::new(),
            busy: true,
        }
    }

    /// Read the stored collection, falling back to the sample card.
    pub fn load(state: &AppState) -> Task<ScreenMessage<Self>> {
        let repo = state.repo.clone();
        Task::perform(
            async move { load_cards(&repo).await },
            |result| ScreenMessage::ScreenMessage(ReviewMessage::Loaded(result)),
        )
    }

    pub fn cards(&self) -> &[Flashcard] {
        self.review.cards()
    }

    pub fn replace_cards(&mut self, cards: Vec<Flashcard>) {
        self.review.replace_cards(cards);
    }

    fn card_view<'a>(&'a self, card: &'a Flashcard) -> Element<'a, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;
        let mut content = column![].spacing(20);

        if let Some((position, total)) = self.review.position() {
            content = content.push(text(format!("{position} / {total}")).size(14));
        }
        content = content.push(text(card.question.as_str()).size(24));
        if self.review.answer_visible() {
            content = content.push(text(card.answer.as_str()).size(20).color(ANSWER_COLOR));
        }

        let toggle_label = if self.review.answer_visible() {
            "Hide Answer"
        } else {
            "Reveal Answer"
        };
        let mutation = |m: ReviewMessage| (!self.busy).then(|| msg(m));

        content
            .push(button(toggle_label).on_press(msg(ReviewMessage::ToggleAnswer)))
            .push(button("Next Card").on_press_maybe(mutation(ReviewMessage::Next)))
            .push(
                button("Delete This Card")
                    .style(button::danger)
                    .on_press_maybe(mutation(ReviewMessage::Delete)),
            )
            .push(
                button("Clear All Flashcards")
                    .style(button::danger)
                    .on_press_maybe(mutation(ReviewMessage::ClearAll)),
            )
            .into()
    }
}

impl Screen for ReviewScreen {
    type Message = ReviewMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let body = match self.review.current() {
            Some(card) => self.card_view(card),
            None => text("No flashcards available. Add some!")
                .size(18)
                .color(PLACEHOLDER_COLOR)
                .into(),
        };

        let add = button("Add New Flashcard").on_press_maybe(
            (!self.busy).then_some(ScreenMessage::ParentMessage(ParentMessage::OpenAddFlashcard)),
        );

        layout(TITLE, None, column![body, add].spacing(40))
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ReviewMessage::Loaded(result) => {
                self.busy = false;
                match result {
                    Ok(cards) => self.review = ReviewState::with_cards(cards),
                    Err(notice) => {
                        self.review = ReviewState::new();
                        state.notify(notice);
                    }
                }
                Task::none()
            }
            ReviewMessage::ToggleAnswer => {
                self.review.toggle_answer();
                Task::none()
            }
            ReviewMessage::Next => {
                // A pending delete was computed against the current index.
                if !self.busy {
                    self.review.next();
                }
                Task::none()
            }
            ReviewMessage::Delete => {
                if self.busy {
                    return Task::none();
                }
                let Some(cards) = self.review.delete_candidate() else {
                    return Task::none();
                };
                self.busy = true;
                let repo = state.repo.clone();
                Task::perform(
                    async move { persist_cards(&repo, cards, Notice::DeleteFailed).await },
                    |result| ScreenMessage::ScreenMessage(ReviewMessage::Deleted(result)),
                )
            }
            ReviewMessage::Deleted(result) => {
                self.busy = false;
                match result {
                    Ok(cards) => {
                        self.review.commit_delete(cards);
                        state.dismiss();
                    }
                    Err(notice) => state.notify(notice),
                }
                Task::none()
            }
            ReviewMessage::ClearAll => {
                if self.busy {
                    return Task::none();
                }
                self.busy = true;
                let repo = state.repo.clone();
                Task::perform(
                    async move { clear_cards(&repo).await },
                    |notice| ScreenMessage::ScreenMessage(ReviewMessage::Cleared(notice)),
                )
            }
            ReviewMessage::Cleared(notice) => {
                self.busy = false;
                if notice == Notice::Cleared {
                    self.review.commit_clear();
                }
                state.notify(notice);
                Task::none()
            }
        }
    }
}
