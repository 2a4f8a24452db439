use std::fmt;

use iced::{
    Element, Length, Task,
    widget::{button, column, text, text_editor},
};

use crate::{
    core::{Flashcard, Notice, card::appended, persist_cards},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::layout,
    },
};

pub const TITLE: &str = "Add Flashcard";

const EDITOR_HEIGHT: f32 = 100.0;

/// Form for a new card. Holds a snapshot of the collection it will append to;
/// the grown collection goes back to the review screen once it is stored.
pub struct AddScreen {
    cards: Vec<Flashcard>,
    question: text_editor::Content,
    answer: text_editor::Content,
    saving: bool,
}

impl fmt::Debug for AddScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddScreen")
            .field("cards", &self.cards.len())
            .field("saving", &self.saving)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum AddMessage {
    QuestionEdited(text_editor::Action),
    AnswerEdited(text_editor::Action),
    Save,
    Saved(Result<Vec<Flashcard>, Notice>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Saved(Vec<Flashcard>),
    Back,
}

impl AddScreen {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            question: text_editor::Content::new(),
            answer: text_editor::Content::new(),
            saving: false,
        }
    }
}

impl Screen for AddScreen {
    type Message = AddMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;
        let save = (!self.saving).then(|| msg(AddMessage::Save));

        let content = column![
            text("Enter Question:").size(16),
            text_editor(&self.question)
                .placeholder("Type question here")
                .on_action(move |action| msg(AddMessage::QuestionEdited(action)))
                .padding(8)
                .size(16)
                .height(Length::Fixed(EDITOR_HEIGHT)),
            text("Enter Answer:").size(16),
            text_editor(&self.answer)
                .placeholder("Type answer here")
                .on_action(move |action| msg(AddMessage::AnswerEdited(action)))
                .padding(8)
                .size(16)
                .height(Length::Fixed(EDITOR_HEIGHT)),
            button("Save Flashcard").on_press_maybe(save),
        ]
        .spacing(10);

        let back = (!self.saving).then_some(ScreenMessage::ParentMessage(ParentMessage::Back));
        layout(TITLE, back, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AddMessage::QuestionEdited(action) => {
                self.question.perform(action);
                Task::none()
            }
            AddMessage::AnswerEdited(action) => {
                self.answer.perform(action);
                Task::none()
            }
            AddMessage::Save => {
                if self.saving {
                    return Task::none();
                }
                let card = match Flashcard::new(self.question.text(), self.answer.text()) {
                    Ok(card) => card,
                    Err(e) => {
                        state.notify(e.into());
                        return Task::none();
                    }
                };
                let cards = appended(&self.cards, card);
                self.saving = true;
                let repo = state.repo.clone();
                Task::perform(
                    async move { persist_cards(&repo, cards, Notice::SaveFailed).await },
                    |result| ScreenMessage::ScreenMessage(AddMessage::Saved(result)),
                )
            }
            AddMessage::Saved(Ok(cards)) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Saved(cards)))
            }
            AddMessage::Saved(Err(notice)) => {
                self.saving = false;
                state.notify(notice);
                Task::none()
            }
        }
    }
}
