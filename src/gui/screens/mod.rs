pub mod add;
pub mod review;

use iced::{Element, Task};

use crate::{
    core::Flashcard,
    gui::{AppState, Message},
};

#[derive(Debug)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

// Written out so that only the message types, not the screen itself, need Clone.
impl<S: Screen> Clone for ScreenMessage<S>
where
    S::Message: Clone,
    S::ParentMessage: Clone,
{
    fn clone(&self) -> Self {
        match self {
            ScreenMessage::ScreenMessage(msg) => ScreenMessage::ScreenMessage(msg.clone()),
            ScreenMessage::ParentMessage(msg) => ScreenMessage::ParentMessage(msg.clone()),
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The navigation stack: the review screen, or the add screen on top of it.
#[derive(Debug)]
pub enum ScreenData {
    Review(review::ReviewScreen),
    AddFlashcard {
        screen: add::AddScreen,
        parent: review::ReviewScreen,
    },
}

impl Default for ScreenData {
    fn default() -> Self {
        ScreenData::Review(review::ReviewScreen::default())
    }
}

impl ScreenData {
    pub fn title(&self) -> &'static str {
        match self {
            ScreenData::Review(_) => review::TITLE,
            ScreenData::AddFlashcard { .. } => add::TITLE,
        }
    }

    /// Push the add screen over the review screen. Notices from the previous
    /// screen do not carry over.
    fn open_add_flashcard(&mut self, state: &mut AppState) {
        *self = match std::mem::take(self) {
            ScreenData::Review(parent) => {
                let screen = add::AddScreen::new(parent.cards().to_vec());
                ScreenData::AddFlashcard { screen, parent }
            }
            other => other,
        };
        state.dismiss();
    }

    /// Pop back to the review screen, handing it the stored collection if
    /// the add screen saved one.
    fn return_to_review(&mut self, saved: Option<Vec<Flashcard>>, state: &mut AppState) {
        *self = match std::mem::take(self) {
            ScreenData::AddFlashcard { mut parent, .. } => {
                if let Some(cards) = saved {
                    parent.replace_cards(cards);
                }
                ScreenData::Review(parent)
            }
            other => other,
        };
        state.dismiss();
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;
    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Review(screen) => screen.view().map(Message::Review),
            ScreenData::AddFlashcard { screen, .. } => screen.view().map(Message::AddFlashcard),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (_, Message::DismissNotice) => {
                state.dismiss();
                Task::none()
            }
            (x, Message::Review(ScreenMessage::ParentMessage(parent_msg))) => {
                match parent_msg {
                    review::ParentMessage::OpenAddFlashcard => x.open_add_flashcard(state),
                }
                Task::none()
            }
            (x, Message::AddFlashcard(ScreenMessage::ParentMessage(parent_msg))) => {
                let saved = match parent_msg {
                    add::ParentMessage::Saved(cards) => Some(cards),
                    add::ParentMessage::Back => None,
                };
                x.return_to_review(saved, state);
                Task::none()
            }
            (ScreenData::Review(page), Message::Review(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::Review)
                .map(ScreenMessage::ScreenMessage),
            (
                ScreenData::AddFlashcard { screen, .. },
                Message::AddFlashcard(ScreenMessage::ScreenMessage(msg)),
            ) => screen
                .update(msg, state)
                .map(Message::AddFlashcard)
                .map(ScreenMessage::ScreenMessage),
            // A task finished for a screen that is no longer shown.
            (_, msg) => {
                log::debug!("dropping message for inactive screen: {msg:?}");
                Task::none()
            }
        }
    }
}
