use iced::{
    Element, Size, Task, Theme,
    widget::column,
};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, review::ReviewScreen},
    widgets::notice_banner,
};
use crate::core::{AnyStore, FlashcardRepository};

pub struct FlashcardsApp {
    screen: ScreenData,
    state: AppState,
}

impl FlashcardsApp {
    /// Starts on the review screen and kicks off the initial load.
    pub fn new(repo: FlashcardRepository<AnyStore>) -> (Self, Task<Message>) {
        let state = AppState::new(repo);
        let load = ReviewScreen::load(&state).map(Message::Review);
        (
            Self {
                screen: ScreenData::Review(ReviewScreen::loading()),
                state,
            },
            load,
        )
    }

    /// Open the window and block until it is closed.
    pub fn run(repo: FlashcardRepository<AnyStore>) -> iced::Result {
        iced::application(move || Self::new(repo.clone()), Self::update, Self::view)
            .title(Self::title)
            .theme(Self::theme)
            .window_size(Size::new(420.0, 640.0))
            .run()
    }

    fn title(&self) -> String {
        self.screen.title().to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        });
        match self.state.notice {
            Some(notice) => column![notice_banner(notice, Message::DismissNotice), screen].into(),
            None => screen,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
