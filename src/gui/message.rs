use crate::gui::screens::{ScreenMessage, add::AddScreen, review::ReviewScreen};

#[derive(Debug, Clone)]
pub enum Message {
    Review(ScreenMessage<ReviewScreen>),
    AddFlashcard(ScreenMessage<AddScreen>),
    DismissNotice,
}
