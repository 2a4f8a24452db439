use iced::{
    Alignment::Center,
    Element, Length, Theme, border,
    widget::{Row, button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::core::Notice;

/// Header with the route title (and a back button on pushed screens) above
/// the screen content.
pub fn layout<'a, Message>(
    title: &'a str,
    back: Option<Message>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mut header = Row::new().spacing(10).align_y(Center);
    if let Some(message) = back {
        header = header.push(button("Back").on_press(message));
    }
    header = header.push(text(title).size(22));

    container(column![
        container(header).padding(10).width(Length::Fill).style(bordered_box),
        container(content.into()).padding(20).width(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn notice_style(notice: Notice) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme);
        if notice.is_error() {
            style.border(border::color(theme.palette().danger).width(2))
        } else {
            style.border(border::color(theme.palette().success).width(2))
        }
    }
}

/// A dismissable banner for the current notice.
pub fn notice_banner<'a, Message>(notice: Notice, on_dismiss: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    container(
        row![
            text(notice.message()).width(Length::Fill),
            button("OK").on_press(on_dismiss),
        ]
        .spacing(10)
        .align_y(Center),
    )
    .padding(10)
    .width(Length::Fill)
    .style(notice_style(notice))
    .into()
}
