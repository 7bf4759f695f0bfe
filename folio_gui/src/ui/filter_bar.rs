//! Category filter buttons
//!
//! One button per category; the selected one is drawn as primary.

use iced::widget::{button, container, text, Row};
use iced::{Element, Length, Padding};

use folio_core::page::CategoryButton;

use crate::Message;

/// Render the filter bar
pub fn view_filter_bar(buttons: &[CategoryButton]) -> Element<'static, Message> {
    let mut bar: Row<'static, Message> = Row::new().spacing(12);

    for entry in buttons {
        let style = if entry.selected { button::primary } else { button::secondary };
        bar = bar.push(
            button(text(entry.category.label()).size(14))
                .on_press(Message::CategorySelected(entry.category))
                .padding(Padding::from([8, 24]))
                .style(style),
        );
    }

    container(bar)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .padding(Padding::from([8, 0]))
        .into()
}
