//! Status Bar (Bottom)
//!
//! Displays:
//! - How many projects the current filter shows
//! - The active card, with a button to clear it
//! - Catalog load errors

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    shown: usize,
    total: usize,
    active_slug: Option<&'a str>,
    load_error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut bar = row![text(format!("Showing {} of {} projects", shown, total)).size(10)]
        .spacing(8)
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center);

    if let Some(error) = load_error {
        bar = bar.push(text(format!("Catalog error: {}", error)).size(10).color([0.8, 0.2, 0.2]));
    }

    bar = bar.push(Space::new().width(Length::Fill));

    if let Some(slug) = active_slug {
        bar = bar
            .push(text(format!("Active: {}", slug)).size(10))
            .push(
                button(text("Clear").size(10))
                    .on_press(Message::ClearSelection)
                    .padding(Padding::from([2, 6]))
                    .style(button::secondary),
            );
    }

    bar.into()
}
