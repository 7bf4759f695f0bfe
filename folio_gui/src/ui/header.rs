//! Page header
//!
//! Title on the left, reduced-motion toggle on the right.

use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the page header
pub fn view_header(reduced_motion: bool) -> Element<'static, Message> {
    let motion_label = if reduced_motion { "Motion: Off" } else { "Motion: On" };
    let motion_button = button(text(motion_label).size(11))
        .on_press(Message::ToggleReducedMotion)
        .padding(Padding::from([4, 8]))
        .style(if reduced_motion { button::primary } else { button::secondary });

    row![
        column![
            text("Projects").size(32),
            text("Architecture, interiors, urban work and objects").size(13).color([0.45, 0.45, 0.45]),
        ]
        .spacing(4),
        Space::new().width(Length::Fill),
        motion_button,
    ]
    .align_y(Alignment::Center)
    .into()
}
