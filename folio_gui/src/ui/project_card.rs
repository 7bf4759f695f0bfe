//! Project card
//!
//! Draws one project. The card knows nothing about layout: it gets the
//! project, whether it is active and whether to use the large variant, and
//! reports presses back as `Message::SelectProject`.

use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length};

use folio_core::project::Project;

use crate::Message;

const COMPACT_IMAGE_HEIGHT: f32 = 220.0;
const LARGE_IMAGE_HEIGHT: f32 = 320.0;

/// Render a project card
pub fn view_card(project: &Project, is_active: bool, is_large: bool) -> Element<'_, Message> {
    let image_height = if is_large { LARGE_IMAGE_HEIGHT } else { COMPACT_IMAGE_HEIGHT };

    // Image placeholder; the path is shown until an image pipeline exists
    let image = container(text(&project.image).size(10).color([0.55, 0.55, 0.55]))
        .width(Length::Fill)
        .height(Length::Fixed(image_height))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(container::bordered_box);

    let content = column![
        image,
        Space::new().height(8),
        text(&project.title).size(if is_large { 22 } else { 18 }),
        text(project.caption()).size(11).color([0.5, 0.5, 0.5]),
        text(project.category.label()).size(10).color([0.5, 0.5, 0.5]),
        Space::new().height(4),
        text(&project.summary).size(12),
    ]
    .spacing(2);

    let style = if is_active { button::primary } else { button::text };

    button(content)
        .on_press(Message::SelectProject(project.slug.clone()))
        .padding(8)
        .width(Length::Fill)
        .style(style)
        .into()
}
