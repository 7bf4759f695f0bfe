//! Project grid
//!
//! Lays out composed rows. Each card sits in an equal-width column pushed
//! down by a spacer: the row is padded by its largest upward shift so that
//! "up" cards land at the top edge and "down" cards sit lowest.
//!
//! Cards whose reveal delay has not elapsed yet are left as empty slots.

use std::time::Duration;

use iced::widget::{column, container, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use folio_core::presentation::{GridView, RowView};

use crate::Message;

use super::project_card::view_card;

const ROW_GAP: f32 = 32.0;
const CARD_GAP: f32 = 24.0;

/// Render the grid, or the fallback message when nothing matches
pub fn view_grid<'a>(grid: &GridView<'a>, reveal_elapsed: Duration) -> Element<'a, Message> {
    match grid {
        GridView::Empty { message } => container(text(*message).size(16).color([0.45, 0.45, 0.45]))
            .width(Length::Fill)
            .padding(64)
            .align_x(iced::alignment::Horizontal::Center)
            .into(),
        GridView::Rows { rows } => {
            let mut grid_column: Column<'a, Message> = column![].spacing(ROW_GAP).padding(8);
            for row in rows {
                grid_column = grid_column.push(view_row(row, reveal_elapsed));
            }
            grid_column.into()
        }
    }
}

fn view_row<'a>(row: &RowView<'a>, reveal_elapsed: Duration) -> Element<'a, Message> {
    let lift = row.max_lift();
    let mut cards: Row<'a, Message> = Row::new().spacing(CARD_GAP).align_y(Alignment::Start);

    for card in &row.cards {
        let top = lift + card.offset.shift(row.size);

        let slot: Element<'a, Message> = if reveal_elapsed >= card.reveal_delay() {
            view_card(card.project, card.is_active, row.size.is_large())
        } else {
            Space::new().width(Length::Fill).into()
        };

        cards = cards.push(
            column![Space::new().height(top), slot]
                .width(Length::FillPortion(1)),
        );
    }

    cards.into()
}
