// SPDX-License-Identifier: MPL-2.0
//! Receipt editor placeholder.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_bar::AppBar;
use crate::ui::components::empty_state;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub receipt_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Cancel,
    Save,
}

/// Both actions close the editor; there is nothing to save yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Close,
}

#[must_use]
pub fn update(message: &Message, receipt_id: &str) -> Event {
    if *message == Message::Save {
        tracing::debug!(receipt_id, "receipt edit saved");
    }
    Event::Close
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bar = AppBar::new(ctx.i18n.tr("edit-title"))
        .back(Message::Cancel)
        .view();

    let body = empty_state::view(
        icons::pencil(),
        ctx.i18n
            .tr_with_args("edit-receipt-id", &[("id", ctx.receipt_id)]),
        ctx.i18n.tr("edit-placeholder"),
    );

    let actions = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("edit-cancel")))
                .on_press(Message::Cancel)
                .style(styles::button::text),
        )
        .push(
            button(Text::new(ctx.i18n.tr("edit-save")))
                .on_press(Message::Save)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        );

    Container::new(Column::new().push(bar).push(body).push(actions))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_and_save_both_close() {
        assert_eq!(update(&Message::Cancel, "r"), Event::Close);
        assert_eq!(update(&Message::Save, "r"), Event::Close);
    }
}
