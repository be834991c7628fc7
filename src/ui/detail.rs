// SPDX-License-Identifier: MPL-2.0
//! Receipt detail placeholder.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_bar::AppBar;
use crate::ui::components::empty_state;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub receipt_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Back,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Back,
    Edit(String),
}

#[must_use]
pub fn update(message: &Message, receipt_id: &str) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::Edit => Event::Edit(receipt_id.to_string()),
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bar = AppBar::new(ctx.i18n.tr("detail-title"))
        .back(Message::Back)
        .action(icons::pencil(), Message::Edit)
        .view();

    let body = empty_state::view(
        icons::receipt(),
        ctx.i18n
            .tr_with_args("detail-receipt-id", &[("id", ctx.receipt_id)]),
        ctx.i18n.tr("detail-placeholder"),
    );

    Container::new(Column::new().push(bar).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_carries_receipt_id() {
        assert_eq!(
            update(&Message::Edit, "xyz-123456"),
            Event::Edit("xyz-123456".to_string())
        );
        assert_eq!(update(&Message::Back, "xyz-123456"), Event::Back);
    }
}
