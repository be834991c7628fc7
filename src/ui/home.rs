// SPDX-License-Identifier: MPL-2.0
//! Home screen: receipt list placeholder.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_bar::AppBar;
use crate::ui::components::empty_state;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Receipt opened by the test button until receipts are stored.
pub const SAMPLE_RECEIPT_ID: &str = "test-receipt-123";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenSampleReceipt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenReceipt(String),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenSampleReceipt => Event::OpenReceipt(SAMPLE_RECEIPT_ID.to_string()),
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sample = button(Text::new(ctx.i18n.tr("home-open-sample")))
        .on_press(Message::OpenSampleReceipt)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::outlined);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(AppBar::new(ctx.i18n.tr("home-title")).view())
        .push(empty_state::view(
            icons::receipt(),
            ctx.i18n.tr("home-empty-title"),
            ctx.i18n.tr("home-empty-hint"),
        ))
        .push(Container::new(sample).padding(spacing::LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}
