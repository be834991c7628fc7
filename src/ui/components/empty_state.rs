// SPDX-License-Identifier: MPL-2.0
//! Placeholder content for screens that have nothing to show yet.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{svg::Svg, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Icon in a tinted badge, a title and a secondary line, centered.
pub fn view<'a, Message: 'static>(
    icon: Svg<'static>,
    title: String,
    hint: String,
) -> Element<'a, Message> {
    let badge = Container::new(icons::tinted(
        icons::sized(icon, sizing::ICON_XL),
        palette::PRIMARY_600,
    ))
    .padding(spacing::LG)
    .style(styles::container::icon_badge);

    let hint = Text::new(hint)
        .size(typography::BODY)
        .center()
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(badge)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(hint);

    Container::new(column)
        .center(Length::Fill)
        .padding(spacing::LG)
        .into()
}
