// SPDX-License-Identifier: MPL-2.0
//! Screen title bar.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, svg::Svg, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// A title with an optional icon button on each side.
pub struct AppBar<Message> {
    title: String,
    leading: Option<(Svg<'static>, Message)>,
    trailing: Vec<(Svg<'static>, Message)>,
}

impl<Message: Clone + 'static> AppBar<Message> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            leading: None,
            trailing: Vec::new(),
        }
    }

    /// Back arrow on the left.
    #[must_use]
    pub fn back(mut self, on_press: Message) -> Self {
        self.leading = Some((icons::back(), on_press));
        self
    }

    #[must_use]
    pub fn action(mut self, icon: Svg<'static>, on_press: Message) -> Self {
        self.trailing.push((icon, on_press));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let icon_button = |icon: Svg<'static>, on_press: Message| {
            button(icons::sized(icon, sizing::ICON_MD))
                .on_press(on_press)
                .padding(spacing::SM)
                .style(styles::button::text)
        };

        let mut row = Row::new()
            .spacing(spacing::XS)
            .padding([spacing::XS, spacing::MD])
            .align_y(Vertical::Center)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::MD));

        if let Some((icon, on_press)) = self.leading {
            row = row.push(icon_button(icon, on_press));
        }
        row = row
            .push(Text::new(self.title).size(typography::TITLE_MD))
            .push(Space::new().width(Length::Fill));
        for (icon, on_press) in self.trailing {
            row = row.push(icon_button(icon, on_press));
        }

        Container::new(row).width(Length::Fill).into()
    }
}
