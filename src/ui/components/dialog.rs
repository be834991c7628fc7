// SPDX-License-Identifier: MPL-2.0
//! Modal dialog card.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::dialog::{self, Dialog};
//!
//! let card = Dialog::new(icons::camera())
//!     .title(i18n.tr("permission-dialog-title"))
//!     .message(i18n.tr("permission-dialog-message"))
//!     .primary(i18n.tr("permission-dialog-allow"), Message::RequestPermission)
//!     .on_close(Message::PermissionDialogDismissed)
//!     .view();
//!
//! dialog::modal(screen, card, Some(Message::PermissionDialogDismissed))
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, mouse_area, opaque, svg::Svg, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment::Horizontal, Element, Length, Theme};

pub struct Dialog<Message> {
    icon: Svg<'static>,
    title: Option<String>,
    message: Option<String>,
    note: Option<String>,
    primary: Option<(String, Message)>,
    secondary: Option<(String, Message)>,
    on_close: Option<Message>,
}

impl<Message: Clone + 'static> Dialog<Message> {
    pub fn new(icon: Svg<'static>) -> Self {
        Self {
            icon,
            title: None,
            message: None,
            note: None,
            primary: None,
            secondary: None,
            on_close: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Small print under the message.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn primary(mut self, label: impl Into<String>, message: Message) -> Self {
        self.primary = Some((label.into(), message));
        self
    }

    #[must_use]
    pub fn secondary(mut self, label: impl Into<String>, message: Message) -> Self {
        self.secondary = Some((label.into(), message));
        self
    }

    /// Shows an X in the corner.
    #[must_use]
    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .width(Length::Fill);

        if let Some(on_close) = self.on_close {
            let close = button(icons::sized(icons::cross(), sizing::ICON_SM))
                .on_press(on_close)
                .padding(spacing::XS)
                .style(styles::button::text);
            content = content.push(
                Row::new()
                    .push(Space::new().width(Length::Fill))
                    .push(close),
            );
        }

        content = content.push(
            Container::new(icons::tinted(
                icons::sized(self.icon, sizing::ICON_LG),
                palette::PRIMARY_600,
            ))
            .padding(spacing::MD)
            .style(styles::container::icon_badge),
        );

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_MD).center());
        }
        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY_LG).center());
        }
        if let Some(note) = self.note {
            content = content.push(
                Text::new(note)
                    .size(typography::BODY_SM)
                    .center()
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            );
        }

        let mut actions = Column::new().spacing(spacing::XS).width(Length::Fill);
        if let Some((label, message)) = self.primary {
            actions = actions.push(
                button(Text::new(label).center().width(Length::Fill))
                    .on_press(message)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(styles::button::primary),
            );
        }
        if let Some((label, message)) = self.secondary {
            actions = actions.push(
                button(Text::new(label).center().width(Length::Fill))
                    .on_press(message)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(styles::button::text),
            );
        }
        content = content.push(actions);

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::DIALOG_MAX_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }
}

/// Lays `dialog` over `base` with a scrim. Clicking the scrim sends
/// `on_scrim` when given.
pub fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_scrim: Option<Message>,
) -> Element<'a, Message> {
    let card = Container::new(opaque(dialog))
        .center(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::scrim);

    let mut scrim = mouse_area(card);
    if let Some(message) = on_scrim {
        scrim = scrim.on_press(message);
    }

    Stack::new()
        .push(base)
        .push(opaque(scrim))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Allow,
        Cancel,
        Close,
    }

    #[test]
    fn builder_keeps_texts_and_actions() {
        let dialog = Dialog::new(icons::camera())
            .title("Camera Access")
            .message("We need camera access to scan your receipts.")
            .note("Photos are stored securely")
            .primary("Allow Camera Access", TestMessage::Allow)
            .secondary("Cancel", TestMessage::Cancel)
            .on_close(TestMessage::Close);

        assert_eq!(dialog.title.as_deref(), Some("Camera Access"));
        assert_eq!(
            dialog.primary.as_ref().map(|(_, m)| m),
            Some(&TestMessage::Allow)
        );
        assert_eq!(
            dialog.secondary.as_ref().map(|(_, m)| m),
            Some(&TestMessage::Cancel)
        );
        assert_eq!(dialog.on_close, Some(TestMessage::Close));
        let _ = dialog.view();
    }

    #[test]
    fn modal_builds_with_and_without_scrim_action() {
        let base = || -> Element<'static, TestMessage> { Text::new("base").into() };
        let card = || Dialog::new(icons::info()).title("t").view();

        let _ = modal(base(), card(), Some(TestMessage::Close));
        let _ = modal(base(), card(), None);
    }
}
