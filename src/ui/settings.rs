// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language and theme.
//!
//! The screen only reports what the user picked. Applying the change and
//! writing it to `settings.toml` is done by [`crate::app::persistence`].

use crate::i18n::fluent::I18n;
use crate::ui::components::app_bar::AppBar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

/// Selecting the value already in effect produces no event.
#[must_use]
pub fn update(
    message: Message,
    current_locale: &LanguageIdentifier,
    current_theme: ThemeMode,
) -> Event {
    match message {
        Message::LanguageSelected(locale) if &locale == current_locale => Event::None,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeSelected(mode) if mode == current_theme => Event::None,
        Message::ThemeSelected(mode) => Event::ThemeSelected(mode),
    }
}

/// "Français (fr)" when the name is translated, the raw tag otherwise.
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let name = i18n.tr(&format!("language-name-{locale}"));
    if name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{name} ({locale})")
    }
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current = ctx.i18n.current_locale();
    let languages = ctx
        .i18n
        .available_locales()
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, locale| {
            column.push(
                button(Text::new(language_label(ctx.i18n, locale)))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::choice(locale == current)),
            )
        });

    let themes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, mode| {
            row.push(
                button(Text::new(ctx.i18n.tr(mode.i18n_key())).center())
                    .on_press(Message::ThemeSelected(*mode))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::choice(*mode == ctx.theme_mode)),
            )
        });

    let body = Column::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section(
            ctx.i18n.tr("settings-language-label"),
            languages.into(),
        ))
        .push(section(ctx.i18n.tr("settings-theme-label"), themes.into()));

    let content = Column::new()
        .push(AppBar::new(ctx.i18n.tr("settings-title")).view())
        .push(scrollable(Container::new(body).center_x(Length::Fill)));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}
