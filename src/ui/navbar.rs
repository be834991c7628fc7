// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar and floating scan button.
//!
//! The bar lists the four top-level destinations (Home, Scan, Export,
//! Settings). It only decides what was clicked; the back stack itself lives
//! in [`crate::app::screen::Navigator`].

use crate::app::screen::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, svg::Svg, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: &'a Screen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectTab(Screen),
    ScanButtonPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SelectTab(Screen),
    OpenScanner,
}

pub fn update(message: Message, current: &Screen) -> Event {
    match message {
        Message::SelectTab(tab) if &tab == current => Event::None,
        Message::SelectTab(tab) => Event::SelectTab(tab),
        Message::ScanButtonPressed => Event::OpenScanner,
    }
}

fn tab_icon(tab: &Screen) -> Svg<'static> {
    match tab {
        Screen::Scan => icons::camera(),
        Screen::Export => icons::export(),
        Screen::Settings => icons::settings(),
        _ => icons::home(),
    }
}

fn tab_label_key(tab: &Screen) -> &'static str {
    match tab {
        Screen::Scan => "nav-scan",
        Screen::Export => "nav-export",
        Screen::Settings => "nav-settings",
        _ => "nav-home",
    }
}

/// Render the bottom bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = Screen::TABS.iter().map(|tab| {
        let selected = tab == ctx.current;
        let icon = icons::sized(tab_icon(tab), sizing::ICON_MD);
        let icon = if selected {
            icons::tinted(icon, palette::PRIMARY_600)
        } else {
            icon
        };

        let content = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(icon)
            .push(Text::new(ctx.i18n.tr(tab_label_key(tab))).size(typography::CAPTION));

        button(content)
            .on_press(Message::SelectTab(tab.clone()))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::nav_item(selected))
            .into()
    });

    let row = Row::with_children(items)
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BOTTOM_BAR_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::BOTTOM_BAR_HEIGHT))
        .style(styles::container::bottom_bar)
        .into()
}

/// Round "+" button that opens the scanner from Home.
pub fn scan_button<'a>() -> Element<'a, Message> {
    button(
        Container::new(icons::tinted(
            icons::sized(icons::plus(), sizing::ICON_MD),
            palette::WHITE,
        ))
        .center(Length::Fill),
    )
    .on_press(Message::ScanButtonPressed)
    .width(Length::Fixed(sizing::FAB))
    .height(Length::Fixed(sizing::FAB))
    .style(styles::button::fab)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_other_tab_emits_event() {
        assert_eq!(
            update(Message::SelectTab(Screen::Export), &Screen::Home),
            Event::SelectTab(Screen::Export)
        );
    }

    #[test]
    fn selecting_current_tab_is_ignored() {
        assert_eq!(
            update(Message::SelectTab(Screen::Settings), &Screen::Settings),
            Event::None
        );
    }

    #[test]
    fn scan_button_opens_scanner() {
        assert_eq!(
            update(Message::ScanButtonPressed, &Screen::Home),
            Event::OpenScanner
        );
    }

    #[test]
    fn every_tab_has_a_label() {
        let labels: std::collections::HashSet<_> =
            Screen::TABS.iter().map(tab_label_key).collect();
        assert_eq!(labels.len(), Screen::TABS.len());
    }
}
