// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the screen on top of the back stack, then layers the bottom bar,
//! the floating scan button and toasts around it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::scan;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::{detail, edit, export, home, navbar};
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub scan: Option<&'a scan::State>,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext { i18n }).map(Message::Home),
        Screen::Export => export::view(export::ViewContext { i18n }),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
        Screen::Scan => view_scan(ctx.scan, i18n),
        Screen::Detail(id) => detail::view(detail::ViewContext {
            i18n,
            receipt_id: id,
        })
        .map(Message::Detail),
        Screen::Edit(id) => edit::view(edit::ViewContext {
            i18n,
            receipt_id: id,
        })
        .map(Message::Edit),
    };

    let mut column = Column::new().push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if ctx.screen.shows_bottom_bar() {
        column = column.push(
            navbar::view(navbar::ViewContext {
                i18n,
                current: ctx.screen,
            })
            .map(Message::Navbar),
        );
    }

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column.width(Length::Fill).height(Length::Fill));

    if ctx.screen.shows_scan_button() {
        layers = layers.push(
            Container::new(navbar::scan_button().map(Message::Navbar))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(iced::Padding {
                    top: 0.0,
                    right: spacing::LG,
                    bottom: sizing::BOTTOM_BAR_HEIGHT + spacing::MD,
                    left: 0.0,
                }),
        );
    }

    if ctx.notifications.has_notifications() {
        layers = layers
            .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification));
    }

    layers.into()
}

fn view_scan<'a>(scan: Option<&'a scan::State>, i18n: &'a I18n) -> Element<'a, Message> {
    match scan {
        Some(state) => state.view(i18n).map(Message::Scan),
        // Only visible for the frame between navigation and session start.
        None => Container::new(Text::new(i18n.tr("scan-loading")))
            .center(Length::Fill)
            .into(),
    }
}
