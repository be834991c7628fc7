// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report what happened through their `Event`/`Effect` values; this
//! module turns those into navigation, persistence and notifications. The
//! scan session is created and torn down in one place,
//! [`sync_scan_session`], after every change to the back stack.

use super::config::Config;
use super::persisted_state::AppState;
use super::screen::Navigator;
use super::{paths, persistence, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::edit::{self, Event as EditEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::scan::{self, Effect as ScanEffect};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Prefix of notifications that only make sense on the scan screen.
const CAMERA_NOTIFICATION_PREFIX: &str = "notification-camera-";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub navigator: &'a mut Navigator,
    pub scan: &'a mut Option<scan::State>,
    pub next_session: &'a mut u64,
    pub services: &'a scan::Services,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Starts a scan session when Scan is on top and none is running, and drops
/// it when Scan is no longer on top.
pub fn sync_scan_session(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let on_scan = *ctx.navigator.current() == Screen::Scan;

    match (on_scan, ctx.scan.is_some()) {
        (true, false) => {
            *ctx.next_session += 1;
            let gallery_directory = ctx
                .app_state
                .last_gallery_directory
                .clone()
                .or_else(paths::default_gallery_dir);
            let (state, task) =
                scan::State::new(*ctx.next_session, ctx.services, gallery_directory);
            *ctx.scan = Some(state);
            task.map(Message::Scan)
        }
        (false, true) => {
            if let Some(state) = ctx.scan.take() {
                tracing::debug!(session = state.session(), "scan session ended");
            }
            ctx.notifications
                .clear_with_prefix(CAMERA_NOTIFICATION_PREFIX);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn handle_navigate_up(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.navigator.navigate_up();
    sync_scan_session(ctx)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.navigator.current()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::SelectTab(tab) => {
            ctx.navigator.select_tab(tab);
            sync_scan_session(ctx)
        }
        NavbarEvent::OpenScanner => {
            ctx.navigator.navigate(Screen::Scan);
            sync_scan_session(ctx)
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(&message) {
        HomeEvent::OpenReceipt(id) => {
            ctx.navigator.navigate(Screen::Detail(id));
            Task::none()
        }
    }
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    let Screen::Detail(id) = ctx.navigator.current().clone() else {
        return Task::none();
    };
    match detail::update(&message, &id) {
        DetailEvent::Back => handle_navigate_up(ctx),
        DetailEvent::Edit(id) => {
            ctx.navigator.navigate(Screen::Edit(id));
            Task::none()
        }
    }
}

pub fn handle_edit_message(ctx: &mut UpdateContext<'_>, message: edit::Message) -> Task<Message> {
    let Screen::Edit(id) = ctx.navigator.current().clone() else {
        return Task::none();
    };
    match edit::update(&message, &id) {
        EditEvent::Close => handle_navigate_up(ctx),
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    let warning = match settings::update(message, ctx.i18n.current_locale(), *ctx.theme_mode) {
        SettingsEvent::None => None,
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale)
        }
        SettingsEvent::ThemeSelected(mode) => {
            *ctx.theme_mode = mode;
            persistence::apply_theme_change(ctx.config, mode)
        }
    };
    if let Some(key) = warning {
        ctx.notifications.push(Notification::warning(key));
    }
    Task::none()
}

pub fn handle_scan_message(ctx: &mut UpdateContext<'_>, message: scan::Message) -> Task<Message> {
    // Results can still arrive after the screen was left.
    let Some(state) = ctx.scan.as_mut() else {
        return Task::none();
    };
    let (effect, task) = state.handle_message(message, ctx.i18n);
    let task = task.map(Message::Scan);

    match effect {
        ScanEffect::None => task,
        ScanEffect::Notify(notification) => {
            ctx.notifications.push(notification);
            task
        }
        ScanEffect::GalleryDirectoryUsed(dir) => {
            if ctx.app_state.set_last_gallery_directory(&dir) {
                if let Some(key) = persistence::persist_app_state(ctx.app_state) {
                    ctx.notifications.push(Notification::warning(key));
                }
            }
            task
        }
        ScanEffect::Close => {
            ctx.navigator.navigate_up();
            Task::batch([task, sync_scan_session(ctx)])
        }
        ScanEffect::Completed(receipt_id) => {
            tracing::info!(receipt_id = %receipt_id, "receipt processed");
            ctx.navigator.replace(Screen::Detail(receipt_id));
            Task::batch([task, sync_scan_session(ctx)])
        }
    }
}

pub fn handle_window_focused(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.scan.as_ref() {
        Some(state) => state.on_window_focused().map(Message::Scan),
        None => Task::none(),
    }
}
