// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Notification auto-dismiss resolution.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes native events the app reacts to.
///
/// Window focus re-checks the camera permission on the scan screen, which is
/// how a grant made in the system settings gets picked up. Escape acts as the
/// back button everywhere except Home.
pub fn create_event_subscription(screen: &Screen) -> Subscription<Message> {
    let on_scan = *screen == Screen::Scan;
    let can_go_back = *screen != Screen::Home;

    let focus = if on_scan {
        event::listen_with(|event, _status, _window| match event {
            event::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused),
            _ => None,
        })
    } else {
        Subscription::none()
    };

    let back = if can_go_back {
        event::listen_with(|event, status, _window| match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::NavigateUp),
            _ => None,
        })
    } else {
        Subscription::none()
    };

    Subscription::batch([focus, back])
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
