// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::detail;
use crate::ui::edit;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::scan;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Detail(detail::Message),
    Edit(edit::Message),
    Settings(settings::Message),
    Scan(scan::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// The window regained focus.
    WindowFocused,
    /// Escape pressed outside a text input.
    NavigateUp,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for preferences and state files).
    /// Takes precedence over `EXPENSE_SNAP_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `EXPENSE_SNAP_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
