// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short messages about things that happened off-screen or failed without
//! changing the current screen: a capture that did not work, a gallery file
//! that could not be read, a settings file that fell back to defaults.
//!
//! - [`notification`] - `Notification` with a severity and an i18n key
//! - [`manager`] - `Manager` queue with auto-dismiss
//! - [`toast`] - rendering
//!
//! Success and info toasts stay 3 s, warnings 5 s, errors until dismissed.
//! At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
