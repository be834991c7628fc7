// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! - [`app_bar`] - Top bar with a title and optional leading/trailing actions
//! - [`dialog`] - Modal card with icon, texts and up to two actions, plus the
//!   scrim that hosts it
//! - [`empty_state`] - Centered icon, title and hint for screens without data

pub mod app_bar;
pub mod dialog;
pub mod empty_state;
