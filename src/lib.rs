// SPDX-License-Identifier: MPL-2.0
//! `expense_snap` is a receipt scanner built with the Iced GUI framework.
//!
//! It walks the user through camera permission, capture (or picking a photo
//! from disk) and a simulated processing step, and hosts placeholder screens
//! for the receipt list, receipt details and export. Localization uses
//! Fluent; settings live in a TOML file and small app-managed flags in CBOR.

pub mod app;
pub mod camera;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod permissions;
pub mod preferences;
pub mod ui;
