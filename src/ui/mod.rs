// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`scan`] - Receipt capture flow (permission, camera, gallery, processing)
//! - [`home`] - Receipt list (placeholder)
//! - [`detail`] / [`edit`] - Single receipt views (placeholders)
//! - [`export`] - CSV/PDF export (placeholder)
//! - [`settings`] - Language and theme selection
//!
//! # Shared Infrastructure
//!
//! - [`components`] - App bar, modal dialog, empty state
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`navbar`] - Bottom navigation bar and scan button
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod edit;
pub mod export;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod scan;
pub mod settings;
pub mod styles;
pub mod theming;
