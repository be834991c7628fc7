// SPDX-License-Identifier: MPL-2.0
//! Applies settings changes and writes them to `settings.toml`, plus the
//! CBOR app state.

use super::config::{self, Config};
use super::persisted_state::AppState;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Writes `config` to disk. Returns an i18n warning key on failure.
///
/// Skipped in unit tests so they never touch the user's config directory.
pub fn persist_config(config: &Config) -> Option<String> {
    if cfg!(test) {
        return None;
    }

    match config::save(config) {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            Some("notification-config-save-error".to_string())
        }
    }
}

/// Writes `state` to the data directory. Skipped in unit tests.
pub fn persist_app_state(state: &AppState) -> Option<String> {
    if cfg!(test) {
        return None;
    }
    state.save()
}

/// Switches the UI language and records it in `config`.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> Option<String> {
    tracing::info!(locale = %locale, "language changed");
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    persist_config(config)
}

/// Records the theme mode in `config`.
pub fn apply_theme_change(config: &mut Config, mode: ThemeMode) -> Option<String> {
    tracing::info!(?mode, "theme changed");
    config.general.theme_mode = mode;
    persist_config(config)
}
