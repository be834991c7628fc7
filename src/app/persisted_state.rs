// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state that should survive a restart but is not something the user
//! edits (unlike `settings.toml`), such as where the gallery picker was last
//! opened.
//!
//! # Path Resolution
//!
//! 1. `load_from()`/`save_to()` with an explicit directory
//! 2. `EXPENSE_SNAP_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory the gallery picker last returned a file from.
    #[serde(default)]
    pub last_gallery_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns `(state, warning)`. Any failure yields the default state and
    /// an i18n key suitable for a notification.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "state file is corrupt");
                    (
                        Self::default(),
                        Some("notification-state-load-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot open state file");
                (
                    Self::default(),
                    Some("notification-state-load-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location. Returns an i18n warning key on
    /// failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let path = Self::state_file_path_with_override(base_dir)?;

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %err, "cannot create data directory");
                return Some("notification-state-save-error".to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });
        match written {
            Ok(()) => None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to write state file");
                Some("notification-state-save-error".to_string())
            }
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Records `dir` as the gallery directory. Returns `true` when it changed.
    pub fn set_last_gallery_directory(&mut self, dir: &Path) -> bool {
        if self.last_gallery_directory.as_deref() == Some(dir) {
            return false;
        }
        self.last_gallery_directory = Some(dir.to_path_buf());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_gallery_directory() {
        assert!(AppState::default().last_gallery_directory.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let base = Some(dir.path().to_path_buf());

        let mut state = AppState::default();
        state.set_last_gallery_directory(Path::new("/home/user/Pictures"));
        assert!(state.save_to(base.clone()).is_none());

        let (loaded, warning) = AppState::load_from(base);
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_default_silently() {
        let dir = tempdir().expect("temp dir");
        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_loads_default_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STATE_FILE), b"\xff\x00 not cbor").expect("write");

        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-load-error"));
    }

    #[test]
    fn setting_same_directory_reports_no_change() {
        let mut state = AppState::default();
        assert!(state.set_last_gallery_directory(Path::new("/tmp/a")));
        assert!(!state.set_last_gallery_directory(Path::new("/tmp/a")));
        assert!(state.set_last_gallery_directory(Path::new("/tmp/b")));
    }
}
