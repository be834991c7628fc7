// SPDX-License-Identifier: MPL-2.0
//! Key-value preferences datastore.
//!
//! Small UI flags that the app manages itself (as opposed to the user-edited
//! `settings.toml`) live in a CBOR map at
//! `<data dir>/datastore/app_preferences.cbor`.
//!
//! Reads never fail: a missing, unreadable or corrupt file reads as "no
//! values". Writes are serialized through a lock and replace the file
//! atomically via a temporary sibling and a rename.

use crate::app::paths;
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Key recording that camera permission has been requested at least once.
pub const CAMERA_PERMISSION_REQUESTED: &str = "camera_permission_requested";

const DATASTORE_DIR: &str = "datastore";
const PREFERENCES_FILE: &str = "app_preferences.cbor";

type PreferenceMap = BTreeMap<String, bool>;

#[derive(Debug)]
pub struct PreferencesStore {
    path: Option<PathBuf>,
    write_lock: Mutex<()>,
}

impl PreferencesStore {
    /// Opens the store in the default data directory.
    pub fn open() -> Self {
        Self::open_in(None)
    }

    /// Opens the store under `base_dir`, or the resolved data directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(DATASTORE_DIR);
            path.push(PREFERENCES_FILE);
            path
        });
        if path.is_none() {
            tracing::warn!("no data directory available; preferences will not persist");
        }
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Full path of the backing file, if one could be resolved.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the last written value for `key`, or `false`.
    pub async fn get_bool(&self, key: &str) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        read_map(path).await.get(key).copied().unwrap_or(false)
    }

    /// Durably stores `value` under `key`.
    pub async fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let _guard = self.write_lock.lock().await;
        let mut map = read_map(path).await;
        map.insert(key.to_string(), value);
        write_map(path, &map).await
    }

    pub async fn is_camera_permission_requested(&self) -> bool {
        self.get_bool(CAMERA_PERMISSION_REQUESTED).await
    }

    pub async fn set_camera_permission_requested(&self, requested: bool) -> Result<()> {
        self.set_bool(CAMERA_PERMISSION_REQUESTED, requested).await
    }
}

async fn read_map(path: &Path) -> PreferenceMap {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return PreferenceMap::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read preferences");
            return PreferenceMap::new();
        }
    };

    match ciborium::from_reader(bytes.as_slice()) {
        Ok(map) => map,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "corrupt preferences file ignored");
            PreferenceMap::new()
        }
    }
}

async fn write_map(path: &Path, map: &PreferenceMap) -> Result<()> {
    let mut encoded = Vec::new();
    ciborium::into_writer(map, &mut encoded)?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp_path = path.with_extension("cbor.tmp");
    tokio::fs::write(&tmp_path, &encoded).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    tracing::debug!(path = %path.display(), "preferences written");
    Ok(())
}
