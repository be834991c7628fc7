// SPDX-License-Identifier: MPL-2.0
//! Camera capture adapter.
//!
//! ```text
//! ┌──────────────────┐
//! │   Scan screen    │
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  CameraAdapter   │  ← flash mode, output format, optional save copy
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ CameraBackend    │  ← Video4Linux on Linux, unavailable elsewhere
//! └──────────────────┘
//! ```

pub mod flash;
pub mod frame;
#[cfg(target_os = "linux")]
mod v4l2;

use crate::error::CameraError;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Flash behavior for the next capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashMode {
    Off,
    On,
    /// Fires only when the scene is dark.
    #[default]
    Auto,
}

impl FlashMode {
    /// Cycles Off -> On -> Auto -> Off.
    pub fn next(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Auto,
            FlashMode::Auto => FlashMode::Off,
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            FlashMode::Off => "scan-flash-off",
            FlashMode::On => "scan-flash-on",
            FlashMode::Auto => "scan-flash-auto",
        }
    }
}

/// Encoding of captured photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    pub(crate) fn to_image_format(self) -> image_rs::ImageFormat {
        match self {
            ImageFormat::Jpeg => image_rs::ImageFormat::Jpeg,
            ImageFormat::Png => image_rs::ImageFormat::Png,
        }
    }
}

/// Resolved camera settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraConfiguration {
    pub device_index: usize,
    pub flash_mode: FlashMode,
    pub image_format: ImageFormat,
    pub save_directory: Option<PathBuf>,
}

/// Parameters of a single capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    pub flash_mode: FlashMode,
    pub image_format: ImageFormat,
}

pub type CaptureResult = Result<Vec<u8>, CameraError>;

/// A device able to produce one encoded still image.
pub trait CameraBackend: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Captures a single frame and returns it encoded as requested.
    fn capture(&self, request: CaptureRequest) -> BoxFuture<'static, CaptureResult>;
}

/// Backend used where no capture API is compiled in.
#[derive(Debug, Default)]
pub struct UnavailableBackend;

impl CameraBackend for UnavailableBackend {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn capture(&self, _request: CaptureRequest) -> BoxFuture<'static, CaptureResult> {
        futures_util::future::ready(Err(CameraError::Unavailable)).boxed()
    }
}

/// Returns the platform's capture backend for `config`.
pub fn platform_backend(config: &CameraConfiguration) -> Arc<dyn CameraBackend> {
    #[cfg(target_os = "linux")]
    {
        Arc::new(v4l2::V4l2Backend::new(config.device_index))
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = config;
        Arc::new(UnavailableBackend)
    }
}

/// What the scan screen talks to: remembers the flash mode and forwards
/// capture requests to the backend.
#[derive(Clone)]
pub struct CameraAdapter {
    backend: Arc<dyn CameraBackend>,
    flash_mode: FlashMode,
    image_format: ImageFormat,
    save_directory: Option<PathBuf>,
}

impl std::fmt::Debug for CameraAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraAdapter")
            .field("backend", &self.backend.name())
            .field("flash_mode", &self.flash_mode)
            .field("image_format", &self.image_format)
            .field("save_directory", &self.save_directory)
            .finish()
    }
}

impl CameraAdapter {
    pub fn new(backend: Arc<dyn CameraBackend>, config: &CameraConfiguration) -> Self {
        Self {
            backend,
            flash_mode: config.flash_mode,
            image_format: config.image_format,
            save_directory: config.save_directory.clone(),
        }
    }

    pub fn flash_mode(&self) -> FlashMode {
        self.flash_mode
    }

    pub fn set_flash_mode(&mut self, mode: FlashMode) {
        self.flash_mode = mode;
    }

    /// Advances to the next flash mode and returns it.
    pub fn toggle_flash_mode(&mut self) -> FlashMode {
        self.flash_mode = self.flash_mode.next();
        self.flash_mode
    }

    pub fn image_format(&self) -> ImageFormat {
        self.image_format
    }

    /// Captures a photo with the current flash mode.
    ///
    /// When a save directory is configured the photo is also written there;
    /// a failed copy is logged and does not fail the capture.
    pub fn take_picture(&self) -> BoxFuture<'static, CaptureResult> {
        let request = CaptureRequest {
            flash_mode: self.flash_mode,
            image_format: self.image_format,
        };
        let capture = self.backend.capture(request);
        let save_directory = self.save_directory.clone();
        let backend = self.backend.name().to_string();

        async move {
            let bytes = capture.await?;
            tracing::info!(backend = %backend, bytes = bytes.len(), "photo captured");

            if let Some(dir) = save_directory {
                match save_capture(&dir, &bytes, request.image_format).await {
                    Ok(path) => tracing::info!(path = %path.display(), "capture saved"),
                    Err(err) => tracing::warn!(dir = %dir.display(), error = %err, "failed to save capture"),
                }
            }
            Ok(bytes)
        }
        .boxed()
    }
}

/// Writes `bytes` to `dir` as `receipt_<timestamp>.<ext>`.
pub async fn save_capture(
    dir: &Path,
    bytes: &[u8],
    format: ImageFormat,
) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
    let path = dir.join(format!("receipt_{}.{}", stamp, format.extension()));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
