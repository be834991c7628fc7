// SPDX-License-Identifier: MPL-2.0
//! Scan flow state machine.
//!
//! ```text
//!                    granted
//!   Loading ─────────────────────────────────────────► CameraPreview ◄──┐
//!     │  never asked                                     │   ▲          │
//!     ▼                 allow                            │   │ retake   │
//!   CheckingPermission ─────────────────────────────────►│   │          │
//!     │  deny / dismiss                          capture ▼   │          │
//!     ▼                                   CapturedImagePreview          │
//!   AlternateUploadScreen ── retry camera ──────────────────────────────┘
//!                                                        │ use photo
//!                                                        ▼
//!                                          ProcessingImagePreview
//!                                                        │ delay
//!                                                        ▼
//!                                             ImageProcessed(id)
//! ```
//!
//! A permanent denial keeps the current state and raises the settings prompt.
//! The machine itself is synchronous; the async halves of each operation live
//! in the free functions at the bottom and are driven by the scan component.

use crate::app::config::PLACEHOLDER_RECEIPT_ID;
use crate::permissions::{Permission, PermissionError, PermissionsController};
use crate::preferences::PreferencesStore;
use std::sync::Arc;
use std::time::Duration;

/// Where the scan screen currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanScreenState {
    #[default]
    Loading,
    CheckingPermission,
    AlternateUploadScreen,
    CameraPreview,
    CapturedImagePreview,
    ProcessingImagePreview,
    ImageProcessed(String),
}

/// Result of consulting the permission controller and preferences store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionStatus {
    pub granted: bool,
    pub requested_before: bool,
}

/// Result of asking the user for camera access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    /// What the request itself answered.
    pub result: Result<(), PermissionError>,
    /// Whether access is granted once the request settled.
    pub granted: bool,
}

/// The scan screen's state plus the data held alongside it.
#[derive(Debug, Clone, Default)]
pub struct ScanFlow {
    state: ScanScreenState,
    photo: Option<Arc<[u8]>>,
    settings_prompt_visible: bool,
}

impl ScanFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanScreenState {
        &self.state
    }

    /// Encoded bytes of the captured or picked photo.
    pub fn photo(&self) -> Option<&Arc<[u8]>> {
        self.photo.as_ref()
    }

    pub fn is_settings_prompt_visible(&self) -> bool {
        self.settings_prompt_visible
    }

    /// States in which a fresh permission check may change the outcome.
    pub fn accepts_permission_check(&self) -> bool {
        matches!(
            self.state,
            ScanScreenState::Loading
                | ScanScreenState::CheckingPermission
                | ScanScreenState::AlternateUploadScreen
        )
    }

    /// Whether a photo may enter the flow (camera shot or gallery pick).
    pub fn accepts_photo(&self) -> bool {
        matches!(
            self.state,
            ScanScreenState::CameraPreview | ScanScreenState::AlternateUploadScreen
        )
    }

    /// Applies a permission check result.
    pub fn on_permission_checked(&mut self, status: PermissionStatus) {
        if !self.accepts_permission_check() {
            return;
        }
        self.state = if status.granted {
            ScanScreenState::CameraPreview
        } else if !status.requested_before {
            ScanScreenState::CheckingPermission
        } else {
            ScanScreenState::AlternateUploadScreen
        };
    }

    /// Applies the answer to a permission request.
    pub fn on_permission_requested(&mut self, outcome: RequestOutcome) {
        match outcome.result {
            Err(PermissionError::DeniedAlways) => self.settings_prompt_visible = true,
            Err(PermissionError::Denied) => {
                self.state = ScanScreenState::AlternateUploadScreen;
            }
            Ok(()) => {}
        }
        if outcome.granted {
            self.state = ScanScreenState::CameraPreview;
        }
    }

    pub fn on_permission_dialog_dismissed(&mut self) {
        self.state = ScanScreenState::AlternateUploadScreen;
    }

    pub fn dismiss_settings_prompt(&mut self) {
        self.settings_prompt_visible = false;
    }

    /// Hides the prompt; the caller then opens the settings guidance.
    pub fn open_app_settings(&mut self) {
        self.settings_prompt_visible = false;
    }

    /// Stores the photo and moves to its preview. Returns `false` when the
    /// current state takes no photo.
    pub fn on_photo_captured(&mut self, bytes: impl Into<Arc<[u8]>>) -> bool {
        if !self.accepts_photo() {
            return false;
        }
        self.photo = Some(bytes.into());
        self.state = ScanScreenState::CapturedImagePreview;
        true
    }

    pub fn retake_photo(&mut self) {
        self.photo = None;
        self.state = ScanScreenState::CameraPreview;
    }

    /// Starts processing the stored photo. Returns `false` unless a photo is
    /// being previewed.
    pub fn process_captured_photo(&mut self) -> bool {
        if self.state != ScanScreenState::CapturedImagePreview || self.photo.is_none() {
            return false;
        }
        self.state = ScanScreenState::ProcessingImagePreview;
        true
    }

    pub fn on_image_processed(&mut self, receipt_id: String) {
        if self.state == ScanScreenState::ProcessingImagePreview {
            self.state = ScanScreenState::ImageProcessed(receipt_id);
        }
    }
}

// =============================================================================
// Async operations
// =============================================================================

/// Reads whether the camera is usable and whether we asked before.
pub async fn check_camera_permission(
    permissions: Arc<dyn PermissionsController>,
    preferences: Arc<PreferencesStore>,
) -> PermissionStatus {
    let granted = permissions.is_granted(Permission::Camera).await;
    let requested_before = preferences.is_camera_permission_requested().await;
    tracing::debug!(granted, requested_before, "camera permission checked");
    PermissionStatus {
        granted,
        requested_before,
    }
}

/// Records the request, asks for access and re-reads the grant.
pub async fn request_camera_permission(
    permissions: Arc<dyn PermissionsController>,
    preferences: Arc<PreferencesStore>,
) -> RequestOutcome {
    if let Err(err) = preferences.set_camera_permission_requested(true).await {
        tracing::warn!(error = %err, "failed to record camera permission request");
    }

    let result = permissions.provide(Permission::Camera).await;
    if let Err(err) = result {
        tracing::info!(error = %err, "camera permission not granted");
    }
    let granted = permissions.is_granted(Permission::Camera).await;
    RequestOutcome { result, granted }
}

/// Stands in for receipt extraction: waits `delay` and reports the
/// placeholder id whatever the photo contains.
pub async fn simulate_processing(_photo: Arc<[u8]>, delay: Duration) -> String {
    tokio::time::sleep(delay).await;
    PLACEHOLDER_RECEIPT_ID.to_string()
}
