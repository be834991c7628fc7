// SPDX-License-Identifier: MPL-2.0
use expense_snap::app::config::PLACEHOLDER_RECEIPT_ID;
use expense_snap::permissions::{
    Permission, PermissionError, PermissionsController, SettingsGuidance,
};
use expense_snap::preferences::PreferencesStore;
use expense_snap::ui::scan::flow::{
    self, PermissionStatus, RequestOutcome, ScanFlow, ScanScreenState,
};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

/// Controller whose answer to `provide` is fixed up front.
struct ScriptedPermissions {
    granted: AtomicBool,
    answer: Result<(), PermissionError>,
}

impl ScriptedPermissions {
    fn new(granted: bool, answer: Result<(), PermissionError>) -> Arc<Self> {
        Arc::new(Self {
            granted: AtomicBool::new(granted),
            answer,
        })
    }
}

impl PermissionsController for ScriptedPermissions {
    fn is_granted(&self, _permission: Permission) -> BoxFuture<'static, bool> {
        futures_util::future::ready(self.granted.load(Ordering::SeqCst)).boxed()
    }

    fn provide(&self, _permission: Permission) -> BoxFuture<'static, Result<(), PermissionError>> {
        if self.answer.is_ok() {
            self.granted.store(true, Ordering::SeqCst);
        }
        futures_util::future::ready(self.answer).boxed()
    }

    fn open_app_settings(&self, _guidance: SettingsGuidance) -> BoxFuture<'static, ()> {
        futures_util::future::ready(()).boxed()
    }
}

fn status(granted: bool, requested_before: bool) -> PermissionStatus {
    PermissionStatus {
        granted,
        requested_before,
    }
}

#[test]
fn granted_permission_always_opens_camera() {
    for requested_before in [false, true] {
        let mut scan = ScanFlow::new();
        scan.on_permission_checked(status(true, requested_before));
        assert_eq!(scan.state(), &ScanScreenState::CameraPreview);
    }
}

#[test]
fn never_requested_permission_asks_first() {
    let mut scan = ScanFlow::new();
    scan.on_permission_checked(status(false, false));
    assert_eq!(scan.state(), &ScanScreenState::CheckingPermission);
}

#[test]
fn capture_retake_and_process() {
    let mut scan = ScanFlow::new();
    scan.on_permission_checked(status(true, true));

    assert!(scan.on_photo_captured(vec![1_u8, 2, 3]));
    assert_eq!(scan.state(), &ScanScreenState::CapturedImagePreview);

    scan.retake_photo();
    assert!(scan.photo().is_none());
    assert_eq!(scan.state(), &ScanScreenState::CameraPreview);

    assert!(scan.on_photo_captured(vec![4_u8]));
    assert!(scan.process_captured_photo());
    scan.on_image_processed("r-1".into());
    assert_eq!(scan.state(), &ScanScreenState::ImageProcessed("r-1".into()));
}

#[tokio::test]
async fn first_request_is_recorded_and_grants_camera() {
    let dir = tempdir().expect("temp dir");
    let preferences = Arc::new(PreferencesStore::open_in(Some(dir.path().to_path_buf())));
    let permissions = ScriptedPermissions::new(false, Ok(()));

    let mut scan = ScanFlow::new();
    let checked = flow::check_camera_permission(permissions.clone(), preferences.clone()).await;
    scan.on_permission_checked(checked);
    assert_eq!(scan.state(), &ScanScreenState::CheckingPermission);

    let outcome = flow::request_camera_permission(permissions.clone(), preferences.clone()).await;
    scan.on_permission_requested(outcome);
    assert_eq!(scan.state(), &ScanScreenState::CameraPreview);
    assert!(preferences.is_camera_permission_requested().await);
}

#[tokio::test]
async fn temporary_denial_offers_gallery_and_remembers_request() {
    let dir = tempdir().expect("temp dir");
    let preferences = Arc::new(PreferencesStore::open_in(Some(dir.path().to_path_buf())));
    let permissions = ScriptedPermissions::new(false, Err(PermissionError::Denied));

    let mut scan = ScanFlow::new();
    scan.on_permission_checked(status(false, false));
    let outcome = flow::request_camera_permission(permissions.clone(), preferences.clone()).await;
    assert_eq!(
        outcome,
        RequestOutcome {
            result: Err(PermissionError::Denied),
            granted: false,
        }
    );
    scan.on_permission_requested(outcome);
    assert_eq!(scan.state(), &ScanScreenState::AlternateUploadScreen);

    // Next visit skips the dialog and goes straight to the upload screen.
    let mut next_visit = ScanFlow::new();
    next_visit.on_permission_checked(
        flow::check_camera_permission(permissions, preferences).await,
    );
    assert_eq!(next_visit.state(), &ScanScreenState::AlternateUploadScreen);
}

#[tokio::test]
async fn permanent_denial_raises_settings_prompt() {
    let dir = tempdir().expect("temp dir");
    let preferences = Arc::new(PreferencesStore::open_in(Some(dir.path().to_path_buf())));
    let permissions = ScriptedPermissions::new(false, Err(PermissionError::DeniedAlways));

    let mut scan = ScanFlow::new();
    scan.on_permission_checked(status(false, true));
    let before = scan.state().clone();

    scan.on_permission_requested(flow::request_camera_permission(permissions, preferences).await);
    assert!(scan.is_settings_prompt_visible());
    assert_eq!(scan.state(), &before);

    scan.open_app_settings();
    assert!(!scan.is_settings_prompt_visible());
}

#[tokio::test(start_paused = true)]
async fn processing_finishes_after_fixed_delay_regardless_of_content() {
    let delay = Duration::from_millis(2_000);

    for photo in [Vec::new(), vec![0_u8; 16], b"not an image".to_vec()] {
        let started = tokio::time::Instant::now();
        let id = flow::simulate_processing(Arc::from(photo), delay).await;
        assert_eq!(id, PLACEHOLDER_RECEIPT_ID);
        assert!(started.elapsed() >= delay);
    }
}
