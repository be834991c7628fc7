// SPDX-License-Identifier: MPL-2.0
//! Scan screen component: owns the [`ScanFlow`] and turns its operations into
//! Iced tasks.
//!
//! Every async result carries the session number it was started under. The
//! app creates a fresh `State` with a new session on each visit, so answers
//! that arrive after the screen was left are dropped.

use super::flow::{self, RequestOutcome, ScanFlow, ScanScreenState};
use super::view;
use crate::camera::{CameraAdapter, FlashMode};
use crate::error::CameraError;
use crate::i18n::fluent::I18n;
use crate::permissions::{PermissionsController, SettingsGuidance};
use crate::preferences::PreferencesStore;
use crate::ui::notifications::Notification;
use iced::widget::image;
use iced::{Element, Task};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Extensions offered by the gallery picker.
pub const GALLERY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// Delays of the simulated processing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTimings {
    pub processing_delay: Duration,
    pub success_display: Duration,
}

/// Long-lived collaborators handed to every scan session.
#[derive(Clone)]
pub struct Services {
    pub camera: CameraAdapter,
    pub permissions: Arc<dyn PermissionsController>,
    pub preferences: Arc<PreferencesStore>,
    pub timings: ScanTimings,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("camera", &self.camera)
            .field("preferences", &self.preferences.path())
            .field("timings", &self.timings)
            .finish_non_exhaustive()
    }
}

/// Outcome of the gallery picker.
#[derive(Debug, Clone)]
pub enum GalleryPick {
    Cancelled,
    Picked { path: PathBuf, bytes: Arc<[u8]> },
    Failed { path: PathBuf, error: String },
}

#[derive(Debug, Clone)]
pub enum Message {
    PermissionChecked {
        session: u64,
        status: flow::PermissionStatus,
    },
    /// "Allow Camera Access" / "Enable Camera".
    RequestPermission,
    PermissionRequested {
        session: u64,
        outcome: RequestOutcome,
    },
    PermissionDialogDismissed,
    DismissSettingsPrompt,
    OpenAppSettings,
    AppSettingsClosed {
        session: u64,
    },
    ToggleFlash,
    Capture,
    Captured {
        session: u64,
        result: Result<Arc<[u8]>, CameraError>,
    },
    PickFromGallery,
    GalleryPicked {
        session: u64,
        pick: GalleryPick,
    },
    Retake,
    UsePhoto,
    Processed {
        session: u64,
        receipt_id: String,
    },
    SuccessShown {
        session: u64,
    },
    /// Close button or "Back to Home".
    Close,
}

/// Side effects the app performs on behalf of the component.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Leave the scan screen.
    Close,
    /// Processing finished; open the receipt.
    Completed(String),
    Notify(Notification),
    /// Remember where the gallery picker ended up.
    GalleryDirectoryUsed(PathBuf),
}

pub struct State {
    session: u64,
    flow: ScanFlow,
    camera: CameraAdapter,
    capturing: bool,
    preview: Option<image::Handle>,
    permissions: Arc<dyn PermissionsController>,
    preferences: Arc<PreferencesStore>,
    timings: ScanTimings,
    gallery_directory: Option<PathBuf>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("session", &self.session)
            .field("flow", &self.flow.state())
            .field("flash_mode", &self.camera.flash_mode())
            .field("capturing", &self.capturing)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Enters the scan screen and starts the permission check.
    pub fn new(
        session: u64,
        services: &Services,
        gallery_directory: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let state = Self {
            session,
            flow: ScanFlow::new(),
            camera: services.camera.clone(),
            capturing: false,
            preview: None,
            permissions: Arc::clone(&services.permissions),
            preferences: Arc::clone(&services.preferences),
            timings: services.timings,
            gallery_directory,
        };
        tracing::debug!(session, "scan session started");
        let task = state.check_permission();
        (state, task)
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn flow(&self) -> &ScanFlow {
        &self.flow
    }

    pub fn screen_state(&self) -> &ScanScreenState {
        self.flow.state()
    }

    pub fn flash_mode(&self) -> FlashMode {
        self.camera.flash_mode()
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub(super) fn preview(&self) -> Option<&image::Handle> {
        self.preview.as_ref()
    }

    /// Re-checks the permission when the window comes back to the front,
    /// e.g. after the user changed device permissions elsewhere.
    pub fn on_window_focused(&self) -> Task<Message> {
        if self.flow.accepts_permission_check() && !self.flow.is_settings_prompt_visible() {
            self.check_permission()
        } else {
            Task::none()
        }
    }

    fn check_permission(&self) -> Task<Message> {
        let session = self.session;
        Task::perform(
            flow::check_camera_permission(
                Arc::clone(&self.permissions),
                Arc::clone(&self.preferences),
            ),
            move |status| Message::PermissionChecked { session, status },
        )
    }

    fn is_current(&self, session: u64) -> bool {
        if session != self.session {
            tracing::debug!(session, current = self.session, "dropping stale scan result");
            return false;
        }
        true
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::PermissionChecked { session, status } => {
                if self.is_current(session) {
                    self.flow.on_permission_checked(status);
                }
                (Effect::None, Task::none())
            }
            Message::RequestPermission => {
                let session = self.session;
                let task = Task::perform(
                    flow::request_camera_permission(
                        Arc::clone(&self.permissions),
                        Arc::clone(&self.preferences),
                    ),
                    move |outcome| Message::PermissionRequested { session, outcome },
                );
                (Effect::None, task)
            }
            Message::PermissionRequested { session, outcome } => {
                if self.is_current(session) {
                    self.flow.on_permission_requested(outcome);
                }
                (Effect::None, Task::none())
            }
            Message::PermissionDialogDismissed => {
                self.flow.on_permission_dialog_dismissed();
                (Effect::None, Task::none())
            }
            Message::DismissSettingsPrompt => {
                self.flow.dismiss_settings_prompt();
                (Effect::None, Task::none())
            }
            Message::OpenAppSettings => {
                self.flow.open_app_settings();
                let guidance = SettingsGuidance {
                    title: i18n.tr("settings-guidance-title"),
                    message: i18n.tr("settings-guidance-message"),
                };
                let session = self.session;
                let task = Task::perform(self.permissions.open_app_settings(guidance), move |()| {
                    Message::AppSettingsClosed { session }
                });
                (Effect::None, task)
            }
            Message::AppSettingsClosed { session } => {
                let task = if self.is_current(session) {
                    self.on_window_focused()
                } else {
                    Task::none()
                };
                (Effect::None, task)
            }
            Message::ToggleFlash => {
                let mode = self.camera.toggle_flash_mode();
                tracing::debug!(?mode, "flash mode changed");
                (Effect::None, Task::none())
            }
            Message::Capture => {
                if self.capturing || self.flow.state() != &ScanScreenState::CameraPreview {
                    return (Effect::None, Task::none());
                }
                self.capturing = true;
                let session = self.session;
                let task = Task::perform(self.camera.take_picture(), move |result| {
                    Message::Captured {
                        session,
                        result: result.map(Arc::from),
                    }
                });
                (Effect::None, task)
            }
            Message::Captured { session, result } => {
                if !self.is_current(session) {
                    return (Effect::None, Task::none());
                }
                self.capturing = false;
                match result {
                    Ok(bytes) => {
                        self.accept_photo(bytes);
                        (Effect::None, Task::none())
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "capture failed");
                        (
                            Effect::Notify(Notification::warning(err.i18n_key())),
                            Task::none(),
                        )
                    }
                }
            }
            Message::PickFromGallery => {
                if !self.flow.accepts_photo() {
                    return (Effect::None, Task::none());
                }
                let session = self.session;
                let dialog_title = i18n.tr("scan-gallery-dialog-title");
                let filter_name = i18n.tr("scan-gallery-filter-images");
                let task = Task::perform(
                    pick_gallery_image(dialog_title, filter_name, self.gallery_directory.clone()),
                    move |pick| Message::GalleryPicked { session, pick },
                );
                (Effect::None, task)
            }
            Message::GalleryPicked { session, pick } => {
                if !self.is_current(session) {
                    return (Effect::None, Task::none());
                }
                match pick {
                    GalleryPick::Cancelled => (Effect::None, Task::none()),
                    GalleryPick::Picked { path, bytes } => {
                        tracing::info!(path = %path.display(), bytes = bytes.len(), "gallery image picked");
                        self.accept_photo(bytes);
                        match path.parent() {
                            Some(dir) => {
                                self.gallery_directory = Some(dir.to_path_buf());
                                (Effect::GalleryDirectoryUsed(dir.to_path_buf()), Task::none())
                            }
                            None => (Effect::None, Task::none()),
                        }
                    }
                    GalleryPick::Failed { path, error } => {
                        tracing::warn!(path = %path.display(), error = %error, "failed to read gallery image");
                        let file_name = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        (
                            Effect::Notify(
                                Notification::warning("notification-gallery-read-error")
                                    .with_arg("file", file_name),
                            ),
                            Task::none(),
                        )
                    }
                }
            }
            Message::Retake => {
                self.flow.retake_photo();
                self.preview = None;
                (Effect::None, Task::none())
            }
            Message::UsePhoto => {
                let Some(photo) = self.flow.photo().cloned() else {
                    return (Effect::None, Task::none());
                };
                if !self.flow.process_captured_photo() {
                    return (Effect::None, Task::none());
                }
                let session = self.session;
                let task = Task::perform(
                    flow::simulate_processing(photo, self.timings.processing_delay),
                    move |receipt_id| Message::Processed {
                        session,
                        receipt_id,
                    },
                );
                (Effect::None, task)
            }
            Message::Processed {
                session,
                receipt_id,
            } => {
                if !self.is_current(session) {
                    return (Effect::None, Task::none());
                }
                self.flow.on_image_processed(receipt_id);
                let delay = self.timings.success_display;
                let task = Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::SuccessShown { session },
                );
                (Effect::None, task)
            }
            Message::SuccessShown { session } => {
                if !self.is_current(session) {
                    return (Effect::None, Task::none());
                }
                match self.flow.state() {
                    ScanScreenState::ImageProcessed(id) => {
                        tracing::info!(receipt_id = %id, "receipt processed");
                        (Effect::Completed(id.clone()), Task::none())
                    }
                    _ => (Effect::None, Task::none()),
                }
            }
            Message::Close => (Effect::Close, Task::none()),
        }
    }

    fn accept_photo(&mut self, bytes: Arc<[u8]>) {
        let handle = image::Handle::from_bytes(bytes.to_vec());
        if self.flow.on_photo_captured(bytes) {
            self.preview = Some(handle);
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(view::ViewContext { i18n, state: self })
    }
}

/// Opens the native picker and reads the chosen file.
async fn pick_gallery_image(
    title: String,
    filter_name: String,
    start_directory: Option<PathBuf>,
) -> GalleryPick {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter_name, GALLERY_EXTENSIONS);
    if let Some(dir) = start_directory {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    match dialog.pick_file().await {
        Some(handle) => read_gallery_image(handle.path().to_path_buf()).await,
        None => GalleryPick::Cancelled,
    }
}

/// Reads `path` and checks that it holds a decodable image format.
pub async fn read_gallery_image(path: PathBuf) -> GalleryPick {
    match tokio::fs::read(&path).await {
        Ok(bytes) => match image_rs::guess_format(&bytes) {
            Ok(_) => GalleryPick::Picked {
                path,
                bytes: Arc::from(bytes),
            },
            Err(err) => GalleryPick::Failed {
                path,
                error: err.to_string(),
            },
        },
        Err(err) => GalleryPick::Failed {
            path,
            error: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraBackend, CameraConfiguration, CaptureRequest, CaptureResult};
    use crate::permissions::{Permission, PermissionError};
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::tempdir;

    struct StaticPermissions {
        granted: AtomicBool,
    }

    impl PermissionsController for StaticPermissions {
        fn is_granted(&self, _permission: Permission) -> BoxFuture<'static, bool> {
            futures_util::future::ready(self.granted.load(Ordering::SeqCst)).boxed()
        }

        fn provide(
            &self,
            _permission: Permission,
        ) -> BoxFuture<'static, Result<(), PermissionError>> {
            futures_util::future::ready(Ok(())).boxed()
        }

        fn open_app_settings(&self, _guidance: SettingsGuidance) -> BoxFuture<'static, ()> {
            futures_util::future::ready(()).boxed()
        }
    }

    struct FailingCamera;

    impl CameraBackend for FailingCamera {
        fn name(&self) -> &str {
            "failing"
        }

        fn capture(&self, _request: CaptureRequest) -> BoxFuture<'static, CaptureResult> {
            futures_util::future::ready(Err(CameraError::NoDevice)).boxed()
        }
    }

    fn services(dir: &std::path::Path, granted: bool) -> Services {
        Services {
            camera: CameraAdapter::new(Arc::new(FailingCamera), &CameraConfiguration::default()),
            permissions: Arc::new(StaticPermissions {
                granted: AtomicBool::new(granted),
            }),
            preferences: Arc::new(PreferencesStore::open_in(Some(dir.to_path_buf()))),
            timings: ScanTimings {
                processing_delay: Duration::from_millis(5000),
                success_display: Duration::from_millis(1500),
            },
        }
    }

    fn granted_status() -> flow::PermissionStatus {
        flow::PermissionStatus {
            granted: true,
            requested_before: false,
        }
    }

    #[test]
    fn new_session_starts_loading() {
        let dir = tempdir().expect("temp dir");
        let (state, _task) = State::new(7, &services(dir.path(), true), None);
        assert_eq!(state.session(), 7);
        assert_eq!(state.screen_state(), &ScanScreenState::Loading);
    }

    #[test]
    fn stale_permission_result_is_ignored() {
        let dir = tempdir().expect("temp dir");
        let i18n = I18n::default();
        let (mut state, _task) = State::new(2, &services(dir.path(), true), None);

        state.handle_message(
            Message::PermissionChecked {
                session: 1,
                status: granted_status(),
            },
            &i18n,
        );
        assert_eq!(state.screen_state(), &ScanScreenState::Loading);

        state.handle_message(
            Message::PermissionChecked {
                session: 2,
                status: granted_status(),
            },
            &i18n,
        );
        assert_eq!(state.screen_state(), &ScanScreenState::CameraPreview);
    }

    #[test]
    fn capture_failure_keeps_preview_and_notifies() {
        let dir = tempdir().expect("temp dir");
        let i18n = I18n::default();
        let (mut state, _task) = State::new(1, &services(dir.path(), true), None);
        state.handle_message(
            Message::PermissionChecked {
                session: 1,
                status: granted_status(),
            },
            &i18n,
        );

        let (effect, _task) = state.handle_message(
            Message::Captured {
                session: 1,
                result: Err(CameraError::NoDevice),
            },
            &i18n,
        );

        assert_eq!(state.screen_state(), &ScanScreenState::CameraPreview);
        assert!(!state.is_capturing());
        match effect {
            Effect::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-camera-no-device");
            }
            other => panic!("expected notification, got {other:?}"),
        }
    }

    #[test]
    fn photo_retake_and_process_cycle() {
        let dir = tempdir().expect("temp dir");
        let i18n = I18n::default();
        let (mut state, _task) = State::new(1, &services(dir.path(), true), None);
        state.handle_message(
            Message::PermissionChecked {
                session: 1,
                status: granted_status(),
            },
            &i18n,
        );

        state.handle_message(
            Message::Captured {
                session: 1,
                result: Ok(Arc::from(vec![1u8, 2, 3])),
            },
            &i18n,
        );
        assert_eq!(state.screen_state(), &ScanScreenState::CapturedImagePreview);
        assert!(state.preview().is_some());

        state.handle_message(Message::Retake, &i18n);
        assert_eq!(state.screen_state(), &ScanScreenState::CameraPreview);
        assert!(state.flow().photo().is_none());
        assert!(state.preview().is_none());

        state.handle_message(
            Message::Captured {
                session: 1,
                result: Ok(Arc::from(vec![4u8])),
            },
            &i18n,
        );
        state.handle_message(Message::UsePhoto, &i18n);
        assert_eq!(
            state.screen_state(),
            &ScanScreenState::ProcessingImagePreview
        );

        state.handle_message(
            Message::Processed {
                session: 1,
                receipt_id: "xyz-123456".into(),
            },
            &i18n,
        );
        let (effect, _task) = state.handle_message(Message::SuccessShown { session: 1 }, &i18n);
        assert!(matches!(effect, Effect::Completed(id) if id == "xyz-123456"));
    }

    #[test]
    fn toggle_flash_cycles_adapter_mode() {
        let dir = tempdir().expect("temp dir");
        let i18n = I18n::default();
        let (mut state, _task) = State::new(1, &services(dir.path(), true), None);

        assert_eq!(state.flash_mode(), FlashMode::Auto);
        state.handle_message(Message::ToggleFlash, &i18n);
        assert_eq!(state.flash_mode(), FlashMode::Off);
    }

    #[test]
    fn gallery_pick_reports_directory() {
        let dir = tempdir().expect("temp dir");
        let i18n = I18n::default();
        let (mut state, _task) = State::new(1, &services(dir.path(), false), None);
        state.handle_message(Message::PermissionDialogDismissed, &i18n);

        let picked = dir.path().join("receipt.png");
        let (effect, _task) = state.handle_message(
            Message::GalleryPicked {
                session: 1,
                pick: GalleryPick::Picked {
                    path: picked,
                    bytes: Arc::from(vec![0x89u8, b'P', b'N', b'G']),
                },
            },
            &i18n,
        );

        assert_eq!(state.screen_state(), &ScanScreenState::CapturedImagePreview);
        assert!(matches!(effect, Effect::GalleryDirectoryUsed(d) if d == dir.path()));
    }

    #[test]
    fn close_requests_leaving() {
        let dir = tempdir().expect("temp dir");
        let (mut state, _task) = State::new(1, &services(dir.path(), true), None);
        let (effect, _task) = state.handle_message(Message::Close, &I18n::default());
        assert!(matches!(effect, Effect::Close));
    }

    #[tokio::test]
    async fn reading_non_image_fails() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"just text").expect("write");

        assert!(matches!(
            read_gallery_image(path).await,
            GalleryPick::Failed { .. }
        ));
    }

    #[tokio::test]
    async fn reading_png_succeeds() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("receipt.png");
        let image = image_rs::RgbImage::from_pixel(2, 2, image_rs::Rgb([255, 255, 255]));
        image.save(&path).expect("save png");

        match read_gallery_image(path.clone()).await {
            GalleryPick::Picked { path: picked, bytes } => {
                assert_eq!(picked, path);
                assert!(!bytes.is_empty());
            }
            other => panic!("expected picked image, got {other:?}"),
        }
    }
}
