// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together navigation, the scan session, localization
//! and settings, and translates messages into side effects like config
//! persistence or toasts. Screen modules never touch the back stack directly;
//! they report events and the handlers in `update` decide where to go.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Navigator, Screen};

use crate::camera::{self, CameraAdapter};
use crate::i18n::fluent::I18n;
use crate::permissions::DevicePermissions;
use crate::preferences::PreferencesStore;
use crate::ui::notifications::{self, Notification};
use crate::ui::scan::{self, ScanTimings, Services};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    /// Present exactly while Scan is the current screen.
    scan: Option<scan::State>,
    /// Last scan session number handed out.
    next_session: u64,
    services: Services,
    config: config::Config,
    theme_mode: ThemeMode,
    /// Persisted application state (last gallery directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", self.navigator.current())
            .field("depth", &self.navigator.depth())
            .field("scan_session", &self.scan.as_ref().map(scan::State::session))
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the long-lived scan collaborators from `config`.
pub fn build_services(config: &config::Config) -> Services {
    let camera_config = config.camera.to_camera_configuration();
    let backend = camera::platform_backend(&camera_config);
    tracing::info!(backend = backend.name(), device = camera_config.device_index, "camera backend ready");

    Services {
        camera: CameraAdapter::new(backend, &camera_config),
        permissions: Arc::new(DevicePermissions::new(camera_config.device_index)),
        preferences: Arc::new(PreferencesStore::open()),
        timings: ScanTimings {
            processing_delay: config.scan.processing_delay(),
            success_display: config.scan.success_display(),
        },
    }
}

impl App {
    /// Loads config and app state, then shows Home.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();
        let i18n = I18n::new(flags.lang, &config);
        let services = build_services(&config);

        let mut app = Self::with_services(i18n, config, services);
        app.app_state = app_state;
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }
        (app, Task::none())
    }

    /// Assembles an app around the given collaborators.
    pub fn with_services(i18n: I18n, config: config::Config, services: Services) -> Self {
        Self {
            i18n,
            navigator: Navigator::new(),
            scan: None,
            next_session: 0,
            services,
            theme_mode: config.general.theme_mode,
            config,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn scan(&self) -> Option<&scan::State> {
        self.scan.as_ref()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.navigator.current() {
            Screen::Detail(id) | Screen::Edit(id) => format!("{id} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.navigator.current());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            navigator: &mut self.navigator,
            scan: &mut self.scan,
            next_session: &mut self.next_session,
            services: &self.services,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::Edit(edit_message) => update::handle_edit_message(&mut ctx, edit_message),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Scan(scan_message) => update::handle_scan_message(&mut ctx, scan_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowFocused => update::handle_window_focused(&mut ctx),
            Message::NavigateUp => update::handle_navigate_up(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.navigator.current(),
            scan: self.scan.as_ref(),
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraConfiguration, UnavailableBackend};
    use crate::permissions::{Permission, PermissionError, PermissionsController, SettingsGuidance};
    use crate::ui::notifications::Severity;
    use crate::ui::scan::ScanScreenState;
    use crate::ui::{detail, edit, home, navbar, settings};
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::time::Duration;
    use tempfile::TempDir;
    use unic_langid::langid;

    struct DeniedPermissions;

    impl PermissionsController for DeniedPermissions {
        fn is_granted(&self, _permission: Permission) -> BoxFuture<'static, bool> {
            futures_util::future::ready(false).boxed()
        }

        fn provide(&self, _permission: Permission) -> BoxFuture<'static, Result<(), PermissionError>> {
            futures_util::future::ready(Err(PermissionError::Denied)).boxed()
        }

        fn open_app_settings(&self, _guidance: SettingsGuidance) -> BoxFuture<'static, ()> {
            futures_util::future::ready(()).boxed()
        }
    }

    fn test_app() -> (App, TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let services = Services {
            camera: CameraAdapter::new(Arc::new(UnavailableBackend), &CameraConfiguration::default()),
            permissions: Arc::new(DeniedPermissions),
            preferences: Arc::new(PreferencesStore::open_in(Some(dir.path().to_path_buf()))),
            timings: ScanTimings {
                processing_delay: Duration::from_millis(10),
                success_display: Duration::from_millis(10),
            },
        };
        let app = App::with_services(I18n::default(), config::Config::default(), services);
        (app, dir)
    }

    fn current_session(app: &App) -> u64 {
        app.scan().map(scan::State::session).unwrap_or_default()
    }

    #[test]
    fn starts_on_home_without_scan_session() {
        let (app, _dir) = test_app();
        assert_eq!(app.screen(), &Screen::Home);
        assert!(app.scan().is_none());
    }

    #[test]
    fn scan_button_opens_scan_with_fresh_session() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::Navbar(navbar::Message::ScanButtonPressed));
        assert_eq!(app.screen(), &Screen::Scan);
        let state = app.scan().expect("scan session");
        assert_eq!(state.screen_state(), &ScanScreenState::Loading);
        let first = current_session(&app);

        let _ = app.update(Message::NavigateUp);
        assert_eq!(app.screen(), &Screen::Home);
        assert!(app.scan().is_none());

        let _ = app.update(Message::Navbar(navbar::Message::SelectTab(Screen::Scan)));
        assert!(current_session(&app) > first);
    }

    #[test]
    fn closing_scan_returns_home() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ScanButtonPressed));

        let _ = app.update(Message::Scan(scan::Message::Close));
        assert_eq!(app.screen(), &Screen::Home);
        assert!(app.scan().is_none());
    }

    #[test]
    fn processed_receipt_replaces_scan_with_detail() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ScanButtonPressed));
        let session = current_session(&app);

        // Drive the flow to processing through a gallery pick.
        let _ = app.update(Message::Scan(scan::Message::PermissionChecked {
            session,
            status: scan::flow::PermissionStatus {
                granted: false,
                requested_before: true,
            },
        }));
        assert_eq!(
            app.scan().map(scan::State::screen_state),
            Some(&ScanScreenState::AlternateUploadScreen)
        );

        let _ = app.update(Message::Scan(scan::Message::GalleryPicked {
            session,
            pick: scan::component::GalleryPick::Picked {
                path: "/tmp/receipt.png".into(),
                bytes: Arc::from(vec![0_u8; 4]),
            },
        }));
        let _ = app.update(Message::Scan(scan::Message::UsePhoto));
        let _ = app.update(Message::Scan(scan::Message::Processed {
            session,
            receipt_id: "xyz-123456".into(),
        }));
        let _ = app.update(Message::Scan(scan::Message::SuccessShown { session }));

        assert_eq!(app.screen(), &Screen::Detail("xyz-123456".into()));
        assert_eq!(app.navigator().depth(), 2);
        assert!(app.scan().is_none());

        let _ = app.update(Message::NavigateUp);
        assert_eq!(app.screen(), &Screen::Home);
    }

    #[test]
    fn stale_scan_results_are_ignored_after_leaving() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ScanButtonPressed));
        let session = current_session(&app);
        let _ = app.update(Message::NavigateUp);

        let _ = app.update(Message::Scan(scan::Message::Processed {
            session,
            receipt_id: "late".into(),
        }));
        assert_eq!(app.screen(), &Screen::Home);
    }

    #[test]
    fn home_detail_edit_round_trip() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::Home(home::Message::OpenSampleReceipt));
        assert_eq!(app.screen(), &Screen::Detail(home::SAMPLE_RECEIPT_ID.into()));

        let _ = app.update(Message::Detail(detail::Message::Edit));
        assert_eq!(app.screen(), &Screen::Edit(home::SAMPLE_RECEIPT_ID.into()));

        let _ = app.update(Message::Edit(edit::Message::Save));
        assert_eq!(app.screen(), &Screen::Detail(home::SAMPLE_RECEIPT_ID.into()));

        let _ = app.update(Message::Detail(detail::Message::Back));
        assert_eq!(app.screen(), &Screen::Home);
    }

    #[test]
    fn settings_changes_apply_immediately() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectTab(Screen::Settings)));

        let _ = app.update(Message::Settings(settings::Message::ThemeSelected(ThemeMode::Dark)));
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(langid!("fr"))));
        assert_eq!(app.i18n.current_locale(), &langid!("fr"));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn leaving_scan_clears_camera_notifications() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ScanButtonPressed));
        app.notifications
            .push(Notification::error("notification-camera-unavailable"));
        app.notifications
            .push(Notification::new(Severity::Warning, "notification-config-load-error"));

        let _ = app.update(Message::NavigateUp);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn title_includes_receipt_id_on_detail() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.title(), "ExpenseSnap");
        let _ = app.update(Message::Home(home::Message::OpenSampleReceipt));
        assert_eq!(app.title(), "test-receipt-123 - ExpenseSnap");
    }

    #[test]
    fn view_renders_every_screen() {
        let (mut app, _dir) = test_app();
        let _ = app.view();
        let _ = app.update(Message::Navbar(navbar::Message::SelectTab(Screen::Export)));
        let _ = app.view();
        let _ = app.update(Message::Navbar(navbar::Message::SelectTab(Screen::Settings)));
        let _ = app.view();
        let _ = app.update(Message::Navbar(navbar::Message::SelectTab(Screen::Scan)));
        let _ = app.view();
    }
}
