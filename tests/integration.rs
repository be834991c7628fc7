// SPDX-License-Identifier: MPL-2.0
use expense_snap::app::config::{self, Config};
use expense_snap::app::{Navigator, Screen};
use expense_snap::i18n::fluent::I18n;
use expense_snap::preferences::PreferencesStore;
use expense_snap::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_partial_config_file_keeps_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\ntheme_mode = \"Dark\"\n\n[future_section]\nkey = 1\n",
    )
    .expect("write config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.scan, Config::default().scan);
    assert_eq!(loaded.camera, Config::default().camera);
}

#[tokio::test]
async fn test_preferences_survive_new_store_instance() {
    let dir = tempdir().expect("temp dir");
    let base = Some(dir.path().to_path_buf());

    let store = PreferencesStore::open_in(base.clone());
    assert!(!store.is_camera_permission_requested().await);
    store
        .set_camera_permission_requested(true)
        .await
        .expect("write preference");

    let reopened = PreferencesStore::open_in(base);
    assert!(reopened.is_camera_permission_requested().await);
}

#[tokio::test]
async fn test_corrupt_preferences_read_false() {
    let dir = tempdir().expect("temp dir");
    let store = PreferencesStore::open_in(Some(dir.path().to_path_buf()));
    let path = store.path().expect("store path").to_path_buf();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, b"definitely not cbor").expect("write garbage");

    assert!(!store.is_camera_permission_requested().await);

    // A write replaces the corrupt file.
    store
        .set_camera_permission_requested(true)
        .await
        .expect("write preference");
    assert!(store.is_camera_permission_requested().await);
}

#[test]
fn test_navigation_graph_walkthrough() {
    let mut nav = Navigator::new();

    // Home -> Scan -> finished scan opens the receipt in place of Scan.
    nav.navigate(Screen::Scan);
    nav.replace(Screen::Detail("xyz-123456".into()));
    nav.navigate(Screen::Edit("xyz-123456".into()));
    assert_eq!(nav.depth(), 3);
    assert!(!nav.current().shows_bottom_bar());

    // Bottom bar selection always restarts from Home.
    nav.select_tab(Screen::Settings);
    assert_eq!(nav.depth(), 2);
    assert!(nav.current().shows_bottom_bar());
    assert!(!nav.current().shows_scan_button());

    assert!(nav.navigate_up());
    assert!(!nav.navigate_up());
    assert_eq!(nav.current(), &Screen::Home);
    assert!(nav.current().shows_scan_button());
}
