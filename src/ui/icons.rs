// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-color SVGs embedded at compile time via `include_bytes!`
//! and handles are cached using `OnceLock`. They are drawn in black and tinted
//! at render time, so one asset serves both themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = button(icons::sized(icons::cross(), sizing::ICON_MD));
//! let flash = icons::tinted(icons::flash_on(), palette::WHITE);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_scanner`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone()).style(themed)
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(home, "home.svg", "House outline: home destination.");
define_icon!(camera, "camera.svg", "Camera body with lens: scanner.");
define_icon!(export, "export.svg", "Arrow leaving a tray: export destination.");
define_icon!(settings, "settings.svg", "Gear-like sun: settings destination.");
define_icon!(back, "back.svg", "Arrow pointing left.");

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(plus, "plus.svg", "Plus sign.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(pencil, "edit.svg", "Pencil: edit actions.");
define_icon!(gallery, "gallery.svg", "Framed landscape: pick an existing picture.");
define_icon!(receipt, "receipt.svg", "Receipt with torn bottom edge.");

// =============================================================================
// Flash Mode Icons
// =============================================================================

define_icon!(flash_on, "flash_on.svg", "Lightning bolt.");
define_icon!(flash_off, "flash_off.svg", "Lightning bolt struck through.");
define_icon!(flash_auto, "flash_auto.svg", "Lightning bolt with a small A.");

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(checkmark, "checkmark.svg", "Check mark: success.");
define_icon!(info, "info.svg", "Letter 'i' in circle.");
define_icon!(warning, "warning.svg", "Triangle with exclamation mark.");

/// Default tint: the theme's text color.
fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Forces a fixed color regardless of theme (icons drawn on brand or black
/// backgrounds).
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Icon for a flash mode, as shown on the camera toolbar.
pub fn flash(mode: crate::camera::FlashMode) -> Svg<'static> {
    use crate::camera::FlashMode;
    match mode {
        FlashMode::Off => flash_off(),
        FlashMode::On => flash_on(),
        FlashMode::Auto => flash_auto(),
    }
}
