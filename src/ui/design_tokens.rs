// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Static design tokens shared by every screen.

## Organization

- **Palette**: Brand blue, semantic green/amber/red, gray scale
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (buttons, FAB, capture button, dialogs)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use expense_snap::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a scrim color
let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Gray scale
    pub const GRAY_50: Color = Color::from_rgb8(0xF9, 0xFA, 0xFB);
    pub const GRAY_100: Color = Color::from_rgb8(0xF3, 0xF4, 0xF6);
    pub const GRAY_200: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
    pub const GRAY_300: Color = Color::from_rgb8(0xD1, 0xD5, 0xDB);
    pub const GRAY_400: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);
    pub const GRAY_500: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
    pub const GRAY_600: Color = Color::from_rgb8(0x4B, 0x55, 0x63);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Brand colors (blue scale)
    pub const PRIMARY_50: Color = Color::from_rgb8(0xEF, 0xF6, 0xFF);
    pub const PRIMARY_100: Color = Color::from_rgb8(0xDB, 0xEA, 0xFE);
    pub const PRIMARY_500: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x25, 0x63, 0xEB);
    pub const PRIMARY_700: Color = Color::from_rgb8(0x1D, 0x4E, 0xD8);

    // Secondary / accents
    pub const SECONDARY_500: Color = Color::from_rgb8(0x10, 0xB9, 0x81);
    pub const SECONDARY_600: Color = Color::from_rgb8(0x05, 0x96, 0x69);
    pub const ACCENT_AMBER_500: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);
    pub const ACCENT_RED_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);

    // Semantic colors
    pub const ERROR_500: Color = ACCENT_RED_500;
    pub const WARNING_500: Color = ACCENT_AMBER_500;
    pub const SUCCESS_500: Color = SECONDARY_500;
    pub const INFO_500: Color = PRIMARY_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Dialog scrim over the screen content.
    pub const SCRIM: f32 = 0.32;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 48.0;
    pub const BUTTON_MIN_WIDTH: f32 = 64.0;
    pub const ICON_BUTTON: f32 = 48.0;

    /// Floating scan button.
    pub const FAB: f32 = 56.0;
    /// Shutter button on the camera preview.
    pub const CAPTURE_BUTTON: f32 = 72.0;
    pub const BOTTOM_BAR_HEIGHT: f32 = 80.0;

    // Dialogs
    pub const DIALOG_MIN_WIDTH: f32 = 280.0;
    pub const DIALOG_MAX_WIDTH: f32 = 560.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 640.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PREVIEW_MAX_HEIGHT: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Dialog titles
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Bottom bar labels, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, outlined buttons
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Ring around the shutter button.
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 28.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::CAPTURE_BUTTON > sizing::FAB);
    assert!(sizing::DIALOG_MAX_WIDTH > sizing::DIALOG_MIN_WIDTH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);

    // Radius validation
    assert!(radius::XL > radius::LG);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
        assert_eq!(spacing::XXL, spacing::LG * 2.0);
    }

    #[test]
    fn brand_blue_matches_hex() {
        let blue = palette::PRIMARY_600;
        assert_eq!((blue.r * 255.0).round() as u8, 0x25);
        assert_eq!((blue.g * 255.0).round() as u8, 0x63);
        assert_eq!((blue.b * 255.0).round() as u8, 0xEB);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::WARNING_500);
        assert_ne!(palette::WARNING_500, palette::ERROR_500);
        assert_ne!(palette::ERROR_500, palette::INFO_500);
    }
}
