// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn disabled_style(theme: &Theme, corner: f32) -> button::Style {
    let is_light = !matches!(theme, Theme::Dark);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Filled brand button for the main action of a screen or dialog.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::PRIMARY_600,
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Disabled => return disabled_style(theme, radius::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Outlined button for the secondary action next to a primary one.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Active => Color::TRANSPARENT,
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_100
        },
        button::Status::Pressed => palette::PRIMARY_100,
        button::Status::Disabled => return disabled_style(theme, radius::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.brand_primary,
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button (dialog dismiss, "Cancel").
pub fn text(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Disabled => colors.text_tertiary,
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        button::Status::Active => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round floating action button that opens the scanner.
pub fn fab(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// White shutter button with a ring, drawn over the camera preview.
pub fn capture(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, ring) = match status {
        button::Status::Hovered => (palette::GRAY_100, palette::PRIMARY_500),
        button::Status::Pressed => (palette::GRAY_300, palette::PRIMARY_600),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_500),
        button::Status::Active => (WHITE, palette::GRAY_300),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            color: ring,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Translucent round button for controls laid over the camera preview.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bottom bar destination; `selected` marks the current tab.
pub fn nav_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = if selected {
            colors.brand_primary
        } else {
            colors.text_secondary
        };
        let background = match (selected, status) {
            (true, _) => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                Some(Background::Color(colors.surface_tertiary))
            }
            (false, _) => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Toggle-group choice (settings options).
pub fn choice(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return primary(theme, status);
        }
        let colors = ColorScheme::for_theme(theme);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => colors.surface_tertiary,
            _ => colors.surface_secondary,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.text_primary,
            border: Border {
                color: palette::GRAY_300,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
