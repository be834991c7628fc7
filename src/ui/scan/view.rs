// SPDX-License-Identifier: MPL-2.0
//! Scan screen rendering, one function per flow state.

use super::component::{Message, State};
use super::flow::ScanScreenState;
use crate::i18n::fluent::I18n;
use crate::ui::components::dialog::{self, Dialog};
use crate::ui::components::empty_state;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment::Horizontal, Background, Border, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let flow = state.flow();

    let screen: Element<'_, Message> = match flow.state() {
        ScanScreenState::Loading => loading(i18n),
        ScanScreenState::CheckingPermission => {
            let blank = Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::screen)
                .into();
            dialog::modal(
                blank,
                permission_dialog(i18n),
                Some(Message::PermissionDialogDismissed),
            )
        }
        ScanScreenState::AlternateUploadScreen => alternate_upload(i18n),
        ScanScreenState::CameraPreview => camera_preview(ctx.i18n, state),
        ScanScreenState::CapturedImagePreview => captured_preview(i18n, state),
        ScanScreenState::ProcessingImagePreview => processing(i18n, state),
        ScanScreenState::ImageProcessed(_) => processed(i18n),
    };

    if flow.is_settings_prompt_visible() {
        dialog::modal(
            screen,
            settings_prompt(i18n),
            Some(Message::DismissSettingsPrompt),
        )
    } else {
        screen
    }
}

fn loading(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("scan-loading")).size(typography::BODY_LG))
        .center(Length::Fill)
        .style(styles::container::screen)
        .into()
}

fn permission_dialog(i18n: &I18n) -> Element<'static, Message> {
    Dialog::new(icons::camera())
        .title(i18n.tr("permission-dialog-title"))
        .message(i18n.tr("permission-dialog-message"))
        .note(i18n.tr("permission-dialog-note"))
        .primary(i18n.tr("permission-dialog-allow"), Message::RequestPermission)
        .on_close(Message::PermissionDialogDismissed)
        .view()
}

fn settings_prompt(i18n: &I18n) -> Element<'static, Message> {
    Dialog::new(icons::settings())
        .title(i18n.tr("settings-prompt-title"))
        .message(i18n.tr("settings-prompt-message"))
        .primary(i18n.tr("settings-prompt-open"), Message::OpenAppSettings)
        .secondary(i18n.tr("settings-prompt-cancel"), Message::DismissSettingsPrompt)
        .view()
}

fn alternate_upload(i18n: &I18n) -> Element<'_, Message> {
    let wide_button = |label: String, icon: iced::widget::Svg<'static>, on_press: Message| {
        button(
            Row::new()
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center)
                .push(icons::sized(icon, sizing::ICON_MD))
                .push(Text::new(label).size(typography::BODY_LG)),
        )
        .on_press(on_press)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::SM, spacing::LG])
    };

    let gallery = wide_button(
        i18n.tr("scan-choose-gallery"),
        icons::tinted(icons::gallery(), palette::WHITE),
        Message::PickFromGallery,
    )
    .style(styles::button::primary);
    let camera = wide_button(
        i18n.tr("scan-enable-camera"),
        icons::camera(),
        Message::RequestPermission,
    )
    .style(styles::button::outlined);
    let home = button(Text::new(i18n.tr("scan-back-home")).center().width(Length::Fill))
        .on_press(Message::Close)
        .width(Length::Fill)
        .style(styles::button::text);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(empty_state::view(
            icons::receipt(),
            i18n.tr("scan-add-receipt-title"),
            i18n.tr("scan-add-receipt-subtitle"),
        ))
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(gallery)
                .push(camera)
                .push(home),
        );

    Container::new(content)
        .center(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::screen)
        .into()
}

fn overlay_button<'a>(icon: iced::widget::Svg<'static>, on_press: Message) -> Element<'a, Message> {
    button(
        Container::new(icons::tinted(
            icons::sized(icon, sizing::ICON_MD),
            palette::WHITE,
        ))
        .center(Length::Fill),
    )
    .on_press(on_press)
    .width(Length::Fixed(sizing::ICON_BUTTON))
    .height(Length::Fixed(sizing::ICON_BUTTON))
    .style(styles::button::overlay)
    .into()
}

/// Receipt-shaped guide drawn in the middle of the viewfinder.
fn frame_guide<'a>() -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            border: Border {
                color: palette::WHITE,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn camera_preview<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let flash_mode = state.flash_mode();

    let top = Row::new()
        .padding(spacing::MD)
        .align_y(iced::alignment::Vertical::Center)
        .push(overlay_button(icons::cross(), Message::Close))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(i18n.tr(flash_mode.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .push(Space::new().width(spacing::XS))
        .push(overlay_button(icons::flash(flash_mode), Message::ToggleFlash));

    let guide = Row::new()
        .height(Length::Fill)
        .padding(spacing::XL)
        .push(Space::new().width(Length::FillPortion(1)))
        .push(frame_guide())
        .push(Space::new().width(Length::FillPortion(1)));

    let hint = Text::new(i18n.tr("scan-preview-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_200);

    let mut shutter = button(Space::new())
        .width(Length::Fixed(sizing::CAPTURE_BUTTON))
        .height(Length::Fixed(sizing::CAPTURE_BUTTON))
        .style(styles::button::capture);
    if !state.is_capturing() {
        shutter = shutter.on_press(Message::Capture);
    }

    let bottom = Row::new()
        .padding(spacing::LG)
        .align_y(iced::alignment::Vertical::Center)
        .push(overlay_button(icons::gallery(), Message::PickFromGallery))
        .push(Space::new().width(Length::Fill))
        .push(shutter)
        .push(Space::new().width(Length::Fill))
        .push(Space::new().width(Length::Fixed(sizing::ICON_BUTTON)));

    let content = Column::new()
        .align_x(Horizontal::Center)
        .push(top)
        .push(guide)
        .push(hint)
        .push(bottom);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::viewfinder)
        .into()
}

fn photo<'a>(state: &'a State) -> Element<'a, Message> {
    match state.preview() {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    }
}

fn captured_preview<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let retake = button(
        Text::new(i18n.tr("scan-retake"))
            .center()
            .width(Length::Fill),
    )
    .on_press(Message::Retake)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::overlay);
    let use_photo = button(
        Text::new(i18n.tr("scan-use-photo"))
            .center()
            .width(Length::Fill),
    )
    .on_press(Message::UsePhoto)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary);

    let actions = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(retake)
        .push(use_photo);

    let content = Column::new()
        .push(
            Container::new(photo(state))
                .padding(spacing::MD)
                .height(Length::Fill),
        )
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::viewfinder)
        .into()
}

fn processing<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let status = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("scan-processing-title"))
                    .size(typography::TITLE_SM)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(i18n.tr("scan-processing-hint"))
                    .size(typography::BODY)
                    .color(palette::GRAY_300),
            ),
    )
    .padding(spacing::LG)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(iced::Color {
            a: 0.7,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    Stack::new()
        .push(
            Container::new(photo(state))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::viewfinder),
        )
        .push(Container::new(status).center(Length::Fill))
        .into()
}

fn processed(i18n: &I18n) -> Element<'_, Message> {
    let badge = Container::new(icons::tinted(
        icons::sized(icons::checkmark(), sizing::ICON_XL),
        palette::WHITE,
    ))
    .padding(spacing::LG)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::SUCCESS_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(Text::new(i18n.tr("scan-success-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("scan-success-hint")).size(typography::BODY));

    Container::new(content)
        .center(Length::Fill)
        .style(styles::container::screen)
        .into()
}
