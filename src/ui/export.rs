// SPDX-License-Identifier: MPL-2.0
//! Export screen placeholder.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_bar::AppBar;
use crate::ui::components::empty_state;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a, Message: Clone + 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .push(AppBar::new(ctx.i18n.tr("export-title")).view())
        .push(empty_state::view(
            icons::export(),
            ctx.i18n.tr("export-placeholder"),
            ctx.i18n.tr("export-hint"),
        ));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}
