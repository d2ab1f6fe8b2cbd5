// SPDX-License-Identifier: MPL-2.0
//! Root view: the gallery with the toast overlay on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewEnv};
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::Element;

pub(super) struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = gallery::view(ctx.gallery, ViewEnv { i18n: ctx.i18n }).map(Message::Gallery);
    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}
