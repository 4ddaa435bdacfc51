// SPDX-License-Identifier: MPL-2.0
//! View dispatch for the application.
//!
//! Builds the widget tree for the current screen and stacks the toast
//! overlay on top when notifications are visible.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::library;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{help, player};
use iced::widget::{container, Stack, Text};
use iced::{Element, Length};

/// Read-only view of the application state needed to render the UI.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub library: &'a library::State,
    pub player: &'a Option<player::State>,
    pub notifications: &'a Manager,
}

/// Renders the current screen, with the toast overlay stacked on top.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let screen: Element<'a, Message> = match ctx.screen {
        Screen::Library => ctx.library.view(ctx.i18n).map(Message::Library),
        Screen::Player => match ctx.player {
            Some(state) => state.view(ctx.i18n).map(Message::Player),
            // Transitional frame between closing the player and the screen
            // switch landing. Render an empty stage rather than panicking.
            None => container(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        },
        Screen::Help => help::view(ctx.i18n).map(Message::Help),
    };

    if ctx.notifications.has_notifications() {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(screen)
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
            .into()
    } else {
        screen
    }
}
