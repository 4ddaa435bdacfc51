// SPDX-License-Identifier: MPL-2.0
//! On-screen transport controls.
//!
//! The bar mirrors the keyboard bindings one-to-one so every playback
//! operation is reachable by mouse as well. It auto-hides while playing;
//! visibility policy lives in [`crate::domain::ControlVisibility`], this
//! module only renders.

use super::keys::Command;
use crate::domain::Playback;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the transport bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Command(Command),
    Back,
}

/// Renders the transport bar for the current playback state.
pub fn view<'a>(playback: &Playback, title: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    let toggle_label = if playback.is_playing() {
        i18n.tr("control-pause")
    } else {
        i18n.tr("control-play")
    };

    let buttons = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(transport_button(
            i18n.tr("control-restart"),
            Some(Message::Command(Command::Restart)),
        ))
        .push(
            button(Text::new(toggle_label).size(typography::TITLE_SM))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button_primary)
                .on_press(Message::Command(Command::TogglePlay)),
        )
        .push(transport_button(
            i18n.tr("control-jump-end"),
            Some(Message::Command(Command::JumpToEnd)),
        ));

    // The speed buttons go inert at the bounds, matching the clamped keyboard
    // bindings.
    let speed = playback.speed();
    let speed_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(transport_button(
            i18n.tr("control-slower"),
            (!speed.is_min()).then_some(Message::Command(Command::SpeedDown)),
        ))
        .push(
            Text::new(format!("{} {}", i18n.tr("player-speed-label"), speed.value()))
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .push(transport_button(
            i18n.tr("control-faster"),
            (!speed.is_max()).then_some(Message::Command(Command::SpeedUp)),
        ));

    let back_button = button(Text::new(i18n.tr("player-back")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::text_like)
        .on_press(Message::Back);

    let mut bar = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    if playback.phase().is_at_end() {
        bar = bar.push(
            Text::new(i18n.tr("player-finished"))
                .size(typography::BODY)
                .color(palette::WARNING_500),
        );
    }

    let bar = bar.push(buttons).push(speed_row).push(back_button);

    Container::new(
        Container::new(bar)
            .padding(spacing::MD)
            .style(styles::container::transport_bar),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::LG)
    .into()
}

fn transport_button(label: String, message: Option<Message>) -> Element<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button_overlay(palette::WHITE, 0.5, 0.8))
        .on_press_maybe(message)
        .into()
}
