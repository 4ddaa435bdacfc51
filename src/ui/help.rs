// SPDX-License-Identifier: MPL-2.0
//! Help screen listing the fixed keyboard bindings.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Messages emitted by the help screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Render the help screen.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let back_button = button(
        Text::new(format!("← {}", i18n.tr("help-back"))).size(typography::BODY),
    )
    .style(styles::button::text_like)
    .on_press(Message::Back);

    let title = Text::new(i18n.tr("help-title")).size(typography::TITLE_LG);

    let shortcuts = Column::new()
        .spacing(spacing::XXS)
        .push(shortcut_row(
            i18n.tr("help-toggle-keys"),
            i18n.tr("help-toggle"),
        ))
        .push(shortcut_row(
            i18n.tr("help-restart-keys"),
            i18n.tr("help-restart"),
        ))
        .push(shortcut_row(
            i18n.tr("help-jump-end-keys"),
            i18n.tr("help-jump-end"),
        ))
        .push(shortcut_row(
            i18n.tr("help-faster-keys"),
            i18n.tr("help-faster"),
        ))
        .push(shortcut_row(
            i18n.tr("help-slower-keys"),
            i18n.tr("help-slower"),
        ));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(shortcuts);

    scrollable(content).into()
}

/// Build a single shortcut row with key badge and description.
fn shortcut_row<'a>(keys: String, description: String) -> Element<'a, Message> {
    let key_badge = Container::new(Text::new(keys).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(key_badge).width(Length::Fixed(160.0)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}
