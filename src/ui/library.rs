// SPDX-License-Identifier: MPL-2.0
//! Script library screen.
//!
//! Lists the scripts found in the library directory and offers import,
//! refresh, open and delete actions. All file system work happens in the
//! parent update loop; this screen only renders entries and emits intents.

use crate::i18n::fluent::I18n;
use crate::library::ScriptEntry;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;

/// Library screen state: the most recent scan result.
#[derive(Debug, Clone, Default)]
pub struct State {
    entries: Vec<ScriptEntry>,
}

/// Messages emitted by the library screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open a script in the player.
    OpenRequested(PathBuf),
    /// Delete a script from the library.
    DeleteRequested(PathBuf),
    /// Pick a file to import via the native dialog.
    ImportRequested,
    /// Rescan the library directory.
    RefreshRequested,
    /// Show the keyboard shortcuts screen.
    HelpRequested,
}

impl State {
    #[must_use]
    pub fn new(entries: Vec<ScriptEntry>) -> Self {
        Self { entries }
    }

    /// Replaces the listing with a fresh scan result.
    pub fn set_entries(&mut self, entries: Vec<ScriptEntry>) {
        self.entries = entries;
    }

    #[must_use]
    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the library screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("library-title")).size(typography::TITLE_LG);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(i18n.tr("library-import")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button_primary)
                    .on_press(Message::ImportRequested),
            )
            .push(
                button(Text::new(i18n.tr("library-refresh")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::text_like)
                    .on_press(Message::RefreshRequested),
            )
            .push(
                button(Text::new(i18n.tr("library-help")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::text_like)
                    .on_press(Message::HelpRequested),
            );

        let listing: Element<'a, Message> = if self.entries.is_empty() {
            Text::new(i18n.tr("library-empty"))
                .size(typography::BODY)
                .into()
        } else {
            let mut list = Column::new().spacing(spacing::XS);
            for entry in &self.entries {
                list = list.push(entry_row(entry, i18n));
            }
            scrollable(list).height(Length::Fill).into()
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::LIBRARY_LIST_WIDTH))
            .push(title)
            .push(actions)
            .push(listing);

        Container::new(
            Container::new(content)
                .padding(spacing::LG)
                .style(styles::container::panel),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
    }
}

fn entry_row<'a>(entry: &'a ScriptEntry, i18n: &'a I18n) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(entry.title.as_str()).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("library-open")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button_primary)
                .on_press(Message::OpenRequested(entry.path.clone())),
        )
        .push(
            button(Text::new(i18n.tr("library-delete")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::danger)
                .on_press(Message::DeleteRequested(entry.path.clone())),
        )
        .into()
}
