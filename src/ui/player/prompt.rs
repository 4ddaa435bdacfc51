// SPDX-License-Identifier: MPL-2.0
//! Mirrored prompt text rendering.
//!
//! The transcript is rendered for a beam-splitter rig: the display lies flat
//! under a 45° glass pane, so what the screen shows must be the vertical
//! mirror of normal reading order. The mirror is realized by laying the lines
//! out bottom-to-top and driving the scroll offset from the remaining
//! playback position, so position and pixels stay in lockstep.

use crate::domain::{Playback, Transcript};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{scrollable, text, Column, Id, Text};
use iced::{alignment, Element, Length};

/// Widget id of the prompt scrollable, targeted by programmatic scrolling.
pub fn scrollable_id() -> Id {
    Id::new("prompt")
}

/// Scroll extent of a transcript in pixels.
///
/// Every line occupies exactly one prompt line slot, so the extent is the
/// line count times the line height. An empty transcript has extent zero.
pub fn extent_for(transcript: &Transcript) -> f32 {
    transcript.line_count() as f32 * typography::PROMPT_LINE_HEIGHT
}

/// Absolute scroll offset corresponding to the current playback position.
///
/// The prompt column is laid out in reverse, so the offset equals the
/// remaining position: full extent at the start (scrolled to the first line),
/// zero at the end.
pub fn scroll_offset(playback: &Playback) -> scrollable::AbsoluteOffset {
    scrollable::AbsoluteOffset {
        x: 0.0,
        y: playback.position().max(0.0),
    }
}

/// Renders the mirrored transcript column.
pub fn view<Message: 'static>(transcript: &Transcript) -> Element<'_, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::XL, spacing::LG]);

    // Bottom-to-top layout: the last script line sits at the top of the
    // column, the first at the bottom.
    for line in transcript.content().lines().rev() {
        column = column.push(
            Text::new(line.to_owned())
                .size(typography::PROMPT)
                .line_height(text::LineHeight::Absolute(
                    typography::PROMPT_LINE_HEIGHT.into(),
                )),
        );
    }

    scrollable(column)
        .id(scrollable_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
