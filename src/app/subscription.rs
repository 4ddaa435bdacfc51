// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three subscriptions drive the app:
//! - raw native events, routed to the player for keyboard transport control;
//! - the playback frame tick, active only while the prompter is playing so
//!   that pausing synchronously cancels the tick stream;
//! - a slower housekeeping tick for overlay auto-hide re-evaluation and
//!   notification auto-dismiss.

use super::{Message, Screen};
use crate::app::config::defaults::{FRAME_TICK_MS, UI_TICK_MS};
use crate::ui::player;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the raw event subscription for the current screen.
///
/// Only the player consumes raw events (transport keys, pointer movement for
/// the overlay). Events already captured by a focused widget are not
/// forwarded.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Player => event::listen_with(|event, status, _window_id| {
            match &event {
                event::Event::Keyboard(..) => match status {
                    event::Status::Ignored => {
                        Some(Message::Player(player::Message::RawEvent(event)))
                    }
                    event::Status::Captured => None,
                },
                event::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                    Some(Message::Player(player::Message::RawEvent(event)))
                }
                _ => None,
            }
        }),
        Screen::Library | Screen::Help => Subscription::none(),
    }
}

/// Creates the playback frame tick subscription.
///
/// Active only while the prompter is playing. Dropping the subscription is
/// the cancellation mechanism: after a pause no further `FrameTick` can be
/// delivered, and the engine's own play-state guard discards any tick that
/// was already in flight.
pub fn create_frame_tick_subscription(playing: bool) -> Subscription<Message> {
    if playing {
        time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::FrameTick)
    } else {
        Subscription::none()
    }
}

/// Creates the housekeeping tick subscription.
///
/// Runs while the player is open (the overlay needs periodic re-evaluation)
/// or while any toast is on screen.
pub fn create_ui_tick_subscription(
    player_open: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if player_open || has_notifications {
        time::every(Duration::from_millis(UI_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
