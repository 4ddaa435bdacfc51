// SPDX-License-Identifier: MPL-2.0
//! Prompter player screen.
//!
//! Owns one prompter session: the loaded transcript, its playback engine and
//! the transport overlay visibility. The screen has three stages: loading
//! (async file read in flight), unavailable (the read failed) and ready.
//!
//! All scroll movement flows through [`crate::domain::Playback`]; this module
//! translates keyboard and button input into playback commands and keeps the
//! prompt scroll offset in sync with the engine position.

pub mod keys;
pub mod prompt;
pub mod transport;

pub use keys::Command;

use crate::domain::{ControlVisibility, HideDelay, Playback, ScrollSpeed, Transcript};
use crate::error::TranscriptError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, operation, Column, Container, Stack, Text};
use iced::{alignment, keyboard, Element, Length, Task};

/// One active prompter session.
#[derive(Debug, Clone)]
pub struct Session {
    pub transcript: Transcript,
    pub playback: Playback,
    pub controls: ControlVisibility,
}

/// What the player screen is currently showing.
#[derive(Debug, Clone)]
enum Stage {
    /// The transcript file read has not completed yet.
    Loading,
    /// The transcript could not be loaded.
    Unavailable,
    Ready(Session),
}

/// Player screen state.
#[derive(Debug, Clone)]
pub struct State {
    stage: Stage,
    /// Speed applied to newly loaded sessions.
    initial_speed: ScrollSpeed,
    hide_delay: HideDelay,
}

/// Messages handled by the player screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Async transcript load completed.
    Loaded(Result<Transcript, TranscriptError>),
    /// A transport bar button was pressed.
    Transport(transport::Message),
    /// Raw native event routed from the application subscription.
    RawEvent(iced::Event),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Leave the player and return to the library.
    Back,
    /// The transcript failed to load.
    LoadFailed(TranscriptError),
    /// The operator changed the scroll speed; the parent may persist it.
    SpeedChanged(ScrollSpeed),
}

impl State {
    /// Creates a player in the loading stage.
    #[must_use]
    pub fn new(initial_speed: ScrollSpeed, hide_delay: HideDelay) -> Self {
        Self {
            stage: Stage::Loading,
            initial_speed,
            hide_delay,
        }
    }

    /// Returns the active session, if the transcript is loaded.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.stage {
            Stage::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Returns true while the prompt scroll is advancing.
    ///
    /// The frame tick subscription keys off this, so leaving the playing
    /// state drops the subscription and with it any pending ticks.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.session()
            .map(|session| session.playback.is_playing())
            .unwrap_or(false)
    }

    /// Advances playback by one frame and re-syncs the prompt scroll.
    pub fn frame_tick(&mut self) -> Task<Message> {
        if let Stage::Ready(session) = &mut self.stage {
            session.playback.tick();
            return snap_to(&session.playback);
        }
        Task::none()
    }

    /// Processes a player message and returns the event for the parent.
    pub fn handle_message(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Loaded(Ok(transcript)) => {
                let extent = prompt::extent_for(&transcript);
                let playback = Playback::new(extent, self.initial_speed);
                let task = snap_to(&playback);
                self.stage = Stage::Ready(Session {
                    transcript,
                    playback,
                    controls: ControlVisibility::new(self.hide_delay),
                });
                (Event::None, task)
            }
            Message::Loaded(Err(error)) => {
                self.stage = Stage::Unavailable;
                (Event::LoadFailed(error), Task::none())
            }
            Message::Transport(transport::Message::Back) => (Event::Back, Task::none()),
            Message::Transport(transport::Message::Command(command)) => {
                self.apply_command(command)
            }
            Message::RawEvent(event) => self.handle_raw_event(&event),
        }
    }

    /// Applies a transport command from either keyboard or button.
    pub fn apply_command(&mut self, command: Command) -> (Event, Task<Message>) {
        let Stage::Ready(session) = &mut self.stage else {
            return (Event::None, Task::none());
        };

        // Every command counts as an interaction: the overlay reappears and
        // its hide delay restarts.
        session.controls.touch();

        match command {
            Command::TogglePlay => {
                session.playback.toggle();
                (Event::None, Task::none())
            }
            Command::Restart => {
                session.playback.restart();
                (Event::None, snap_to(&session.playback))
            }
            Command::JumpToEnd => {
                session.playback.jump_to_end();
                (Event::None, snap_to(&session.playback))
            }
            Command::SpeedUp => {
                session.playback.change_speed(1);
                (Event::SpeedChanged(session.playback.speed()), Task::none())
            }
            Command::SpeedDown => {
                session.playback.change_speed(-1);
                (Event::SpeedChanged(session.playback.speed()), Task::none())
            }
        }
    }

    fn handle_raw_event(&mut self, event: &iced::Event) -> (Event, Task<Message>) {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
                    return (Event::Back, Task::none());
                }
                if let Some(command) = keys::command_for_key(key) {
                    return self.apply_command(command);
                }
                (Event::None, Task::none())
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // Pointer movement reveals the overlay without changing playback.
                if let Stage::Ready(session) = &mut self.stage {
                    session.controls.touch();
                }
                (Event::None, Task::none())
            }
            _ => (Event::None, Task::none()),
        }
    }

    /// Renders the player screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match &self.stage {
            Stage::Loading => centered_message(i18n.tr("player-loading")),
            Stage::Unavailable => {
                let back = button(Text::new(i18n.tr("player-back")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button_primary)
                    .on_press(Message::Transport(transport::Message::Back));

                Container::new(
                    Column::new()
                        .spacing(spacing::MD)
                        .align_x(alignment::Horizontal::Center)
                        .push(Text::new(i18n.tr("player-unavailable")).size(typography::TITLE_SM))
                        .push(back),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
            }
            Stage::Ready(session) => {
                let stage = Container::new(prompt::view::<Message>(&session.transcript))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::prompt_stage);

                let mut layers = Stack::new().push(stage);

                if session.controls.visible(session.playback.is_playing()) {
                    layers = layers.push(
                        transport::view(&session.playback, session.transcript.title(), i18n)
                            .map(Message::Transport),
                    );
                }

                layers.into()
            }
        }
    }
}

/// Task snapping the prompt scrollable to the engine position.
fn snap_to(playback: &Playback) -> Task<Message> {
    operation::scroll_to(prompt::scrollable_id(), prompt::scroll_offset(playback))
}

fn centered_message<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
