// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler receives an `UpdateContext` with mutable references to the
//! pieces of `App` state it may touch, keeping `App::update` a thin
//! dispatcher.

use super::{config, Message, Screen};
use crate::domain::{HideDelay, ScrollSpeed, Transcript};
use crate::library;
use crate::ui::library as library_screen;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::{help, player};
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state handed to message handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a mut config::Config,
    pub library: &'a mut library_screen::State,
    pub player: &'a mut Option<player::State>,
    pub notifications: &'a mut Manager,
    pub library_dir: &'a Option<PathBuf>,
}

/// Initial scroll speed for new sessions, from config with clamping.
pub fn initial_speed(config: &config::Config) -> ScrollSpeed {
    ScrollSpeed::new(i32::from(
        config.playback.speed.unwrap_or(config::DEFAULT_SCROLL_SPEED),
    ))
}

/// Overlay auto-hide delay, from config with clamping.
pub fn hide_delay(config: &config::Config) -> HideDelay {
    HideDelay::new(
        config
            .playback
            .hide_delay_ms
            .unwrap_or(config::DEFAULT_HIDE_DELAY_MS),
    )
}

/// Rescans the library directory and refreshes the listing.
pub fn rescan_library(ctx: &mut UpdateContext<'_>) {
    let Some(dir) = ctx.library_dir else {
        ctx.library.set_entries(Vec::new());
        return;
    };

    let sort_order = ctx.config.library.sort_order.unwrap_or_default();
    match library::scan(dir, sort_order) {
        Ok(entries) => ctx.library.set_entries(entries),
        Err(_) => {
            ctx.library.set_entries(Vec::new());
            ctx.notifications
                .push(Notification::warning("notification-scan-error"));
        }
    }
}

/// Opens a script in the player and kicks off the async file read.
pub fn open_script(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.player = Some(player::State::new(
        initial_speed(ctx.config),
        hide_delay(ctx.config),
    ));
    *ctx.screen = Screen::Player;

    Task::perform(async move { Transcript::load(&path) }, |result| {
        Message::Player(player::Message::Loaded(result))
    })
}

/// Closes the player and returns to the library listing.
fn close_player(ctx: &mut UpdateContext<'_>) {
    *ctx.player = None;
    *ctx.screen = Screen::Library;
    rescan_library(ctx);
}

/// Persists a speed change so the next session starts at the same pace.
fn persist_speed(ctx: &mut UpdateContext<'_>, speed: ScrollSpeed) {
    ctx.config.playback.speed = Some(speed.value());
    if config::save(ctx.config).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

/// Handles messages from the library screen.
pub fn handle_library_message(
    ctx: &mut UpdateContext<'_>,
    message: library_screen::Message,
) -> Task<Message> {
    match message {
        library_screen::Message::OpenRequested(path) => open_script(ctx, path),
        library_screen::Message::DeleteRequested(path) => {
            match library::delete(&path) {
                Ok(()) => {
                    ctx.notifications
                        .push(Notification::success("notification-delete-success"));
                }
                Err(_) => {
                    ctx.notifications
                        .push(Notification::error("notification-delete-error"));
                }
            }
            rescan_library(ctx);
            Task::none()
        }
        library_screen::Message::ImportRequested => pick_import_file(),
        library_screen::Message::RefreshRequested => {
            rescan_library(ctx);
            Task::none()
        }
        library_screen::Message::HelpRequested => {
            *ctx.screen = Screen::Help;
            Task::none()
        }
    }
}

/// Opens the native file dialog for importing a script.
fn pick_import_file() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Text", &["txt", "md", "text"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ImportDialogResult,
    )
}

/// Handles the result of the import file dialog.
pub fn handle_import_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(source) = path else {
        // User cancelled the dialog.
        return Task::none();
    };

    import_script(ctx, &source);
    Task::none()
}

/// Copies a script file into the library and refreshes the listing.
pub fn import_script(ctx: &mut UpdateContext<'_>, source: &Path) {
    let Some(dir) = ctx.library_dir else {
        ctx.notifications
            .push(Notification::error("notification-import-error"));
        return;
    };

    match library::import(source, dir) {
        Ok(_) => {
            ctx.notifications
                .push(Notification::success("notification-import-success"));
        }
        Err(_) => {
            ctx.notifications
                .push(Notification::error("notification-import-error"));
        }
    }
    rescan_library(ctx);
}

/// Handles messages from the player screen and its propagated events.
pub fn handle_player_message(
    ctx: &mut UpdateContext<'_>,
    message: player::Message,
) -> Task<Message> {
    let Some(state) = ctx.player.as_mut() else {
        return Task::none();
    };

    let (event, task) = state.handle_message(message);
    let task = task.map(Message::Player);

    match event {
        player::Event::None => task,
        player::Event::Back => {
            close_player(ctx);
            Task::none()
        }
        player::Event::LoadFailed(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
            task
        }
        player::Event::SpeedChanged(speed) => {
            persist_speed(ctx, speed);
            task
        }
    }
}

/// Handles messages from the help screen.
pub fn handle_help_message(ctx: &mut UpdateContext<'_>, message: help::Message) -> Task<Message> {
    match message {
        help::Message::Back => {
            *ctx.screen = Screen::Library;
            Task::none()
        }
    }
}
