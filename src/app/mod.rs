// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the library, player and
//! help screens.
//!
//! The `App` struct wires together the domains (playback, script library,
//! localization) and translates messages into side effects like config
//! persistence or transcript loading. Policy decisions (window size, which
//! tick drives what) stay close to the main update loop so user-facing
//! behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::I18n;
use crate::ui::library;
use crate::ui::notifications;
use crate::ui::player;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: config::Config,
    /// Resolved script library directory. `None` only when the platform data
    /// directory cannot be determined.
    library_dir: Option<PathBuf>,
    library: library::State,
    /// Player state while a prompter session is open or loading.
    player: Option<player::State>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("player_open", &self.player.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Library,
            config: config::Config::default(),
            library_dir: None,
            library: library::State::default(),
            player: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state, scans the library and optionally kicks
    /// off asynchronous transcript loading based on `Flags` from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let library_dir = config
            .library
            .directory
            .clone()
            .or_else(paths::get_scripts_dir);

        let mut app = App {
            i18n,
            config,
            library_dir,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let mut ctx = app.update_context();
        update::rescan_library(&mut ctx);

        let task = match flags.script_path {
            Some(path_str) => {
                let mut ctx = app.update_context();
                update::open_script(&mut ctx, PathBuf::from(path_str))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            config: &mut self.config,
            library: &mut self.library,
            player: &mut self.player,
            notifications: &mut self.notifications,
            library_dir: &self.library_dir,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.screen == Screen::Player {
            if let Some(session) = self.player.as_ref().and_then(player::State::session) {
                return format!("{} - {app_name}", session.transcript.title());
            }
        }

        app_name
    }

    fn theme(&self) -> Theme {
        // The prompt stage is black-on-white-inverted; a dark chrome matches.
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let frame_tick_sub = subscription::create_frame_tick_subscription(
            self.player
                .as_ref()
                .map(player::State::is_playing)
                .unwrap_or(false),
        );
        let ui_tick_sub = subscription::create_ui_tick_subscription(
            self.screen == Screen::Player,
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, frame_tick_sub, ui_tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Library(library_message) => {
                update::handle_library_message(&mut ctx, library_message)
            }
            Message::Player(player_message) => {
                update::handle_player_message(&mut ctx, player_message)
            }
            Message::Help(help_message) => update::handle_help_message(&mut ctx, help_message),
            Message::ImportDialogResult(path) => {
                update::handle_import_dialog_result(&mut ctx, path)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FrameTick(_instant) => match self.player.as_mut() {
                Some(state) => state.frame_tick().map(Message::Player),
                None => Task::none(),
            },
            Message::Tick(_instant) => {
                // The view re-evaluates overlay visibility on every render;
                // this tick only forces the render and ages out toasts.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            library: &self.library,
            player: &self.player,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlaybackPhase, Transcript};
    use crate::error::TranscriptError;
    use crate::ui::player::{transport, Command};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn sample_transcript() -> Transcript {
        Transcript::new(
            std::path::PathBuf::from("/tmp/Briefing.txt"),
            "Briefing",
            "line one\nline two\nline three",
        )
    }

    fn app_with_open_script() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Library(library::Message::OpenRequested(
            std::path::PathBuf::from("/tmp/Briefing.txt"),
        )));
        let _ = app.update(Message::Player(player::Message::Loaded(Ok(
            sample_transcript(),
        ))));
        app
    }

    #[test]
    fn new_starts_in_library_without_player() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Library);
            assert!(app.player.is_none());
        });
    }

    #[test]
    fn opening_script_switches_to_player() {
        let app = app_with_open_script();
        assert_eq!(app.screen, Screen::Player);

        let session = app
            .player
            .as_ref()
            .and_then(player::State::session)
            .expect("session");
        assert_eq!(session.transcript.title(), "Briefing");
        assert_eq!(session.playback.phase(), PlaybackPhase::StoppedAtStart);
    }

    #[test]
    fn failed_load_shows_notification_and_stays_in_player() {
        let mut app = App::default();
        let _ = app.update(Message::Library(library::Message::OpenRequested(
            std::path::PathBuf::from("/tmp/absent.txt"),
        )));
        let _ = app.update(Message::Player(player::Message::Loaded(Err(
            TranscriptError::NotFound,
        ))));

        assert_eq!(app.screen, Screen::Player);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn transport_back_returns_to_library_and_drops_player() {
        let mut app = app_with_open_script();
        let _ = app.update(Message::Player(player::Message::Transport(
            transport::Message::Back,
        )));

        assert_eq!(app.screen, Screen::Library);
        assert!(app.player.is_none());
    }

    #[test]
    fn frame_tick_advances_playing_session() {
        let mut app = app_with_open_script();
        let _ = app.update(Message::Player(player::Message::Transport(
            transport::Message::Command(Command::TogglePlay),
        )));
        let start = app
            .player
            .as_ref()
            .and_then(player::State::session)
            .unwrap()
            .playback
            .position();

        let _ = app.update(Message::FrameTick(std::time::Instant::now()));

        let position = app
            .player
            .as_ref()
            .and_then(player::State::session)
            .unwrap()
            .playback
            .position();
        assert!(position < start);
    }

    #[test]
    fn frame_tick_without_player_is_inert() {
        let mut app = App::default();
        let _ = app.update(Message::FrameTick(std::time::Instant::now()));
        assert!(app.player.is_none());
    }

    #[test]
    fn speed_change_persists_to_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = app_with_open_script();
            let _ = app.update(Message::Player(player::Message::Transport(
                transport::Message::Command(Command::SpeedUp),
            )));

            assert_eq!(app.config.playback.speed, Some(4));

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("speed = 4"));
        });
    }

    #[test]
    fn help_screen_round_trip() {
        let mut app = App::default();
        let _ = app.update(Message::Library(library::Message::HelpRequested));
        assert_eq!(app.screen, Screen::Help);

        let _ = app.update(Message::Help(crate::ui::help::Message::Back));
        assert_eq!(app.screen, Screen::Library);
    }

    #[test]
    fn cancelled_import_dialog_does_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::ImportDialogResult(None));
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.screen, Screen::Library);
    }

    #[test]
    fn delete_rescans_library() {
        let dir = tempdir().expect("temp dir");
        let keep = dir.path().join("keep.txt");
        let gone = dir.path().join("gone.txt");
        fs::File::create(&keep)
            .expect("create keep")
            .write_all(b"keep")
            .expect("write keep");
        fs::File::create(&gone)
            .expect("create gone")
            .write_all(b"gone")
            .expect("write gone");

        let mut app = App {
            library_dir: Some(dir.path().to_path_buf()),
            ..App::default()
        };
        let _ = app.update(Message::Library(library::Message::RefreshRequested));
        assert_eq!(app.library.entries().len(), 2);

        let _ = app.update(Message::Library(library::Message::DeleteRequested(gone)));
        assert_eq!(app.library.entries().len(), 1);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn view_renders_on_every_screen() {
        let mut app = app_with_open_script();
        let _ = app.view();

        let _ = app.update(Message::Player(player::Message::Transport(
            transport::Message::Back,
        )));
        let _ = app.view();

        let _ = app.update(Message::Library(library::Message::HelpRequested));
        let _ = app.view();
    }

    #[test]
    fn title_shows_script_name_in_player() {
        let app = app_with_open_script();
        assert_eq!(app.title(), "Briefing - Teleprompt");
    }

    #[test]
    fn title_shows_app_name_in_library() {
        let app = App::default();
        assert_eq!(app.title(), "Teleprompt");
    }
}
