// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::help;
use crate::ui::library;
use crate::ui::notifications;
use crate::ui::player;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Library(library::Message),
    Player(player::Message),
    Help(help::Message),
    Notification(notifications::NotificationMessage),
    /// Playback frame tick. Emitted only while the prompter is playing.
    FrameTick(Instant),
    /// Housekeeping tick for overlay auto-hide and notification auto-dismiss.
    Tick(Instant),
    /// Result from the import file dialog.
    ImportDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional script path to open directly in the player on startup.
    pub script_path: Option<String>,
    /// Optional data directory override (for the script library).
    /// Takes precedence over `TELEPROMPT_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TELEPROMPT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
