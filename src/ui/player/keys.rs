// SPDX-License-Identifier: MPL-2.0
//! Fixed keyboard bindings for the prompter.
//!
//! The bindings are deliberately not configurable: the operator's hands are
//! on the keyboard in the dark, so the mapping has to be stable muscle memory.
//!
//! | Key            | Action          |
//! |----------------|-----------------|
//! | Space / Enter  | Play / Pause    |
//! | Left Arrow     | Restart         |
//! | Right Arrow    | Jump to end     |
//! | Up Arrow       | Speed +1        |
//! | Down Arrow     | Speed -1        |

use iced::keyboard;

/// A transport command triggered by keyboard or on-screen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Restart,
    JumpToEnd,
    SpeedUp,
    SpeedDown,
}

/// Maps a pressed key to its transport command, if any.
pub fn command_for_key(key: &keyboard::Key) -> Option<Command> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Space) | keyboard::Key::Named(Named::Enter) => {
            Some(Command::TogglePlay)
        }
        keyboard::Key::Named(Named::ArrowLeft) => Some(Command::Restart),
        keyboard::Key::Named(Named::ArrowRight) => Some(Command::JumpToEnd),
        keyboard::Key::Named(Named::ArrowUp) => Some(Command::SpeedUp),
        keyboard::Key::Named(Named::ArrowDown) => Some(Command::SpeedDown),
        _ => None,
    }
}
