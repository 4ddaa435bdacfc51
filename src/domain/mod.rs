// SPDX-License-Identifier: MPL-2.0
//! Domain types for the prompter: playback engine, overlay visibility
//! policy, value newtypes and the transcript model.

pub mod controls;
pub mod newtypes;
pub mod playback;
pub mod transcript;

pub use controls::ControlVisibility;
pub use newtypes::{HideDelay, ScrollSpeed};
pub use playback::{Playback, PlaybackPhase};
pub use transcript::Transcript;
