// SPDX-License-Identifier: MPL-2.0
//! `teleprompt` is a mirror-flipped auto-scrolling teleprompter built with
//! the Iced GUI framework.
//!
//! Scripts live in a local library; opening one starts a prompter session
//! whose scroll position is driven by a fixed-rate frame tick. The transport
//! overlay auto-hides while playing and the whole transport is reachable from
//! the keyboard.

#![doc(html_root_url = "https://docs.rs/teleprompt/0.2.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod library;
pub mod ui;
