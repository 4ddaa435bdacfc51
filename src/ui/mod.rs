// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`library`] - Script library with import, open and delete actions
//! - [`player`] - The prompter itself: mirrored auto-scrolling text with transport controls
//! - [`help`] - Keyboard shortcuts reference
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod help;
pub mod library;
pub mod notifications;
pub mod player;
pub mod styles;
