// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Scroll Speed Defaults
// ==========================================================================

/// Default scroll speed step when opening a script.
pub const DEFAULT_SCROLL_SPEED: u8 = 3;

/// Minimum allowed scroll speed step.
pub const MIN_SCROLL_SPEED: u8 = 1;

/// Maximum allowed scroll speed step.
pub const MAX_SCROLL_SPEED: u8 = 10;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default auto-hide delay for the transport controls while playing (ms).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 3_000;

/// Minimum hide delay (ms).
pub const MIN_HIDE_DELAY_MS: u64 = 500;

/// Maximum hide delay (ms).
pub const MAX_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Tick Cadence
// ==========================================================================

/// Interval between playback frame ticks, in milliseconds (~60 fps).
/// Scroll displacement is defined per tick, so this cadence is part of the
/// observable scroll rate.
pub const FRAME_TICK_MS: u64 = 16;

/// Interval between UI housekeeping ticks (overlay auto-hide re-evaluation,
/// notification auto-dismiss), in milliseconds.
pub const UI_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scroll speed validation
    assert!(MIN_SCROLL_SPEED >= 1);
    assert!(MAX_SCROLL_SPEED > MIN_SCROLL_SPEED);
    assert!(DEFAULT_SCROLL_SPEED >= MIN_SCROLL_SPEED);
    assert!(DEFAULT_SCROLL_SPEED <= MAX_SCROLL_SPEED);

    // Hide delay validation
    assert!(MIN_HIDE_DELAY_MS > 0);
    assert!(MAX_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);

    // Tick cadence validation
    assert!(FRAME_TICK_MS > 0);
    assert!(UI_TICK_MS >= FRAME_TICK_MS);
};
