// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for prompter playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// ScrollSpeed
// =============================================================================

/// Scroll speed bounds (integer steps 1 to 10).
pub mod speed_bounds {
    /// Minimum scroll speed step.
    pub const MIN: u8 = 1;
    /// Maximum scroll speed step.
    pub const MAX: u8 = 10;
    /// Default scroll speed step.
    pub const DEFAULT: u8 = 3;
}

/// Distance units scrolled per tick per speed step.
pub const TICK_DISTANCE: f32 = 0.5;

/// Scroll speed step, guaranteed to be within valid range (1–10).
///
/// The per-tick scroll displacement is `speed × TICK_DISTANCE`, so the speed
/// is "distance per frame", not "distance per second". This newtype enforces
/// validity at the type level, making it impossible to create an invalid
/// speed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpeed(u8);

impl ScrollSpeed {
    /// Creates a new scroll speed, clamping to valid range.
    #[must_use]
    pub fn new(speed: i32) -> Self {
        Self(speed.clamp(i32::from(speed_bounds::MIN), i32::from(speed_bounds::MAX)) as u8)
    }

    /// Returns the speed step as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the speed adjusted by `delta` steps, clamping to the range.
    #[must_use]
    pub fn adjusted(self, delta: i32) -> Self {
        Self::new(i32::from(self.0) + delta)
    }

    /// Scroll distance covered by one tick at this speed.
    #[must_use]
    pub fn tick_displacement(self) -> f32 {
        f32::from(self.0) * TICK_DISTANCE
    }

    /// Returns true if this is the minimum speed.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= speed_bounds::MIN
    }

    /// Returns true if this is the maximum speed.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= speed_bounds::MAX
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Control overlay auto-hide delay bounds (milliseconds).
pub mod hide_delay_bounds {
    /// Minimum hide delay in milliseconds.
    pub const MIN: u64 = 500;
    /// Maximum hide delay in milliseconds.
    pub const MAX: u64 = 30_000;
    /// Default hide delay in milliseconds.
    pub const DEFAULT: u64 = 3_000;
}

/// Quiet period after which the transport controls auto-hide while playing.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms – 30 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay value, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(hide_delay_bounds::MIN, hide_delay_bounds::MAX))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // ScrollSpeed tests
    // -------------------------------------------------------------------------

    #[test]
    fn speed_clamps_to_valid_range() {
        assert_eq!(ScrollSpeed::new(-5).value(), speed_bounds::MIN);
        assert_eq!(ScrollSpeed::new(0).value(), speed_bounds::MIN);
        assert_eq!(ScrollSpeed::new(99).value(), speed_bounds::MAX);
        assert_eq!(ScrollSpeed::new(7).value(), 7);
    }

    #[test]
    fn speed_default_is_expected() {
        assert_eq!(ScrollSpeed::default().value(), speed_bounds::DEFAULT);
    }

    #[test]
    fn speed_adjusted_clamps_for_all_deltas() {
        for start in i32::from(speed_bounds::MIN)..=i32::from(speed_bounds::MAX) {
            for delta in [-100, -2, -1, 0, 1, 2, 100] {
                let adjusted = ScrollSpeed::new(start).adjusted(delta);
                let expected = (start + delta)
                    .clamp(i32::from(speed_bounds::MIN), i32::from(speed_bounds::MAX));
                assert_eq!(i32::from(adjusted.value()), expected);
            }
        }
    }

    #[test]
    fn speed_tick_displacement_is_half_step() {
        assert!((ScrollSpeed::new(1).tick_displacement() - 0.5).abs() < f32::EPSILON);
        assert!((ScrollSpeed::new(4).tick_displacement() - 2.0).abs() < f32::EPSILON);
        assert!((ScrollSpeed::new(10).tick_displacement() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn speed_min_max_checks() {
        assert!(ScrollSpeed::new(1).is_min());
        assert!(ScrollSpeed::new(10).is_max());
        assert!(!ScrollSpeed::new(5).is_min());
        assert!(!ScrollSpeed::new(5).is_max());
    }

    // -------------------------------------------------------------------------
    // HideDelay tests
    // -------------------------------------------------------------------------

    #[test]
    fn hide_delay_clamps_to_valid_range() {
        assert_eq!(HideDelay::new(0).millis(), hide_delay_bounds::MIN);
        assert_eq!(HideDelay::new(60_000).millis(), hide_delay_bounds::MAX);
        assert_eq!(HideDelay::new(3_000).millis(), 3_000);
    }

    #[test]
    fn hide_delay_default_is_three_seconds() {
        assert_eq!(HideDelay::default().millis(), 3_000);
    }

    #[test]
    fn hide_delay_as_duration() {
        let delay = HideDelay::new(1_500);
        assert_eq!(delay.as_duration(), Duration::from_millis(1_500));
    }
}
