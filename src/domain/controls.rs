// SPDX-License-Identifier: MPL-2.0
//! Transport control overlay visibility policy.
//!
//! Controls stay visible whenever the prompter is idle or paused, and
//! auto-hide after a quiet period while playing. Visibility is derived from
//! the last interaction timestamp on each UI tick rather than from an armed
//! one-shot timer, so re-arming and cancellation need no timer handle: any
//! interaction refreshes the timestamp, and a transition away from playing
//! makes the controls visible on the very next query.

use super::newtypes::HideDelay;
use std::time::Instant;

/// Derived visible/hidden state for the transport control overlay.
#[derive(Debug, Clone, Copy)]
pub struct ControlVisibility {
    delay: HideDelay,
    last_interaction: Option<Instant>,
}

impl ControlVisibility {
    /// Creates the policy with the given auto-hide delay. Controls start
    /// visible: the session opening counts as an interaction.
    #[must_use]
    pub fn new(delay: HideDelay) -> Self {
        Self {
            delay,
            last_interaction: Some(Instant::now()),
        }
    }

    /// Records a user interaction (pointer move, touch, command), making the
    /// controls visible and restarting the quiet-period countdown.
    pub fn touch(&mut self) {
        self.last_interaction = Some(Instant::now());
    }

    /// Returns whether the overlay should currently be shown.
    ///
    /// Always `true` while not playing. While playing, `true` only until the
    /// quiet period since the last interaction elapses.
    #[must_use]
    pub fn visible(&self, playing: bool) -> bool {
        if !playing {
            return true;
        }
        self.last_interaction
            .map(|at| at.elapsed() < self.delay.as_duration())
            .unwrap_or(false)
    }

    /// The configured auto-hide delay.
    #[must_use]
    pub fn delay(&self) -> HideDelay {
        self.delay
    }
}

impl Default for ControlVisibility {
    fn default() -> Self {
        Self::new(HideDelay::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn visible_while_not_playing() {
        let controls = ControlVisibility::default();
        assert!(controls.visible(false));
    }

    #[test]
    fn visible_right_after_interaction_while_playing() {
        let mut controls = ControlVisibility::default();
        controls.touch();
        assert!(controls.visible(true));
    }

    #[test]
    fn hides_after_quiet_period_while_playing() {
        // Minimum delay keeps the test short.
        let mut controls = ControlVisibility::new(HideDelay::new(0));
        controls.touch();
        assert!(controls.visible(true), "still within the quiet period");

        sleep(Duration::from_millis(600));
        assert!(!controls.visible(true), "quiet period elapsed while playing");

        // Stopping playback restores visibility immediately, no re-arm needed.
        assert!(controls.visible(false));
    }

    #[test]
    fn interaction_restarts_the_countdown() {
        let mut controls = ControlVisibility::new(HideDelay::new(0));
        controls.touch();
        sleep(Duration::from_millis(600));
        assert!(!controls.visible(true));

        controls.touch();
        assert!(controls.visible(true));
    }
}
