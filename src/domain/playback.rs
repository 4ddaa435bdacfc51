// SPDX-License-Identifier: MPL-2.0
//! Prompter playback state machine.
//!
//! The scroll position runs from `extent` (fully scrolled to the bottom of
//! the content, where playback starts) down to `0` (fully scrolled to the
//! top, where playback ends). The inversion reflects the mirror-flipped
//! rendering: advancing playback decreases the position.

use super::newtypes::ScrollSpeed;

/// Represents the current playback phase of a prompter session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Scrolled to the very beginning of the content, not playing.
    StoppedAtStart,
    /// Scroll is currently advancing.
    Playing,
    /// Stopped somewhere in the middle of the content.
    Paused,
    /// Scrolled past the last line, not playing. Terminal until `restart()`.
    StoppedAtEnd,
}

impl PlaybackPhase {
    /// Returns true if the prompter is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the prompter is paused mid-content.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the prompter has run to the end.
    #[must_use]
    pub fn is_at_end(self) -> bool {
        matches!(self, Self::StoppedAtEnd)
    }
}

/// The playback engine: the single authoritative record of scroll position,
/// play state and speed for one prompter session.
///
/// All mutation goes through the command methods and `tick()`; invariants
/// `0 <= position <= extent` and `speed ∈ [1, 10]` hold at all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    position: f32,
    extent: f32,
    speed: ScrollSpeed,
    playing: bool,
}

impl Playback {
    /// Creates a session scrolled to the start of the content.
    ///
    /// An `extent` of zero (empty content) constructs directly into
    /// `StoppedAtEnd`: there is nothing to play.
    #[must_use]
    pub fn new(extent: f32, speed: ScrollSpeed) -> Self {
        let extent = extent.max(0.0);
        Self {
            position: extent,
            extent,
            speed,
            playing: false,
        }
    }

    /// Current scroll position, in `[0, extent]`.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Total scrollable distance for the loaded content.
    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Current scroll speed step.
    #[must_use]
    pub fn speed(&self) -> ScrollSpeed {
        self.speed
    }

    /// Returns true while the scroll is advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Derives the current phase from position and play state.
    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        if self.playing {
            PlaybackPhase::Playing
        } else if self.position <= 0.0 {
            PlaybackPhase::StoppedAtEnd
        } else if self.position >= self.extent {
            PlaybackPhase::StoppedAtStart
        } else {
            PlaybackPhase::Paused
        }
    }

    /// Starts scrolling. No-op while already playing or stopped at the end;
    /// the end is terminal until `restart()`.
    pub fn play(&mut self) {
        if self.playing || self.position <= 0.0 {
            return;
        }
        self.playing = true;
    }

    /// Stops scrolling, keeping the current position. No-op unless playing.
    ///
    /// Once this returns, no further tick mutates the position: `tick()`
    /// checks the play flag, so a tick already scheduled before the pause is
    /// discarded rather than applied.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Dispatches to `play()` or `pause()` based on the current play state.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Rewinds to the start of the content and stops, from any phase.
    pub fn restart(&mut self) {
        self.playing = false;
        self.position = self.extent;
    }

    /// Jumps to the end of the content and stops, from any phase.
    pub fn jump_to_end(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    /// Adjusts the speed by `delta` steps, clamped to `[1, 10]`.
    /// Does not change the play state.
    pub fn change_speed(&mut self, delta: i32) {
        self.speed = self.speed.adjusted(delta);
    }

    /// Advances the scroll by one frame: `position -= speed × 0.5`.
    ///
    /// Returns `true` when this tick reached the end of the content, in
    /// which case the position clamps to zero and playback auto-pauses.
    /// A tick while not playing is a silent no-op, so a stray tick delivered
    /// after a transition away from `Playing` can never move the position.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }

        let next = self.position - self.speed.tick_displacement();
        if next <= 0.0 {
            self.position = 0.0;
            self.playing = false;
            return true;
        }

        self.position = next;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(extent: f32) -> Playback {
        Playback::new(extent, ScrollSpeed::default())
    }

    #[test]
    fn new_starts_at_content_start() {
        let playback = session(1000.0);
        assert_eq!(playback.position(), 1000.0);
        assert_eq!(playback.extent(), 1000.0);
        assert!(!playback.is_playing());
        assert_eq!(playback.phase(), PlaybackPhase::StoppedAtStart);
    }

    #[test]
    fn empty_content_starts_at_end() {
        let mut playback = session(0.0);
        assert_eq!(playback.phase(), PlaybackPhase::StoppedAtEnd);

        // Nothing to play: play() is a no-op.
        playback.play();
        assert!(!playback.is_playing());
        assert_eq!(playback.phase(), PlaybackPhase::StoppedAtEnd);
    }

    #[test]
    fn negative_extent_clamps_to_zero() {
        let playback = session(-50.0);
        assert_eq!(playback.extent(), 0.0);
        assert_eq!(playback.phase(), PlaybackPhase::StoppedAtEnd);
    }

    #[test]
    fn play_pause_transitions() {
        let mut playback = session(100.0);

        playback.play();
        assert_eq!(playback.phase(), PlaybackPhase::Playing);

        // play() while playing is a no-op
        playback.play();
        assert_eq!(playback.phase(), PlaybackPhase::Playing);

        playback.tick();
        playback.pause();
        assert_eq!(playback.phase(), PlaybackPhase::Paused);

        // pause() twice is a safe no-op
        playback.pause();
        assert_eq!(playback.phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn play_at_end_is_no_op() {
        let mut playback = session(100.0);
        playback.jump_to_end();
        playback.play();
        assert!(!playback.is_playing());
        assert_eq!(playback.phase(), PlaybackPhase::StoppedAtEnd);
    }

    #[test]
    fn toggle_alternates_play_state() {
        let mut playback = session(100.0);

        playback.toggle();
        assert!(playback.is_playing());
        playback.toggle();
        assert!(!playback.is_playing());
        playback.toggle();
        assert!(playback.is_playing());
    }

    #[test]
    fn toggle_at_end_stays_stopped() {
        let mut playback = session(100.0);
        playback.jump_to_end();

        playback.toggle();
        assert!(!playback.is_playing());

        // restart() re-arms playback
        playback.restart();
        playback.toggle();
        assert!(playback.is_playing());
    }

    #[test]
    fn restart_from_every_phase() {
        // from Playing
        let mut playing = session(100.0);
        playing.play();
        playing.tick();
        playing.restart();
        assert_eq!(playing.position(), 100.0);
        assert!(!playing.is_playing());

        // from Paused
        let mut paused = session(100.0);
        paused.play();
        paused.tick();
        paused.pause();
        paused.restart();
        assert_eq!(paused.position(), 100.0);
        assert!(!paused.is_playing());

        // from StoppedAtEnd
        let mut ended = session(100.0);
        ended.jump_to_end();
        ended.restart();
        assert_eq!(ended.position(), 100.0);
        assert_eq!(ended.phase(), PlaybackPhase::StoppedAtStart);
    }

    #[test]
    fn jump_to_end_from_every_phase() {
        let mut playback = session(100.0);
        playback.jump_to_end();
        assert_eq!(playback.position(), 0.0);
        assert!(!playback.is_playing());

        playback.restart();
        playback.play();
        playback.jump_to_end();
        assert_eq!(playback.position(), 0.0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn no_tick_applies_after_pause() {
        let mut playback = session(100.0);
        playback.play();
        playback.tick();
        let position = playback.position();

        playback.pause();
        // a tick that was already scheduled fires anyway: must not move
        assert!(!playback.tick());
        assert_eq!(playback.position(), position);
    }

    #[test]
    fn no_tick_applies_after_restart_or_jump() {
        let mut playback = session(100.0);
        playback.play();
        playback.restart();
        playback.tick();
        assert_eq!(playback.position(), 100.0);

        playback.play();
        playback.jump_to_end();
        playback.tick();
        assert_eq!(playback.position(), 0.0);
    }

    #[test]
    fn change_speed_clamps_and_keeps_play_state() {
        let mut playback = session(100.0);
        playback.change_speed(100);
        assert_eq!(playback.speed().value(), 10);
        assert!(!playback.is_playing());

        playback.play();
        playback.change_speed(-100);
        assert_eq!(playback.speed().value(), 1);
        assert!(playback.is_playing());
    }

    #[test]
    fn tick_advances_by_half_speed_per_frame() {
        let mut playback = Playback::new(1000.0, ScrollSpeed::new(4));
        playback.play();

        for _ in 0..10 {
            assert!(!playback.tick());
        }

        // 1000 − 10·4·0.5 = 980
        assert_eq!(playback.position(), 980.0);
        assert!(playback.is_playing());
    }

    #[test]
    fn tick_positions_follow_linear_ramp() {
        for step in 1..=10 {
            let mut playback = Playback::new(50.0, ScrollSpeed::new(step));
            playback.play();
            for k in 1..=5 {
                playback.tick();
                let expected = (50.0 - k as f32 * step as f32 * 0.5).max(0.0);
                assert_eq!(playback.position(), expected);
            }
        }
    }

    #[test]
    fn reaching_zero_auto_pauses_exactly_once() {
        let mut playback = Playback::new(4.0, ScrollSpeed::new(10));
        playback.play();

        // 4.0 − 5.0 < 0: clamps to zero and stops
        assert!(playback.tick());
        assert_eq!(playback.position(), 0.0);
        assert!(!playback.is_playing());
        assert_eq!(playback.phase(), PlaybackPhase::StoppedAtEnd);

        // further ticks are inert, position never goes negative
        assert!(!playback.tick());
        assert_eq!(playback.position(), 0.0);
    }

    #[test]
    fn landing_exactly_on_zero_stops() {
        let mut playback = Playback::new(1.0, ScrollSpeed::new(2));
        playback.play();
        assert!(playback.tick());
        assert_eq!(playback.position(), 0.0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn position_never_exceeds_extent() {
        let mut playback = session(100.0);
        playback.play();
        for _ in 0..1000 {
            playback.tick();
            assert!(playback.position() >= 0.0);
            assert!(playback.position() <= playback.extent());
        }
    }
}
