//! Audio Channel Abstraction
//!
//! One channel wraps one loaded, loop-capable audio source. The coordinator
//! only talks to channels through [`AudioChannel`], so the playback logic is
//! independent of the actual output backend (rodio under the `streaming`
//! feature, recording fakes in tests).

use std::path::Path;
use std::time::Duration;

use crate::Result;

/// Playback state of a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    /// Channel is stopped (never started, or torn down).
    #[default]
    Stopped,
    /// Channel is actively playing.
    Playing,
    /// Channel is paused (can resume).
    Paused,
}

/// Looping behavior requested when a channel is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play the source once; [`AudioChannel::finished`] flips at natural end.
    Once,
    /// Loop the source forever; the channel never finishes on its own.
    Infinite,
}

/// One independently controllable audio output unit.
///
/// A freshly opened channel is stopped, at volume 0, ready to play. Play and
/// pause are idempotent; callers may invoke them redundantly without side
/// effects.
pub trait AudioChannel: Send {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback (keeps position).
    fn pause(&mut self);

    /// Stop playback and drop any queued audio.
    fn stop(&mut self);

    /// Get current playback state.
    fn state(&self) -> ChannelState;

    /// Check if currently playing.
    fn is_playing(&self) -> bool {
        self.state() == ChannelState::Playing
    }

    /// Set output gain in `[0, 1]`; no effect on play/pause state.
    fn set_volume(&mut self, volume: f32);

    /// Current output gain.
    fn volume(&self) -> f32;

    /// Current playback offset from the start of the source.
    fn position(&self) -> Duration;

    /// Total source length, if known. `None` for infinite loops.
    fn duration(&self) -> Option<Duration>;

    /// Whether a [`LoopMode::Once`] source has played to its natural end.
    ///
    /// Never set for looping channels. Latches once per source; a finished
    /// channel stays finished until replaced.
    fn finished(&self) -> bool;
}

/// Factory for [`AudioChannel`]s bound to a concrete output backend.
pub trait ChannelBackend: Send {
    /// Bind one playable source.
    ///
    /// On success the channel is stopped, at volume 0, ready to play. Fails
    /// with [`ResourceNotFound`](crate::LoopscapeError::ResourceNotFound) if
    /// the source cannot be opened and
    /// [`DecodeError`](crate::LoopscapeError::DecodeError) if it cannot be
    /// decoded; the caller treats either as "silently unavailable".
    fn open(&self, source: &Path, mode: LoopMode) -> Result<Box<dyn AudioChannel>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_state_default_is_stopped() {
        assert_eq!(ChannelState::default(), ChannelState::Stopped);
    }
}
