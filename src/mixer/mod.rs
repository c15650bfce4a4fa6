//! Playback Coordination
//!
//! The heart of the crate: a coordinator owning one playlist-driven music
//! channel and one looping channel per ambient sound, recomputing every
//! channel's effective volume and play/pause state after each state
//! mutation, advancing the playlist on track completion, and tearing down /
//! rebuilding all channels around system sleep and wake.
//!
//! [`Coordinator`] is the single-threaded core; [`Mixer`] wraps it in the
//! one serialized coordination context shared by UI writes, power events
//! and the [`CompletionWatcher`].

mod coordinator;
mod handle;
mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::Coordinator;
pub use handle::{CompletionWatcher, Mixer};
pub use state::MixerState;
