//! System Power Events
//!
//! The host OS announces power-state transitions asynchronously; the mixer
//! consumes them as two explicit inbound events delivered through the same
//! serialized coordination context as every other mutation. Nothing here
//! subscribes to OS notifications itself; the embedding layer forwards
//! whatever its platform provides to [`Mixer::handle_power_event`].
//!
//! [`Mixer::handle_power_event`]: crate::mixer::Mixer::handle_power_event

/// A power-state transition reported by the host system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    /// The machine is about to suspend. All channels are stopped and
    /// released and the transport toggle is forced off, so no audio
    /// hardware resources are held while asleep.
    WillSleep,
    /// The machine resumed. Channels are rebuilt from the catalog with
    /// their pre-sleep volume mix, but playback stays off until the user
    /// re-engages the transport.
    DidWake,
}
