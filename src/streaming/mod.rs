//! Audio Output (rodio)
//!
//! Real playback backend for the mixer: one rodio `OutputStream` kept alive
//! on a dedicated thread, and one `Sink` per mixer channel. Only compiled
//! with the `streaming` feature.

mod output;
mod sink_channel;
mod source;

pub use output::OutputHandle;
pub use sink_channel::{RodioBackend, SinkChannel};
