//! Ambient sound and music mixer
//!
//! A playback core for a resident "soundscape" application: one looping
//! background music channel that advances through a per-category playlist,
//! plus a set of independently-volumed ambient sound loops (rain, wind, an
//! alpha tone). A single coordinator derives every channel's effective
//! loudness from a master volume times a per-channel volume and keeps each
//! channel's play/pause state consistent with one global transport toggle,
//! including across system sleep/wake transitions.
//!
//! # Features
//! - Static catalog of music categories and ambient sounds
//! - Master / music / per-ambient volume composition
//! - Playlist advance on track completion, with wrap-around
//! - Sleep/wake teardown and rebuild of all audio channels
//! - Pluggable channel backend and resource lookup (trait-based)
//!
//! # Crate feature flags
//! - `streaming` (opt-in): rodio-backed audio output (`streaming`) and the
//!   interactive CLI driver binary
//!
//! # Quick start
//! ## Catalog enumeration only
//! ```no_run
//! use loopscape::catalog::{AmbientSound, MusicCategory};
//! for category in MusicCategory::ALL {
//!     println!("{}: {} tracks", category.display_name(), category.tracks().len());
//! }
//! for sound in AmbientSound::ALL {
//!     println!("{} ({})", sound.display_name(), sound.icon());
//! }
//! ```
//!
//! ## Real-time playback
//! ```no_run
//! # #[cfg(feature = "streaming")]
//! # {
//! use loopscape::catalog::AmbientSound;
//! use loopscape::locator::DirectoryLocator;
//! use loopscape::mixer::Mixer;
//! use loopscape::streaming::RodioBackend;
//! let backend = RodioBackend::new().unwrap();
//! let locator = DirectoryLocator::new("sounds");
//! let mixer = Mixer::new(Box::new(backend), Box::new(locator));
//! mixer.set_master_volume(0.8);
//! mixer.set_ambient_volume(AmbientSound::Rain, 0.5);
//! mixer.set_playing(true);
//! # }
//! ```

#![warn(missing_docs)]

// Domain modules
pub mod catalog; // Sound & Music Catalog (static tables)
pub mod channel; // Audio Channel Abstraction
pub mod config; // Runtime Configuration
pub mod locator; // Resource Lookup
pub mod mixer; // Playback Coordination (core)
pub mod power; // System Power Events
#[cfg(feature = "streaming")]
pub mod streaming; // Audio Output (rodio)

/// Error types for mixer operations
#[derive(thiserror::Error, Debug)]
pub enum LoopscapeError {
    /// Requested audio source absent from the library
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Source found but unplayable
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Audio device error
    #[error("Audio device error: {0}")]
    AudioDevice(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error from filesystem or device
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for LoopscapeError {
    /// Converts a String into `LoopscapeError::Other`.
    ///
    /// Convenience conversion for generic string errors. Prefer the specific
    /// variant constructors when the error class is known.
    fn from(msg: String) -> Self {
        LoopscapeError::Other(msg)
    }
}

impl From<&str> for LoopscapeError {
    /// Converts a string slice into `LoopscapeError::Other`.
    fn from(msg: &str) -> Self {
        LoopscapeError::Other(msg.to_string())
    }
}

/// Result type for mixer operations
pub type Result<T> = std::result::Result<T, LoopscapeError>;

// Public API exports
pub use catalog::{AmbientSound, MusicCategory};
pub use channel::{AudioChannel, ChannelBackend, ChannelState, LoopMode};
pub use config::AppConfig;
pub use locator::{DirectoryLocator, ResourceLocator};
pub use mixer::{Mixer, MixerState};
pub use power::PowerEvent;
#[cfg(feature = "streaming")]
pub use streaming::RodioBackend;
