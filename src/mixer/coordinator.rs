//! Playback coordinator.
//!
//! Sole authority translating [`MixerState`] into channel actions. Callers
//! mutate state only through the setters here; every setter runs the full
//! recomputation so that, at every stable point, a channel is playing
//! exactly when the transport is on and its effective volume is above zero.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::catalog::{AmbientSound, MusicCategory, AUDIO_EXTENSION};
use crate::channel::{AudioChannel, ChannelBackend, LoopMode};
use crate::locator::ResourceLocator;
use crate::power::PowerEvent;

use super::MixerState;

/// Owns the published state and every live audio channel.
///
/// Not internally synchronized; wrap it in a [`Mixer`](super::Mixer) to
/// share it across threads.
pub struct Coordinator {
    state: MixerState,
    music: Option<Box<dyn AudioChannel>>,
    ambient: HashMap<AmbientSound, Box<dyn AudioChannel>>,
    backend: Box<dyn ChannelBackend>,
    locator: Box<dyn ResourceLocator>,
}

impl Coordinator {
    /// Create a coordinator and eagerly build its channels: one looping
    /// channel per catalog ambient sound (silent, paused) and the first
    /// track of the default category. Sources that fail to load are logged
    /// and left absent; construction itself never fails.
    pub fn new(backend: Box<dyn ChannelBackend>, locator: Box<dyn ResourceLocator>) -> Self {
        let mut coordinator = Coordinator {
            state: MixerState::new(),
            music: None,
            ambient: HashMap::new(),
            backend,
            locator,
        };
        coordinator.build_ambient_channels();
        coordinator.load_current_track();
        coordinator.sync_channels();
        coordinator
    }

    /// The latest committed state.
    pub fn state(&self) -> &MixerState {
        &self.state
    }

    /// Whether a music channel is currently loaded.
    pub fn has_music_channel(&self) -> bool {
        self.music.is_some()
    }

    /// Whether an ambient sound has a live channel.
    pub fn has_ambient_channel(&self, sound: AmbientSound) -> bool {
        self.ambient.contains_key(&sound)
    }

    /// Position and total duration of the current music track, if one is
    /// loaded.
    pub fn music_progress(&self) -> Option<(Duration, Option<Duration>)> {
        self.music
            .as_ref()
            .map(|ch| (ch.position(), ch.duration()))
    }

    /// Toggle the global transport.
    pub fn set_playing(&mut self, playing: bool) {
        self.state.is_playing = playing;
        self.sync_channels();
    }

    /// Set the master volume (clamped to `[0, 1]`).
    pub fn set_master_volume(&mut self, volume: f32) {
        self.state.master_volume = volume.clamp(0.0, 1.0);
        self.sync_channels();
    }

    /// Set the music volume (clamped to `[0, 1]`).
    pub fn set_music_volume(&mut self, volume: f32) {
        self.state.music_volume = volume.clamp(0.0, 1.0);
        self.sync_channels();
    }

    /// Set one ambient sound's volume (clamped to `[0, 1]`).
    ///
    /// Still updates state when the sound's channel failed to load; there is
    /// simply no channel to apply it to.
    pub fn set_ambient_volume(&mut self, sound: AmbientSound, volume: f32) {
        self.state
            .ambient_volumes
            .insert(sound, volume.clamp(0.0, 1.0));
        self.sync_channels();
    }

    /// Switch music category: resets the playlist to its first track and
    /// loads it immediately, independent of the transport state. The new
    /// track only becomes audible once recomputation applies it.
    pub fn select_category(&mut self, category: MusicCategory) {
        info!(category = category.display_name(), "selecting music category");
        self.state.selected_category = category;
        self.state.current_track_index = 0;
        self.load_current_track();
        self.sync_channels();
    }

    /// Observe music-channel completion and advance the playlist.
    ///
    /// Safe to call at any cadence; does nothing unless the current track
    /// has played to its natural end.
    pub fn poll(&mut self) {
        let finished = self.music.as_ref().is_some_and(|ch| ch.finished());
        if finished {
            self.advance_track();
        }
    }

    /// Advance to the next playlist entry, wrapping at the end.
    ///
    /// With an empty playlist the music slot stays silent.
    pub fn advance_track(&mut self) {
        let tracks = self.state.selected_category.tracks();
        if tracks.is_empty() {
            return;
        }
        self.state.current_track_index = (self.state.current_track_index + 1) % tracks.len();
        debug!(index = self.state.current_track_index, "advancing playlist");
        self.load_current_track();
        self.sync_channels();
    }

    /// React to a system power-state transition.
    pub fn handle_power_event(&mut self, event: PowerEvent) {
        match event {
            PowerEvent::WillSleep => self.suspend(),
            PowerEvent::DidWake => self.resume(),
        }
    }

    /// Stop and release every channel and force the transport off, so no
    /// audio hardware is held while the machine is suspended.
    fn suspend(&mut self) {
        info!("system sleep: releasing all channels");
        if let Some(mut channel) = self.music.take() {
            channel.stop();
        }
        for (_, mut channel) in self.ambient.drain() {
            channel.stop();
        }
        self.state.is_playing = false;
    }

    /// Rebuild every channel after wake. Per-sound volumes survive sleep,
    /// so the pre-sleep mix is restored as soon as the transport is
    /// re-engaged; nothing resumes on its own.
    fn resume(&mut self) {
        info!("system wake: rebuilding channels");
        self.build_ambient_channels();
        self.load_current_track();
        self.sync_channels();
    }

    /// Create one looping channel per catalog ambient sound, silent and
    /// paused. Sounds whose source is missing or undecodable stay absent.
    fn build_ambient_channels(&mut self) {
        self.ambient.clear();
        for sound in AmbientSound::ALL {
            let Some(path) =
                self.locator
                    .locate(sound.identifier(), AUDIO_EXTENSION, sound.subdirectory())
            else {
                warn!(sound = sound.identifier(), "ambient source not found");
                continue;
            };
            match self.backend.open(&path, LoopMode::Infinite) {
                Ok(channel) => {
                    self.ambient.insert(*sound, channel);
                }
                Err(e) => warn!(sound = sound.identifier(), error = %e, "ambient channel unavailable"),
            }
        }
    }

    /// Load the playlist entry at the current index, replacing any previous
    /// music channel. The old channel is stopped and released before the
    /// replacement is installed.
    fn load_current_track(&mut self) {
        if let Some(mut old) = self.music.take() {
            old.stop();
        }
        let category = self.state.selected_category;
        let tracks = category.tracks();
        if tracks.is_empty() {
            debug!(
                category = category.display_name(),
                "empty playlist, music stays silent"
            );
            return;
        }
        let track = tracks[self.state.current_track_index];
        let Some(path) = self
            .locator
            .locate(track, AUDIO_EXTENSION, category.subdirectory())
        else {
            warn!(track, "music source not found");
            return;
        };
        match self.backend.open(&path, LoopMode::Once) {
            Ok(channel) => {
                info!(track, "loaded music track");
                self.music = Some(channel);
            }
            Err(e) => warn!(track, error = %e, "music channel unavailable"),
        }
    }

    /// Full recomputation: apply effective volumes and play/pause to every
    /// channel. Idempotent; a second pass with unchanged state issues no
    /// further transport calls.
    fn sync_channels(&mut self) {
        if self.sync_music_channel() {
            // The track ran out while a resume was requested; advancing to
            // the next entry restarts audible playback instead of replaying
            // a spent source. advance_track re-syncs everything.
            self.advance_track();
            return;
        }
        self.sync_ambient_channels();
    }

    /// Apply volume and transport to the music channel. Returns true when
    /// the channel finished while a resume was requested (end-of-media
    /// correction, handled by the caller as a track completion).
    fn sync_music_channel(&mut self) -> bool {
        let master = self.state.master_volume;
        let music_volume = self.state.music_volume;
        let is_playing = self.state.is_playing;
        let Some(channel) = self.music.as_mut() else {
            return false;
        };
        let effective = music_volume * master;
        channel.set_volume(effective);
        let should_play = is_playing && effective > 0.0;
        if should_play && channel.finished() {
            return true;
        }
        if should_play {
            if !channel.is_playing() {
                channel.play();
            }
        } else if channel.is_playing() {
            channel.pause();
        }
        false
    }

    /// Apply volume and transport to every ambient channel.
    fn sync_ambient_channels(&mut self) {
        let master = self.state.master_volume;
        let is_playing = self.state.is_playing;
        for sound in AmbientSound::ALL {
            let effective = self.state.ambient_volume(*sound) * master;
            let Some(channel) = self.ambient.get_mut(sound) else {
                continue;
            };
            channel.set_volume(effective);
            let should_play = is_playing && effective > 0.0;
            if should_play {
                if !channel.is_playing() {
                    channel.play();
                }
            } else if channel.is_playing() {
                channel.pause();
            }
        }
    }
}
