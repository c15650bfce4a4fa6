//! Published mixer state.

use std::collections::HashMap;

use crate::catalog::{AmbientSound, MusicCategory};

/// The full published state of the mixer.
///
/// Owned exclusively by the coordinator; callers mutate it only through the
/// coordinator's setters, each of which triggers a full recomputation of
/// channel volumes and play/pause states.
#[derive(Debug, Clone)]
pub struct MixerState {
    /// Currently selected music category
    pub selected_category: MusicCategory,
    /// Global transport toggle
    pub is_playing: bool,
    /// Master volume in `[0, 1]`, multiplied into every channel
    pub master_volume: f32,
    /// Music channel volume in `[0, 1]`
    pub music_volume: f32,
    /// Per-ambient-sound volumes in `[0, 1]`; an absent key means 0
    pub ambient_volumes: HashMap<AmbientSound, f32>,
    /// Index into the selected category's playlist; wraps modulo its length
    pub current_track_index: usize,
}

impl MixerState {
    /// Initial state: default category selected, transport off, full
    /// master and music volume, all ambient sounds silent.
    pub fn new() -> Self {
        MixerState {
            selected_category: MusicCategory::default(),
            is_playing: false,
            master_volume: 1.0,
            music_volume: 1.0,
            ambient_volumes: HashMap::new(),
            current_track_index: 0,
        }
    }

    /// Own volume of an ambient sound; 0 when never set.
    pub fn ambient_volume(&self, sound: AmbientSound) -> f32 {
        self.ambient_volumes.get(&sound).copied().unwrap_or(0.0)
    }

    /// Effective music loudness: music volume times master volume.
    pub fn effective_music_volume(&self) -> f32 {
        self.music_volume * self.master_volume
    }

    /// Effective loudness of an ambient sound: own volume times master.
    pub fn effective_ambient_volume(&self, sound: AmbientSound) -> f32 {
        self.ambient_volume(sound) * self.master_volume
    }

    /// Identifier of the current playlist entry, if the playlist is
    /// non-empty.
    pub fn current_track(&self) -> Option<&'static str> {
        self.selected_category
            .tracks()
            .get(self.current_track_index)
            .copied()
    }
}

impl Default for MixerState {
    fn default() -> Self {
        Self::new()
    }
}
