//! Shared mixer handle and completion watcher.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::catalog::{AmbientSound, MusicCategory};
use crate::channel::ChannelBackend;
use crate::locator::ResourceLocator;
use crate::power::PowerEvent;
use crate::Result;

use super::{Coordinator, MixerState};

/// Cloneable handle to the playback coordinator.
///
/// All mutations (UI writes, power events, completion polling) are
/// serialized through one mutex, so the coordinator's state and channel set
/// are only ever touched by one thread at a time. Construct exactly one per
/// application and pass clones to whoever needs it.
#[derive(Clone)]
pub struct Mixer {
    inner: Arc<Mutex<Coordinator>>,
}

impl Mixer {
    /// Build the coordinator and wrap it for shared use.
    pub fn new(backend: Box<dyn ChannelBackend>, locator: Box<dyn ResourceLocator>) -> Self {
        Mixer {
            inner: Arc::new(Mutex::new(Coordinator::new(backend, locator))),
        }
    }

    /// Snapshot of the latest committed state.
    pub fn snapshot(&self) -> MixerState {
        self.inner.lock().state().clone()
    }

    /// Toggle the global transport.
    pub fn set_playing(&self, playing: bool) {
        self.inner.lock().set_playing(playing);
    }

    /// Set the master volume (clamped to `[0, 1]`).
    pub fn set_master_volume(&self, volume: f32) {
        self.inner.lock().set_master_volume(volume);
    }

    /// Set the music volume (clamped to `[0, 1]`).
    pub fn set_music_volume(&self, volume: f32) {
        self.inner.lock().set_music_volume(volume);
    }

    /// Set one ambient sound's volume (clamped to `[0, 1]`).
    pub fn set_ambient_volume(&self, sound: AmbientSound, volume: f32) {
        self.inner.lock().set_ambient_volume(sound, volume);
    }

    /// Switch music category; resets the playlist to its first track.
    pub fn select_category(&self, category: MusicCategory) {
        self.inner.lock().select_category(category);
    }

    /// Skip to the next playlist entry.
    pub fn advance_track(&self) {
        self.inner.lock().advance_track();
    }

    /// Observe music-channel completion; called periodically by the
    /// completion watcher and safe to call directly.
    pub fn poll(&self) {
        self.inner.lock().poll();
    }

    /// Deliver a system power-state transition.
    pub fn handle_power_event(&self, event: PowerEvent) {
        self.inner.lock().handle_power_event(event);
    }

    /// Whether a music channel is currently loaded.
    pub fn has_music_channel(&self) -> bool {
        self.inner.lock().has_music_channel()
    }

    /// Whether an ambient sound has a live channel.
    pub fn has_ambient_channel(&self, sound: AmbientSound) -> bool {
        self.inner.lock().has_ambient_channel(sound)
    }

    /// Position and total duration of the current music track.
    pub fn music_progress(&self) -> Option<(Duration, Option<Duration>)> {
        self.inner.lock().music_progress()
    }

    /// Spawn a thread that polls for music-track completion every
    /// `interval`, so the playlist advances without the caller driving it.
    pub fn start_watcher(&self, interval: Duration) -> Result<CompletionWatcher> {
        let mixer = self.clone();
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let handle = thread::Builder::new()
            .name("loopscape-watcher".into())
            .spawn(move || {
                while !flag.load(Ordering::Relaxed) {
                    mixer.poll();
                    thread::sleep(interval);
                }
            })?;
        Ok(CompletionWatcher {
            shutdown,
            handle: Some(handle),
        })
    }
}

/// Handle to the background completion-watcher thread.
///
/// The thread stops when this is dropped or [`stop`](Self::stop) is called.
pub struct CompletionWatcher {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CompletionWatcher {
    /// Stop the watcher and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for CompletionWatcher {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}
