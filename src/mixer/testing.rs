//! Recording fakes shared by the coordinator and handle tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::channel::{AudioChannel, ChannelBackend, ChannelState, LoopMode};
use crate::locator::ResourceLocator;
use crate::{LoopscapeError, Result};

/// Observable state of one fake channel, shared with the test body.
#[derive(Debug, Default)]
pub(crate) struct Probe {
    pub state: ChannelState,
    pub volume: f32,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub stop_calls: usize,
    pub finished: bool,
    pub mode: Option<LoopMode>,
}

impl Probe {
    pub fn transport_calls(&self) -> usize {
        self.play_calls + self.pause_calls
    }
}

/// Channel that records every call into its [`Probe`].
///
/// Deliberately counts redundant `play`/`pause` calls: the coordinator is
/// responsible for not issuing them, and the counters make that visible.
pub(crate) struct FakeChannel {
    probe: Arc<Mutex<Probe>>,
}

impl AudioChannel for FakeChannel {
    fn play(&mut self) {
        let mut probe = self.probe.lock();
        probe.play_calls += 1;
        probe.state = ChannelState::Playing;
    }

    fn pause(&mut self) {
        let mut probe = self.probe.lock();
        probe.pause_calls += 1;
        probe.state = ChannelState::Paused;
    }

    fn stop(&mut self) {
        let mut probe = self.probe.lock();
        probe.stop_calls += 1;
        probe.state = ChannelState::Stopped;
    }

    fn state(&self) -> ChannelState {
        self.probe.lock().state
    }

    fn set_volume(&mut self, volume: f32) {
        self.probe.lock().volume = volume;
    }

    fn volume(&self) -> f32 {
        self.probe.lock().volume
    }

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(180))
    }

    fn finished(&self) -> bool {
        self.probe.lock().finished
    }
}

/// Backend recording every opened channel, keyed by source file stem.
#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    opened: Arc<Mutex<Vec<(String, Arc<Mutex<Probe>>)>>>,
    fail_decode: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    /// Mark a source stem as undecodable.
    pub fn fail_decode(&self, stem: &str) {
        self.fail_decode.lock().push(stem.to_string());
    }

    /// Probe of the most recently opened channel for `stem`.
    pub fn probe(&self, stem: &str) -> Option<Arc<Mutex<Probe>>> {
        self.opened
            .lock()
            .iter()
            .rev()
            .find(|(s, _)| s == stem)
            .map(|(_, p)| Arc::clone(p))
    }

    /// How many channels were ever opened for `stem`.
    pub fn open_count(&self, stem: &str) -> usize {
        self.opened.lock().iter().filter(|(s, _)| s == stem).count()
    }
}

impl ChannelBackend for FakeBackend {
    fn open(&self, source: &Path, mode: LoopMode) -> Result<Box<dyn AudioChannel>> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.fail_decode.lock().contains(&stem) {
            return Err(LoopscapeError::DecodeError(stem));
        }
        let probe = Arc::new(Mutex::new(Probe {
            mode: Some(mode),
            ..Probe::default()
        }));
        self.opened.lock().push((stem, Arc::clone(&probe)));
        Ok(Box::new(FakeChannel { probe }))
    }
}

/// Locator resolving every identifier except an explicit missing set.
#[derive(Clone, Default)]
pub(crate) struct FakeLocator {
    missing: Arc<Mutex<Vec<String>>>,
}

impl FakeLocator {
    /// Mark an identifier as absent from the library.
    pub fn remove(&self, identifier: &str) {
        self.missing.lock().push(identifier.to_string());
    }
}

impl ResourceLocator for FakeLocator {
    fn locate(&self, identifier: &str, extension: &str, subdirectory: &str) -> Option<PathBuf> {
        if self.missing.lock().iter().any(|m| m == identifier) {
            return None;
        }
        Some(PathBuf::from(format!(
            "/library/{}/{}.{}",
            subdirectory, identifier, extension
        )))
    }
}
