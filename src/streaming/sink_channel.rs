//! Rodio-backed channels.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, Sink, Source};

use crate::channel::{AudioChannel, ChannelBackend, ChannelState, LoopMode};
use crate::{LoopscapeError, Result};

use super::source::CountingSource;
use super::OutputHandle;

/// Completion/position bookkeeping for a non-looping channel.
struct Progress {
    samples_played: Arc<AtomicU64>,
    finished: Arc<AtomicBool>,
    samples_per_second: u64,
}

/// One mixer channel backed by a rodio [`Sink`].
pub struct SinkChannel {
    sink: Sink,
    state: ChannelState,
    volume: f32,
    duration: Option<Duration>,
    progress: Option<Progress>,
}

impl AudioChannel for SinkChannel {
    fn play(&mut self) {
        if self.state != ChannelState::Playing {
            self.sink.play();
            self.state = ChannelState::Playing;
        }
    }

    fn pause(&mut self) {
        if self.state == ChannelState::Playing {
            self.sink.pause();
            self.state = ChannelState::Paused;
        }
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.state = ChannelState::Stopped;
    }

    fn state(&self) -> ChannelState {
        self.state
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn position(&self) -> Duration {
        match &self.progress {
            Some(progress) => {
                let samples = progress.samples_played.load(Ordering::Relaxed);
                Duration::from_secs_f64(samples as f64 / progress.samples_per_second as f64)
            }
            None => Duration::ZERO,
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn finished(&self) -> bool {
        self.progress
            .as_ref()
            .is_some_and(|p| p.finished.load(Ordering::Relaxed))
    }
}

/// Channel factory bound to the system audio output.
pub struct RodioBackend {
    output: OutputHandle,
}

impl RodioBackend {
    /// Open the default output device and wrap it as a backend.
    pub fn new() -> Result<Self> {
        Ok(RodioBackend {
            output: OutputHandle::new()?,
        })
    }

    /// Build a backend on an already-opened output.
    pub fn with_output(output: OutputHandle) -> Self {
        RodioBackend { output }
    }
}

impl ChannelBackend for RodioBackend {
    fn open(&self, source: &Path, mode: LoopMode) -> Result<Box<dyn AudioChannel>> {
        let file = File::open(source).map_err(|e| {
            LoopscapeError::ResourceNotFound(format!("{}: {}", source.display(), e))
        })?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| LoopscapeError::DecodeError(format!("{}: {}", source.display(), e)))?;
        let sink = Sink::try_new(self.output.handle())
            .map_err(|e| LoopscapeError::AudioDevice(e.to_string()))?;

        let (duration, progress) = match mode {
            LoopMode::Infinite => {
                sink.append(decoder.repeat_infinite());
                (None, None)
            }
            LoopMode::Once => {
                let duration = decoder.total_duration();
                let samples_per_second =
                    u64::from(decoder.sample_rate()) * u64::from(decoder.channels());
                let samples_played = Arc::new(AtomicU64::new(0));
                let finished = Arc::new(AtomicBool::new(false));
                sink.append(CountingSource::new(
                    decoder,
                    Arc::clone(&samples_played),
                    Arc::clone(&finished),
                ));
                (
                    duration,
                    Some(Progress {
                        samples_played,
                        finished,
                        samples_per_second: samples_per_second.max(1),
                    }),
                )
            }
        };

        // a fresh channel is silent and stopped until the coordinator says otherwise
        sink.set_volume(0.0);
        sink.pause();

        Ok(Box::new(SinkChannel {
            sink,
            state: ChannelState::Stopped,
            volume: 0.0,
            duration,
            progress,
        }))
    }
}
