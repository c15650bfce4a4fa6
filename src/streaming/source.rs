//! Sample-counting source wrapper.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rodio::{Sample, Source};

/// Wraps a decoded source, tallying every sample the output device pulls
/// and latching a flag when the source runs dry.
///
/// This is how a non-looping channel reports position and completion: the
/// wrapper lives inside the sink while the channel keeps clones of the
/// counters. The tally runs ahead of what is audible by the device's
/// buffering, which is fine for end-of-media detection.
pub(crate) struct CountingSource<S> {
    inner: S,
    samples_played: Arc<AtomicU64>,
    finished: Arc<AtomicBool>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S, samples_played: Arc<AtomicU64>, finished: Arc<AtomicBool>) -> Self {
        CountingSource {
            inner,
            samples_played,
            finished,
        }
    }
}

impl<S> Iterator for CountingSource<S>
where
    S: Source,
    S::Item: Sample,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(sample) => {
                self.samples_played.fetch_add(1, Ordering::Relaxed);
                Some(sample)
            }
            None => {
                self.finished.store(true, Ordering::Relaxed);
                None
            }
        }
    }
}

impl<S> Source for CountingSource<S>
where
    S: Source,
    S::Item: Sample,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.inner.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}
