//! Output stream ownership.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

use rodio::{OutputStream, OutputStreamHandle};

use crate::{LoopscapeError, Result};

/// Owns the system audio output stream.
///
/// `rodio::OutputStream` is not `Send`, so it lives on a dedicated thread
/// for as long as this handle exists; sinks are created from the cloneable
/// [`OutputStreamHandle`] it hands out. Dropping the handle shuts the
/// thread down and releases the device.
pub struct OutputHandle {
    handle: OutputStreamHandle,
    shutdown: Arc<AtomicBool>,
    keeper: Option<JoinHandle<()>>,
}

impl OutputHandle {
    /// Open the default system output device.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let keeper = thread::Builder::new()
            .name("loopscape-output".into())
            .spawn(move || {
                let (stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => pair,
                    Err(e) => {
                        let _ = tx.send(Err(LoopscapeError::AudioDevice(e.to_string())));
                        return;
                    }
                };
                if tx.send(Ok(handle)).is_err() {
                    return;
                }
                // The stream must outlive every sink created from the handle;
                // park here until shutdown.
                while !flag.load(Ordering::Relaxed) {
                    thread::park();
                }
                drop(stream);
            })?;
        let handle = rx.recv().map_err(|_| {
            LoopscapeError::AudioDevice("audio output thread terminated unexpectedly".to_string())
        })??;
        Ok(OutputHandle {
            handle,
            shutdown,
            keeper: Some(keeper),
        })
    }

    /// Stream handle for creating sinks.
    pub fn handle(&self) -> &OutputStreamHandle {
        &self.handle
    }
}

impl Drop for OutputHandle {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(keeper) = self.keeper.take() {
            keeper.thread().unpark();
            let _ = keeper.join();
        }
    }
}
