//! Asynchronous background image loading.
//!
//! Reads an uploaded background file on a worker thread and encodes it as a
//! data URI, keeping the GUI responsive while the file is read.

use eframe::egui;
use rstartpage::data_uri;
use rstartpage::StartPageError;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::debug;
use crate::io::LoadingState;

/// Result of a background file read.
pub enum LoadResult {
    /// The file was read and encoded
    Success {
        /// The `data:` URI of the image
        data_uri: String,
        /// File the image came from
        path: PathBuf,
    },
    /// The file could not be used
    Error {
        path: PathBuf,
        error: StartPageError,
    },
    /// No read finished since the last check
    None,
}

/// Runs background file reads off the GUI thread.
///
/// Only the most recently started read is reported. Starting a new read
/// while one is running drops the older result when it arrives.
pub struct BackgroundLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for the newest read
    loading_receiver: Option<Receiver<Result<String, StartPageError>>>,

    /// Path of the file currently being read
    pending_load_path: Option<PathBuf>,

    /// Number of reads started so far
    generation: u64,
}

impl BackgroundLoader {
    /// Creates a loader with no read running.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
            generation: 0,
        }
    }

    /// Checks if a file read is currently running.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Path of the file being read, if any.
    pub fn pending_path(&self) -> Option<&PathBuf> {
        self.pending_load_path.as_ref()
    }

    /// Starts reading an image file in the background.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Image file chosen by the user
    /// * `ctx` - egui context, repainted when the read finishes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.generation += 1;
        let generation = self.generation;

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
            state.generation = generation;
        }

        self.pending_load_path = Some(path.clone());
        debug!(path = %path.display(), generation, "background read started");

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = data_uri::read_image_file(&path);

            // Flag is cleared before the result is visible to check_completion
            if let Ok(mut state) = loading_state.lock() {
                if state.generation == generation {
                    state.in_progress = false;
                }
            }

            // Receiver is gone if a newer read replaced this one
            let _ = sender.send(result);

            ctx_handle.request_repaint();
        });
    }

    /// Returns the result of the newest read once it is available.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take().unwrap_or_default();
        match result {
            Ok(data_uri) => LoadResult::Success { data_uri, path },
            Err(error) => LoadResult::Error { path, error },
        }
    }
}

impl Default for BackgroundLoader {
    fn default() -> Self {
        Self::new()
    }
}
