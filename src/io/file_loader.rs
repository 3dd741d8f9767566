//! Background file read state.

/// In-progress flag of the background image read.
///
/// Only the flag is shared; the encoded image comes back through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the reader thread can clear it.
pub struct LoadingState {
    /// True while a file read is running
    pub in_progress: bool,
    /// Read that owns the flag; older reads must not clear it
    pub generation: u64,
}

impl LoadingState {
    /// Creates a state with no read running.
    pub fn new() -> Self {
        Self {
            in_progress: false,
            generation: 0,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
