//! Visibility of the pop-over dialogs.
//!
//! The add-bookmark modal and the background picker popup are opened from
//! header buttons. Their input buffers live elsewhere; this only tracks
//! whether they are shown.

/// Which overlays are currently shown.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    add_bookmark_open: bool,
    background_picker_open: bool,
}

impl OverlayState {
    /// Creates a state with every overlay closed.
    pub fn new() -> Self {
        Self {
            add_bookmark_open: false,
            background_picker_open: false,
        }
    }

    // ===== Queries =====

    pub fn add_bookmark_open(&self) -> bool {
        self.add_bookmark_open
    }

    pub fn background_picker_open(&self) -> bool {
        self.background_picker_open
    }

    // ===== Mutations =====

    pub fn open_add_bookmark(&mut self) {
        self.add_bookmark_open = true;
    }

    pub fn close_add_bookmark(&mut self) {
        self.add_bookmark_open = false;
    }

    pub fn toggle_background_picker(&mut self) {
        self.background_picker_open = !self.background_picker_open;
    }

    pub fn set_background_picker_open(&mut self, open: bool) {
        self.background_picker_open = open;
    }
}
