//! Application-level coordination.
//!
//! Turns panel interactions into session mutations. Panels never mutate the
//! bookmark collection or the theme themselves; they report what the user
//! did and this coordinator applies it.

use crate::app::AppState;
use crate::io::{BackgroundLoader, LoadResult};
use crate::ui::panel_manager::PanelInteraction;
use rstartpage::{BackgroundPicker, BookmarkId};
use std::path::PathBuf;
use tracing::{debug, info};

/// Coordinates user interactions and background reads.
///
/// This struct is responsible for:
/// - Adding and removing bookmarks
/// - Theme and background changes
/// - Starting background file reads and applying their results
/// - Opening bookmarks in the browser
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one panel interaction to the application state.
    pub fn handle_interaction(
        state: &mut AppState,
        loader: &mut BackgroundLoader,
        interaction: PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            PanelInteraction::AddBookmarkRequested => state.overlays.open_add_bookmark(),
            PanelInteraction::BookmarkSubmitted => Self::submit_bookmark(state),
            PanelInteraction::BookmarkCancelled => Self::cancel_bookmark(state),
            PanelInteraction::BookmarkRemoved(id) => Self::remove_bookmark(state, id),
            PanelInteraction::BookmarkOpened(url) => Self::open_bookmark(ctx, url),
            PanelInteraction::DarkModeToggled => state.session.toggle_dark_mode(),
            PanelInteraction::BackgroundPickerToggled => state.overlays.toggle_background_picker(),
            PanelInteraction::BackgroundPickerClosed => state.overlays.set_background_picker_open(false),
            PanelInteraction::BackgroundUrlSubmitted => Self::submit_background_url(state),
            PanelInteraction::BackgroundFileChosen(path) => {
                Self::open_background_file(state, loader, path, ctx)
            }
        }
    }

    /// Submits the add-bookmark form.
    ///
    /// The modal closes only when the bookmark was actually added.
    pub fn submit_bookmark(state: &mut AppState) {
        if let Some(entry) = state.form.submit(&mut state.session.bookmarks) {
            info!(id = entry.id, name = %entry.name, "bookmark created");
            state.overlays.close_add_bookmark();
        }
    }

    /// Discards the add-bookmark form and closes the modal.
    pub fn cancel_bookmark(state: &mut AppState) {
        state.form.cancel();
        state.overlays.close_add_bookmark();
    }

    pub fn remove_bookmark(state: &mut AppState, id: BookmarkId) {
        if !state.session.remove_bookmark(id) {
            debug!(id, "remove ignored, bookmark already gone");
        }
    }

    /// Opens a bookmark's URL in a new browser tab.
    pub fn open_bookmark(ctx: &egui::Context, url: String) {
        debug!(%url, "opening bookmark");
        ctx.open_url(egui::OpenUrl::new_tab(url));
    }

    /// Applies the URL typed into the background picker.
    pub fn submit_background_url(state: &mut AppState) {
        if let Some(theme) = state.picker.submit_url(state.session.theme()) {
            state.session.replace_theme(theme);
            state.error_message = None;
        }
    }

    /// Starts reading a background image chosen in the file dialog.
    pub fn open_background_file(
        state: &mut AppState,
        loader: &mut BackgroundLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.error_message = None;
        loader.start_file_load(path, ctx);
    }

    /// Checks for a finished background read and applies it.
    ///
    /// Called once per frame. Returns true if a read finished (either way).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut BackgroundLoader) -> bool {
        let (path, result) = match loader.check_completion() {
            LoadResult::Success { data_uri, path } => (path, Ok(data_uri)),
            LoadResult::Error { path, error } => (path, Err(error)),
            LoadResult::None => return false,
        };

        if let Err(error) = &result {
            state.error_message = Some(format!("Could not use background: {}", error));
        }
        // A rejected file leaves the theme as it was
        if let Some(theme) = BackgroundPicker::apply_upload(state.session.theme(), result) {
            info!(path = %path.display(), "background image loaded");
            state.session.replace_theme(theme);
        }
        true
    }
}
