//! Panel orchestration and layout management.
//!
//! Lays out header, search, grid and footer, shows the overlays, and folds
//! every panel's interaction into one [`PanelInteraction`] for the
//! application coordinator.

use std::path::PathBuf;
use rstartpage::BookmarkId;
use crate::app::AppState;
use crate::io::BackgroundLoader;
use crate::rendering::background_renderer::BackgroundRenderer;
use crate::ui::{add_bookmark_modal, background_picker, bookmark_grid, footer, header, search_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// "Add Website" was clicked
    AddBookmarkRequested,
    /// The add-bookmark form was submitted
    BookmarkSubmitted,
    /// The add-bookmark modal was dismissed
    BookmarkCancelled,
    /// A card's remove button was clicked
    BookmarkRemoved(BookmarkId),
    /// A card was clicked
    BookmarkOpened(String),
    /// The sun/moon button was clicked
    DarkModeToggled,
    /// The background picker button was clicked
    BackgroundPickerToggled,
    /// The background picker popup was closed
    BackgroundPickerClosed,
    /// A background URL was submitted
    BackgroundUrlSubmitted,
    /// An image file was chosen as background
    BackgroundFileChosen(PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole page.
    ///
    /// Called from `eframe::App::update()` once per frame.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &BackgroundLoader,
        background: &mut BackgroundRenderer,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let loading = loader.is_loading();

        background.paint(ctx, state.session.theme(), state.palette());

        let page_margin = egui::Margin::symmetric(32, 24);

        egui::TopBottomPanel::top("header")
            .show_separator_line(false)
            .frame(egui::Frame::NONE.inner_margin(page_margin))
            .show(ctx, |ui| {
                if let Some(header_interaction) = header::render_header(ui, state) {
                    interaction = Some(match header_interaction {
                        header::HeaderInteraction::AddBookmarkRequested => {
                            PanelInteraction::AddBookmarkRequested
                        }
                        header::HeaderInteraction::BackgroundPickerToggled => {
                            PanelInteraction::BackgroundPickerToggled
                        }
                        header::HeaderInteraction::DarkModeToggled => {
                            PanelInteraction::DarkModeToggled
                        }
                    });
                }
            });

        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .frame(egui::Frame::NONE.inner_margin(page_margin))
            .show(ctx, |ui| {
                footer::render_footer(ui, state, loader);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(page_margin))
            .show(ctx, |ui| {
                search_bar::render_search_bar(ui, state);
                ui.add_space(32.0);

                egui::ScrollArea::vertical()
                    .id_salt("bookmark_grid")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if let Some(grid_interaction) = bookmark_grid::render_bookmark_grid(ui, state) {
                            interaction = Some(match grid_interaction {
                                bookmark_grid::GridInteraction::Open(url) => {
                                    PanelInteraction::BookmarkOpened(url)
                                }
                                bookmark_grid::GridInteraction::Remove(id) => {
                                    PanelInteraction::BookmarkRemoved(id)
                                }
                            });
                        }
                    });
            });

        if let Some(picker_interaction) = background_picker::render_background_picker(ctx, state, loading) {
            interaction = Some(match picker_interaction {
                background_picker::PickerInteraction::UrlSubmitted => {
                    PanelInteraction::BackgroundUrlSubmitted
                }
                background_picker::PickerInteraction::FileChosen(path) => {
                    PanelInteraction::BackgroundFileChosen(path)
                }
                background_picker::PickerInteraction::Closed => {
                    PanelInteraction::BackgroundPickerClosed
                }
            });
        }

        // Modal last so it sits above everything else
        if let Some(modal_interaction) = add_bookmark_modal::render_add_bookmark_modal(ctx, state) {
            interaction = Some(match modal_interaction {
                add_bookmark_modal::ModalInteraction::Submitted => PanelInteraction::BookmarkSubmitted,
                add_bookmark_modal::ModalInteraction::Cancelled => PanelInteraction::BookmarkCancelled,
            });
        }

        interaction
    }
}
