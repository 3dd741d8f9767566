//! Start Page GUI Application
//!
//! A personal start page rendered with egui: a grid of bookmarked websites
//! with add/remove actions, live filtering, and a theme switcher.
//!
//! Features:
//! - Bookmark cards that open in the browser
//! - Case-insensitive search over bookmark names
//! - Dark/light mode and custom backgrounds (URL or uploaded image)
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and interaction coordination
//! - `state/` - UI-only state (search query, overlays)
//! - `io/` - Background image reading off the GUI thread
//! - `presentation/` - Palette lookup and card colors
//! - `rendering/` - Custom painting (background, cards, text fitting)
//! - `ui/` - Panels, modal and popup rendering
//! - `utils/` - Formatting helpers
//!
//! Bookmarks and theme live only for the lifetime of the process.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use rstartpage::SessionConfig;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::BackgroundLoader;
use rendering::background_renderer::BackgroundRenderer;
use ui::panel_manager::PanelManager;

/// Main application entry point.
///
/// An optional first argument names a JSON session seed (bookmarks and
/// initial theme).
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Start Page"),
        ..Default::default()
    };

    eframe::run_native(
        "Start Page",
        options,
        Box::new(move |cc| {
            // http(s) backgrounds are fetched and decoded by egui's loaders
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(StartPageApp::new(config_path)))
        }),
    )
}

/// The start page application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies interactions and background reads
/// - `ThemeCoordinator` keeps egui visuals in sync with the theme
/// - `PanelManager` lays out and renders the page
struct StartPageApp {
    /// Centralized application state
    state: AppState,
    /// Background image reader
    loader: BackgroundLoader,
    /// Decoded background texture
    background: BackgroundRenderer,
}

impl Default for StartPageApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: BackgroundLoader::new(),
            background: BackgroundRenderer::new(),
        }
    }
}

impl StartPageApp {
    /// Creates the application, seeding the session from `config_path` if given.
    ///
    /// A seed file that cannot be loaded is reported in the header and the
    /// built-in defaults are used.
    fn new(config_path: Option<PathBuf>) -> Self {
        let mut app = Self::default();

        if let Some(path) = config_path {
            match SessionConfig::load(&path) {
                Ok(config) => app.state = AppState::with_config(&config),
                Err(err) => {
                    warn!(error = %err, "using built-in session defaults");
                    app.state.error_message = Some(err.to_string());
                }
            }
        }

        info!(
            bookmarks = app.state.session.bookmarks.len(),
            is_dark = app.state.session.theme().is_dark,
            "start page ready"
        );
        app
    }
}

impl eframe::App for StartPageApp {
    /// Main update loop.
    ///
    /// 1. Apply a finished background read
    /// 2. Apply the current theme
    /// 3. Render all panels
    /// 4. Apply the interaction the panels reported
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &self.loader, &mut self.background)
        {
            ApplicationCoordinator::handle_interaction(&mut self.state, &mut self.loader, interaction, ctx);
        }
    }
}
