//! Application-level modules for the start page.
//!
//! This module contains the interaction coordinator and the centralized state.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
