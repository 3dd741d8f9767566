//! Utility modules for the start page.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_bookmark_count, describe_background};
