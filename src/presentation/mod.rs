//! Presentation layer for visual styling.
//!
//! This module contains presentation logic separated from the session model:
//! - Palette lookup and card colors for the dark/light flag

pub mod color_mapping;
