//! Rendering subsystem for custom painting
//!
//! This module contains the painter-level drawing for the start page:
//! - Page background (embedded image, palette fill, overlay tint)
//! - Bookmark cards (gradient body, icon badge)
//! - Text utilities (URL display, truncation)

pub mod background_renderer;
pub mod card_renderer;
pub mod text_utils;
