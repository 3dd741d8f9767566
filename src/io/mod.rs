//! I/O modules for reading uploaded background images.

pub mod file_loader;
pub mod async_loader;

// Re-export commonly used types
pub use file_loader::LoadingState;
pub use async_loader::{BackgroundLoader, LoadResult};
