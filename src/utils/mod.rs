//! Utility functions shared by the loader and the trie.
//!
//! - [`fold`] - ASCII case folding at the index boundary
//! - [`lines`] - Line splitting for raw file content
//! - [`progress`] - Progress bar shim (no-op without the `progress` feature)

pub mod fold;
pub mod lines;
pub mod progress;

pub use fold::*;
pub use lines::*;
