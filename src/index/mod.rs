pub mod build;
pub mod stats;
pub mod trie;
pub mod types;

pub use build::{build_index, build_from_lines, load_lines, BuiltIndex};
pub use trie::SuffixIndex;
pub use types::*;
