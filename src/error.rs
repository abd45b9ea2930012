//! Errors raised while reading a document into lines.
//!
//! The trie itself has no failure modes; only loading the source can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: line {line} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },
}
