//! # trieseek - substring lookup over the lines of a document
//!
//! trieseek loads every suffix of every line of a text file into an
//! uncompressed, character-keyed trie. Afterwards any string can be tested
//! for presence, counted, and located at its first occurrence.
//!
//! ## Architecture
//!
//! - [`index`] - The suffix trie and the loader that fills it
//! - [`query`] - Query outcomes and the interactive query loop
//! - [`output`] - Result formatting (coloured text or JSON)
//! - [`error`] - Errors raised while reading a document
//! - [`utils`] - Case folding, line splitting, progress bars
//!
//! ## Quick Start
//!
//! ```
//! use trieseek::index::SuffixIndex;
//!
//! let mut index = SuffixIndex::new();
//! index.insert("hello", 1, 0);
//! index.insert("help", 1, 5);
//!
//! let res = index.lookup("HEL");
//! assert!(res.matched);
//! assert_eq!(index.node(res.landing).occurrences(), 2);
//!
//! let res = index.lookup("hellfire");
//! assert!(!res.matched);
//! assert_eq!(res.matched_len, 4);
//! ```
//!
//! ## Concurrency
//!
//! The index has no internal synchronisation. Build it completely, then
//! share it read-only (`&SuffixIndex` is `Sync`), or wrap it in a lock if
//! inserts and lookups must interleave.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;
