//! Answering queries against a built index.
//!
//! - [`run_query`] turns a lookup into a reportable [`QueryOutcome`]
//! - [`repl`] reads queries line by line and prints each outcome

pub mod repl;

use crate::index::SuffixIndex;
use serde::Serialize;

pub use repl::run_repl;

/// What a query loop reports for one query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Present in the document. `line` and `offset` locate the first
    /// insertion that reached the query's landing node.
    Found {
        occurrences: u64,
        line: usize,
        offset: usize,
    },
    /// Absent; `matched_len` characters matched before the walk stopped
    NotFound { matched_len: usize },
}

pub fn run_query(index: &SuffixIndex, query: &str) -> QueryOutcome {
    let res = index.lookup(query);
    tracing::debug!(query, matched = res.matched, matched_len = res.matched_len, "lookup");

    if res.matched {
        let node = index.node(res.landing);
        QueryOutcome::Found {
            occurrences: node.occurrences(),
            line: node.origin_line(),
            offset: node.origin_offset(),
        }
    } else {
        QueryOutcome::NotFound {
            matched_len: res.matched_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_reports_first_occurrence() {
        let mut index = SuffixIndex::new();
        index.insert("hello", 1, 0);
        index.insert("help", 1, 5);

        assert_eq!(
            run_query(&index, "HEL"),
            QueryOutcome::Found {
                occurrences: 2,
                line: 1,
                offset: 0
            }
        );
        assert_eq!(
            run_query(&index, "help"),
            QueryOutcome::Found {
                occurrences: 1,
                line: 1,
                offset: 5
            }
        );
    }

    #[test]
    fn test_not_found() {
        let mut index = SuffixIndex::new();
        index.insert("hello", 1, 0);
        assert_eq!(
            run_query(&index, "hellfire"),
            QueryOutcome::NotFound { matched_len: 4 }
        );
    }

    #[test]
    fn test_empty_query_is_root() {
        let index = SuffixIndex::new();
        assert_eq!(
            run_query(&index, ""),
            QueryOutcome::Found {
                occurrences: 1,
                line: 0,
                offset: 0
            }
        );
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&QueryOutcome::NotFound { matched_len: 3 }).unwrap();
        assert_eq!(json, r#"{"status":"not_found","matched_len":3}"#);
    }
}
