use crate::error::CorpusError;
use crate::index::trie::SuffixIndex;
use crate::index::types::{IndexConfig, IndexStats};
use crate::utils::line_ranges;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Lines between progress bar updates
const PROGRESS_STEP: usize = 256;

/// Result of loading every suffix of a document into a fresh index
pub struct BuiltIndex {
    pub index: SuffixIndex,
    /// Number of lines read from the document
    pub line_count: usize,
    /// Time spent inserting suffixes
    pub build_time: Duration,
}

impl BuiltIndex {
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            line_count: self.line_count,
            suffix_count: self.index.insert_count(),
            node_count: self.index.node_count(),
            max_depth: self.index.max_depth(),
            build_time_ms: self.build_time.as_millis() as u64,
        }
    }
}

/// Read a document into lines
pub fn load_lines(path: &Path) -> Result<Vec<String>, CorpusError> {
    let content = fs::read(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    line_ranges(&content)
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| {
            std::str::from_utf8(&content[start..end])
                .map(str::to_owned)
                .map_err(|_| CorpusError::InvalidUtf8 {
                    path: path.to_path_buf(),
                    line: i + 1,
                })
        })
        .collect()
}

/// Insert every suffix of every line.
///
/// Lines are numbered from 1; offsets count characters from the start of
/// the line.
pub fn build_from_lines<S: AsRef<str>>(lines: &[S], config: &IndexConfig) -> BuiltIndex {
    let started = Instant::now();
    let mut index = SuffixIndex::new();

    let progress_bar = if config.show_progress && !lines.is_empty() {
        let pb = ProgressBar::new(lines.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░  "));
        }
        pb.set_message("Inserting suffixes...");
        Some(pb)
    } else {
        None
    };

    for (i, line) in lines.iter().enumerate() {
        insert_line(&mut index, line.as_ref(), i + 1, config.max_suffix_len);

        if let Some(ref pb) = progress_bar {
            if (i + 1) % PROGRESS_STEP == 0 {
                pb.inc(PROGRESS_STEP as u64);
            }
        }
    }

    if let Some(pb) = progress_bar {
        pb.inc((lines.len() % PROGRESS_STEP) as u64);
        pb.finish_with_message(format!("{} nodes", index.node_count()));
    }

    let built = BuiltIndex {
        index,
        line_count: lines.len(),
        build_time: started.elapsed(),
    };

    tracing::debug!(
        lines = built.line_count,
        suffixes = built.index.insert_count(),
        nodes = built.index.node_count(),
        "suffix trie built"
    );

    built
}

/// Submit the suffix starting at each character offset of `line`
fn insert_line(index: &mut SuffixIndex, line: &str, line_no: usize, max_len: Option<usize>) {
    for (offset, (start, _)) in line.char_indices().enumerate() {
        let suffix = &line[start..];
        let suffix = match max_len {
            Some(cap) => truncate_chars(suffix, cap),
            None => suffix,
        };
        index.insert(suffix, line_no, offset);
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Load a document and build its suffix index
pub fn build_index(path: &Path, config: &IndexConfig) -> Result<BuiltIndex> {
    tracing::info!(path = %path.display(), "loading document");

    let lines = load_lines(path).context("Failed to load document")?;
    let built = build_from_lines(&lines, config);

    tracing::info!(
        lines = built.line_count,
        nodes = built.index.node_count(),
        elapsed_ms = built.build_time.as_millis() as u64,
        "index ready"
    );

    Ok(built)
}
