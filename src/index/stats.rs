use crate::index::build::build_index;
use crate::index::types::{IndexConfig, IndexStats};
use anyhow::Result;
use std::path::Path;

/// Build the index for `path` and print its statistics
pub fn show_stats(path: &Path, config: &IndexConfig, json: bool) -> Result<()> {
    let built = build_index(path, config)?;
    let stats = built.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", format_stats(path, &stats));
    }

    Ok(())
}

/// Render statistics as the aligned text block shown by `stats`
pub fn format_stats(path: &Path, stats: &IndexStats) -> String {
    let mut out = String::new();
    out.push_str("Index Statistics\n");
    out.push_str("================\n\n");
    out.push_str(&format!("Document:         {}\n", path.display()));
    out.push_str(&format!("Lines:            {}\n", stats.line_count));
    out.push_str(&format!("Suffixes:         {}\n", stats.suffix_count));
    out.push_str(&format!("Nodes:            {}\n", stats.node_count));
    out.push_str(&format!("Max depth:        {}\n", stats.max_depth));
    out.push_str(&format!("Suffixes/node:    {}\n", sharing_ratio(stats)));
    out.push_str(&format!("Build time:       {}\n", format_millis(stats.build_time_ms)));
    out
}

/// Suffixes inserted per node created
fn sharing_ratio(stats: &IndexStats) -> String {
    let created = stats.node_count.saturating_sub(1);
    if created == 0 {
        return "n/a".to_string();
    }
    format!("{:.2}", stats.suffix_count as f64 / created as f64)
}

fn format_millis(ms: u64) -> String {
    if ms >= 1000 {
        format!("{:.2} s", ms as f64 / 1000.0)
    } else {
        format!("{} ms", ms)
    }
}
