#![no_main]

use libfuzzer_sys::fuzz_target;
use trieseek::index::{build_from_lines, IndexConfig};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let lines: Vec<&str> = text.lines().collect();
    let config = IndexConfig {
        show_progress: false,
        ..Default::default()
    };
    let built = build_from_lines(&lines, &config);

    // Every substring of every line must be found
    for line in &lines {
        for (start, _) in line.char_indices() {
            let res = built.index.lookup(&line[start..]);
            assert!(res.matched);
            assert!(built.index.node(res.landing).occurrences() >= 1);
        }
    }
});
