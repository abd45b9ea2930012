/// Split raw file content into lines.
///
/// Lines end at `\n`; a trailing `\r` is dropped, and a final newline does
/// not start an extra empty line. Returns byte ranges into `content`.
pub fn line_ranges(content: &[u8]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for nl in memchr::memchr_iter(b'\n', content) {
        ranges.push((start, trim_cr(content, start, nl)));
        start = nl + 1;
    }

    if start < content.len() {
        ranges.push((start, trim_cr(content, start, content.len())));
    }

    ranges
}

#[inline]
fn trim_cr(content: &[u8], start: usize, end: usize) -> usize {
    if end > start && content[end - 1] == b'\r' {
        end - 1
    } else {
        end
    }
}
