use super::run_query;
use crate::index::SuffixIndex;
use crate::output::print_outcome;
use std::io::{self, BufRead, Write};
use termcolor::WriteColor;

/// Prompt for queries until `input` is exhausted, reporting each one.
///
/// Returns the number of queries answered.
pub fn run_repl<R: BufRead, W: WriteColor>(
    index: &SuffixIndex,
    name: &str,
    mut input: R,
    out: &mut W,
) -> io::Result<usize> {
    let mut answered = 0;
    let mut buf = String::new();

    loop {
        write!(out, "Enter the string you would like to search \"{}\" for:\n>>> ", name)?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            writeln!(out)?;
            break;
        }

        let query = buf.trim_end_matches(['\n', '\r']);
        let outcome = run_query(index, query);
        print_outcome(out, query, &outcome)?;
        answered += 1;
    }

    tracing::debug!(answered, "query loop finished");
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use termcolor::NoColor;

    #[test]
    fn test_transcript() {
        let mut index = SuffixIndex::new();
        index.insert("hello", 1, 0);
        index.insert("help", 1, 5);

        let input = Cursor::new("hel\r\nhellfire\n");
        let mut out = NoColor::new(Vec::new());
        let answered = run_repl(&index, "words.txt", input, &mut out).unwrap();
        assert_eq!(answered, 2);

        let text = String::from_utf8(out.into_inner()).unwrap();
        let prompt = "Enter the string you would like to search \"words.txt\" for:\n>>> ";
        assert_eq!(text.matches(prompt).count(), 3);
        assert!(text.contains("\"hel\" was found in the file 2 time(s)!"));
        assert!(text.contains("First occurrence at Line: 1 Index: 0 !"));
        assert!(text.contains("\"hellfire\" was NOT found!"));
    }

    #[test]
    fn test_eof_immediately() {
        let index = SuffixIndex::new();
        let mut out = NoColor::new(Vec::new());
        let answered = run_repl(&index, "empty", Cursor::new(""), &mut out).unwrap();
        assert_eq!(answered, 0);
    }

    #[test]
    fn test_blank_query_is_found() {
        let index = SuffixIndex::new();
        let mut out = NoColor::new(Vec::new());
        run_repl(&index, "doc", Cursor::new("\n"), &mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\"\" was found in the file 1 time(s)!"));
    }
}
