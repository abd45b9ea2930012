//! Output formatting for query results

use crate::query::QueryOutcome;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Open stdout with colour enabled according to `color`
pub fn stdout(color: ColorChoice) -> StandardStream {
    StandardStream::stdout(color)
}

/// Print one outcome in the query loop's report format
pub fn print_outcome<W: WriteColor>(out: &mut W, query: &str, outcome: &QueryOutcome) -> io::Result<()> {
    match *outcome {
        QueryOutcome::Found {
            occurrences,
            line,
            offset,
        } => {
            write!(out, "---The query string \"{}\" was ", query)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "found")?;
            out.reset()?;
            writeln!(out, " in the file {} time(s)!", occurrences)?;

            write!(out, "---First occurrence at ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "Line: {} Index: {}", line, offset)?;
            out.reset()?;
            writeln!(out, " !")?;
        }
        QueryOutcome::NotFound { .. } => {
            write!(out, "---The query string \"{}\" was ", query)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "NOT found")?;
            out.reset()?;
            writeln!(out, "!")?;
        }
    }

    writeln!(out)
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    query: &'a str,
    #[serde(flatten)]
    outcome: &'a QueryOutcome,
}

/// Print one outcome as a single JSON line
pub fn print_outcome_json<W: Write>(out: &mut W, query: &str, outcome: &QueryOutcome) -> io::Result<()> {
    let line = serde_json::to_string(&JsonOutcome { query, outcome }).map_err(io::Error::other)?;
    writeln!(out, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render(query: &str, outcome: QueryOutcome) -> String {
        let mut out = NoColor::new(Vec::new());
        print_outcome(&mut out, query, &outcome).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_found_format() {
        let text = render(
            "hel",
            QueryOutcome::Found {
                occurrences: 2,
                line: 1,
                offset: 0,
            },
        );
        assert_eq!(
            text,
            "---The query string \"hel\" was found in the file 2 time(s)!\n\
             ---First occurrence at Line: 1 Index: 0 !\n\n"
        );
    }

    #[test]
    fn test_not_found_format() {
        let text = render("xyz", QueryOutcome::NotFound { matched_len: 0 });
        assert_eq!(text, "---The query string \"xyz\" was NOT found!\n\n");
    }

    #[test]
    fn test_json_line() {
        let mut out = Vec::new();
        let outcome = QueryOutcome::Found {
            occurrences: 3,
            line: 4,
            offset: 7,
        };
        print_outcome_json(&mut out, "cat", &outcome).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"query\":\"cat\",\"status\":\"found\",\"occurrences\":3,\"line\":4,\"offset\":7}\n"
        );
    }
}
