//! Interactive index selection with a bounded number of attempts.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::errors::SwitchError;
use crate::grub_cfg::MenuEntry;

const PROMPT: &str = "Enter the index of the available systems you want to switch to: ";
const INVALID: &str = "Invalid entry index. Please enter a valid number.";

pub fn print_entries(entries: &[MenuEntry], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Below are the available systems you can choose to switch to:")?;
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// Parse one input line as an index into a list of `count` entries.
///
/// Only the first whitespace-separated token is looked at; it must be an
/// integer in `[0, count)`.
pub fn parse_selection(line: &str, count: usize) -> Option<usize> {
    let token = line.split_whitespace().next()?;
    let value: i64 = token.parse().ok()?;
    usize::try_from(value).ok().filter(|&index| index < count)
}

enum Answer {
    Line(String),
    Undecodable,
    Eof,
}

/// Next non-blank line of input. Blank lines are skipped without re-prompting.
fn next_answer(input: &mut dyn BufRead) -> io::Result<Answer> {
    loop {
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(Answer::Eof),
            Ok(_) if line.trim().is_empty() => continue,
            Ok(_) => return Ok(Answer::Line(line)),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => return Ok(Answer::Undecodable),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt until a valid index is entered or `max_attempts` inputs were rejected.
///
/// End of input and undecodable lines count as rejected attempts.
pub fn prompt_selection(
    entries: &[MenuEntry],
    max_attempts: u32,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<usize> {
    let mut attempts = 0;

    while attempts < max_attempts {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let selection = match next_answer(input)? {
            Answer::Line(line) => {
                log::debug!("input {:?}", line.trim_end());
                parse_selection(&line, entries.len())
            }
            Answer::Undecodable | Answer::Eof => None,
        };

        match selection {
            Some(index) => {
                log::info!("Selected entry {}", index);
                return Ok(index);
            }
            None => {
                writeln!(err, "{INVALID}")?;
                attempts += 1;
                log::debug!("rejected input ({}/{})", attempts, max_attempts);
            }
        }
    }

    Err(SwitchError::TooManyAttempts { attempts }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn entries(n: usize) -> Vec<MenuEntry> {
        (0..n)
            .map(|index| MenuEntry {
                index,
                name: format!("system {index}"),
            })
            .collect()
    }

    fn run(input: &str, n: usize) -> (Result<usize>, String, String) {
        run_bytes(input.as_bytes(), n)
    }

    fn run_bytes(input: &[u8], n: usize) -> (Result<usize>, String, String) {
        let mut input = Cursor::new(input.to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = prompt_selection(&entries(n), 5, &mut input, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn bounds_are_enforced() {
        assert_eq!(parse_selection("-1", 4), None);
        assert_eq!(parse_selection("4", 4), None);
        assert_eq!(parse_selection("abc", 4), None);
        assert_eq!(parse_selection("", 4), None);
        assert_eq!(parse_selection("0", 4), Some(0));
        assert_eq!(parse_selection("3\n", 4), Some(3));
        assert_eq!(parse_selection("  2 extra", 4), Some(2));
    }

    #[test]
    fn first_valid_input_is_accepted() {
        let (result, out, err) = run("1\n3\n", 4);
        assert_eq!(result.unwrap(), 1);
        assert_eq!(out.matches(PROMPT).count(), 1);
        assert!(err.is_empty());
    }

    #[test]
    fn invalid_inputs_are_retried() {
        let (result, out, err) = run("-1\nfoo\n4\n2\n", 4);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out.matches(PROMPT).count(), 4);
        assert_eq!(err.matches(INVALID).count(), 3);
    }

    #[test]
    fn five_failures_exhaust_attempts() {
        let (result, _, err) = run("a\nb\n-3\n9\n10\n0\n", 4);
        let result = result.unwrap_err();
        assert!(matches!(
            result.downcast_ref::<SwitchError>(),
            Some(SwitchError::TooManyAttempts { attempts: 5 })
        ));
        assert_eq!(err.matches(INVALID).count(), 5);
    }

    #[test]
    fn blank_lines_do_not_use_attempts() {
        let (result, out, err) = run("\n\n   \n\n\n\n\t\n3\n", 4);
        assert_eq!(result.unwrap(), 3);
        assert_eq!(out.matches(PROMPT).count(), 1);
        assert!(err.is_empty());
    }

    #[test]
    fn undecodable_line_counts_as_one_failure() {
        let (result, out, err) = run_bytes(b"\xff\n2\n", 4);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out.matches(PROMPT).count(), 2);
        assert_eq!(err.matches(INVALID).count(), 1);
    }

    #[test]
    fn end_of_input_counts_as_failure() {
        let (result, out, _) = run("", 2);
        assert!(result.is_err());
        assert_eq!(out.matches(PROMPT).count(), 5);
    }

    #[test]
    fn listing_shows_index_and_name() {
        let mut out = Vec::new();
        print_entries(&entries(2), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("0: system 0\n"));
        assert!(out.contains("1: system 1\n"));
    }
}
