//! Interactive fallback when no message is given on the command line.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

#[derive(Debug, PartialEq, Eq)]
pub struct Answers {
    pub message: String,
    /// `None` keeps the default art path.
    pub art_path: Option<PathBuf>,
}

/// Asks for the message, then (if `ask_path`) for an optional art path.
///
/// End of input counts as an empty answer.
pub fn ask(input: &mut impl BufRead, output: &mut impl Write, ask_path: bool) -> Result<Answers> {
    let message = read_answer(input, output, "Enter message: ")?;
    if !ask_path {
        return Ok(Answers {
            message,
            art_path: None,
        });
    }

    let path = read_answer(
        input,
        output,
        "Enter path to ASCII art (or press Enter for default): ",
    )?;

    let path = path.trim();
    Ok(Answers {
        message,
        art_path: (!path.is_empty()).then(|| PathBuf::from(path)),
    })
}

fn read_answer(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_ask_message_and_path() {
        let mut input = Cursor::new("Hello there\n/tmp/art.txt\n");
        let mut output = Vec::new();

        let answers = ask(&mut input, &mut output, true).unwrap();

        assert_eq!(answers.message, "Hello there");
        assert_eq!(answers.art_path, Some(PathBuf::from("/tmp/art.txt")));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Enter message: "));
        assert!(shown.contains("press Enter for default"));
    }

    #[test]
    fn test_ask_empty_path_keeps_default() {
        let mut input = Cursor::new("Hi\r\n\r\n");
        let answers = ask(&mut input, &mut Vec::new(), true).unwrap();

        assert_eq!(answers.message, "Hi");
        assert_eq!(answers.art_path, None);
    }

    #[test]
    fn test_ask_eof_is_empty() {
        let mut input = Cursor::new("");
        let answers = ask(&mut input, &mut Vec::new(), true).unwrap();

        assert_eq!(
            answers,
            Answers {
                message: String::new(),
                art_path: None,
            }
        );
    }

    #[test]
    fn test_ask_without_path_asks_once() {
        let mut input = Cursor::new("Hi\n/tmp/ignored.txt\n");
        let mut output = Vec::new();

        let answers = ask(&mut input, &mut output, false).unwrap();

        assert_eq!(answers.message, "Hi");
        assert_eq!(answers.art_path, None);
        let shown = String::from_utf8(output).unwrap();
        assert!(!shown.contains("ASCII art"));
    }
}
