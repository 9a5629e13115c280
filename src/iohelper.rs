/**
 * Helper functions for input and output.
 */
use colored::*;
use std::io;
use std::io::Write;

use rustyline::error::ReadlineError;

use super::common::{QuizError, Result};
use super::session::{Highlight, Line};

#[macro_export]
macro_rules! my_writeln {
    ($dst:expr, $($arg:tt)*) => (
        writeln!($dst, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}

#[macro_export]
macro_rules! my_write {
    ($dst:expr, $($arg:tt)*) => (
        write!($dst, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}


/// A source of lines of user input. Implemented for `rustyline::Editor` in the real
/// program and for scripted input in tests.
pub trait MyReadline {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<H: rustyline::Helper> MyReadline for rustyline::Editor<H> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.readline(&format!("{}", prompt.white())) {
            Ok(s) => Ok(s),
            Err(ReadlineError::Interrupted) => Err(QuizError::ReadlineInterrupted),
            Err(ReadlineError::Eof) => Err(QuizError::ReadlineEof),
            _ => Err(QuizError::ReadlineOther),
        }
    }
}


/// Display a prompt and read a line of input continually until the user enters a
/// line with at least one non-whitespace character, which is returned without leading
/// and trailing whitespace. Ctrl+C and Ctrl+D are passed back as errors.
pub fn prompt<R: MyReadline>(reader: &mut R, message: &str) -> Result<String> {
    loop {
        let response = reader.read_line(message)?;
        let response = response.trim();
        if response.len() > 0 {
            return Ok(response.to_string());
        }
    }
}


/// Display a prompt and return the line exactly as it was typed, even if it is empty.
pub fn prompt_raw<R: MyReadline>(reader: &mut R, message: &str) -> Result<String> {
    reader.read_line(message)
}


/// Print `message`, breaking lines according to the current width of the terminal.
/// If `prefix` is not `None`, then prepend it to the first line and indent all
/// subsequent lines by its length.
pub fn prettyprint<W: io::Write>(
    writer: &mut W, message: &str, prefix: Option<&str>
) -> Result<()> {
    prettyprint_colored(writer, message, prefix, None, None)
}


pub fn prettyprint_colored<W: io::Write>(
    writer: &mut W, message: &str, prefix: Option<&str>, message_color: Option<Color>,
    prefix_color: Option<Color>
) -> Result<()> {
    let prefix = prefix.unwrap_or("");
    let width = textwrap::termwidth().saturating_sub(prefix.len()).max(20);
    let mut lines = textwrap::wrap_iter(message, width);

    if let Some(first_line) = lines.next() {
        let colored_prefix = color_optional(&prefix, prefix_color);
        let colored_line = color_optional(&first_line, message_color);
        my_writeln!(writer, "{}{}", colored_prefix, colored_line)?;
    } else {
        my_writeln!(writer, "{}", color_optional(&prefix, prefix_color))?;
    }

    let indent = " ".repeat(prefix.len());
    for line in lines {
        let colored_line = color_optional(&line, message_color);
        my_writeln!(writer, "{}{}", indent, colored_line)?;
    }
    Ok(())
}


/// Print each line in the colour of its highlight kind.
pub fn print_lines<W: io::Write>(writer: &mut W, lines: &[Line]) -> Result<()> {
    for line in lines.iter() {
        prettyprint_colored(
            writer, &line.text, line.prefix.as_ref().map(|p| p.as_str()),
            highlight_color(line.highlight), None,
        )?;
    }
    Ok(())
}


pub fn highlight_color(highlight: Highlight) -> Option<Color> {
    match highlight {
        Highlight::Normal => None,
        Highlight::Correct => Some(Color::Green),
        Highlight::Incorrect => Some(Color::Red),
        Highlight::Info => Some(Color::BrightBlue),
    }
}


fn color_optional(text: &str, color: Option<Color>) -> ColoredString {
    if let Some(color) = color {
        text.color(color)
    } else {
        text.normal()
    }
}
