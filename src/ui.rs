/**
 * The command-line user interface for playing the quiz.
 */
use std::io::Write;

use super::common::Result;
use super::iohelper::{print_lines, prettyprint, prettyprint_colored, prompt, prompt_raw, MyReadline};
use super::session::{Highlight, Line};

use colored::Color;


const WELCOME: &str = "Welcome to the quiz!";

const INSTRUCTIONS: &[&str] = &[
    "You will be asked a series of questions. For multiple choice questions, write \
     the lowercase letter of the answer you think is correct.",
    "For the questions that are not multiple choice, write the answer you think is \
     correct.",
];


pub struct CmdUI<W: Write, R: MyReadline> {
    writer: W,
    reader: R,
}


impl<W: Write, R: MyReadline> CmdUI<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Self { writer, reader }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn banner(&mut self) -> Result<()> {
        prettyprint_colored(&mut self.writer, WELCOME, None, Some(Color::BrightBlue), None)?;
        for line in INSTRUCTIONS.iter() {
            prettyprint(&mut self.writer, line, None)?;
        }
        my_write!(self.writer, "\n")
    }

    pub fn ask_count(&mut self) -> Result<String> {
        prompt(
            &mut self.reader,
            "How many questions do you want to answer? \
             (write all if you want to answer all questions): ",
        )
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        prettyprint_colored(
            &mut self.writer, &format!("Warning: {}", text), None, Some(Color::Red), None)
    }

    pub fn question(&mut self, number: usize, total: usize, lines: &[Line]) -> Result<()> {
        my_write!(self.writer, "\n")?;
        let header = format!("Question {}/{}", number, total);
        print_lines(&mut self.writer, &[Line::new(Highlight::Info, &header)])?;
        print_lines(&mut self.writer, lines)
    }

    /// The answer is returned exactly as typed so that it can be compared exactly.
    pub fn ask_answer(&mut self) -> Result<String> {
        prompt_raw(&mut self.reader, "Your answer: ")
    }

    pub fn lines(&mut self, lines: &[Line]) -> Result<()> {
        print_lines(&mut self.writer, lines)
    }

    pub fn score(&mut self, lines: &[Line]) -> Result<()> {
        my_write!(self.writer, "\n")?;
        print_lines(&mut self.writer, lines)?;
        my_write!(self.writer, "\n")
    }

    /// Only an exact `y` starts the review.
    pub fn ask_review(&mut self) -> Result<bool> {
        let response = prompt_raw(&mut self.reader, "Do you want to review your mistakes?(y/n): ")?;
        Ok(response == "y")
    }

    pub fn review(&mut self, lines: &[Line]) -> Result<()> {
        for line in lines.iter() {
            // Each mistake starts with its question, which is the only unprefixed
            // normal line.
            if line.prefix.is_none() && line.highlight == Highlight::Normal {
                my_write!(self.writer, "\n")?;
            }
            print_lines(&mut self.writer, std::slice::from_ref(line))?;
        }
        my_write!(self.writer, "\n")
    }

    /// Anything but an exact `n` means another round.
    pub fn ask_again(&mut self) -> Result<bool> {
        let response = prompt_raw(&mut self.reader, "Do you want to play again?(y/n): ")?;
        Ok(response != "n")
    }

    pub fn restarting(&mut self) -> Result<()> {
        my_writeln!(self.writer, "Starting again...")?;
        my_write!(self.writer, "\n")
    }

    pub fn goodbye(&mut self) -> Result<()> {
        my_writeln!(self.writer, "Thank you for playing!")
    }
}
