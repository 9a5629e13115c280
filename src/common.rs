/**
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * struct that holds command-line arguments.
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;


pub type Result<T> = ::std::result::Result<T, QuizError>;


#[derive(Debug)]
pub enum QuizError {
    /// For when the questions file does not exist or cannot be read.
    QuizNotFound(PathBuf),
    /// For JSON errors.
    Json(serde_json::Error),
    Io(io::Error),
    /// For when the user asks for a number of questions that cannot be asked.
    InvalidInput(String),
    ReadlineInterrupted,
    ReadlineEof,
    ReadlineOther,
    EmptyQuiz,
    /// A question has more choices than there are letters to label them with.
    TooManyChoices { index: usize },
    Logger(String),
}


impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::QuizNotFound(ref path) => {
                write!(f, "could not read questions from '{}'", path.to_string_lossy())
            },
            QuizError::Json(ref err) => {
                write!(f, "could not parse JSON ({})", err)
            },
            QuizError::Io(ref err) => {
                write!(f, "IO error ({})", err)
            },
            QuizError::InvalidInput(ref input) => {
                write!(f, "invalid number of questions '{}'", input)
            },
            QuizError::ReadlineInterrupted | QuizError::ReadlineEof => {
                Ok(())
            },
            QuizError::ReadlineOther => {
                write!(f, "error while reading input")
            },
            QuizError::EmptyQuiz => {
                write!(f, "no questions found")
            },
            QuizError::TooManyChoices { index } => {
                write!(f, "question {} has more than 26 choices", index + 1)
            },
            QuizError::Logger(ref message) => {
                write!(f, "could not set up logging ({})", message)
            },
        }
    }
}


impl error::Error for QuizError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuizError::Json(ref err) => Some(err),
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}


impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}


/// Return `true` if the error means the user asked to leave, e.g. with Ctrl+C or
/// Ctrl+D.
pub fn is_user_exit(e: &QuizError) -> bool {
    match e {
        QuizError::ReadlineInterrupted | QuizError::ReadlineEof => true,
        _ => false,
    }
}


pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        if let io::ErrorKind::BrokenPipe = e.kind() {
            return true;
        }
    }
    false
}


/// Holds the command-line configuration for the application.
#[derive(StructOpt, Debug)]
#[structopt(name = "trivia", about = "Answer trivia questions from the command line.")]
pub struct Options {
    /// Path to the JSON file of questions.
    #[structopt(parse(from_os_str), default_value = "questions.json")]
    pub path: PathBuf,
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
    /// Seed for choosing questions, to get the same order every time.
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
    /// Log more to standard error (-v for info, -vv for debug).
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: u8,
    /// Also write debug logs to this file.
    #[structopt(long = "log-file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}
