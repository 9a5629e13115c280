/**
 * Read the pool of questions from a JSON file.
 *
 * The file holds an array of objects like
 *
 *   {"question": "Capital of France?", "answers": ["Paris", "London"], "correct": "a"}
 *
 * where `answers` is empty (or missing) for questions that expect a typed answer
 * instead of a letter.
 */
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use super::common::{QuizError, Result};
use super::session::choice_label;


/// Choices are labelled with the letters `a` to `z`.
pub const MAX_CHOICES: usize = 26;

const BYTE_ORDER_MARK: char = '\u{feff}';


/// Represents a question.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    /// Candidate answers for a multiple-choice question. Empty if the user should type
    /// the answer out.
    #[serde(rename = "answers", default)]
    pub choices: Vec<String>,
    /// For multiple-choice questions, the letter of the right choice. Otherwise the
    /// answer itself.
    #[serde(rename = "correct")]
    pub correct_answer: String,
}


impl Question {
    pub fn new(text: &str, choices: &[&str], correct_answer: &str) -> Self {
        Question {
            text: String::from(text),
            choices: choices.iter().map(|c| String::from(*c)).collect(),
            correct_answer: String::from(correct_answer),
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        !self.choices.is_empty()
    }
}


/// Load the question pool from a file.
pub fn load_pool(path: &Path) -> Result<Vec<Question>> {
    let data = fs::read_to_string(path)
        .or(Err(QuizError::QuizNotFound(path.to_path_buf())))?;

    let pool = load_pool_from_json(&data)?;
    info!("loaded {} questions from {}", pool.len(), path.to_string_lossy());
    Ok(pool)
}


/// Load the question pool from a string containing JSON data.
pub fn load_pool_from_json(data: &str) -> Result<Vec<Question>> {
    let data = data.trim_start_matches(BYTE_ORDER_MARK);
    let pool: Vec<Question> = serde_json::from_str(data).map_err(QuizError::Json)?;

    if pool.is_empty() {
        return Err(QuizError::EmptyQuiz);
    }

    for (index, question) in pool.iter().enumerate() {
        if question.choices.len() > MAX_CHOICES {
            return Err(QuizError::TooManyChoices { index });
        }

        if question.is_multiple_choice() && !is_valid_label(question) {
            warn!(
                "question {} ({:?}) expects {:?}, which is not one of its choices",
                index + 1, question.text, question.correct_answer,
            );
        }
    }

    Ok(pool)
}


fn is_valid_label(question: &Question) -> bool {
    (0..question.choices.len())
        .any(|i| question.correct_answer == choice_label(i).to_string())
}
