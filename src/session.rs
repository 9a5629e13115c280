/**
 * The state of a single play-through of the quiz: which questions are left to ask,
 * how many have been answered correctly, and which were missed.
 *
 * Nothing in this module does any input or output. Text that should be shown to the
 * user is returned as `Line`s tagged with a `Highlight` kind, and the presentation
 * layer decides what each kind looks like.
 */
use std::num::IntErrorKind;

use log::debug;
use rand::Rng;

use super::common::{QuizError, Result};
use super::loader::{Question, MAX_CHOICES};


/// The literal the user types to be asked every question in the pool.
pub const ALL_QUESTIONS: &str = "all";


/// How a line of output should be emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Correct,
    Incorrect,
    Info,
}


/// A line of output, without any terminal formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub highlight: Highlight,
    /// Printed before the first line of `text`; continuation lines are indented by its
    /// length.
    pub prefix: Option<String>,
    pub text: String,
}


impl Line {
    pub fn new(highlight: Highlight, text: &str) -> Self {
        Line { highlight, prefix: None, text: String::from(text) }
    }

    pub fn with_prefix(highlight: Highlight, prefix: &str, text: &str) -> Self {
        Line { highlight, prefix: Some(String::from(prefix)), text: String::from(text) }
    }

    /// The line as it appears with colours turned off.
    pub fn plain(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, self.text),
            None => self.text.clone(),
        }
    }
}


/// The outcome of checking a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub is_correct: bool,
    pub correct_answer: String,
}


/// A question that was answered incorrectly, along with the answer the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    pub question: Question,
    pub response: String,
}


/// Represents the results of one play-through.
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub total: usize,
    pub total_correct: usize,
    /// Percentage of questions answered correctly, from 0 to 100.
    pub score: f64,
    /// Pool indexes of the questions, in the order they were asked.
    pub asked: Vec<usize>,
    pub mistakes: Vec<Mistake>,
}


/// Mutable state for one play-through. A new `Session` is created every time the user
/// starts again.
#[derive(Debug)]
pub struct Session {
    effective_count: usize,
    remaining: Vec<usize>,
    asked: Vec<usize>,
    correct_count: usize,
    mistakes: Vec<Mistake>,
}


impl Session {
    /// Start a session that will ask `effective_count` of the `pool_size` questions.
    /// Fails if no questions would be asked, since the score would be undefined.
    pub fn new(pool_size: usize, effective_count: usize) -> Result<Self> {
        let effective_count = effective_count.min(pool_size);
        if effective_count == 0 {
            return Err(QuizError::InvalidInput(effective_count.to_string()));
        }

        Ok(Session {
            effective_count,
            remaining: (0..pool_size).collect(),
            asked: Vec::new(),
            correct_count: 0,
            mistakes: Vec::new(),
        })
    }

    /// Choose the next question to ask, or `None` once the requested number of
    /// questions has been asked.
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.asked.len() >= self.effective_count {
            return None;
        }

        let index = select_next_question(&mut self.remaining, rng)?;
        debug!("drew question {} ({} left in pool)", index, self.remaining.len());
        self.asked.push(index);
        Some(index)
    }

    /// Check `response` against `question` and record the outcome.
    pub fn record_answer(&mut self, question: &Question, response: &str) -> Evaluation {
        let evaluation = evaluate_answer(question, response);
        debug!("answer {:?} correct: {}", response, evaluation.is_correct);
        if evaluation.is_correct {
            self.correct_count += 1;
        } else {
            self.mistakes.push(Mistake {
                question: question.clone(),
                response: String::from(response),
            });
        }
        evaluation
    }

    pub fn effective_count(&self) -> usize {
        self.effective_count
    }

    pub fn asked_count(&self) -> usize {
        self.asked.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Compute the final score. The percentage is taken over the number of questions
    /// the session was configured to ask.
    pub fn finish(self) -> SessionResult {
        let score = self.correct_count as f64 / self.effective_count as f64 * 100.0;
        SessionResult {
            total: self.effective_count,
            total_correct: self.correct_count,
            score,
            asked: self.asked,
            mistakes: self.mistakes,
        }
    }
}


/// Turn the user's answer to "how many questions?" into the number of questions to
/// ask, capped at the size of the pool.
pub fn configure_session(requested: &str, pool_size: usize) -> Result<usize> {
    let count = if requested == ALL_QUESTIONS {
        pool_size
    } else {
        match requested.parse::<usize>() {
            Ok(n) => n.min(pool_size),
            // Too big to represent, but still a positive number.
            Err(ref e) if e.kind() == &IntErrorKind::PosOverflow => pool_size,
            Err(_) => return Err(QuizError::InvalidInput(String::from(requested))),
        }
    };

    if count == 0 {
        return Err(QuizError::InvalidInput(String::from(requested)));
    }
    Ok(count)
}


/// Remove an index, chosen uniformly at random, from `remaining` and return it.
pub fn select_next_question<R: Rng>(remaining: &mut Vec<usize>, rng: &mut R) -> Option<usize> {
    if remaining.is_empty() {
        return None;
    }
    let position = rng.gen_range(0..remaining.len());
    Some(remaining.remove(position))
}


/// Exact, case-sensitive comparison. Whitespace is significant.
pub fn evaluate_answer(question: &Question, response: &str) -> Evaluation {
    Evaluation {
        is_correct: response == question.correct_answer,
        correct_answer: question.correct_answer.clone(),
    }
}


/// The letter that labels the choice at `index`: `a` for the first one, and so on.
///
/// Only the first `MAX_CHOICES` labels are letters, and the loader refuses questions
/// with more choices than that. Past the end of the range the label is `?`.
pub fn choice_label(index: usize) -> char {
    if index >= MAX_CHOICES {
        return '?';
    }
    std::char::from_u32('a' as u32 + index as u32).unwrap_or('?')
}


/// The question text followed by its lettered choices, if it has any.
pub fn present_question(question: &Question) -> Vec<Line> {
    let mut lines = vec![Line::new(Highlight::Normal, &question.text)];
    lines.extend(present_choices(question));
    lines
}


fn present_choices(question: &Question) -> Vec<Line> {
    question.choices.iter()
        .enumerate()
        .map(|(i, choice)| {
            let prefix = format!("{}) ", choice_label(i));
            Line::with_prefix(Highlight::Normal, &prefix, choice)
        })
        .collect()
}


/// Feedback shown right after the user answers.
pub fn present_evaluation(evaluation: &Evaluation) -> Vec<Line> {
    if evaluation.is_correct {
        vec![Line::new(Highlight::Correct, "Correct!")]
    } else {
        vec![
            Line::new(Highlight::Incorrect, "Incorrect!"),
            Line::new(
                Highlight::Incorrect,
                &format!("The correct answer was {}", evaluation.correct_answer),
            ),
        ]
    }
}


pub fn present_score(result: &SessionResult) -> Vec<Line> {
    vec![Line::new(Highlight::Info, &format!("You got {:.1}%", result.score))]
}


/// Play back every mistake in the order it was made: the question as it was shown,
/// what the user typed and what they should have typed.
pub fn review_mistakes(mistakes: &[Mistake]) -> Vec<Line> {
    let mut lines = Vec::new();
    for mistake in mistakes.iter() {
        lines.extend(present_question(&mistake.question));
        lines.push(Line::new(
            Highlight::Incorrect, &format!("Your answer was {}", mistake.response)));
        lines.push(Line::new(
            Highlight::Correct,
            &format!("The correct answer was {}", mistake.question.correct_answer),
        ));
    }
    lines
}
