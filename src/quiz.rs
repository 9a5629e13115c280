/**
 * Run the quiz: ask how many questions to play, ask them, report the score, offer a
 * review of the mistakes and start over until the user has had enough.
 */
use std::io::Write;

use log::info;
use rand::Rng;

use super::common::{QuizError, Result};
use super::iohelper::MyReadline;
use super::loader::Question;
use super::session::{
    configure_session, present_evaluation, present_question, present_score,
    review_mistakes, Session, SessionResult,
};
use super::ui::CmdUI;


/// Represents the pool of questions. It is never modified once loaded.
#[derive(Debug)]
pub struct Quiz {
    pub questions: Vec<Question>,
}


impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Quiz { questions }
    }

    /// Ask the user how many questions to play until they give a usable answer.
    pub fn configure<W: Write, R: MyReadline>(&self, ui: &mut CmdUI<W, R>) -> Result<usize> {
        loop {
            let requested = ui.ask_count()?;
            match configure_session(&requested, self.questions.len()) {
                Ok(count) => {
                    info!("playing {} of {} questions", count, self.questions.len());
                    return Ok(count);
                },
                Err(QuizError::InvalidInput(_)) => {
                    ui.warning("please enter a positive number or 'all'.")?;
                },
                Err(e) => {
                    return Err(e);
                },
            }
        }
    }

    /// Ask `effective_count` randomly chosen questions and score the answers.
    pub fn run_session<W: Write, R: MyReadline, G: Rng>(
        &self, ui: &mut CmdUI<W, R>, rng: &mut G, effective_count: usize
    ) -> Result<SessionResult> {
        let mut session = Session::new(self.questions.len(), effective_count)?;

        while let Some(index) = session.next_question(rng) {
            let question = &self.questions[index];
            ui.question(
                session.asked_count(), session.effective_count(), &present_question(question))?;

            let response = ui.ask_answer()?;
            let evaluation = session.record_answer(question, &response);
            ui.lines(&present_evaluation(&evaluation))?;
        }

        info!(
            "session finished: {} of {} correct",
            session.correct_count(), session.effective_count(),
        );
        let result = session.finish();
        ui.score(&present_score(&result))?;
        Ok(result)
    }

    /// Play sessions until the user declines to play again.
    pub fn run_forever<W: Write, R: MyReadline, G: Rng>(
        &self, ui: &mut CmdUI<W, R>, rng: &mut G
    ) -> Result<()> {
        ui.banner()?;
        loop {
            let count = self.configure(ui)?;
            let result = self.run_session(ui, rng, count)?;

            if ui.ask_review()? {
                ui.review(&review_mistakes(&result.mistakes))?;
            }

            if ui.ask_again()? {
                ui.restarting()?;
            } else {
                ui.goodbye()?;
                return Ok(());
            }
        }
    }
}
