use crate::errors::{AppError, AppResult};
use crate::quiz::content::QuestionBank;
use crate::quiz::surface::QuizSurface;

/// Discrete states of a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    QuestionActive,
    AnswerRevealed,
    Finished,
}

/// Single-session quiz state machine.
///
/// The engine is the sole owner and mutator of session state and runs
/// strictly in response to the four input events (`start`,
/// `select_option`, `advance`, `restart`), each to completion before the
/// next is accepted. Events arriving in a phase that does not permit them
/// are dropped without touching state; `locked` additionally shields the
/// current question against duplicate answer events. Hard errors
/// (`OutOfRange`, `DataIntegrity`) abort the session back to
/// `NotStarted` instead of leaving a half-rendered question.
pub struct QuizEngine<S: QuizSurface> {
    bank: QuestionBank,
    surface: S,
    phase: QuizPhase,
    current_index: usize,
    score: u32,
    locked: bool,
}

impl<S: QuizSurface> QuizEngine<S> {
    pub fn new(bank: QuestionBank, surface: S) -> Self {
        QuizEngine {
            bank,
            surface,
            phase: QuizPhase::NotStarted,
            current_index: 0,
            score: 0,
            locked: false,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Progress through the question sequence, in percent. Pure function
    /// of session state, never stored.
    pub fn progress_percent(&self) -> f32 {
        let total = self.bank.question_count();
        if total == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f32 / total as f32 * 100.0
    }

    /// `start` event. Accepted from `NotStarted`, and from `Finished` as
    /// an implicit reset-and-begin; dropped in any other phase.
    pub fn start(&mut self) -> AppResult<()> {
        match self.phase {
            QuizPhase::NotStarted | QuizPhase::Finished => {}
            QuizPhase::QuestionActive | QuizPhase::AnswerRevealed => return Ok(()),
        }

        self.reset_session();
        self.phase = QuizPhase::QuestionActive;
        self.surface.show_quiz_surface(true);

        if let Err(err) = self.render_current_question() {
            self.abort_session();
            return Err(err);
        }
        Ok(())
    }

    /// `select_option` event. Dropped unless a question is active and
    /// still unanswered; `locked` makes a second selection for the same
    /// question a no-op, so overlapping click/keyboard events cannot
    /// double-commit.
    pub fn select_option(&mut self, option_index: usize) -> AppResult<()> {
        if self.phase != QuizPhase::QuestionActive || self.locked {
            return Ok(());
        }

        if let Err(err) = self.commit_selection(option_index) {
            self.abort_session();
            return Err(err);
        }
        Ok(())
    }

    fn commit_selection(&mut self, option_index: usize) -> AppResult<()> {
        let total = self.bank.question_count();
        let question = self.bank.question_at(self.current_index)?;
        let correct_index = question.correct_index()?;
        let selected = question.options.get(option_index).ok_or_else(|| {
            AppError::OutOfRange(format!(
                "option index {} outside [0, {})",
                option_index,
                question.options.len()
            ))
        })?;

        self.locked = true;
        self.phase = QuizPhase::AnswerRevealed;

        if selected.correct {
            self.score += 1;
            self.surface
                .render_progress(self.current_index, total, self.score);
        }
        self.surface.render_feedback(
            selected.correct,
            &selected.explanation,
            option_index,
            correct_index,
        );
        Ok(())
    }

    /// `advance` event. Only meaningful once the current answer has been
    /// revealed; moves to the next question or finishes the session.
    pub fn advance(&mut self) -> AppResult<()> {
        if self.phase != QuizPhase::AnswerRevealed {
            return Ok(());
        }

        self.current_index += 1;
        self.locked = false;

        if self.current_index < self.bank.question_count() {
            self.phase = QuizPhase::QuestionActive;
            if let Err(err) = self.render_current_question() {
                self.abort_session();
                return Err(err);
            }
        } else {
            self.phase = QuizPhase::Finished;
            let feedback = self.bank.feedback_for(self.score);
            self.surface
                .render_result(self.score, self.bank.question_count(), feedback);
        }
        Ok(())
    }

    /// `restart` event. Accepted in every phase, immediately; clears the
    /// session and returns the view to the pre-quiz affordance.
    pub fn restart(&mut self) {
        self.reset_session();
        self.surface.show_quiz_surface(false);
    }

    fn render_current_question(&mut self) -> AppResult<()> {
        let total = self.bank.question_count();
        let question = self.bank.question_at(self.current_index)?;
        self.surface
            .render_question(question, self.current_index, total);
        self.surface
            .render_progress(self.current_index, total, self.score);
        Ok(())
    }

    fn reset_session(&mut self) {
        self.phase = QuizPhase::NotStarted;
        self.current_index = 0;
        self.score = 0;
        self.locked = false;
    }

    fn abort_session(&mut self) {
        self.reset_session();
        self.surface.show_quiz_surface(false);
    }
}
