//! Interactive medicine-disposal quiz: content store, session state
//! machine, and the render-command contract toward the page renderer.
//!
//! This module is a pure in-process library. It owns no presentation and
//! no persistence; the page embeds it and implements [`QuizSurface`] to
//! project render commands into the DOM. The lead-capture backend in the
//! rest of the crate never touches it.

pub mod content;
pub mod engine;
pub mod surface;

pub use content::{AnswerOption, FeedbackTable, Question, QuestionBank, ScoreFeedback};
pub use engine::{QuizEngine, QuizPhase};
pub use surface::QuizSurface;
