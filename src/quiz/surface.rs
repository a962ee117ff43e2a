use crate::quiz::content::{Question, ScoreFeedback};

/// Commands the engine issues toward the presentation layer.
///
/// The engine owns every piece of quiz state; an implementation only
/// projects the commands into whatever UI it drives and must not keep
/// state of its own. One command (or command pair) is issued per
/// transition, always after the engine has committed the new state.
#[cfg_attr(test, mockall::automock)]
pub trait QuizSurface {
    /// Toggle between the pre-quiz affordance and the in-progress view.
    fn show_quiz_surface(&mut self, visible: bool);

    /// Present a question with all options enabled.
    fn render_question(&mut self, question: &Question, question_index: usize, total: usize);

    /// Mark the chosen and correct options and show the explanation of
    /// the *selected* option; options stay disabled until `advance`.
    fn render_feedback(
        &mut self,
        was_correct: bool,
        explanation: &str,
        selected_index: usize,
        correct_index: usize,
    );

    /// Refresh the progress bar and score counter.
    fn render_progress(&mut self, question_index: usize, total: usize, score: u32);

    /// Present the final score with its matched feedback copy.
    fn render_result(&mut self, score: u32, total: usize, feedback: &ScoreFeedback);
}
