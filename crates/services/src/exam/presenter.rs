use exam_core::model::{ExamQuestion, ExamResult};

use super::progress::ExamProgress;
use crate::error::ExamError;

/// Snapshot of the question on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question: ExamQuestion,
    pub index: usize,
    pub total: usize,
    pub selected: Option<usize>,
    /// Per-question answered flags, for the navigator.
    pub answered: Vec<bool>,
    pub progress: ExamProgress,
}

impl QuestionView {
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

/// A confirmation the presenter must obtain before the controller acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    /// Submit now, possibly leaving questions blank.
    EarlyFinish { unanswered: usize },
    /// Abandon the running exam.
    Exit,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::EarlyFinish { unanswered: 0 } => {
                "Are you sure you want to finish the test?".to_string()
            }
            Self::EarlyFinish { unanswered: 1 } => {
                "You have 1 unanswered question. It will be marked as incorrect. \
                 Do you want to finish the test now?"
                    .to_string()
            }
            Self::EarlyFinish { unanswered } => format!(
                "You have {unanswered} unanswered questions. These will be marked as incorrect. \
                 Do you want to finish the test now?"
            ),
            Self::Exit => "Are you sure you want to exit to the home page? \
                           Your progress will be lost."
                .to_string(),
        }
    }
}

/// Rendering surface driven by [`super::ExamController`].
///
/// Implementations only display state; they never call back into the
/// controller from inside these methods.
pub trait Presenter {
    fn render_home(&mut self);
    fn render_question(&mut self, view: &QuestionView);
    fn render_results(&mut self, result: &ExamResult);
    fn render_timer(&mut self, remaining_seconds: u32);
    fn render_error(&mut self, error: &ExamError);
}
