use exam_core::model::{ExamResult, ReviewRow, SubmitReason};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewOptionKind {
    Correct,
    Incorrect,
    Neutral,
}

impl ReviewOptionKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Correct => "review-option correct",
            Self::Incorrect => "review-option incorrect",
            Self::Neutral => "review-option neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOptionVm {
    pub text: String,
    pub kind: ReviewOptionKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub title: String,
    pub was_answered: bool,
    pub options: Vec<ReviewOptionVm>,
    pub explanation: Option<String>,
}

impl ReviewItemVm {
    #[must_use]
    pub fn title_class(&self) -> &'static str {
        if self.was_answered {
            "review-title"
        } else {
            "review-title unanswered"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub correct: u32,
    pub total: u32,
    pub passed: bool,
    pub status_label: &'static str,
    pub notice: Option<&'static str>,
    pub elapsed_label: String,
    pub review: Vec<ReviewItemVm>,
}

impl From<&ExamResult> for ResultsVm {
    fn from(result: &ExamResult) -> Self {
        let status_label = if result.passed() {
            "Congratulations! You passed!"
        } else {
            "You did not pass. Keep studying!"
        };
        let notice = match result.reason() {
            SubmitReason::Timeout => Some("Time is up! Your exam was submitted automatically."),
            SubmitReason::UserConfirmed | SubmitReason::EarlyFinish => None,
        };

        Self {
            score_label: format!("{:.1}%", result.percentage()),
            correct: result.correct_count(),
            total: result.total_count(),
            passed: result.passed(),
            status_label,
            notice,
            elapsed_label: format!("Time taken: {}", format_elapsed(result.elapsed_seconds())),
            review: result
                .per_question()
                .iter()
                .enumerate()
                .map(|(index, row)| map_review_row(index, row))
                .collect(),
        }
    }
}

fn map_review_row(index: usize, row: &ReviewRow) -> ReviewItemVm {
    let suffix = if row.was_answered {
        ""
    } else {
        " (Not Answered - Marked as Failed)"
    };

    let options = row
        .options
        .iter()
        .enumerate()
        .map(|(option_index, option)| {
            if option_index == row.correct_index {
                ReviewOptionVm {
                    text: format!("{option} ✓ (Correct Answer)"),
                    kind: ReviewOptionKind::Correct,
                }
            } else if row.user_index == Some(option_index) {
                ReviewOptionVm {
                    text: format!("{option} ✗ (Your Answer)"),
                    kind: ReviewOptionKind::Incorrect,
                }
            } else {
                ReviewOptionVm {
                    text: option.clone(),
                    kind: ReviewOptionKind::Neutral,
                }
            }
        })
        .collect();

    ReviewItemVm {
        title: format!("Question {}: {}{suffix}", index + 1, row.question_text),
        was_answered: row.was_answered,
        options,
        explanation: row.explanation.clone(),
    }
}
