use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ExamId, ExamQuestion};

/// Minimum percentage needed to pass. A score exactly at the threshold passes.
pub const PASS_THRESHOLD_PERCENT: f64 = 70.0;

/// Why an exam was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmitReason {
    /// The user submitted from the last question.
    UserConfirmed,
    /// The countdown reached zero.
    Timeout,
    /// The user finished before answering everything or running out of time.
    EarlyFinish,
}

impl SubmitReason {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UserConfirmed => "submitted",
            Self::Timeout => "time expired",
            Self::EarlyFinish => "finished early",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultError {
    #[error("cannot score an exam without questions")]
    NoQuestions,

    #[error("{answers} answers recorded for {questions} questions")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("submitted_at is before started_at")]
    InvalidTimeRange,
}

/// Per-question breakdown shown after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub user_index: Option<usize>,
    pub was_answered: bool,
    pub explanation: Option<String>,
}

impl ReviewRow {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.user_index == Some(self.correct_index)
    }
}

/// Scored outcome of a submitted exam.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamResult {
    exam_id: ExamId,
    reason: SubmitReason,
    correct_count: u32,
    total_count: u32,
    percentage: f64,
    passed: bool,
    started_at: DateTime<Utc>,
    submitted_at: DateTime<Utc>,
    per_question: Vec<ReviewRow>,
}

impl ExamResult {
    /// Score recorded answers against the exam questions.
    ///
    /// An unanswered slot never counts as correct.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::NoQuestions` for an empty exam,
    /// `ResultError::LengthMismatch` if `answers` and `questions` differ in length,
    /// and `ResultError::InvalidTimeRange` if `submitted_at` precedes `started_at`.
    pub fn score(
        exam_id: ExamId,
        reason: SubmitReason,
        questions: &[ExamQuestion],
        answers: &[Option<usize>],
        started_at: DateTime<Utc>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ResultError> {
        if questions.is_empty() {
            return Err(ResultError::NoQuestions);
        }
        if questions.len() != answers.len() {
            return Err(ResultError::LengthMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }
        if submitted_at < started_at {
            return Err(ResultError::InvalidTimeRange);
        }

        let per_question: Vec<ReviewRow> = questions
            .iter()
            .zip(answers)
            .map(|(question, answer)| ReviewRow {
                question_text: question.text().to_string(),
                options: question.options().to_vec(),
                correct_index: question.correct_index(),
                user_index: *answer,
                was_answered: answer.is_some(),
                explanation: question.explanation().map(str::to_string),
            })
            .collect();

        let correct = per_question.iter().filter(|row| row.is_correct()).count();
        let correct_count = u32::try_from(correct).unwrap_or(u32::MAX);
        let total_count = u32::try_from(per_question.len()).unwrap_or(u32::MAX);
        let percentage = f64::from(correct_count) * 100.0 / f64::from(total_count);

        Ok(Self {
            exam_id,
            reason,
            correct_count,
            total_count,
            percentage,
            passed: percentage >= PASS_THRESHOLD_PERCENT,
            started_at,
            submitted_at,
            per_question,
        })
    }

    #[must_use]
    pub fn exam_id(&self) -> ExamId {
        self.exam_id
    }

    #[must_use]
    pub fn reason(&self) -> SubmitReason {
        self.reason
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.per_question
            .iter()
            .filter(|row| !row.was_answered)
            .count()
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Whole seconds between start and submission.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        let seconds = (self.submitted_at - self.started_at).num_seconds();
        u32::try_from(seconds).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn per_question(&self) -> &[ReviewRow] {
        &self.per_question
    }
}
