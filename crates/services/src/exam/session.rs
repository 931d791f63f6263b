use chrono::{DateTime, Utc};

use exam_core::model::{ExamId, ExamQuestion, ExamResult, SubmitReason};

use super::progress::ExamProgress;
use crate::error::ExamError;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExamStatus {
    #[default]
    Uninitialized,
    InProgress,
    Submitted,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of a single exam attempt.
///
/// Every mutating operation either succeeds or returns an error without
/// touching any field.
#[derive(Debug, Clone, Default)]
pub struct ExamSession {
    status: ExamStatus,
    exam_id: Option<ExamId>,
    questions: Vec<ExamQuestion>,
    answers: Vec<Option<usize>>,
    current: usize,
    seconds_remaining: u32,
    started_at: Option<DateTime<Utc>>,
    result: Option<ExamResult>,
}

impl ExamSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an attempt over `questions` with a countdown of `time_limit_seconds`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::AlreadyStarted` unless the session is uninitialized, and
    /// `ExamError::InvalidConfiguration` for an empty question list or a zero limit.
    pub fn start(
        &mut self,
        questions: Vec<ExamQuestion>,
        time_limit_seconds: u32,
        started_at: DateTime<Utc>,
    ) -> Result<ExamId, ExamError> {
        if self.status != ExamStatus::Uninitialized {
            return Err(ExamError::AlreadyStarted);
        }
        if questions.is_empty() {
            return Err(ExamError::InvalidConfiguration(
                "an exam needs at least one question".into(),
            ));
        }
        if time_limit_seconds == 0 {
            return Err(ExamError::InvalidConfiguration(
                "time limit must be greater than zero".into(),
            ));
        }

        let exam_id = ExamId::generate();
        self.answers = vec![None; questions.len()];
        self.questions = questions;
        self.current = 0;
        self.seconds_remaining = time_limit_seconds;
        self.started_at = Some(started_at);
        self.exam_id = Some(exam_id);
        self.result = None;
        self.status = ExamStatus::InProgress;
        Ok(exam_id)
    }

    /// Record `option_index` as the answer to the current question, replacing any earlier pick.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::InvalidOption` if the index is past the last option,
    /// or a status error when no exam is running.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), ExamError> {
        self.ensure_in_progress()?;
        let options = self.questions[self.current].options().len();
        if option_index >= options {
            return Err(ExamError::InvalidOption {
                index: option_index,
                options,
            });
        }
        self.answers[self.current] = Some(option_index);
        Ok(())
    }

    /// Jump to question `index`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::OutOfRange` if there is no such question.
    pub fn go_to(&mut self, index: usize) -> Result<(), ExamError> {
        self.ensure_in_progress()?;
        if index >= self.questions.len() {
            return Err(ExamError::OutOfRange {
                index,
                total: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Step back one question; a no-op on the first.
    ///
    /// # Errors
    ///
    /// Returns a status error when no exam is running.
    pub fn previous(&mut self) -> Result<(), ExamError> {
        self.ensure_in_progress()?;
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// Step forward one question; a no-op on the last.
    ///
    /// # Errors
    ///
    /// Returns a status error when no exam is running.
    pub fn next(&mut self) -> Result<(), ExamError> {
        self.ensure_in_progress()?;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
        Ok(())
    }

    /// Mirror the countdown. Ignored outside an active exam.
    pub fn record_tick(&mut self, remaining: u32) {
        if self.status == ExamStatus::InProgress {
            self.seconds_remaining = remaining;
        }
    }

    /// Score the attempt and close it.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::SessionClosed` if already submitted (the stored result is
    /// kept), `ExamError::NotStarted` before `start`.
    pub fn submit(
        &mut self,
        reason: SubmitReason,
        submitted_at: DateTime<Utc>,
    ) -> Result<&ExamResult, ExamError> {
        self.ensure_in_progress()?;
        let (Some(exam_id), Some(started_at)) = (self.exam_id, self.started_at) else {
            return Err(ExamError::NotStarted);
        };
        // A clock that went backwards still yields a zero-length attempt.
        let submitted_at = submitted_at.max(started_at);

        let result = ExamResult::score(
            exam_id,
            reason,
            &self.questions,
            &self.answers,
            started_at,
            submitted_at,
        )?;
        self.status = ExamStatus::Submitted;
        Ok(self.result.insert(result))
    }

    /// Return to `Uninitialized`, discarding the attempt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn status(&self) -> ExamStatus {
        self.status
    }

    #[must_use]
    pub fn exam_id(&self) -> Option<ExamId> {
        self.exam_id
    }

    #[must_use]
    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&ExamQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn result(&self) -> Option<&ExamResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn count_unanswered(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_none()).count()
    }

    #[must_use]
    pub fn progress(&self) -> ExamProgress {
        let unanswered = self.count_unanswered();
        ExamProgress {
            total: self.questions.len(),
            answered: self.answers.len() - unanswered,
            unanswered,
            current: self.current,
        }
    }

    fn ensure_in_progress(&self) -> Result<(), ExamError> {
        match self.status {
            ExamStatus::InProgress => Ok(()),
            ExamStatus::Submitted => Err(ExamError::SessionClosed),
            ExamStatus::Uninitialized => Err(ExamError::NotStarted),
        }
    }
}
