use exam_core::Clock;
use exam_core::model::{ExamSettings, SubmitReason};
use storage::{QuestionBank, StorageError};

use super::presenter::{ConfirmPrompt, Presenter, QuestionView};
use super::session::{ExamSession, ExamStatus};
use crate::error::ExamError;
use crate::randomizer::Randomizer;
use crate::timer::{Timer, TimerEvent};

/// Where the question bank stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BankStatus {
    #[default]
    Loading,
    Ready(QuestionBank),
    Failed(String),
}

/// Orchestrates one exam attempt at a time: bank, randomizer, session, timer and presenter.
///
/// Every user or timer event enters through a method here and ends with the
/// presenter showing the resulting state.
pub struct ExamController<P> {
    bank: BankStatus,
    randomizer: Randomizer,
    session: ExamSession,
    timer: Timer,
    clock: Clock,
    presenter: P,
}

impl<P> ExamController<P>
where
    P: Presenter + Clone + 'static,
{
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self::with_parts(presenter, Randomizer::new(), Clock::default())
    }

    /// Build with an explicit randomizer and clock, mainly for deterministic tests.
    #[must_use]
    pub fn with_parts(presenter: P, randomizer: Randomizer, clock: Clock) -> Self {
        Self {
            bank: BankStatus::Loading,
            randomizer,
            session: ExamSession::new(),
            timer: Timer::new(),
            clock,
            presenter,
        }
    }

    //
    // ─── BANK ──────────────────────────────────────────────────────────────────
    //

    /// Record the outcome of the asynchronous bank load.
    pub fn bank_loaded(&mut self, outcome: Result<QuestionBank, StorageError>) {
        match outcome {
            Ok(bank) => {
                tracing::info!(questions = bank.len(), "question bank ready");
                self.bank = BankStatus::Ready(bank);
            }
            Err(err) => {
                tracing::warn!(error = %err, "question bank failed to load");
                let err = ExamError::from(&err);
                self.bank = BankStatus::Failed(err.to_string());
                self.presenter.render_error(&err);
            }
        }
    }

    #[must_use]
    pub fn bank_status(&self) -> &BankStatus {
        &self.bank
    }

    /// Number of questions available, zero until the bank is ready.
    #[must_use]
    pub fn bank_size(&self) -> usize {
        match &self.bank {
            BankStatus::Ready(bank) => bank.len(),
            BankStatus::Loading | BankStatus::Failed(_) => 0,
        }
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────────
    //

    /// Draw questions, start the session and the countdown, and show the first question.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::DataNotReady` until a non-empty bank has loaded, and
    /// `ExamError::AlreadyStarted` if an attempt has not been reset.
    pub fn start_exam(&mut self, settings: ExamSettings) -> Result<(), ExamError> {
        if self.session.status() != ExamStatus::Uninitialized {
            return self.reject(ExamError::AlreadyStarted);
        }

        let count = usize::try_from(settings.question_count()).unwrap_or(usize::MAX);
        let drawn = match &self.bank {
            BankStatus::Ready(bank) if !bank.is_empty() => {
                Some(self.randomizer.draw_exam(bank, count))
            }
            BankStatus::Ready(_) | BankStatus::Loading | BankStatus::Failed(_) => None,
        };
        let Some(questions) = drawn else {
            return self.reject(ExamError::DataNotReady);
        };

        let time_limit = settings.time_limit_seconds();
        let exam_id = match self.session.start(questions, time_limit, self.clock.now()) {
            Ok(exam_id) => exam_id,
            Err(err) => return self.reject(err),
        };
        tracing::info!(
            %exam_id,
            questions = self.session.questions().len(),
            time_limit_seconds = time_limit,
            "exam started"
        );

        let mut presenter = self.presenter.clone();
        self.timer.start(
            time_limit,
            move |remaining| presenter.render_timer(remaining),
            move || tracing::info!(%exam_id, "time is up"),
        );
        self.render_current();
        Ok(())
    }

    /// Advance the countdown by one second; submits with `Timeout` when it runs out.
    pub fn on_second(&mut self) {
        match self.timer.elapse() {
            Some(TimerEvent::Tick(remaining)) => self.session.record_tick(remaining),
            Some(TimerEvent::Expired) => {
                self.session.record_tick(0);
                if let Err(err) = self.finish(SubmitReason::Timeout) {
                    tracing::warn!(error = %err, "timed-out exam could not be submitted");
                }
            }
            None => {}
        }
    }

    /// Submit after the user confirmed from the last question.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::SessionClosed` on a second submission.
    pub fn submit(&mut self) -> Result<(), ExamError> {
        self.finish(SubmitReason::UserConfirmed)
    }

    /// Submit before time runs out, leaving blanks marked incorrect.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::SessionClosed` on a second submission.
    pub fn finish_early(&mut self) -> Result<(), ExamError> {
        self.finish(SubmitReason::EarlyFinish)
    }

    /// Stop everything and return to the home screen. Used by restart and exit.
    pub fn reset(&mut self) {
        self.timer.stop();
        if let Some(exam_id) = self.session.exam_id() {
            tracing::debug!(%exam_id, status = ?self.session.status(), "exam discarded");
        }
        self.session.reset();
        self.presenter.render_home();
    }

    #[must_use]
    pub fn early_finish_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::EarlyFinish {
            unanswered: self.session.count_unanswered(),
        }
    }

    #[must_use]
    pub fn exit_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::Exit
    }

    //
    // ─── ANSWERING & NAVIGATION ────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns the session's error if the answer cannot be recorded.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), ExamError> {
        let outcome = self.session.select_option(option_index);
        self.after_navigation(outcome)
    }

    /// # Errors
    ///
    /// Returns `ExamError::SessionClosed` once submitted.
    pub fn next(&mut self) -> Result<(), ExamError> {
        let outcome = self.session.next();
        self.after_navigation(outcome)
    }

    /// # Errors
    ///
    /// Returns `ExamError::SessionClosed` once submitted.
    pub fn previous(&mut self) -> Result<(), ExamError> {
        let outcome = self.session.previous();
        self.after_navigation(outcome)
    }

    /// # Errors
    ///
    /// Returns `ExamError::OutOfRange` for an index past the last question.
    pub fn go_to(&mut self, index: usize) -> Result<(), ExamError> {
        let outcome = self.session.go_to(index);
        self.after_navigation(outcome)
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Snapshot of the current question, if an exam is running.
    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        if self.session.status() != ExamStatus::InProgress {
            return None;
        }
        let question = self.session.current_question()?.clone();
        Some(QuestionView {
            question,
            index: self.session.current_index(),
            total: self.session.questions().len(),
            selected: self.session.current_answer(),
            answered: self.session.answers().iter().map(Option::is_some).collect(),
            progress: self.session.progress(),
        })
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn finish(&mut self, reason: SubmitReason) -> Result<(), ExamError> {
        let submitted = self
            .session
            .submit(reason, self.clock.now())
            .map(|result| {
                tracing::info!(
                    exam_id = %result.exam_id(),
                    reason = reason.label(),
                    correct = result.correct_count(),
                    total = result.total_count(),
                    percentage = result.percentage(),
                    passed = result.passed(),
                    "exam submitted"
                );
            });
        if let Err(err) = submitted {
            return self.reject(err);
        }

        self.timer.stop();
        if let Some(result) = self.session.result() {
            self.presenter.render_results(result);
        }
        Ok(())
    }

    fn after_navigation(&mut self, outcome: Result<(), ExamError>) -> Result<(), ExamError> {
        match outcome {
            Ok(()) => {
                self.render_current();
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    fn render_current(&mut self) {
        if let Some(view) = self.question_view() {
            self.presenter.render_question(&view);
        }
    }

    fn reject<T>(&mut self, err: ExamError) -> Result<T, ExamError> {
        tracing::debug!(error = %err, "exam operation rejected");
        self.presenter.render_error(&err);
        Err(err)
    }
}

impl<P> std::fmt::Debug for ExamController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExamController")
            .field("bank", &self.bank)
            .field("session", &self.session.status())
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
