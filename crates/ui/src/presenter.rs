use dioxus::prelude::*;

use exam_core::model::ExamResult;
use services::{ExamController, ExamError, Presenter, QuestionView};

use crate::views::ViewError;
use crate::vm::{QuestionVm, ResultsVm};

pub type SharedController = Signal<ExamController<UiPresenter>>;

/// Which page the window shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Home,
    Exam(QuestionVm),
    Results(ResultsVm),
}

/// Presenter that publishes controller output into Dioxus signals.
#[derive(Clone, Copy, PartialEq)]
pub struct UiPresenter {
    screen: Signal<Screen>,
    remaining: Signal<u32>,
    error: Signal<Option<ViewError>>,
}

impl UiPresenter {
    #[must_use]
    pub fn screen(&self) -> Signal<Screen> {
        self.screen
    }

    #[must_use]
    pub fn remaining(&self) -> Signal<u32> {
        self.remaining
    }

    #[must_use]
    pub fn error(&self) -> Signal<Option<ViewError>> {
        self.error
    }

    pub fn dismiss_error(&mut self) {
        self.error.set(None);
    }
}

/// Create the presenter's signals in the calling component.
pub fn use_ui_presenter() -> UiPresenter {
    UiPresenter {
        screen: use_signal(|| Screen::Home),
        remaining: use_signal(|| 0),
        error: use_signal(|| None),
    }
}

impl Presenter for UiPresenter {
    fn render_home(&mut self) {
        self.error.set(None);
        self.remaining.set(0);
        self.screen.set(Screen::Home);
    }

    fn render_question(&mut self, view: &QuestionView) {
        self.error.set(None);
        self.screen.set(Screen::Exam(QuestionVm::from(view)));
    }

    fn render_results(&mut self, result: &ExamResult) {
        self.error.set(None);
        self.screen.set(Screen::Results(ResultsVm::from(result)));
    }

    fn render_timer(&mut self, remaining_seconds: u32) {
        self.remaining.set(remaining_seconds);
    }

    fn render_error(&mut self, error: &ExamError) {
        tracing::warn!(error = %error, "showing error to user");
        self.error.set(Some(ViewError::from(error)));
    }
}
