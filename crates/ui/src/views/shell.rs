use dioxus::prelude::*;

use services::{ConfirmPrompt, ExamError};

use crate::context::AppContext;
use crate::presenter::{Screen, SharedController, UiPresenter};
use crate::views::{ErrorBanner, ExamView, HomeView, ResultsView};
use crate::vm::{BankVm, ExamIntent};

/// Switches between the home, exam and results pages and routes their intents
/// into the shared controller.
#[component]
pub fn ExamShell() -> Element {
    let ctx = use_context::<AppContext>();
    let mut presenter = use_context::<UiPresenter>();
    let mut controller = use_context::<SharedController>();
    let mut prompt = use_signal(|| None::<ConfirmPrompt>);

    let dispatch = use_callback(move |intent: ExamIntent| {
        let outcome: Result<(), ExamError> = match intent {
            ExamIntent::Select(index) => controller.write().select_option(index),
            ExamIntent::Previous => controller.write().previous(),
            ExamIntent::Next => controller.write().next(),
            ExamIntent::GoTo(index) => controller.write().go_to(index),
            ExamIntent::Submit => controller.write().submit(),
            ExamIntent::RequestFinish => {
                prompt.set(Some(controller.read().early_finish_prompt()));
                Ok(())
            }
            ExamIntent::RequestExit => {
                prompt.set(Some(controller.read().exit_prompt()));
                Ok(())
            }
            ExamIntent::Confirm => {
                let pending = prompt();
                prompt.set(None);
                match pending {
                    Some(ConfirmPrompt::EarlyFinish { .. }) => controller.write().finish_early(),
                    Some(ConfirmPrompt::Exit) => {
                        controller.write().reset();
                        Ok(())
                    }
                    None => Ok(()),
                }
            }
            ExamIntent::Cancel => {
                prompt.set(None);
                Ok(())
            }
        };
        if let Err(err) = outcome {
            tracing::debug!(?intent, error = %err, "exam intent rejected");
        }
    });

    let bank = BankVm::from(controller.read().bank_status());
    let screen = presenter.screen().read().clone();
    let error = presenter.error().read().clone();

    rsx! {
        if let Some(error) = error {
            ErrorBanner { error, on_dismiss: move |_| presenter.dismiss_error() }
        }
        match screen {
            Screen::Home => rsx! {
                HomeView {
                    bank,
                    defaults: ctx.default_settings(),
                    on_start: move |settings| {
                        prompt.set(None);
                        if let Err(err) = controller.write().start_exam(settings) {
                            tracing::debug!(error = %err, "exam start rejected");
                        }
                    },
                }
            },
            Screen::Exam(vm) => rsx! {
                ExamView {
                    vm,
                    remaining: presenter.remaining()(),
                    prompt: prompt(),
                    on_intent: dispatch,
                }
            },
            Screen::Results(vm) => rsx! {
                ResultsView {
                    vm,
                    on_restart: move |_| {
                        prompt.set(None);
                        controller.write().reset();
                    },
                }
            },
        }
    }
}
