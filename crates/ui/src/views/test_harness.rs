use std::sync::Arc;

use dioxus::prelude::*;
use exam_core::model::{ExamSettings, ExamSettingsDraft, Question, QuestionDraft, QuestionId};
use exam_core::time::fixed_clock;
use services::{ConfirmPrompt, ExamController, Randomizer};
use storage::{InMemorySource, QuestionBank, QuestionSource};

use crate::context::{UiApp, build_app_context};
use crate::presenter::{SharedController, use_ui_presenter};
use crate::views::{ExamShell, ExamView, ResultsView};
use crate::vm::{QuestionVm, ResultsVm};

struct TestApp;

impl UiApp for TestApp {
    fn bank_source(&self) -> Arc<dyn QuestionSource> {
        Arc::new(InMemorySource::new("[]"))
    }

    fn default_settings(&self) -> ExamSettings {
        ExamSettings::default()
    }
}

pub fn sample_questions(count: u32) -> Vec<Question> {
    (0..count)
        .map(|id| {
            QuestionDraft {
                text: format!("Sample question {id}"),
                options: vec!["first".into(), "second".into(), "third".into()],
                correct_index: 1,
                explanation: Some(format!("Explanation {id}")),
            }
            .validate(QuestionId::new(id))
            .unwrap()
        })
        .collect()
}

pub fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
pub fn ResultsHarness(vm: ResultsVm) -> Element {
    rsx! { ResultsView { vm, on_restart: move |_| {} } }
}

#[component]
pub fn ExamHarness(
    vm: QuestionVm,
    remaining: u32,
    #[props(!optional)] prompt: Option<ConfirmPrompt>,
) -> Element {
    rsx! { ExamView { vm, remaining, prompt, on_intent: move |_| {} } }
}

/// Full shell with a loaded bank; optionally starts an exam before the first render.
#[component]
pub fn ShellHarness(bank_size: u32, #[props(!optional)] start: Option<(u32, u32)>) -> Element {
    let presenter = use_ui_presenter();
    let mut controller: SharedController = use_signal(|| {
        let mut controller =
            ExamController::with_parts(presenter, Randomizer::with_seed(5), fixed_clock());
        controller.bank_loaded(Ok(QuestionBank::new(sample_questions(bank_size))));
        controller
    });
    use_context_provider(|| presenter);
    use_context_provider(|| controller);
    use_context_provider(|| {
        let app: Arc<dyn UiApp> = Arc::new(TestApp);
        build_app_context(&app)
    });
    use_hook(move || {
        if let Some((questions, minutes)) = start {
            if let Ok(settings) = ExamSettingsDraft::new(questions, minutes).validate() {
                controller
                    .write()
                    .start_exam(settings)
                    .expect("harness exam should start");
            }
        }
    });

    rsx! { ExamShell {} }
}
