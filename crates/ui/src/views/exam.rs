use dioxus::prelude::*;

use services::ConfirmPrompt;

use crate::vm::{ExamIntent, QuestionVm, format_timer, option_for_key, timer_class};

fn prompt_title(prompt: ConfirmPrompt) -> &'static str {
    match prompt {
        ConfirmPrompt::EarlyFinish { .. } => "Finish test?",
        ConfirmPrompt::Exit => "Exit to home?",
    }
}

fn prompt_confirm_label(prompt: ConfirmPrompt) -> &'static str {
    match prompt {
        ConfirmPrompt::EarlyFinish { .. } => "Finish Test",
        ConfirmPrompt::Exit => "Exit",
    }
}

#[component]
pub fn ExamView(
    vm: QuestionVm,
    remaining: u32,
    #[props(!optional)] prompt: Option<ConfirmPrompt>,
    on_intent: EventHandler<ExamIntent>,
) -> Element {
    let option_count = vm.options.len();

    rsx! {
        div {
            class: "page exam-page",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!(error = ?err, "exam page could not take keyboard focus");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if prompt.is_some() {
                    if evt.key() == Key::Escape {
                        on_intent.call(ExamIntent::Cancel);
                    }
                    return;
                }
                match evt.key() {
                    Key::ArrowLeft => on_intent.call(ExamIntent::Previous),
                    Key::ArrowRight => on_intent.call(ExamIntent::Next),
                    Key::Character(text) => {
                        if let Some(index) = option_for_key(&text, option_count) {
                            on_intent.call(ExamIntent::Select(index));
                        }
                    }
                    _ => {}
                }
            },

            header { class: "exam-header",
                span { class: "question-counter", "{vm.counter_label()}" }
                div { class: timer_class(remaining),
                    "Time: "
                    span { class: "time-display", "{format_timer(remaining)}" }
                }
                div { class: "exam-header-actions",
                    button {
                        class: "btn btn-warning",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ExamIntent::RequestFinish),
                        "Finish Test"
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ExamIntent::RequestExit),
                        "Exit"
                    }
                }
            }

            nav { class: "question-nav",
                for item in vm.navigator.iter() {
                    button {
                        key: "{item.index}",
                        class: item.class(),
                        r#type: "button",
                        onclick: {
                            let index = item.index;
                            move |_| on_intent.call(ExamIntent::GoTo(index))
                        },
                        "{item.number}"
                    }
                }
            }
            p { class: "answered-count", "{vm.answered_label}" }

            div { class: "question-card",
                h2 { class: "question-text", "{vm.text}" }
                div { class: "options",
                    for option in vm.options.iter() {
                        div {
                            key: "{option.index}",
                            class: option.class(),
                            onclick: {
                                let index = option.index;
                                move |_| on_intent.call(ExamIntent::Select(index))
                            },
                            "{option.text}"
                        }
                    }
                }
            }

            div { class: "exam-controls",
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: vm.is_first,
                    onclick: move |_| on_intent.call(ExamIntent::Previous),
                    "Previous"
                }
                if vm.is_last {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ExamIntent::Submit),
                        "Submit Exam"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ExamIntent::Next),
                        "Next"
                    }
                }
            }

            if let Some(prompt) = prompt {
                div {
                    class: "modal-overlay",
                    onclick: move |_| on_intent.call(ExamIntent::Cancel),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "{prompt_title(prompt)}" }
                        p { class: "modal-body", "{prompt.message()}" }
                        div { class: "modal-actions",
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| on_intent.call(ExamIntent::Cancel),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: move |_| on_intent.call(ExamIntent::Confirm),
                                "{prompt_confirm_label(prompt)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
