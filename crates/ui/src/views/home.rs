use dioxus::prelude::*;

use exam_core::model::ExamSettings;

use crate::vm::{BankVm, parse_custom_settings, presets};

#[component]
pub fn HomeView(bank: BankVm, defaults: ExamSettings, on_start: EventHandler<ExamSettings>) -> Element {
    let mut questions = use_signal(|| defaults.question_count().to_string());
    let mut minutes = use_signal(|| defaults.time_limit_minutes().to_string());
    let mut form_error = use_signal(|| None::<String>);
    let ready = bank.is_ready();
    let bank_class = match bank {
        BankVm::Failed(_) => "bank-status bank-failed",
        BankVm::Loading | BankVm::Ready { .. } => "bank-status",
    };

    rsx! {
        div { class: "page welcome-page",
            h1 { "Exam Simulator" }
            p { class: "welcome-text",
                "Choose an exam length. Questions and answer options are shuffled every attempt; "
                "you need 70% to pass."
            }
            p { class: bank_class, "{bank.label()}" }

            div { class: "preset-grid",
                for preset in presets() {
                    button {
                        class: "preset-card",
                        r#type: "button",
                        disabled: !ready,
                        onclick: move |_| on_start.call(preset.settings),
                        span { class: "preset-title", "{preset.title()}" }
                        span { class: "preset-subtitle", "{preset.subtitle()}" }
                    }
                }
            }

            form {
                class: "custom-exam",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    match parse_custom_settings(&questions.read(), &minutes.read()) {
                        Ok(settings) => {
                            form_error.set(None);
                            on_start.call(settings);
                        }
                        Err(message) => form_error.set(Some(message)),
                    }
                },
                h3 { "Custom exam" }
                label { r#for: "custom-questions", "Questions" }
                input {
                    id: "custom-questions",
                    r#type: "number",
                    min: "1",
                    value: "{questions}",
                    oninput: move |evt| questions.set(evt.value()),
                }
                label { r#for: "custom-minutes", "Minutes" }
                input {
                    id: "custom-minutes",
                    r#type: "number",
                    min: "1",
                    value: "{minutes}",
                    oninput: move |evt| minutes.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: !ready, "Start" }
                if let Some(message) = form_error() {
                    p { class: "form-error", "{message}" }
                }
            }
        }
    }
}
