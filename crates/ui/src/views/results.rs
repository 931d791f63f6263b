use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsView(vm: ResultsVm, on_restart: EventHandler<()>) -> Element {
    let status_class = if vm.passed { "pass" } else { "fail" };

    rsx! {
        div { class: "page results-page",
            h2 { "Exam Results" }
            if let Some(notice) = vm.notice {
                p { class: "results-notice", "{notice}" }
            }
            div { class: "score-display", "{vm.score_label}" }
            p { class: "score-detail",
                "You answered {vm.correct} out of {vm.total} questions correctly."
            }
            p { class: status_class, "{vm.status_label}" }
            p { class: "elapsed", "{vm.elapsed_label}" }

            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Take Another Exam"
            }

            h3 { "Review" }
            div { class: "review-list",
                for item in vm.review.iter() {
                    div { class: "review-question",
                        h4 { class: item.title_class(), "{item.title}" }
                        for option in item.options.iter() {
                            div { class: option.kind.class(), "{option.text}" }
                        }
                        if let Some(explanation) = item.explanation.as_deref() {
                            div { class: "explanation",
                                strong { "Explanation: " }
                                "{explanation}"
                            }
                        }
                    }
                }
            }
        }
    }
}
