use dioxus::prelude::*;

use services::ExamError;

/// User-facing error text for anything the controller rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotReady,
    LoadFailed(String),
    Rejected(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotReady => "Questions not loaded yet. Please try again.".to_string(),
            Self::LoadFailed(detail) => format!("Failed to load questions. {detail}"),
            Self::Rejected(detail) => detail.clone(),
        }
    }
}

impl From<&ExamError> for ViewError {
    fn from(error: &ExamError) -> Self {
        match error {
            ExamError::DataNotReady => Self::NotReady,
            ExamError::LoadFailure(detail) => Self::LoadFailed(detail.clone()),
            other => Self::Rejected(capitalize(&other.to_string())),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn ErrorBanner(error: ViewError, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert",
            span { class: "error-text", "{error.message()}" }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ViewError::from(&ExamError::DataNotReady).message(),
            "Questions not loaded yet. Please try again."
        );
        assert_eq!(
            ViewError::from(&ExamError::SessionClosed).message(),
            "Exam already submitted"
        );
        assert!(
            ViewError::from(&ExamError::LoadFailure("file genai.json missing".into()))
                .message()
                .starts_with("Failed to load questions.")
        );
    }
}
