use std::sync::Arc;

use exam_core::model::ExamSettings;
use storage::QuestionSource;

pub trait UiApp: Send + Sync {
    fn bank_source(&self) -> Arc<dyn QuestionSource>;
    fn default_settings(&self) -> ExamSettings;
}

#[derive(Clone)]
pub struct AppContext {
    bank_source: Arc<dyn QuestionSource>,
    default_settings: ExamSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank_source: app.bank_source(),
            default_settings: app.default_settings(),
        }
    }

    #[must_use]
    pub fn bank_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.bank_source)
    }

    /// Settings pre-filled in the custom exam form.
    #[must_use]
    pub fn default_settings(&self) -> ExamSettings {
        self.default_settings
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
