use exam_core::model::{ExamSettings, ExamSettingsDraft, ExamSettingsError};
use services::BankStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BankVm {
    Loading,
    Ready { questions: usize },
    Failed(String),
}

impl BankVm {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { questions } if *questions > 0)
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Loading => "Loading questions...".to_string(),
            Self::Ready { questions: 0 } => "The question bank is empty.".to_string(),
            Self::Ready { questions: 1 } => "1 question available.".to_string(),
            Self::Ready { questions } => format!("{questions} questions available."),
            Self::Failed(message) => message.clone(),
        }
    }
}

impl From<&BankStatus> for BankVm {
    fn from(status: &BankStatus) -> Self {
        match status {
            BankStatus::Loading => Self::Loading,
            BankStatus::Ready(bank) => Self::Ready {
                questions: bank.len(),
            },
            BankStatus::Failed(message) => Self::Failed(message.clone()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetVm {
    pub settings: ExamSettings,
}

impl PresetVm {
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Questions", self.settings.question_count())
    }

    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} minutes", self.settings.time_limit_minutes())
    }
}

#[must_use]
pub fn presets() -> Vec<PresetVm> {
    ExamSettings::presets()
        .iter()
        .map(|settings| PresetVm {
            settings: *settings,
        })
        .collect()
}

/// Parse the custom-exam form fields.
///
/// # Errors
///
/// Returns a user-facing message when either field is not a positive number.
pub fn parse_custom_settings(questions: &str, minutes: &str) -> Result<ExamSettings, String> {
    let question_count = questions
        .trim()
        .parse::<u32>()
        .map_err(|_| "Number of questions must be a whole number.".to_string())?;
    let time_limit_minutes = minutes
        .trim()
        .parse::<u32>()
        .map_err(|_| "Time limit must be a whole number of minutes.".to_string())?;

    ExamSettingsDraft::new(question_count, time_limit_minutes)
        .validate()
        .map_err(|err| match err {
            ExamSettingsError::ZeroQuestions => "Choose at least one question.".to_string(),
            ExamSettingsError::ZeroTimeLimit => "Choose at least one minute.".to_string(),
            other => other.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_welcome_screen() {
        let labels: Vec<_> = presets()
            .iter()
            .map(|preset| (preset.title(), preset.subtitle()))
            .collect();
        assert_eq!(labels[0], ("10 Questions".to_string(), "15 minutes".to_string()));
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn custom_settings_validate_input() {
        let settings = parse_custom_settings(" 25 ", "40").unwrap();
        assert_eq!(settings.question_count(), 25);
        assert_eq!(settings.time_limit_seconds(), 2400);

        assert!(parse_custom_settings("ten", "40").is_err());
        assert_eq!(
            parse_custom_settings("5", "0").unwrap_err(),
            "Choose at least one minute."
        );
    }

    #[test]
    fn bank_label_reflects_status() {
        assert_eq!(BankVm::Loading.label(), "Loading questions...");
        assert!(!BankVm::Ready { questions: 0 }.is_ready());
        assert_eq!(BankVm::Ready { questions: 12 }.label(), "12 questions available.");
    }
}
