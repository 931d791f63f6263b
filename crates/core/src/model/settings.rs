use serde::{Deserialize, Serialize};
use thiserror::Error;

const SECONDS_PER_MINUTE: u32 = 60;

/// Caller-chosen shape of an exam: how many questions, how long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSettings {
    question_count: u32,
    time_limit_minutes: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExamSettingsDraft {
    pub question_count: u32,
    pub time_limit_minutes: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamSettingsError {
    #[error("question count must be > 0")]
    ZeroQuestions,

    #[error("time limit must be > 0 minutes")]
    ZeroTimeLimit,

    #[error("time limit of {minutes} minutes is too long")]
    TimeLimitTooLong { minutes: u32 },
}

impl ExamSettingsDraft {
    #[must_use]
    pub fn new(question_count: u32, time_limit_minutes: u32) -> Self {
        Self {
            question_count,
            time_limit_minutes,
        }
    }

    /// Validate the draft into usable settings.
    ///
    /// # Errors
    ///
    /// Returns `ExamSettingsError` if either value is zero or the time limit
    /// does not fit in seconds.
    pub fn validate(self) -> Result<ExamSettings, ExamSettingsError> {
        if self.question_count == 0 {
            return Err(ExamSettingsError::ZeroQuestions);
        }
        if self.time_limit_minutes == 0 {
            return Err(ExamSettingsError::ZeroTimeLimit);
        }
        if self
            .time_limit_minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .is_none()
        {
            return Err(ExamSettingsError::TimeLimitTooLong {
                minutes: self.time_limit_minutes,
            });
        }

        Ok(ExamSettings {
            question_count: self.question_count,
            time_limit_minutes: self.time_limit_minutes,
        })
    }
}

impl ExamSettings {
    /// Quick-start choices offered on the welcome screen.
    pub const PRESETS: [ExamSettings; 3] = [
        ExamSettings {
            question_count: 10,
            time_limit_minutes: 15,
        },
        ExamSettings {
            question_count: 20,
            time_limit_minutes: 30,
        },
        ExamSettings {
            question_count: 40,
            time_limit_minutes: 60,
        },
    ];

    #[must_use]
    pub fn presets() -> &'static [ExamSettings] {
        &Self::PRESETS
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_minutes.saturating_mul(SECONDS_PER_MINUTE)
    }
}

impl Default for ExamSettings {
    fn default() -> Self {
        Self::PRESETS[1]
    }
}
