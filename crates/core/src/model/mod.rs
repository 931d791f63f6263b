mod ids;
mod question;
mod result;
mod settings;

pub use ids::{ExamId, QuestionId};

pub use question::{
    ExamQuestion, MIN_OPTIONS, OptionSlot, Question, QuestionDraft, QuestionError,
};
pub use result::{ExamResult, PASS_THRESHOLD_PERCENT, ResultError, ReviewRow, SubmitReason};
pub use settings::{ExamSettings, ExamSettingsDraft, ExamSettingsError};
