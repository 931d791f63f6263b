#![forbid(unsafe_code)]

pub mod error;
pub mod exam;
pub mod randomizer;
pub mod timer;

pub use exam_core::Clock;

pub use error::ExamError;
pub use exam::{
    BankStatus, ConfirmPrompt, ExamController, ExamProgress, ExamSession, ExamStatus, Presenter,
    QuestionView,
};
pub use randomizer::Randomizer;
pub use timer::{StopHandle, Timer, TimerEvent};
