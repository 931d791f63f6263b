pub mod presenter;
pub mod progress;
pub mod session;
pub mod workflow;

pub use presenter::{ConfirmPrompt, Presenter, QuestionView};
pub use progress::ExamProgress;
pub use session::{ExamSession, ExamStatus};
pub use workflow::{BankStatus, ExamController};
