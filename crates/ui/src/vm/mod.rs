mod home_vm;
mod question_vm;
mod results_vm;
pub mod time_fmt;

pub use home_vm::{BankVm, PresetVm, parse_custom_settings, presets};
pub use question_vm::{ExamIntent, NavItemVm, OptionVm, QuestionVm, option_for_key};
pub use results_vm::{ResultsVm, ReviewItemVm, ReviewOptionKind, ReviewOptionVm};
pub use time_fmt::{format_timer, timer_class};
