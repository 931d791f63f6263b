#![forbid(unsafe_code)]

pub mod bank;
pub mod http;
pub mod mapping;
pub mod repository;

pub use bank::{BankLocation, QuestionBank, load_bank};
pub use http::HttpSource;
pub use mapping::{QuestionRecord, parse_questions};
pub use repository::{FileSource, InMemorySource, QuestionSource, StorageError};
