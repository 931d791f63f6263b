use async_trait::async_trait;
use exam_core::model::{Question, QuestionError};
use std::path::PathBuf;
use thiserror::Error;

use crate::mapping::QuestionRecord;

/// Errors surfaced while fetching or decoding a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("question source responded with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("malformed question bank: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question bank has too many entries ({len})")]
    TooManyQuestions { len: usize },
}

/// Where the raw question-bank document comes from.
///
/// Implementations only fetch bytes; decoding and validation happen in
/// [`crate::load_bank`] so every source shares the same format rules.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the raw JSON document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be reached.
    async fn fetch(&self) -> Result<Vec<u8>, StorageError>;

    /// Human-readable description used in logs and error messages.
    fn describe(&self) -> String;
}

/// Reads the bank from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, StorageError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Serves a bank held in memory, for tests and embedded samples.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    document: String,
}

impl InMemorySource {
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Serialize already-validated questions into the bank document format.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` if serialization fails.
    pub fn from_questions(questions: &[Question]) -> Result<Self, StorageError> {
        let records: Vec<QuestionRecord> =
            questions.iter().map(QuestionRecord::from_question).collect();
        Ok(Self::new(serde_json::to_string(&records)?))
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<u8>, StorageError> {
        Ok(self.document.clone().into_bytes())
    }

    fn describe(&self) -> String {
        format!("in-memory document ({} bytes)", self.document.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileSource>();
        assert_send_sync::<InMemorySource>();
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let source = FileSource::new("/definitely/not/here.json");
        let err = source.fetch().await.unwrap_err();
        match err {
            StorageError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
