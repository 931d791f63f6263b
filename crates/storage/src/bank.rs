use exam_core::model::{Question, QuestionId};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

use crate::http::HttpSource;
use crate::mapping::parse_questions;
use crate::repository::{FileSource, QuestionSource, StorageError};

/// Immutable in-memory store of every available question.
///
/// Cloning is cheap; all clones share the same questions.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        let index = usize::try_from(id.value()).ok()?;
        self.questions.get(index)
    }
}

impl fmt::Debug for QuestionBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionBank")
            .field("len", &self.questions.len())
            .finish_non_exhaustive()
    }
}

/// Fetch and decode a question bank from `source`.
///
/// # Errors
///
/// Returns `StorageError` if the source is unreachable or the document is malformed.
pub async fn load_bank(source: &dyn QuestionSource) -> Result<QuestionBank, StorageError> {
    let description = source.describe();
    tracing::info!(source = %description, "loading question bank");

    let bytes = match source.fetch().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(source = %description, error = %err, "question bank unreachable");
            return Err(err);
        }
    };

    let questions = match parse_questions(&bytes) {
        Ok(questions) => questions,
        Err(err) => {
            tracing::warn!(source = %description, error = %err, "question bank rejected");
            return Err(err);
        }
    };

    tracing::info!(source = %description, count = questions.len(), "question bank loaded");
    Ok(QuestionBank::new(questions))
}

/// A user-supplied bank location: an HTTP(S) URL or a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankLocation {
    Url(Url),
    Path(PathBuf),
}

impl BankLocation {
    /// Interpret `raw` as an `http`/`https` URL when it parses as one, else as a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::Path(PathBuf::from(trimmed)),
        }
    }

    #[must_use]
    pub fn into_source(self) -> Arc<dyn QuestionSource> {
        match self {
            Self::Url(url) => Arc::new(HttpSource::new(url)),
            Self::Path(path) => Arc::new(FileSource::new(path)),
        }
    }
}

impl fmt::Display for BankLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySource;

    #[test]
    fn location_detects_urls() {
        assert!(matches!(
            BankLocation::parse("https://example.com/genai.json"),
            BankLocation::Url(_)
        ));
        assert_eq!(
            BankLocation::parse(" genai.json "),
            BankLocation::Path(PathBuf::from("genai.json"))
        );
        // Windows drive letters parse as URL schemes; they stay paths.
        assert!(matches!(
            BankLocation::parse("C:/banks/genai.json"),
            BankLocation::Path(_)
        ));
    }

    #[tokio::test]
    async fn load_bank_indexes_by_position() {
        let source = InMemorySource::new(
            r#"[
                {"question": "a?", "options": ["x", "y"], "correctAnswer": 0},
                {"question": "b?", "options": ["x", "y"], "correctAnswer": 1}
            ]"#,
        );
        let bank = load_bank(&source).await.unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(QuestionId::new(1)).unwrap().text(), "b?");
        assert!(bank.get(QuestionId::new(2)).is_none());
    }

    #[tokio::test]
    async fn load_bank_propagates_malformed_json() {
        let source = InMemorySource::new("[{");
        let err = load_bank(&source).await.unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
    }

    #[test]
    fn clones_share_questions() {
        let bank = QuestionBank::default();
        assert!(bank.is_empty());
        assert_eq!(bank.clone(), bank);
    }
}
