use exam_core::model::{Question, QuestionDraft, QuestionId};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// On-disk shape of one bank entry.
///
/// Mirrors the JSON document (`question`, `options`, `correctAnswer`,
/// optional `explanation`) so the domain `Question` stays format-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            question: question.text().to_owned(),
            options: question.options().to_vec(),
            correct_answer: question.correct_index(),
            explanation: question.explanation().map(str::to_owned),
        }
    }

    /// Validate the record into a domain `Question` at bank position `index`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidQuestion` if the record violates a question invariant.
    pub fn into_question(self, index: usize) -> Result<Question, StorageError> {
        let id = u32::try_from(index).map_err(|_| StorageError::TooManyQuestions { len: index })?;
        QuestionDraft {
            text: self.question,
            options: self.options,
            correct_index: self.correct_answer,
            explanation: self.explanation,
        }
        .validate(QuestionId::new(id))
        .map_err(|source| StorageError::InvalidQuestion { index, source })
    }
}

/// Parse a JSON question-bank document into validated questions, in document order.
///
/// # Errors
///
/// Returns `StorageError::Malformed` if the bytes are not a JSON array of records,
/// or `StorageError::InvalidQuestion` for the first record that fails validation.
pub fn parse_questions(bytes: &[u8]) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> = serde_json::from_slice(bytes)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_question(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::QuestionError;

    #[test]
    fn parses_records_in_document_order() {
        let json = br#"[
            {"question": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1},
            {"question": "Capital of France?", "options": ["Paris", "Rome", "Oslo"],
             "correctAnswer": 0, "explanation": "Paris is the capital."}
        ]"#;

        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id(), QuestionId::new(0));
        assert_eq!(questions[0].correct_option(), "4");
        assert_eq!(questions[0].explanation(), None);
        assert_eq!(questions[1].id(), QuestionId::new(1));
        assert_eq!(questions[1].explanation(), Some("Paris is the capital."));
    }

    #[test]
    fn out_of_range_answer_reports_index() {
        let json = br#"[
            {"question": "ok", "options": ["a", "b"], "correctAnswer": 0},
            {"question": "bad", "options": ["a", "b"], "correctAnswer": 2}
        ]"#;

        let err = parse_questions(json).unwrap_err();
        match err {
            StorageError::InvalidQuestion { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(
                    source,
                    QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_answer_is_malformed() {
        let json = br#"[{"question": "q", "options": ["a", "b"], "correctAnswer": -1}]"#;
        assert!(matches!(
            parse_questions(json).unwrap_err(),
            StorageError::Malformed(_)
        ));
    }

    #[test]
    fn non_array_document_is_malformed() {
        assert!(matches!(
            parse_questions(b"{\"question\": \"q\"}").unwrap_err(),
            StorageError::Malformed(_)
        ));
        assert!(matches!(
            parse_questions(b"not json").unwrap_err(),
            StorageError::Malformed(_)
        ));
    }

    #[test]
    fn record_round_trips_through_question() {
        let record = QuestionRecord {
            question: "q".into(),
            options: vec!["a".into(), "b".into()],
            correct_answer: 1,
            explanation: Some("because".into()),
        };
        let question = record.clone().into_question(0).unwrap();
        assert_eq!(QuestionRecord::from_question(&question), record);
    }

    #[test]
    fn empty_array_parses_to_no_questions() {
        assert!(parse_questions(b"[]").unwrap().is_empty());
    }
}
