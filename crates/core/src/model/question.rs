use thiserror::Error;

use crate::model::ids::QuestionId;

/// Minimum number of answer options a question must offer.
pub const MIN_OPTIONS: usize = 2;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as read from a question source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft and assign its bank position.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank,
    /// `QuestionError::TooFewOptions` if fewer than two options are given, and
    /// `QuestionError::CorrectIndexOutOfRange` if the correct index does not
    /// point at an option.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                len: self.options.len(),
            });
        }
        if self.correct_index >= self.options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len: self.options.len(),
            });
        }

        let explanation = self
            .explanation
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(Question {
            id,
            text: self.text,
            options: self.options,
            correct_index: self.correct_index,
            explanation,
        })
    }
}

/// A multiple-choice question from the bank.
///
/// `correct_index` always points at one of `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── EXAM QUESTION ─────────────────────────────────────────────────────────────
//

/// A question as presented in one exam: options reordered, correct index remapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamQuestion {
    source: QuestionId,
    text: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: Option<String>,
}

/// One option of a source question, tagged with its original position.
///
/// Slots cannot be built or cloned outside this module, so code handed a
/// `&mut [OptionSlot]` can reorder them but never drop or duplicate one.
#[derive(Debug)]
pub struct OptionSlot {
    origin: usize,
    text: String,
}

impl OptionSlot {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ExamQuestion {
    /// Build an exam question whose option order is decided by `arrange`.
    ///
    /// The correct index follows the correct option wherever it lands.
    #[must_use]
    pub fn arranged(question: &Question, arrange: impl FnOnce(&mut [OptionSlot])) -> Self {
        let mut slots: Vec<OptionSlot> = question
            .options
            .iter()
            .enumerate()
            .map(|(origin, text)| OptionSlot {
                origin,
                text: text.clone(),
            })
            .collect();
        arrange(&mut slots);

        let mut correct_index = 0;
        let options = slots
            .into_iter()
            .enumerate()
            .map(|(position, slot)| {
                if slot.origin == question.correct_index {
                    correct_index = position;
                }
                slot.text
            })
            .collect();

        Self {
            source: question.id,
            text: question.text.clone(),
            options,
            correct_index,
            explanation: question.explanation.clone(),
        }
    }

    /// Keep the bank's option order.
    #[must_use]
    pub fn unshuffled(question: &Question) -> Self {
        Self::arranged(question, |_| {})
    }

    #[must_use]
    pub fn source(&self) -> QuestionId {
        self.source
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct answer index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
