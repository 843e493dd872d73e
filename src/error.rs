//! Validation errors raised before an answer set reaches the scorer.
//!
//! Every variant is locally recoverable: the caller re-collects the offending
//! answers and resubmits. Scoring itself is deterministic, so retrying the same
//! input never helps.

use crate::likert::QUESTION_COUNT;

/// Errors that can occur while building or scoring an answer set.
///
/// Each variant carries the question index involved so a form layer can point
/// the respondent at the exact statement that needs attention.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    /// One or more of the 30 questions has no response.
    ///
    /// Resolution: re-prompt for the missing questions. Never guess a value.
    #[error(
        "incomplete answer set: {missing_count} of {total} questions unanswered \
         (first missing: question {first_missing})",
        total = QUESTION_COUNT
    )]
    IncompleteAnswerSet {
        /// Lowest question index without a response.
        first_missing: u8,
        /// Number of questions without a response.
        missing_count: u8,
    },

    /// A response lies outside the Likert range 1–4.
    ///
    /// Values are rejected as given, never clamped into range.
    #[error("invalid response value {value} for question {question}: expected 1-4")]
    InvalidResponseValue {
        /// Question index the value was submitted for.
        question: u8,
        /// The rejected raw value.
        value: i64,
    },

    /// A response arrived as something other than a 64-bit integer (`3.0`, `"3"`, `true`, `2**70`).
    #[error("response for question {question} is not an integer: expected 1-4")]
    NonIntegerResponse {
        /// Question index the value was submitted for.
        question: u8,
    },

    /// A response references a question index outside 1–30.
    #[error("unknown question index {index}: expected 1-{total}", total = QUESTION_COUNT)]
    UnknownQuestion {
        /// The rejected raw index.
        index: i64,
    },

    /// The same question index was supplied more than once.
    #[error("duplicate response for question {question}")]
    DuplicateResponse {
        /// Question index that appeared twice.
        question: u8,
    },
}

impl AssessmentError {
    /// `true` when a submitted response value was rejected.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidResponseValue { .. } | Self::NonIntegerResponse { .. })
    }

    /// `true` when the caller should re-prompt for unanswered questions.
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteAnswerSet { .. })
    }

    /// The valid question index this error points at, if any.
    ///
    /// `UnknownQuestion` returns `None`: its index is not a question.
    pub fn question(&self) -> Option<u8> {
        match self {
            Self::IncompleteAnswerSet { first_missing, .. } => Some(*first_missing),
            Self::InvalidResponseValue { question, .. } => Some(*question),
            Self::NonIntegerResponse { question } => Some(*question),
            Self::DuplicateResponse { question } => Some(*question),
            Self::UnknownQuestion { .. } => None,
        }
    }
}

/// Error returned when a string does not name one of the four social styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised social style name")]
pub struct ParseStyleError;
