//! Likert responses, question indices and the two scoring axes.
//!
//! The assessment is a fixed 30-statement questionnaire. Statements 1–15 measure
//! assertiveness, statements 16–30 measure responsiveness, and every statement is
//! answered on a four-point agreement scale.
//!
//! ```rust
//! use social_styles_core::likert::{Axis, Likert, QuestionId};
//!
//! let q = QuestionId::new(16).unwrap();
//! assert_eq!(q.axis(), Axis::Responsiveness);
//! assert_eq!(Likert::new(3), Some(Likert::SomewhatAgree));
//! assert_eq!(Likert::new(5), None);
//! ```

use core::fmt;
use core::ops::RangeInclusive;

use crate::error::AssessmentError;

/// Total number of statements in the assessment.
pub const QUESTION_COUNT: usize = 30;

/// Number of statements feeding each axis.
pub const AXIS_QUESTION_COUNT: usize = 15;

// ─── Axis ───────────────────────────────────────────────────────────────────

/// One of the two independent 15-statement sub-scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Tell-versus-ask: how strongly the respondent tries to influence others.
    Assertiveness,
    /// Emote-versus-control: how openly the respondent shows feelings.
    Responsiveness,
}

impl Axis {
    /// Both axes, in scoring order.
    pub const ALL: [Axis; 2] = [Axis::Assertiveness, Axis::Responsiveness];

    /// Inclusive range of question indices belonging to this axis.
    pub const fn index_range(self) -> RangeInclusive<u8> {
        match self {
            Axis::Assertiveness => 1..=15,
            Axis::Responsiveness => 16..=30,
        }
    }

    /// Iterate the question ids belonging to this axis, in order.
    pub fn questions(self) -> impl Iterator<Item = QuestionId> {
        self.index_range().map(QuestionId)
    }

    /// Lowercase axis name as used in the question bank.
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Assertiveness => "assertiveness",
            Axis::Responsiveness => "responsiveness",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── QuestionId ─────────────────────────────────────────────────────────────

/// A validated question index in 1–30.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuestionId(u8);

impl QuestionId {
    /// Validate a raw question index.
    ///
    /// Returns [`AssessmentError::UnknownQuestion`] for anything outside 1–30.
    pub fn new(index: u32) -> Result<Self, AssessmentError> {
        Self::from_raw(i64::from(index))
    }

    /// Validate an index from an untyped source, which may be negative or huge.
    pub fn from_raw(index: i64) -> Result<Self, AssessmentError> {
        if (1..=QUESTION_COUNT as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(AssessmentError::UnknownQuestion { index })
        }
    }

    /// All 30 question ids in order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }

    /// The 1-based index.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Axis this question feeds.
    pub const fn axis(self) -> Axis {
        if self.0 <= AXIS_QUESTION_COUNT as u8 {
            Axis::Assertiveness
        } else {
            Axis::Responsiveness
        }
    }

    /// Zero-based slot in a 30-element answer array.
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize - 1
    }

    pub(crate) const fn from_slot(slot: usize) -> Self {
        Self(slot as u8 + 1)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

// ─── Likert ─────────────────────────────────────────────────────────────────

/// A four-point agreement response.
///
/// There is deliberately no neutral midpoint: every answer leans one way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Likert {
    /// 1: Strongly Disagree.
    StronglyDisagree = 1,
    /// 2: Somewhat Disagree.
    SomewhatDisagree = 2,
    /// 3: Somewhat Agree.
    SomewhatAgree = 3,
    /// 4: Strongly Agree.
    StronglyAgree = 4,
}

impl Likert {
    /// The four scale points in ascending order.
    pub const ALL: [Likert; 4] = [
        Likert::StronglyDisagree,
        Likert::SomewhatDisagree,
        Likert::SomewhatAgree,
        Likert::StronglyAgree,
    ];

    /// Lowest scale value.
    pub const MIN: u8 = 1;
    /// Highest scale value.
    pub const MAX: u8 = 4;

    /// Map a raw integer to a scale point. `None` outside 1–4.
    pub const fn new(value: i32) -> Option<Self> {
        Self::from_raw(value as i64)
    }

    /// Map a raw 64-bit integer to a scale point. `None` outside 1–4.
    pub const fn from_raw(value: i64) -> Option<Self> {
        match value {
            1 => Some(Likert::StronglyDisagree),
            2 => Some(Likert::SomewhatDisagree),
            3 => Some(Likert::SomewhatAgree),
            4 => Some(Likert::StronglyAgree),
            _ => None,
        }
    }

    /// Numeric value, 1–4.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable label shown next to the radio button.
    pub const fn label(self) -> &'static str {
        match self {
            Likert::StronglyDisagree => "Strongly Disagree",
            Likert::SomewhatDisagree => "Somewhat Disagree",
            Likert::SomewhatAgree => "Somewhat Agree",
            Likert::StronglyAgree => "Strongly Agree",
        }
    }
}

impl From<Likert> for u8 {
    fn from(l: Likert) -> u8 {
        l.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_bounds() {
        assert!(QuestionId::new(0).is_err());
        assert!(QuestionId::new(1).is_ok());
        assert!(QuestionId::new(30).is_ok());
        assert_eq!(
            QuestionId::new(31),
            Err(AssessmentError::UnknownQuestion { index: 31 })
        );
    }

    #[test]
    fn test_axis_split_at_fifteen() {
        assert_eq!(QuestionId::new(15).unwrap().axis(), Axis::Assertiveness);
        assert_eq!(QuestionId::new(16).unwrap().axis(), Axis::Responsiveness);
    }

    #[test]
    fn test_axis_questions_cover_fifteen_each() {
        for axis in Axis::ALL {
            assert_eq!(axis.questions().count(), AXIS_QUESTION_COUNT);
            assert!(axis.questions().all(|q| q.axis() == axis));
        }
    }

    #[test]
    fn test_slot_round_trip() {
        for q in QuestionId::all() {
            assert_eq!(QuestionId::from_slot(q.slot()), q);
        }
    }

    #[test]
    fn test_likert_rejects_out_of_range() {
        for v in [-1, 0, 5, 100, i32::MIN, i32::MAX] {
            assert_eq!(Likert::new(v), None, "value {v}");
        }
    }

    #[test]
    fn test_wide_inputs_are_rejected_not_truncated() {
        // 2^32 + 3 would wrap to 3 if narrowed to i32
        assert_eq!(Likert::from_raw((1 << 32) + 3), None);
        assert_eq!(Likert::from_raw(-(1 << 40)), None);
        assert_eq!(Likert::from_raw(4), Some(Likert::StronglyAgree));
        assert_eq!(
            QuestionId::from_raw(-1),
            Err(AssessmentError::UnknownQuestion { index: -1 })
        );
        assert_eq!(
            QuestionId::from_raw((1 << 32) + 1),
            Err(AssessmentError::UnknownQuestion { index: (1 << 32) + 1 })
        );
        assert_eq!(QuestionId::from_raw(30).map(QuestionId::get), Ok(30));
    }

    #[test]
    fn test_likert_values_match_labels() {
        for (i, l) in Likert::ALL.iter().enumerate() {
            assert_eq!(l.value() as usize, i + 1);
            assert_eq!(Likert::new(i as i32 + 1), Some(*l));
        }
        assert_eq!(Likert::SomewhatAgree.label(), "Somewhat Agree");
    }
}
