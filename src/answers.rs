/*
 * This source code is licensed under the Business Source License 1.1.
 */

//! Answer collection: in-progress sheets, completion progress and validated sets.
//!
//! - [`AnswerSheet`]: mutable form state while the respondent works through the
//!   questionnaire. Re-answering a question replaces the earlier value.
//! - [`Progress`]: pure `answered / total` summary of a sheet.
//! - [`AnswerSet`]: exactly 30 validated responses, the only input the scorer
//!   accepts.
//!
//! # Invariants
//!
//! - An `AnswerSet` always holds one in-range response per question 1–30.
//! - Out-of-range values are rejected, never clamped.
//! - Nothing here allocates; the unanswered list is a fixed-capacity `heapless::Vec`.

use core::num::NonZeroU32;

use heapless::Vec as HVec;

use crate::error::AssessmentError;
use crate::likert::{Axis, Likert, QuestionId, AXIS_QUESTION_COUNT, QUESTION_COUNT};
use crate::style::AxisScore;

const AXIS_COUNT: NonZeroU32 = match NonZeroU32::new(AXIS_QUESTION_COUNT as u32) {
    Some(n) => n,
    None => panic!("axis question count must be non-zero"),
};

// ─── Response ───────────────────────────────────────────────────────────────

/// One answered statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Response {
    /// Question the value answers.
    pub question: QuestionId,
    /// The chosen scale point.
    pub value: Likert,
}

impl Response {
    /// Axis this response feeds.
    pub fn axis(&self) -> Axis {
        self.question.axis()
    }
}

// ─── RawValue ───────────────────────────────────────────────────────────────

/// A response value as received from an untyped form layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawValue {
    /// An integer, possibly far outside the scale.
    Integer(i64),
    /// A float, string, boolean or integer too wide for 64 bits.
    NotInteger,
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Integer(i64::from(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

// ─── Progress ───────────────────────────────────────────────────────────────

/// Completion state of a questionnaire.
///
/// Built only through [`Progress::new`], so `answered <= total` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    answered: usize,
    total: usize,
}

impl Progress {
    /// Progress for `answered` of `total` questions. `answered` is capped at `total`.
    pub fn new(answered: usize, total: usize) -> Self {
        Self {
            answered: answered.min(total),
            total,
        }
    }

    /// Questions with a response.
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Questions in the questionnaire.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction answered in [0.0, 1.0]. Zero when `total` is zero.
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f32 / self.total as f32
        }
    }

    /// Whole percentage answered, rounded half-up. Zero when `total` is zero.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let (answered, total) = (self.answered as u128, self.total as u128);
        ((answered * 200 + total) / (total * 2)) as u8
    }

    /// Questions still without a response.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    /// `true` once every question has a response. Never true for an empty questionnaire.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

// ─── AnswerSheet ────────────────────────────────────────────────────────────

/// In-progress answers for the 30-statement questionnaire.
///
/// Mirrors what the form collects: any subset of questions may be answered, and
/// answering again overwrites. Convert to an [`AnswerSet`] once complete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: [Option<Likert>; QUESTION_COUNT],
}

impl AnswerSheet {
    /// An empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced.
    pub fn record(&mut self, question: QuestionId, value: Likert) -> Option<Likert> {
        self.slots[question.slot()].replace(value)
    }

    /// Validate and record a raw form submission for one question.
    pub fn record_raw(&mut self, index: u32, value: i32) -> Result<Option<Likert>, AssessmentError> {
        self.record_submitted(i64::from(index), RawValue::from(value))
    }

    /// Validate and record a submission whose index and value are still untyped.
    pub fn record_submitted(
        &mut self,
        index: i64,
        value: RawValue,
    ) -> Result<Option<Likert>, AssessmentError> {
        let question = QuestionId::from_raw(index)?;
        let likert = match value {
            RawValue::Integer(v) => Likert::from_raw(v).ok_or(AssessmentError::InvalidResponseValue {
                question: question.get(),
                value: v,
            })?,
            RawValue::NotInteger => {
                return Err(AssessmentError::NonIntegerResponse { question: question.get() })
            }
        };
        Ok(self.record(question, likert))
    }

    /// Remove an answer, returning it.
    pub fn clear(&mut self, question: QuestionId) -> Option<Likert> {
        self.slots[question.slot()].take()
    }

    /// Current answer for a question.
    pub fn get(&self, question: QuestionId) -> Option<Likert> {
        self.slots[question.slot()]
    }

    /// Number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Completion progress.
    pub fn progress(&self) -> Progress {
        Progress::new(self.answered_count(), QUESTION_COUNT)
    }

    /// `true` once all 30 questions are answered.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Unanswered questions in index order.
    pub fn unanswered(&self) -> HVec<QuestionId, QUESTION_COUNT> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| QuestionId::from_slot(i))
            .collect()
    }

    /// First unanswered question, for "jump to next" navigation.
    pub fn next_unanswered(&self) -> Option<QuestionId> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(QuestionId::from_slot)
    }

    /// First unanswered question after `current`, wrapping to the start.
    pub fn next_unanswered_after(&self, current: QuestionId) -> Option<QuestionId> {
        let start = current.slot() + 1;
        (start..QUESTION_COUNT)
            .chain(0..start)
            .find(|&i| self.slots[i].is_none())
            .map(QuestionId::from_slot)
    }

    /// Freeze into a validated [`AnswerSet`].
    ///
    /// Fails with [`AssessmentError::IncompleteAnswerSet`] if any question is unanswered.
    pub fn to_answer_set(&self) -> Result<AnswerSet, AssessmentError> {
        let mut values = [Likert::StronglyDisagree; QUESTION_COUNT];
        for (slot, value) in self.slots.iter().enumerate() {
            match value {
                Some(v) => values[slot] = *v,
                None => return Err(self.incomplete_error()),
            }
        }
        Ok(AnswerSet { values })
    }

    fn incomplete_error(&self) -> AssessmentError {
        let missing = self.unanswered();
        AssessmentError::IncompleteAnswerSet {
            first_missing: missing.first().map_or(0, |q| q.get()),
            missing_count: missing.len() as u8,
        }
    }
}

// ─── AnswerSet ──────────────────────────────────────────────────────────────

/// Exactly 30 validated responses, one per question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnswerSet {
    values: [Likert; QUESTION_COUNT],
}

impl AnswerSet {
    /// Build from `(question index, value)` pairs in any order.
    ///
    /// Strict: rejects unknown indices, out-of-range values, duplicated indices
    /// and missing questions. The first offending pair wins; missing questions are
    /// reported only once every supplied pair is valid.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (u32, i32)>,
    {
        Self::from_submitted(
            pairs
                .into_iter()
                .map(|(index, value)| (i64::from(index), RawValue::from(value))),
        )
    }

    /// [`from_pairs`](Self::from_pairs) for untyped input, as decoded from JSON or Python.
    pub fn from_submitted<I>(pairs: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (i64, RawValue)>,
    {
        let mut sheet = AnswerSheet::new();
        for (index, value) in pairs {
            let question = QuestionId::from_raw(index)?;
            if sheet.get(question).is_some() {
                return Err(AssessmentError::DuplicateResponse { question: question.get() });
            }
            sheet.record_submitted(index, value)?;
        }
        sheet.to_answer_set()
    }

    /// Build from values in question order: `values[0]` answers question 1.
    ///
    /// Fewer than 30 values is an incomplete set; more than 30 reports the
    /// first surplus index as unknown.
    pub fn from_values(values: &[i32]) -> Result<Self, AssessmentError> {
        Self::from_positional(values.len(), values.iter().map(|&v| RawValue::from(v)))
    }

    /// [`from_values`](Self::from_values) for untyped input.
    pub fn from_submitted_values(values: &[RawValue]) -> Result<Self, AssessmentError> {
        Self::from_positional(values.len(), values.iter().copied())
    }

    fn from_positional<I>(len: usize, values: I) -> Result<Self, AssessmentError>
    where
        I: Iterator<Item = RawValue>,
    {
        if len > QUESTION_COUNT {
            return Err(AssessmentError::UnknownQuestion { index: QUESTION_COUNT as i64 + 1 });
        }
        let mut sheet = AnswerSheet::new();
        for (slot, value) in values.enumerate() {
            sheet.record_submitted(slot as i64 + 1, value)?;
        }
        sheet.to_answer_set()
    }

    /// Build from already-typed values in question order.
    pub fn from_likert(values: [Likert; QUESTION_COUNT]) -> Self {
        Self { values }
    }

    /// Response to one question.
    pub fn get(&self, question: QuestionId) -> Likert {
        self.values[question.slot()]
    }

    /// The 15 responses feeding `axis`, in question order.
    pub fn axis_values(&self, axis: Axis) -> &[Likert] {
        match axis {
            Axis::Assertiveness => &self.values[..AXIS_QUESTION_COUNT],
            Axis::Responsiveness => &self.values[AXIS_QUESTION_COUNT..],
        }
    }

    /// Exact score of the 15 responses feeding `axis`.
    pub fn axis_score(&self, axis: Axis) -> AxisScore {
        let sum = self.axis_values(axis).iter().map(|v| u32::from(v.value())).sum();
        AxisScore::from_sum(sum, AXIS_COUNT)
    }

    /// All responses in question order.
    pub fn responses(&self) -> impl Iterator<Item = Response> + '_ {
        self.values.iter().enumerate().map(|(slot, &value)| Response {
            question: QuestionId::from_slot(slot),
            value,
        })
    }

    /// Raw values 1–4 in question order.
    pub fn values(&self) -> [u8; QUESTION_COUNT] {
        self.values.map(Likert::value)
    }
}

impl From<AnswerSet> for AnswerSheet {
    fn from(set: AnswerSet) -> Self {
        Self {
            slots: set.values.map(Some),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
