/*
 * This source code is licensed under the Business Source License 1.1.
 */

//! The scorer: a validated [`AnswerSet`] in, a [`ScoreResult`] out.
//!
//! ```rust
//! use social_styles_core::scorer::score_values;
//! use social_styles_core::style::SocialStyle;
//!
//! let mut values = [1; 30];
//! values[..15].fill(4);
//! let result = score_values(&values).unwrap();
//! assert_eq!(result.style(), SocialStyle::Driver);
//! assert_eq!(result.assertiveness_score(), 4.0);
//! ```
//!
//! Scoring is a pure function of its input. The only side effect is a `debug`
//! tracing event per call, which is a no-op unless the host installs a subscriber.

use crate::answers::{AnswerSet, RawValue};
use crate::display::{DisplayConfig, DisplayScore};
use crate::error::AssessmentError;
use crate::likert::Axis;
use crate::style::{AxisScore, SocialStyle};

/// Outcome of scoring one complete answer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScoreResult {
    assertiveness: AxisScore,
    responsiveness: AxisScore,
    style: SocialStyle,
}

impl ScoreResult {
    /// Combine two axis scores, classifying them.
    pub fn from_axes(assertiveness: AxisScore, responsiveness: AxisScore) -> Self {
        Self {
            style: SocialStyle::classify(&assertiveness, &responsiveness),
            assertiveness,
            responsiveness,
        }
    }

    /// Exact assertiveness score.
    pub fn assertiveness(&self) -> AxisScore {
        self.assertiveness
    }

    /// Exact responsiveness score.
    pub fn responsiveness(&self) -> AxisScore {
        self.responsiveness
    }

    /// Score for either axis.
    pub fn axis(&self, axis: Axis) -> AxisScore {
        match axis {
            Axis::Assertiveness => self.assertiveness,
            Axis::Responsiveness => self.responsiveness,
        }
    }

    /// Unrounded assertiveness mean in [1.0, 4.0].
    pub fn assertiveness_score(&self) -> f64 {
        self.assertiveness.mean()
    }

    /// Unrounded responsiveness mean in [1.0, 4.0].
    pub fn responsiveness_score(&self) -> f64 {
        self.responsiveness.mean()
    }

    /// Quadrant style.
    pub fn style(&self) -> SocialStyle {
        self.style
    }

    /// Rounded scores for the results page.
    pub fn display(&self, cfg: &DisplayConfig) -> DisplayedScores {
        DisplayedScores {
            assertiveness: self.assertiveness.display(cfg),
            responsiveness: self.responsiveness.display(cfg),
            style: self.style,
        }
    }
}

/// Presentation view of a [`ScoreResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayedScores {
    /// Rounded assertiveness.
    pub assertiveness: DisplayScore,
    /// Rounded responsiveness.
    pub responsiveness: DisplayScore,
    /// Style, classified from the unrounded scores.
    pub style: SocialStyle,
}

/// Score a complete answer set.
pub fn score(answers: &AnswerSet) -> ScoreResult {
    let result = ScoreResult::from_axes(
        answers.axis_score(Axis::Assertiveness),
        answers.axis_score(Axis::Responsiveness),
    );
    tracing::debug!(
        assertiveness_sum = result.assertiveness.sum(),
        responsiveness_sum = result.responsiveness.sum(),
        style = result.style.as_str(),
        "scored answer set"
    );
    result
}

/// Validate `(question index, value)` pairs and score them.
///
/// See [`AnswerSet::from_pairs`] for the validation rules.
pub fn score_pairs<I>(pairs: I) -> Result<ScoreResult, AssessmentError>
where
    I: IntoIterator<Item = (u32, i32)>,
{
    let answers = AnswerSet::from_pairs(pairs).inspect_err(log_rejection)?;
    Ok(score(&answers))
}

/// Validate values given in question order and score them.
pub fn score_values(values: &[i32]) -> Result<ScoreResult, AssessmentError> {
    let answers = AnswerSet::from_values(values).inspect_err(log_rejection)?;
    Ok(score(&answers))
}

/// Validate untyped `(question index, value)` pairs and score them.
///
/// For bindings and decoders that cannot promise in-range integers.
pub fn score_submitted<I>(pairs: I) -> Result<ScoreResult, AssessmentError>
where
    I: IntoIterator<Item = (i64, RawValue)>,
{
    let answers = AnswerSet::from_submitted(pairs).inspect_err(log_rejection)?;
    Ok(score(&answers))
}

/// Validate untyped values given in question order and score them.
pub fn score_submitted_values(values: &[RawValue]) -> Result<ScoreResult, AssessmentError> {
    let answers = AnswerSet::from_submitted_values(values).inspect_err(log_rejection)?;
    Ok(score(&answers))
}

fn log_rejection(err: &AssessmentError) {
    tracing::debug!(error = %err, "rejected answer submission");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(assertiveness: [i32; 15], responsiveness: [i32; 15]) -> [i32; 30] {
        let mut values = [0; 30];
        values[..15].copy_from_slice(&assertiveness);
        values[15..].copy_from_slice(&responsiveness);
        values
    }

    #[test]
    fn test_all_ones_is_analytical() {
        let r = score_values(&[1; 30]).unwrap();
        assert_eq!(r.assertiveness_score(), 1.0);
        assert_eq!(r.responsiveness_score(), 1.0);
        assert_eq!(r.style(), SocialStyle::Analytical);
    }

    #[test]
    fn test_all_fours_is_expressive() {
        let r = score_values(&[4; 30]).unwrap();
        assert_eq!(r.assertiveness_score(), 4.0);
        assert_eq!(r.style(), SocialStyle::Expressive);
    }

    #[test]
    fn test_borderline_driver() {
        let r = score_values(&split(
            [3, 3, 2, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3],
            [2, 2, 2, 2, 3, 2, 2, 3, 2, 2, 3, 2, 2, 3, 2],
        ))
        .unwrap();
        assert_eq!(r.assertiveness().sum(), 38);
        assert_eq!(r.responsiveness().sum(), 34);
        assert_eq!(r.style(), SocialStyle::Driver);
    }

    #[test]
    fn test_display_does_not_change_style() {
        // 37 → 2.4666…, shown as "2.5"
        let r = score_values(&split(
            [3, 3, 2, 2, 3, 2, 3, 2, 3, 2, 2, 2, 3, 2, 3],
            [1; 15],
        ))
        .unwrap();
        assert_eq!(r.assertiveness().sum(), 37);
        let shown = r.display(&DisplayConfig::default());
        assert_eq!(shown.assertiveness.value(), 2.5);
        assert_eq!(shown.style, SocialStyle::Analytical);
    }

    #[test]
    fn test_axis_accessor_matches_fields() {
        let r = score_values(&split([4; 15], [2; 15])).unwrap();
        assert_eq!(r.axis(Axis::Assertiveness), r.assertiveness());
        assert_eq!(r.axis(Axis::Responsiveness), r.responsiveness());
    }

    #[test]
    fn test_score_pairs_propagates_errors() {
        let err = score_pairs((1..=30u32).map(|i| (i, if i == 20 { 9 } else { 2 }))).unwrap_err();
        assert_eq!(err, AssessmentError::InvalidResponseValue { question: 20, value: 9 });
    }
}
