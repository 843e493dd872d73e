//! SCORE_REPORT: portable snapshot of one scored assessment for rendering and transport.
//!
//! ```text
//! {
//!   "version": 1,
//!   "style": "DRIVER",
//!   "assertiveness":  { "sum": 38, "count": 15, "mean": 2.533…, "display": "2.5" },
//!   "responsiveness": { "sum": 34, "count": 15, "mean": 2.266…, "display": "2.3" },
//!   "responses": [3, 3, 2, …],         // 30 values, question order
//!   "display_config": { "decimals": 1, "rounding": "half_up" }
//! }
//! ```
//!
//! The report carries both the exact sums and the rounded display strings, so a
//! renderer never has to round on its own. [`ScoreReport::rescore`] re-validates
//! the stored responses and recomputes the result. [`ScoreReport::is_consistent`]
//! goes further and rebuilds every derived field (style, sums, counts, means and
//! display strings under the stored config), which is how a consumer checks that
//! a report was not edited after scoring.
//!
//! # no_std
//!
//! This module requires the `serde` feature. It uses `alloc::{string::String, vec::Vec}`
//! and is compatible with no_std + alloc environments.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::answers::AnswerSet;
use crate::display::DisplayConfig;
use crate::error::AssessmentError;
use crate::scorer::{score, ScoreResult};
use crate::style::{AxisScore, SocialStyle};

/// Tolerance for comparing a stored mean against a recomputed one.
const MEAN_TOLERANCE: f64 = 1e-9;

/// Current report format version.
pub const SCORE_REPORT_VERSION: u16 = 1;

/// A serializable snapshot of one scored answer set.
///
/// # Example
///
/// ```rust,ignore
/// use social_styles_core::report::ScoreReport;
///
/// let report = ScoreReport::new(&answers, &result, &DisplayConfig::default());
/// let json = serde_json::to_string(&report).unwrap();
/// let restored: ScoreReport = serde_json::from_str(&json).unwrap();
/// assert_eq!(restored.rescore().unwrap(), result);
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreReport {
    /// Format version, always [`SCORE_REPORT_VERSION`] for new reports.
    pub version: u16,
    /// Quadrant style.
    pub style: SocialStyle,
    /// Assertiveness axis.
    pub assertiveness: AxisRecord,
    /// Responsiveness axis.
    pub responsiveness: AxisRecord,
    /// The 30 raw responses in question order.
    pub responses: Vec<u8>,
    /// Rounding used to produce the display strings.
    #[serde(default)]
    pub display_config: DisplayConfig,
}

/// Serializable representation of one [`AxisScore`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct AxisRecord {
    /// Sum of the axis responses.
    pub sum: u32,
    /// Number of axis responses.
    pub count: u32,
    /// Unrounded mean.
    pub mean: f64,
    /// Rounded mean as shown to the respondent.
    pub display: String,
}

impl AxisRecord {
    fn new(score: &AxisScore, cfg: &DisplayConfig) -> Self {
        Self {
            sum: score.sum(),
            count: score.count(),
            mean: score.mean(),
            display: score.display(cfg).to_string(),
        }
    }

    /// `true` when every field is what `score` renders to under `cfg`.
    fn matches(&self, score: &AxisScore, cfg: &DisplayConfig) -> bool {
        let expected = Self::new(score, cfg);
        self.sum == expected.sum
            && self.count == expected.count
            && (self.mean - expected.mean).abs() <= MEAN_TOLERANCE
            && self.display == expected.display
    }

    /// Rebuild the exact score. `None` if the sum or count is off-scale.
    pub fn to_axis_score(&self) -> Option<AxisScore> {
        AxisScore::from_parts(self.sum, self.count)
    }
}

impl ScoreReport {
    /// Build a report from an answer set and the result it scored to.
    pub fn new(answers: &AnswerSet, result: &ScoreResult, cfg: &DisplayConfig) -> Self {
        Self {
            version: SCORE_REPORT_VERSION,
            style: result.style(),
            assertiveness: AxisRecord::new(&result.assertiveness(), cfg),
            responsiveness: AxisRecord::new(&result.responsiveness(), cfg),
            responses: answers.values().to_vec(),
            display_config: *cfg,
        }
    }

    /// Score an answer set and wrap it in a report.
    pub fn from_answers(answers: &AnswerSet, cfg: &DisplayConfig) -> Self {
        Self::new(answers, &score(answers), cfg)
    }

    /// Re-validate the stored responses and score them again.
    pub fn rescore(&self) -> Result<ScoreResult, AssessmentError> {
        let values: Vec<i32> = self.responses.iter().map(|&v| i32::from(v)).collect();
        let answers = AnswerSet::from_values(&values)?;
        Ok(score(&answers))
    }

    /// `true` when the report is the current version and every derived field
    /// matches a fresh rescore of the stored responses.
    pub fn is_consistent(&self) -> bool {
        self.version == SCORE_REPORT_VERSION
            && self.rescore().is_ok_and(|r| {
                r.style() == self.style
                    && self.assertiveness.matches(&r.assertiveness(), &self.display_config)
                    && self.responsiveness.matches(&r.responsiveness(), &self.display_config)
            })
    }
}
