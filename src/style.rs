/*
 * This source code is licensed under the Business Source License 1.1.
 */

//! Axis scores and the four-quadrant social style classifier.
//!
//! - [`AxisScore`]: exact sum/count of one axis, with its mean and display form.
//! - [`SocialStyle`]: the quadrant selected by the two axis scores.
//!
//! # Invariants
//!
//! - The cutoff is the scale midpoint 2.5, inclusive on the high side on both axes.
//! - The cutoff test is exact: `sum × 2 ≥ count × 5`. A mean of exactly 2.5 is
//!   always high, independent of how the float mean would round.
//! - Display rounding never participates in classification.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::display::{DisplayConfig, DisplayScore};
use crate::error::ParseStyleError;
use crate::likert::Likert;
use crate::profile::{self, StyleProfile};

/// Numerator of the 5/2 midpoint cutoff.
pub const MIDPOINT_NUMERATOR: u32 = 5;
/// Denominator of the 5/2 midpoint cutoff.
pub const MIDPOINT_DENOMINATOR: u32 = 2;

// ─── AxisScore ───────────────────────────────────────────────────────────────

/// Exact score on one axis: the sum of `count` Likert responses.
///
/// Kept as integers so that classification can compare against the midpoint
/// without floating-point error. `count` is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisScore {
    sum: u32,
    count: NonZeroU32,
}

impl AxisScore {
    /// Score a non-empty run of responses. Returns `None` for an empty slice.
    pub fn from_responses(responses: &[Likert]) -> Option<Self> {
        let count = NonZeroU32::new(responses.len() as u32)?;
        let sum = responses.iter().map(|r| u32::from(r.value())).sum();
        Some(Self { sum, count })
    }

    /// Build from a raw sum and count.
    ///
    /// Returns `None` when `count` is zero or the mean falls outside the 1–4 scale.
    pub fn from_parts(sum: u32, count: u32) -> Option<Self> {
        let nonzero = NonZeroU32::new(count)?;
        let min = count.checked_mul(u32::from(Likert::MIN))?;
        let max = count.checked_mul(u32::from(Likert::MAX))?;
        (min..=max).contains(&sum).then_some(Self { sum, count: nonzero })
    }

    pub(crate) const fn from_sum(sum: u32, count: NonZeroU32) -> Self {
        Self { sum, count }
    }

    /// Sum of the responses.
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Number of responses.
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Unrounded mean in [1.0, 4.0].
    pub fn mean(&self) -> f64 {
        f64::from(self.sum) / f64::from(self.count.get())
    }

    /// `true` when the mean is at or above the 2.5 midpoint, compared exactly.
    pub fn is_high(&self) -> bool {
        u64::from(self.sum) * u64::from(MIDPOINT_DENOMINATOR)
            >= u64::from(self.count.get()) * u64::from(MIDPOINT_NUMERATOR)
    }

    /// Pool two scores as if all their responses had been one run.
    ///
    /// Returns `None` on overflow.
    pub fn merge(&self, other: &AxisScore) -> Option<AxisScore> {
        Some(AxisScore {
            sum: self.sum.checked_add(other.sum)?,
            count: self.count.checked_add(other.count.get())?,
        })
    }

    /// Rounded form for presentation.
    pub fn display(&self, cfg: &DisplayConfig) -> DisplayScore {
        DisplayScore::from_ratio(self.sum, self.count, cfg)
    }
}

// ─── SocialStyle ─────────────────────────────────────────────────────────────

/// Social style quadrant from the 2D (assertiveness × responsiveness) plane.
///
/// ```text
///                    │ Assertiveness < 2.5 │ Assertiveness ≥ 2.5
/// ───────────────────┼─────────────────────┼─────────────────────
/// Responsiveness ≥ 2.5│ Amiable            │ Expressive
/// Responsiveness < 2.5│ Analytical         │ Driver
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SocialStyle {
    /// Low assertiveness, low responsiveness: logical, thorough, detail-oriented.
    Analytical,
    /// High assertiveness, low responsiveness: direct, decisive, results-oriented.
    Driver,
    /// Low assertiveness, high responsiveness: supportive, patient, relationship-oriented.
    Amiable,
    /// High assertiveness, high responsiveness: enthusiastic, creative, people-oriented.
    Expressive,
}

impl SocialStyle {
    /// All four styles in grid order (bottom-left, bottom-right, top-left, top-right).
    pub const ALL: [SocialStyle; 4] = [
        SocialStyle::Analytical,
        SocialStyle::Driver,
        SocialStyle::Amiable,
        SocialStyle::Expressive,
    ];

    /// Classify a pair of axis scores.
    ///
    /// Uses the exact midpoint test of [`AxisScore::is_high`] on both axes.
    pub fn classify(assertiveness: &AxisScore, responsiveness: &AxisScore) -> SocialStyle {
        Self::from_quadrant(assertiveness.is_high(), responsiveness.is_high())
    }

    /// Style for a (high assertiveness, high responsiveness) pair.
    pub const fn from_quadrant(assertive: bool, responsive: bool) -> SocialStyle {
        match (assertive, responsive) {
            (false, false) => SocialStyle::Analytical,
            (true, false) => SocialStyle::Driver,
            (false, true) => SocialStyle::Amiable,
            (true, true) => SocialStyle::Expressive,
        }
    }

    /// `true` for the high-assertiveness quadrants (Driver, Expressive).
    pub const fn is_assertive(self) -> bool {
        matches!(self, SocialStyle::Driver | SocialStyle::Expressive)
    }

    /// `true` for the high-responsiveness quadrants (Amiable, Expressive).
    pub const fn is_responsive(self) -> bool {
        matches!(self, SocialStyle::Amiable | SocialStyle::Expressive)
    }

    /// Canonical uppercase name ("DRIVER").
    pub const fn as_str(self) -> &'static str {
        match self {
            SocialStyle::Analytical => "ANALYTICAL",
            SocialStyle::Driver => "DRIVER",
            SocialStyle::Amiable => "AMIABLE",
            SocialStyle::Expressive => "EXPRESSIVE",
        }
    }

    /// Title-case name for prose ("Driver").
    pub const fn label(self) -> &'static str {
        match self {
            SocialStyle::Analytical => "Analytical",
            SocialStyle::Driver => "Driver",
            SocialStyle::Amiable => "Amiable",
            SocialStyle::Expressive => "Expressive",
        }
    }

    /// Accent colour of this quadrant on the results grid.
    pub const fn accent_rgb(self) -> [u8; 3] {
        match self {
            SocialStyle::Analytical => [21, 101, 192], // blue
            SocialStyle::Driver => [198, 40, 40],      // red
            SocialStyle::Amiable => [46, 125, 50],     // green
            SocialStyle::Expressive => [245, 124, 0],  // orange
        }
    }

    /// Description, strengths, challenges and tips for this style.
    pub fn profile(self) -> &'static StyleProfile {
        profile::profile(self)
    }
}

impl fmt::Display for SocialStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialStyle {
    type Err = ParseStyleError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SocialStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseStyleError)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
