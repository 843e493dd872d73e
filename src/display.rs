//! Presentation rounding for axis scores.
//!
//! A displayed score is `sum / count` rounded to a fixed number of decimals.
//! Rounding is done on the exact rational with integer arithmetic, so a tie is
//! detected exactly rather than through a binary float approximation.
//!
//! Nothing in this module feeds classification. The scorer classifies on the raw
//! sums; a score displayed as "2.5" may have been classified from 2.47 or 2.53.

use core::fmt;
use core::num::NonZeroU32;

/// Upper bound on [`DisplayConfig::decimals`]. Larger requests are capped.
pub const MAX_DISPLAY_DECIMALS: u8 = 6;

/// Tie-breaking rule for values exactly halfway between two display steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Ties round away from zero (2.25 → 2.3). The default.
    #[default]
    HalfUp,
    /// Ties round to the even neighbour (2.25 → 2.2, 2.35 → 2.4).
    HalfEven,
}

/// How scores are formatted for display.
///
/// Default: one decimal place, [`RoundingMode::HalfUp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Digits after the decimal point. Capped at [`MAX_DISPLAY_DECIMALS`].
    pub decimals: u8,
    /// Tie-breaking rule.
    pub rounding: RoundingMode,
}

impl DisplayConfig {
    /// Construct the standard one-decimal, half-up configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimals actually applied after capping.
    pub fn effective_decimals(&self) -> u8 {
        self.decimals.min(MAX_DISPLAY_DECIMALS)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 1,
            rounding: RoundingMode::HalfUp,
        }
    }
}

/// A rounded score ready for display.
///
/// Stored as an integer scaled by `10^decimals`, so `Display` never reintroduces
/// float noise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayScore {
    scaled: u64,
    decimals: u8,
}

impl DisplayScore {
    /// Round the non-negative rational `sum / count` under `cfg`.
    ///
    /// Returns `None` when `count` is zero.
    pub fn round(sum: u32, count: u32, cfg: &DisplayConfig) -> Option<Self> {
        NonZeroU32::new(count).map(|count| Self::from_ratio(sum, count, cfg))
    }

    /// Round `sum / count` under `cfg` for a count known to be non-zero.
    pub fn from_ratio(sum: u32, count: NonZeroU32, cfg: &DisplayConfig) -> Self {
        let decimals = cfg.effective_decimals();
        let numerator = u64::from(sum) * 10u64.pow(u32::from(decimals));
        let count = u64::from(count.get());
        let quotient = numerator / count;
        let twice_remainder = 2 * (numerator % count);

        let round_up = match twice_remainder.cmp(&count) {
            core::cmp::Ordering::Less => false,
            core::cmp::Ordering::Greater => true,
            core::cmp::Ordering::Equal => match cfg.rounding {
                RoundingMode::HalfUp => true,
                RoundingMode::HalfEven => quotient % 2 == 1,
            },
        };

        Self {
            scaled: quotient + u64::from(round_up),
            decimals,
        }
    }

    /// Number of decimal places.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The rounded value as a float, for charting.
    pub fn value(&self) -> f64 {
        self.scaled as f64 / 10u64.pow(u32::from(self.decimals)) as f64
    }
}

impl fmt::Display for DisplayScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimals == 0 {
            return write!(f, "{}", self.scaled);
        }
        let unit = 10u64.pow(u32::from(self.decimals));
        write!(
            f,
            "{}.{:0width$}",
            self.scaled / unit,
            self.scaled % unit,
            width = usize::from(self.decimals)
        )
    }
}
