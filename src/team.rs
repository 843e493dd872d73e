/*
 * This source code is licensed under the Business Source License 1.1.
 */

//! Team aggregation: each member's latest result, style mix and team centroid.
//!
//! # Invariants
//!
//! - A roster holds at most one result per member; recording again replaces it.
//! - The centroid pools raw axis sums, so its style uses the same exact cutoff
//!   as an individual result. Averaging rounded member scores never happens.
//! - Uses `hashbrown::HashMap` (no `std` dependency).

use core::hash::Hash;

use hashbrown::HashMap;

use crate::scorer::ScoreResult;
use crate::style::SocialStyle;

// ─── StyleDistribution ──────────────────────────────────────────────────────

/// Count of members per style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleDistribution {
    counts: [usize; 4],
}

impl StyleDistribution {
    fn slot(style: SocialStyle) -> usize {
        match style {
            SocialStyle::Analytical => 0,
            SocialStyle::Driver => 1,
            SocialStyle::Amiable => 2,
            SocialStyle::Expressive => 3,
        }
    }

    /// Tally one member.
    pub fn add(&mut self, style: SocialStyle) {
        self.counts[Self::slot(style)] += 1;
    }

    /// Members with `style`.
    pub fn count(&self, style: SocialStyle) -> usize {
        self.counts[Self::slot(style)]
    }

    /// Total members tallied.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Fraction of members with `style` in [0.0, 1.0]. Zero for an empty tally.
    pub fn share(&self, style: SocialStyle) -> f32 {
        match self.total() {
            0 => 0.0,
            total => self.count(style) as f32 / total as f32,
        }
    }

    /// The single most common style. `None` when empty or when the top count is shared.
    pub fn dominant(&self) -> Option<SocialStyle> {
        let max = *self.counts.iter().max()?;
        if max == 0 {
            return None;
        }
        let mut leaders = SocialStyle::ALL.into_iter().filter(|&s| self.count(s) == max);
        let first = leaders.next()?;
        leaders.next().is_none().then_some(first)
    }

    /// `(style, count)` for all four styles in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialStyle, usize)> + '_ {
        SocialStyle::ALL.into_iter().map(|s| (s, self.count(s)))
    }
}

impl FromIterator<SocialStyle> for StyleDistribution {
    fn from_iter<I: IntoIterator<Item = SocialStyle>>(iter: I) -> Self {
        let mut dist = Self::default();
        for style in iter {
            dist.add(style);
        }
        dist
    }
}

// ─── TeamRoster ─────────────────────────────────────────────────────────────

/// Latest score per team member.
///
/// Members without a completed assessment are simply absent.
#[derive(Clone, Debug)]
pub struct TeamRoster<K: Eq + Hash> {
    members: HashMap<K, ScoreResult>,
}

impl<K: Eq + Hash> TeamRoster<K> {
    /// An empty roster.
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    /// Record a member's latest result, returning the one it replaced.
    pub fn record(&mut self, member: K, result: ScoreResult) -> Option<ScoreResult> {
        tracing::trace!(style = result.style().as_str(), "team roster updated");
        self.members.insert(member, result)
    }

    /// Drop a member (left or removed from the team).
    pub fn remove(&mut self, member: &K) -> Option<ScoreResult> {
        self.members.remove(member)
    }

    /// A member's latest result.
    pub fn get(&self, member: &K) -> Option<&ScoreResult> {
        self.members.get(member)
    }

    /// Members with a result.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` when no member has a result.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate `(member, result)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &ScoreResult)> {
        self.members.iter()
    }

    /// Members whose latest result has `style`.
    pub fn members_with(&self, style: SocialStyle) -> impl Iterator<Item = &K> {
        self.members
            .iter()
            .filter(move |(_, r)| r.style() == style)
            .map(|(k, _)| k)
    }

    /// Style counts across the roster.
    pub fn distribution(&self) -> StyleDistribution {
        self.members.values().map(ScoreResult::style).collect()
    }

    /// The team's pooled position on the grid.
    ///
    /// Sums every member's raw axis totals, which for equal-length
    /// questionnaires equals the mean of member means. `None` for an empty roster.
    pub fn centroid(&self) -> Option<ScoreResult> {
        let mut results = self.members.values();
        let first = results.next()?;
        let (assertiveness, responsiveness) = results.try_fold(
            (first.assertiveness(), first.responsiveness()),
            |(a, r), next| Some((a.merge(&next.assertiveness())?, r.merge(&next.responsiveness())?)),
        )?;
        Some(ScoreResult::from_axes(assertiveness, responsiveness))
    }
}

impl<K: Eq + Hash> Default for TeamRoster<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<(K, ScoreResult)> for TeamRoster<K> {
    fn from_iter<I: IntoIterator<Item = (K, ScoreResult)>>(iter: I) -> Self {
        let mut roster = Self::new();
        for (member, result) in iter {
            roster.record(member, result);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::AxisScore;

    fn result(a_sum: u32, r_sum: u32) -> ScoreResult {
        ScoreResult::from_axes(
            AxisScore::from_parts(a_sum, 15).unwrap(),
            AxisScore::from_parts(r_sum, 15).unwrap(),
        )
    }

    #[test]
    fn test_record_replaces_latest() {
        let mut roster: TeamRoster<u32> = TeamRoster::new();
        assert!(roster.record(1, result(15, 15)).is_none());
        let old = roster.record(1, result(60, 15)).unwrap();
        assert_eq!(old.style(), SocialStyle::Analytical);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(&1).unwrap().style(), SocialStyle::Driver);
    }

    #[test]
    fn test_distribution_counts() {
        let roster: TeamRoster<&str> = [
            ("ana", result(15, 15)),
            ("dan", result(60, 15)),
            ("dee", result(50, 20)),
            ("amy", result(15, 60)),
        ]
        .into_iter()
        .collect();
        let dist = roster.distribution();
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.count(SocialStyle::Driver), 2);
        assert_eq!(dist.count(SocialStyle::Expressive), 0);
        assert!((dist.share(SocialStyle::Driver) - 0.5).abs() < f32::EPSILON);
        assert_eq!(dist.dominant(), Some(SocialStyle::Driver));
        assert_eq!(roster.members_with(SocialStyle::Amiable).count(), 1);
    }

    #[test]
    fn test_dominant_none_on_tie_or_empty() {
        assert_eq!(StyleDistribution::default().dominant(), None);
        let tie: StyleDistribution = [SocialStyle::Amiable, SocialStyle::Driver].into_iter().collect();
        assert_eq!(tie.dominant(), None);
    }

    #[test]
    fn test_centroid_pools_exactly() {
        // 37 and 38 pool to 75 / 30 = 2.5 exactly → high
        let roster: TeamRoster<u8> = [(1, result(37, 20)), (2, result(38, 20))].into_iter().collect();
        let c = roster.centroid().unwrap();
        assert_eq!(c.assertiveness().sum(), 75);
        assert_eq!(c.assertiveness().count(), 30);
        assert_eq!(c.style(), SocialStyle::Driver);
    }

    #[test]
    fn test_centroid_empty_is_none() {
        let roster: TeamRoster<u8> = TeamRoster::default();
        assert!(roster.centroid().is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_remove_member() {
        let mut roster: TeamRoster<u8> = [(1, result(15, 15))].into_iter().collect();
        assert!(roster.remove(&1).is_some());
        assert!(roster.remove(&1).is_none());
        assert_eq!(roster.distribution().total(), 0);
    }
}
