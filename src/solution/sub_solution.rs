//! Coverings of a single independent group.

use std::collections::btree_map::{self, BTreeMap};

use super::rank::Rank;
use crate::spectrum::{Channel, Filter};

/// One complete covering of one independent channel group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubSolution {
    filters: Vec<Filter>,
    channels: Vec<Channel>,
    channel_score: f64,
    center_score: f64,
}

impl SubSolution {
    /// Builds a covering of `channels` from `filters`.
    ///
    /// Scores are the means of the filter scores. Filters are kept sorted by center.
    pub fn new(mut filters: Vec<Filter>, channels: Vec<Channel>) -> Self {
        filters.sort_by_key(Filter::center);
        let n = filters.len().max(1) as f64;
        let channel_score = filters.iter().map(Filter::channel_score).sum::<f64>() / n;
        let center_score = filters.iter().map(Filter::center_score).sum::<f64>() / n;
        Self {
            filters,
            channels,
            channel_score,
            center_score,
        }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Channels of the group this covering belongs to.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    pub fn channel_score(&self) -> f64 {
        self.channel_score
    }

    pub fn center_score(&self) -> f64 {
        self.center_score
    }

    pub fn rank(&self) -> Rank {
        Rank::new(self.filter_count(), self.channel_score, self.center_score)
    }
}

/// Best covering of a group for every achievable filter count.
///
/// An empty table means the group cannot be covered at all.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionTable {
    by_count: BTreeMap<usize, SubSolution>,
}

impl SolutionTable {
    pub fn new() -> Self {
        Self {
            by_count: BTreeMap::new(),
        }
    }

    /// Records `candidate` if no covering with its filter count exists yet or
    /// if it ranks strictly better than the stored one.
    ///
    /// Returns true if the table changed. Ties keep the covering found first.
    pub fn offer(&mut self, candidate: SubSolution) -> bool {
        match self.by_count.entry(candidate.filter_count()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(candidate);
                true
            }
            btree_map::Entry::Occupied(mut slot) => {
                if candidate.rank().is_better_than(&slot.get().rank()) {
                    slot.insert(candidate);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn get(&self, filter_count: usize) -> Option<&SubSolution> {
        self.by_count.get(&filter_count)
    }

    pub fn len(&self) -> usize {
        self.by_count.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_count.is_empty()
    }

    /// Smallest achievable filter count, if the group is coverable.
    pub fn min_filter_count(&self) -> Option<usize> {
        self.by_count.keys().next().copied()
    }

    /// Best covering with the fewest filters, if the group is coverable.
    pub fn fewest(&self) -> Option<&SubSolution> {
        self.by_count.values().next()
    }

    /// Achievable filter counts in ascending order.
    pub fn filter_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_count.keys().copied()
    }

    /// Best coverings in ascending filter-count order.
    pub fn values(&self) -> btree_map::Values<'_, usize, SubSolution> {
        self.by_count.values()
    }
}
