//! Coverings of channel groups and their combination into a global solution.
//!
//! A [`SubSolution`] covers one independent group; a [`SolutionTable`] keeps
//! the best one per filter count; [`combine`] takes one covering from each
//! table and returns the best [`Solution`] within the filter budget.

mod combine;
pub mod errors;
mod rank;
mod sub_solution;

pub use combine::combine;
pub use errors::CombineError;
pub use rank::Rank;
pub use sub_solution::{SolutionTable, SubSolution};

use crate::spectrum::{Filter, Hz, Span};

/// One covering per independent group.
///
/// `filter_count` is the total over all groups; scores are the means of the
/// group scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    parts: Vec<SubSolution>,
    filter_count: usize,
    channel_score: f64,
    center_score: f64,
}

impl Solution {
    pub fn new(parts: Vec<SubSolution>) -> Self {
        let rank = combine::combined_rank(&parts);
        Self {
            parts,
            filter_count: rank.filter_count,
            channel_score: rank.channel_score,
            center_score: rank.center_score,
        }
    }

    /// Group coverings in frequency order.
    pub fn parts(&self) -> &[SubSolution] {
        &self.parts
    }

    pub fn filter_count(&self) -> usize {
        self.filter_count
    }

    pub fn channel_score(&self) -> f64 {
        self.channel_score
    }

    pub fn center_score(&self) -> f64 {
        self.center_score
    }

    pub fn rank(&self) -> Rank {
        Rank::new(self.filter_count, self.channel_score, self.center_score)
    }

    /// All filters, ordered by center.
    pub fn filters(&self) -> Vec<&Filter> {
        let mut filters: Vec<&Filter> = self.parts.iter().flat_map(|p| p.filters()).collect();
        filters.sort_by_key(|f| f.center());
        filters
    }

    /// Filter centers in ascending order.
    pub fn filter_centers(&self) -> Vec<Hz> {
        self.filters().into_iter().map(Filter::center).collect()
    }

    pub fn filter_spans(&self) -> Vec<Span> {
        self.filters().into_iter().map(Filter::span).collect()
    }
}
