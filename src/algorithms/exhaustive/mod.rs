//! Exhaustive covering search for one independent group.
//!
//! The search enumerates filter centers on a uniform grid with step
//! `search_granularity` and backtracks through every combination of
//! admissible, non-overlapping placements until all channels are passed.
//! Each complete covering is scored and the best one per filter count is
//! kept, so the resulting table holds an entry for every achievable count.
//!
//! # Module Structure
//!
//! - [`grid`] - Candidate filter centers
//! - [`engine`] - Recursive backtracking with undo on return

mod engine;
mod grid;

#[cfg(test)]
mod tests;

pub use grid::PlacementGrid;

use log::debug;

use crate::algorithms::{CancelToken, CoverAlgorithm, SolveError};
use crate::config::SolverConfig;
use crate::partition::ChannelGroup;
use crate::solution::{SolutionTable, SubSolution};
use crate::spectrum::Filter;

use engine::Search;

/// Unrestricted backtracking search over grid placements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self
    }
}

impl CoverAlgorithm for ExhaustiveSearch {
    fn solve_group(
        &self,
        group: &ChannelGroup,
        config: &SolverConfig,
        cancel: &CancelToken,
    ) -> Result<SolutionTable, SolveError> {
        let channels = group.channels();
        let mut table = SolutionTable::new();

        let (Some(lowest), Some(highest)) = (group.lowest(), group.highest()) else {
            return Ok(table);
        };

        // A lone channel gets a filter centered on it.
        if channels.len() == 1 {
            let filter = Filter::new(lowest.center(), config.filter_width, vec![*lowest]);
            table.offer(SubSolution::new(vec![filter], channels.to_vec()));
            return Ok(table);
        }

        let grid = PlacementGrid::new(lowest, highest, config);
        let (table, nodes, coverings) = Search::new(channels, config, cancel, grid).run()?;

        debug!(
            "Group of {} channel(s) at {}..{} Hz: {} node(s), {} covering(s), filter counts {:?}",
            channels.len(),
            lowest.center(),
            highest.center(),
            nodes,
            coverings,
            table.filter_counts().collect::<Vec<_>>()
        );
        Ok(table)
    }
}
