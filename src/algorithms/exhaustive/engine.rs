//! Recursive backtracking over grid placements.
//!
//! Each level places one filter that passes the lowest still-uncovered
//! channel. Every covering has exactly one such filter, so every covering is
//! visited exactly once regardless of the order its filters were found in.
//! Search state is a coverage flag per channel plus a stack of committed
//! placements, both restored on backtrack.

use log::trace;

use super::grid::PlacementGrid;
use crate::algorithms::{CancelToken, SolveError};
use crate::config::SolverConfig;
use crate::solution::{SolutionTable, SubSolution};
use crate::spectrum::{fully_contains, Channel, Filter, Hz, Span};
use crate::validation::validate_filter;

/// A committed filter and the indices of the channels it passes.
#[derive(Debug, Clone)]
struct Placement {
    center: Hz,
    covered: Vec<usize>,
}

/// Mutable state of one group's search. Owned by a single worker.
pub(super) struct Search<'a> {
    channels: &'a [Channel],
    config: &'a SolverConfig,
    cancel: &'a CancelToken,
    grid: PlacementGrid,
    covered: Vec<bool>,
    committed: Vec<Span>,
    placements: Vec<Placement>,
    table: SolutionTable,
    nodes: usize,
    coverings: usize,
}

impl<'a> Search<'a> {
    /// `channels` must be non-empty and sorted by center.
    pub(super) fn new(
        channels: &'a [Channel],
        config: &'a SolverConfig,
        cancel: &'a CancelToken,
        grid: PlacementGrid,
    ) -> Self {
        Self {
            channels,
            config,
            cancel,
            grid,
            covered: vec![false; channels.len()],
            committed: Vec::with_capacity(channels.len()),
            placements: Vec::with_capacity(channels.len()),
            table: SolutionTable::new(),
            nodes: 0,
            coverings: 0,
        }
    }

    /// Runs the search to completion.
    ///
    /// Returns the table and the number of (nodes, coverings) visited.
    pub(super) fn run(mut self) -> Result<(SolutionTable, usize, usize), SolveError> {
        self.descend(0)?;
        Ok((self.table, self.nodes, self.coverings))
    }

    fn descend(&mut self, from: usize) -> Result<(), SolveError> {
        self.nodes += 1;
        if self.cancel.is_cancelled() {
            return Err(SolveError::Cancelled {
                lowest_channel: self.channels[0].center(),
                channels: self.channels.len(),
            });
        }

        let channels = self.channels;
        let Some(lowest) = (from..channels.len()).find(|&i| !self.covered[i]) else {
            self.record();
            return Ok(());
        };

        let filter_width = self.config.filter_width;
        for center in self.grid.centers_containing(&channels[lowest]) {
            let span = Span::centered(center, filter_width);
            if !validate_filter(&span, &self.committed, channels) {
                continue;
            }

            // Anything the filter passes is uncovered, or it would overlap a committed filter.
            let covered: Vec<usize> = (lowest..channels.len())
                .filter(|&i| !self.covered[i] && fully_contains(&span, &channels[i].span()))
                .collect();
            for &i in &covered {
                self.covered[i] = true;
            }
            self.committed.push(span);
            self.placements.push(Placement { center, covered });

            let result = self.descend(lowest + 1);

            if let Some(placement) = self.placements.pop() {
                for i in placement.covered {
                    self.covered[i] = false;
                }
            }
            self.committed.pop();
            result?;
        }
        Ok(())
    }

    /// Materialises the current placements as a covering and offers it to the table.
    fn record(&mut self) {
        self.coverings += 1;
        let filters = self
            .placements
            .iter()
            .map(|p| {
                Filter::new(
                    p.center,
                    self.config.filter_width,
                    p.covered.iter().map(|&i| self.channels[i]).collect(),
                )
            })
            .collect();
        let candidate = SubSolution::new(filters, self.channels.to_vec());
        trace!(
            "Covering with {} filter(s): channel score {:.3}, center score {:.6}",
            candidate.filter_count(),
            candidate.channel_score(),
            candidate.center_score()
        );
        self.table.offer(candidate);
    }
}
