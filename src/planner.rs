//! End-to-end planning: partition, solve each group, combine, verify.

use log::{debug, error, info};
use rayon::prelude::*;

use crate::algorithms::{CancelToken, CoverAlgorithm, ExhaustiveSearch};
use crate::config::SolverConfig;
use crate::error::PlanError;
use crate::input::validate_channels;
use crate::partition::{cut_points, partition, ChannelGroup};
use crate::solution::{combine, Solution, SolutionTable};
use crate::spectrum::{Channel, Hz, Span};
use crate::validation::{check_solution, ValidationReport};

/// Result of a successful planning run.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Channels the plan covers, sorted by center.
    pub channels: Vec<Channel>,
    /// Independent groups in frequency order.
    pub groups: Vec<ChannelGroup>,
    /// Per-group best coverings by filter count, parallel to `groups`.
    pub tables: Vec<SolutionTable>,
    /// Midpoints between neighbouring groups.
    pub cut_points: Vec<Hz>,
    /// Frequency range a diagram of this plan should show.
    pub plot_range: Option<Span>,
    /// Selected solution within the filter budget.
    pub solution: Solution,
    /// Final check of `solution` against `channels`.
    pub report: ValidationReport,
}

/// Runs the planning pipeline with a [`CoverAlgorithm`].
///
/// Groups are solved in parallel; the algorithm is shared by reference.
#[derive(Debug, Clone)]
pub struct Planner<A = ExhaustiveSearch> {
    algorithm: A,
    config: SolverConfig,
    cancel: CancelToken,
}

impl Planner<ExhaustiveSearch> {
    pub fn new(config: SolverConfig) -> Self {
        Self::with_algorithm(ExhaustiveSearch::new(), config)
    }
}

impl<A: CoverAlgorithm> Planner<A> {
    pub fn with_algorithm(algorithm: A, config: SolverConfig) -> Self {
        Self {
            algorithm,
            config,
            cancel: CancelToken::new(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Token that aborts running and future plans when cancelled.
    ///
    /// `config.timeout` is applied separately to each [`Planner::plan`] call.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Validates raw center frequencies, then plans for them.
    pub fn plan_frequencies(&self, freqs: &[Hz]) -> Result<Plan, PlanError> {
        self.config.validate()?;
        let channels = validate_channels(freqs, &self.config)?;
        self.plan(&channels)
    }

    /// Plans filters for already validated channels.
    pub fn plan(&self, channels: &[Channel]) -> Result<Plan, PlanError> {
        self.config.validate()?;
        let cancel = self.cancel.child(self.config.timeout);

        let mut channels = channels.to_vec();
        channels.sort();
        let groups = partition(&channels, &self.config);

        let tables = groups
            .par_iter()
            .map(|group| self.algorithm.solve_group(group, &self.config, &cancel))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, (group, table)) in groups.iter().zip(&tables).enumerate() {
            debug!(
                "Group {} ({} channel(s)): achievable filter counts {:?}",
                i,
                group.len(),
                table.filter_counts().collect::<Vec<_>>()
            );
        }

        let solution = combine(&tables, self.config.filter_count_max, &cancel)?;
        info!(
            "Selected {} filter(s) for {} channel(s) in {} group(s)",
            solution.filter_count(),
            channels.len(),
            groups.len()
        );

        let filter_spans = solution.filter_spans();
        let report = check_solution(&channels, &filter_spans);
        if !report.is_valid() {
            for overlap in &report.overlaps {
                error!("Filters {} and {} overlap", overlap.first, overlap.second);
            }
            for check in report.conflicts() {
                error!("Channel {} Hz is {}", check.channel.center(), check.status);
            }
        }

        let plot_range = self.config.plot_range(
            channels
                .iter()
                .map(Channel::span)
                .chain(filter_spans.iter().copied()),
        );

        Ok(Plan {
            cut_points: cut_points(&groups),
            plot_range,
            channels,
            groups,
            tables,
            solution,
            report,
        })
    }
}
