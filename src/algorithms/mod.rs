pub mod cancel;
pub mod error;
pub mod exhaustive;

pub use cancel::CancelToken;
pub use error::SolveError;
pub use exhaustive::ExhaustiveSearch;

use crate::config::SolverConfig;
use crate::partition::ChannelGroup;
use crate::solution::SolutionTable;

/// Algorithm for covering one independent channel group with filters.
///
/// Implementations must be callable from several threads at once: the
/// planner solves groups in parallel and shares the algorithm by reference.
pub trait CoverAlgorithm: Sync {
    /// Finds the best covering of `group` for every achievable filter count.
    ///
    /// # Arguments
    ///
    /// * `group` - Channels to cover, sorted by center
    /// * `config` - Widths and search granularity
    /// * `cancel` - Checked while searching; aborts the search when fired
    ///
    /// # Returns
    ///
    /// A [`SolutionTable`], empty if the group cannot be covered.
    fn solve_group(
        &self,
        group: &ChannelGroup,
        config: &SolverConfig,
        cancel: &CancelToken,
    ) -> Result<SolutionTable, SolveError>;
}
