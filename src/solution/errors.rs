use thiserror::Error;

/// Reasons the combiner cannot produce a solution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombineError {
    #[error("There are no channel groups to combine")]
    NoGroups,

    #[error("Channel group {group} cannot be covered by any filter placement")]
    InfeasibleGroup { group: usize },

    #[error(
        "The best solution needs {min_filter_count} filter(s) but at most {filter_count_max} are allowed"
    )]
    BudgetExceeded {
        min_filter_count: usize,
        filter_count_max: usize,
    },

    #[error("Combining was cancelled at channel group {group}")]
    Cancelled { group: usize },
}
