use thiserror::Error;

use crate::algorithms::SolveError;
use crate::config::ConfigError;
use crate::input::InputError;
use crate::solution::CombineError;

/// Any reason a planning run produces no filter list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Combine(#[from] CombineError),
}
