//! bandcover - minimal bandpass filter plans for fixed-width radio channels
//!
//! Places the fewest fixed-width filters such that every channel is passed
//! intact by exactly one filter, no filter clips a channel edge, and no two
//! filters overlap. Among equally small plans, balanced and well-centered
//! filters win.
//!
//! The channel set is first split into independent groups, each group is
//! searched exhaustively on a placement grid, and the per-group results are
//! combined under a global filter budget.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod partition;
pub mod planner;
pub mod solution;
pub mod spectrum;
pub mod validation;

pub use config::SolverConfig;
pub use error::PlanError;
pub use planner::{Plan, Planner};
pub use spectrum::{Channel, Filter, Hz, Span};
