use thiserror::Error;

use crate::spectrum::Hz;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(
        "Search cancelled for the group of {channels} channel(s) starting at {lowest_channel} Hz"
    )]
    Cancelled { lowest_channel: Hz, channels: usize },
}
