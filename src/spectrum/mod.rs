//! Frequency-domain value types: spans, channels, filters and the predicates between them.

mod channel;
mod filter;
pub mod geometry;
mod span;

pub use channel::Channel;
pub use filter::Filter;
pub use geometry::{fully_contains, independent, overlaps, splits};
pub use span::Span;

/// Frequency in Hz.
pub type Hz = i64;
