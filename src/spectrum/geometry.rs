//! Interval predicates between channels and filters.
//!
//! All predicates work on integer spans, so edge equality is exact.

use super::{Channel, Span};
use crate::config::SolverConfig;

/// Returns true if `filter` passes `channel` entirely, edges included.
pub fn fully_contains(filter: &Span, channel: &Span) -> bool {
    filter.contains(channel)
}

/// Returns true if either filter edge falls strictly inside the channel.
///
/// A filter lying entirely outside the channel, or containing it, never splits it.
/// An edge that coincides with a channel edge does not split it either.
pub fn splits(filter: &Span, channel: &Span) -> bool {
    channel.contains_strictly(filter.low()) || channel.contains_strictly(filter.high())
}

/// Returns true if the two filters share more than an edge.
pub fn overlaps(filter1: &Span, filter2: &Span) -> bool {
    filter1.overlaps(filter2)
}

/// Returns true if no single filter placement could ever affect both channels.
///
/// `a` must not be above `b`. The channels are independent once
/// `(b.center - a.center) + channel_width >= 2 * filter_width`.
pub fn independent(a: &Channel, b: &Channel, config: &SolverConfig) -> bool {
    debug_assert!(a.center() <= b.center(), "independent() expects ordered channels");
    (b.center() - a.center()) + config.channel_width >= 2 * config.filter_width
}
