//! Admission control for candidate filters and post-hoc checks of full solutions.

mod report;

pub use report::{check_solution, ChannelCheck, ChannelStatus, FilterOverlap, ValidationReport};

use crate::spectrum::{fully_contains, overlaps, splits, Channel, Span};

/// Decides whether `candidate` may join the `committed` filters.
///
/// The candidate is accepted iff it splits none of `channels`, overlaps none
/// of `committed`, and fully contains at least one of `channels`.
pub fn validate_filter(candidate: &Span, committed: &[Span], channels: &[Channel]) -> bool {
    let splits_none = channels
        .iter()
        .all(|channel| !splits(candidate, &channel.span()));
    if !splits_none {
        return false;
    }

    if committed.iter().any(|filter| overlaps(candidate, filter)) {
        return false;
    }

    channels
        .iter()
        .any(|channel| fully_contains(candidate, &channel.span()))
}
