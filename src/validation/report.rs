//! Final verification of a selected filter set.

use std::fmt;

use itertools::Itertools;

use crate::spectrum::{fully_contains, overlaps, Channel, Span};

/// How a channel is passed by the selected filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelStatus {
    /// Exactly one filter passes the channel.
    Passed,
    /// No filter passes the channel.
    NotPassed,
    /// More than one filter passes the channel.
    MultiplyPassed,
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelStatus::Passed => write!(f, "passed"),
            ChannelStatus::NotPassed => write!(f, "not passed"),
            ChannelStatus::MultiplyPassed => write!(f, "passed by multiple filters"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelCheck {
    pub channel: Channel,
    pub passing_filters: usize,
    pub status: ChannelStatus,
}

/// Two selected filters whose spans overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterOverlap {
    pub first: Span,
    pub second: Span,
}

/// Outcome of [`check_solution`]. Discrepancies are reported, never corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub channels: Vec<ChannelCheck>,
    pub overlaps: Vec<FilterOverlap>,
}

impl ValidationReport {
    /// True if no filters overlap and every channel is passed exactly once.
    pub fn is_valid(&self) -> bool {
        self.overlaps.is_empty()
            && self
                .channels
                .iter()
                .all(|check| check.status == ChannelStatus::Passed)
    }

    /// Channels not passed exactly once.
    pub fn conflicts(&self) -> impl Iterator<Item = &ChannelCheck> {
        self.channels
            .iter()
            .filter(|check| check.status != ChannelStatus::Passed)
    }
}

/// Checks `filters` against the full channel list.
pub fn check_solution(channels: &[Channel], filters: &[Span]) -> ValidationReport {
    let overlaps = filters
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| overlaps(a, b))
        .map(|(a, b)| FilterOverlap {
            first: *a,
            second: *b,
        })
        .collect();

    let channels = channels
        .iter()
        .map(|channel| {
            let passing_filters = filters
                .iter()
                .filter(|filter| fully_contains(filter, &channel.span()))
                .count();
            let status = match passing_filters {
                0 => ChannelStatus::NotPassed,
                1 => ChannelStatus::Passed,
                _ => ChannelStatus::MultiplyPassed,
            };
            ChannelCheck {
                channel: *channel,
                passing_filters,
                status,
            }
        })
        .collect();

    ValidationReport { channels, overlaps }
}
