//! Splitting a channel set into groups that can be solved independently.
//!
//! Channels are sorted by center and cut wherever two neighbours are
//! [`independent`]: no filter could ever pass or split channels on both sides
//! of such a cut, so each run is an isolated sub-problem. Search cost is then
//! driven by the largest run rather than the total channel count.

use log::debug;

use crate::config::SolverConfig;
use crate::spectrum::{independent, Channel, Hz};

/// A maximal run of channels with no independent neighbours inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelGroup {
    channels: Vec<Channel>,
}

impl ChannelGroup {
    /// Creates a group from `channels` in any order.
    ///
    /// No independence check is made; use [`partition`] to split a channel set.
    pub fn new(mut channels: Vec<Channel>) -> Self {
        channels.sort();
        Self { channels }
    }

    /// Wraps channels already sorted by center.
    fn from_sorted(channels: Vec<Channel>) -> Self {
        debug_assert!(channels.windows(2).all(|w| w[0] <= w[1]));
        Self { channels }
    }

    /// Channels of this group, sorted by center.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn lowest(&self) -> Option<&Channel> {
        self.channels.first()
    }

    pub fn highest(&self) -> Option<&Channel> {
        self.channels.last()
    }
}

/// Partitions `channels` into independent groups ordered by frequency.
///
/// The input does not need to be sorted. Every channel lands in exactly one group.
pub fn partition(channels: &[Channel], config: &SolverConfig) -> Vec<ChannelGroup> {
    let mut sorted = channels.to_vec();
    sorted.sort();

    let mut groups = Vec::new();
    let mut current: Vec<Channel> = Vec::new();
    for channel in sorted {
        if let Some(prev) = current.last() {
            if independent(prev, &channel, config) {
                groups.push(ChannelGroup::from_sorted(std::mem::take(&mut current)));
            }
        }
        current.push(channel);
    }
    if !current.is_empty() {
        groups.push(ChannelGroup::from_sorted(current));
    }

    debug!(
        "Split {} channel(s) into {} independent group(s), largest has {}",
        channels.len(),
        groups.len(),
        groups.iter().map(ChannelGroup::len).max().unwrap_or(0)
    );
    groups
}

/// Midpoints between neighbouring groups, where renderers draw split markers.
pub fn cut_points(groups: &[ChannelGroup]) -> Vec<Hz> {
    groups
        .windows(2)
        .filter_map(|pair| {
            let below = pair[0].highest()?.center();
            let above = pair[1].lowest()?.center();
            Some(below + (above - below) / 2)
        })
        .collect()
}
