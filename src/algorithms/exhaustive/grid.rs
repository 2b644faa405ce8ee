//! Discrete grid of candidate filter centers for one group.

use crate::config::SolverConfig;
use crate::spectrum::{Channel, Hz};

/// Candidate centers `origin + k * step` for `k >= 0`, up to `end`.
///
/// `origin` is the lowest center at which a filter can still pass the
/// group's lowest channel, `end` the highest at which it can pass the
/// highest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementGrid {
    origin: Hz,
    end: Hz,
    step: Hz,
    filter_half_width: Hz,
}

impl PlacementGrid {
    /// Builds the grid spanning the channels `lowest..=highest`.
    pub fn new(lowest: &Channel, highest: &Channel, config: &SolverConfig) -> Self {
        let filter_half_width = config.filter_half_width();
        Self {
            origin: lowest.high() - filter_half_width,
            end: highest.low() + filter_half_width,
            step: config.search_granularity,
            filter_half_width,
        }
    }

    /// All grid centers, low to high.
    pub fn centers(self) -> impl Iterator<Item = Hz> {
        self.between(self.origin, self.end)
    }

    /// Grid centers at which a filter fully contains `channel`, low to high.
    pub fn centers_containing(self, channel: &Channel) -> impl Iterator<Item = Hz> {
        self.between(
            channel.high() - self.filter_half_width,
            channel.low() + self.filter_half_width,
        )
    }

    /// Grid points within `[low, high]` clamped to the grid bounds.
    fn between(self, low: Hz, high: Hz) -> impl Iterator<Item = Hz> {
        let low = low.max(self.origin);
        let high = high.min(self.end);
        let offset = low - self.origin;
        let first = self.origin + (offset + self.step - 1) / self.step * self.step;
        // An empty range when `first > high`.
        (first..=high).step_by(self.step as usize)
    }
}
