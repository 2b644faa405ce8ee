//! Configuration shared by the partitioner, the search and the combiner.

use std::time::Duration;

use thiserror::Error;

use crate::spectrum::{Hz, Span};

/// Configuration for a filter planning run.
///
/// Every component reads the widths from here; nothing is process-global.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Width of every channel, in Hz.
    pub channel_width: Hz,
    /// Width of every filter, in Hz. Must exceed `channel_width`.
    pub filter_width: Hz,
    /// Maximum number of filters an accepted solution may use.
    pub filter_count_max: usize,
    /// Step between candidate filter centers during the grid search.
    pub search_granularity: Hz,
    /// Padding added on both sides of the plotted frequency range.
    pub plot_freq_margin: Hz,
    /// Wall-clock limit for the subgroup search. `None` searches to completion.
    pub timeout: Option<Duration>,
}

/// Invalid combination of configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value} Hz")]
    NonPositive { name: &'static str, value: Hz },

    #[error("{name} must be even so both edges fall on whole Hz, got {value} Hz")]
    OddWidth { name: &'static str, value: Hz },

    #[error("filter width ({filter_width} Hz) must exceed channel width ({channel_width} Hz)")]
    FilterNotWider { channel_width: Hz, filter_width: Hz },
}

impl SolverConfig {
    pub const DEFAULT_CHANNEL_WIDTH: Hz = 12_500;
    pub const DEFAULT_FILTER_WIDTH: Hz = 75_000;
    pub const DEFAULT_PLOT_FREQ_MARGIN: Hz = 200_000;

    /// Creates a configuration with the given widths and no filter budget.
    ///
    /// The search granularity is derived as half the channel width.
    pub fn new(channel_width: Hz, filter_width: Hz) -> Self {
        Self {
            channel_width,
            filter_width,
            filter_count_max: usize::MAX,
            search_granularity: channel_width / 2,
            plot_freq_margin: Self::DEFAULT_PLOT_FREQ_MARGIN,
            timeout: None,
        }
    }

    /// Sets the channel width and re-derives the search granularity from it.
    pub fn with_channel_width(mut self, channel_width: Hz) -> Self {
        self.channel_width = channel_width;
        self.search_granularity = channel_width / 2;
        self
    }

    pub fn with_filter_width(mut self, filter_width: Hz) -> Self {
        self.filter_width = filter_width;
        self
    }

    pub fn with_filter_count_max(mut self, filter_count_max: usize) -> Self {
        self.filter_count_max = filter_count_max;
        self
    }

    pub fn with_search_granularity(mut self, search_granularity: Hz) -> Self {
        self.search_granularity = search_granularity;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Checks the widths and granularity are usable by the search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("channel width", self.channel_width),
            ("filter width", self.filter_width),
            ("search granularity", self.search_granularity),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("channel width", self.channel_width),
            ("filter width", self.filter_width),
        ] {
            if value % 2 != 0 {
                return Err(ConfigError::OddWidth { name, value });
            }
        }
        if self.filter_width <= self.channel_width {
            return Err(ConfigError::FilterNotWider {
                channel_width: self.channel_width,
                filter_width: self.filter_width,
            });
        }
        Ok(())
    }

    pub fn filter_half_width(&self) -> Hz {
        self.filter_width / 2
    }

    /// Frequency range a renderer should display for the given spans.
    ///
    /// Returns `None` when there is nothing to display.
    pub fn plot_range<I>(&self, spans: I) -> Option<Span>
    where
        I: IntoIterator<Item = Span>,
    {
        let mut iter = spans.into_iter();
        let first = iter.next()?;
        let (low, high) = iter.fold((first.low(), first.high()), |(lo, hi), s| {
            (lo.min(s.low()), hi.max(s.high()))
        });
        Some(Span::new(
            low - self.plot_freq_margin,
            high + self.plot_freq_margin,
        ))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHANNEL_WIDTH, Self::DEFAULT_FILTER_WIDTH)
    }
}
