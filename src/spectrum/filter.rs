//! Fixed-width bandpass filter and its quality scores.

use std::fmt::Display;

use super::{Channel, Hz, Span};

/// Center offsets are scored in MHz.
const CENTER_SCORE_SCALE: f64 = 1e6;

/// A bandpass filter placed at `center`, together with the channels it passes.
///
/// Scores are computed once at construction from the covered channels:
///
/// - `channel_score = -(n²)` where `n` is the number of covered channels.
/// - `center_score = -((center - mean(channel centers)) / 1e6)²`.
///
/// Higher is better for both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    center: Hz,
    span: Span,
    channels: Vec<Channel>,
    channel_score: f64,
    center_score: f64,
}

impl Filter {
    /// Creates a filter of `width` at `center` passing `channels`.
    pub fn new(center: Hz, width: Hz, mut channels: Vec<Channel>) -> Self {
        channels.sort();
        let n = channels.len() as f64;
        let channel_score = -(n * n);
        let center_score = if channels.is_empty() {
            0.0
        } else {
            let mean = channels.iter().map(|c| c.center() as f64).sum::<f64>() / n;
            let offset = (center as f64 - mean) / CENTER_SCORE_SCALE;
            -(offset * offset)
        };

        Self {
            center,
            span: Span::centered(center, width),
            channels,
            channel_score,
            center_score,
        }
    }

    pub fn center(&self) -> Hz {
        self.center
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn low(&self) -> Hz {
        self.span.low()
    }

    pub fn high(&self) -> Hz {
        self.span.high()
    }

    /// Channels passed by this filter, sorted by center.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel_score(&self) -> f64 {
        self.channel_score
    }

    pub fn center_score(&self) -> f64 {
        self.center_score
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "filter {} Hz {} passing {} channel(s)",
            self.center,
            self.span,
            self.channels.len()
        )
    }
}
