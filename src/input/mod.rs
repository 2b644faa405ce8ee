//! Reading channel lists and validating channel frequencies.
//!
//! Channel lists are plain text with one center frequency per line. Values
//! below 1000 are taken as MHz, everything else as Hz.

mod error;

use std::collections::HashSet;
use std::ops::RangeInclusive;

use log::debug;

pub use error::InputError;

use crate::config::SolverConfig;
use crate::spectrum::{Channel, Hz};

/// Bands channels are allowed to occupy.
pub const LICENSED_BANDS: [RangeInclusive<Hz>; 2] =
    [758_000_000..=775_000_000, 851_000_000..=869_000_000];

/// Values below this are interpreted as MHz.
const MHZ_THRESHOLD: f64 = 1000.0;
const HZ_PER_MHZ: f64 = 1e6;

/// Parses a channel list into frequencies in Hz.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
pub fn parse_channel_list(text: &str) -> Result<Vec<Hz>, InputError> {
    let mut freqs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_error = || InputError::Parse {
            line: i + 1,
            text: line.to_string(),
        };
        let value: f64 = line.parse().map_err(|_| parse_error())?;
        if !value.is_finite() {
            return Err(parse_error());
        }
        let hz = if value < MHZ_THRESHOLD {
            value * HZ_PER_MHZ
        } else {
            value
        };
        freqs.push(hz.round() as Hz);
    }
    Ok(freqs)
}

/// Returns true if `freq` lies in one of the [`LICENSED_BANDS`].
pub fn in_licensed_band(freq: Hz) -> bool {
    LICENSED_BANDS.iter().any(|band| band.contains(&freq))
}

/// Turns validated frequencies into channels sorted by center.
///
/// Rejects an invalid `config`, empty input, out-of-band frequencies and duplicates.
pub fn validate_channels(freqs: &[Hz], config: &SolverConfig) -> Result<Vec<Channel>, InputError> {
    config.validate()?;
    if freqs.is_empty() {
        return Err(InputError::Empty);
    }

    let mut seen = HashSet::with_capacity(freqs.len());
    for &freq in freqs {
        if !in_licensed_band(freq) {
            return Err(InputError::OutOfBand(freq));
        }
        if !seen.insert(freq) {
            return Err(InputError::DuplicateChannel(freq));
        }
    }

    let mut channels: Vec<Channel> = freqs
        .iter()
        .map(|&f| Channel::new(f, config.channel_width))
        .collect();
    channels.sort();
    debug!("Validated {} channel(s)", channels.len());
    Ok(channels)
}
