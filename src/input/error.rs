use thiserror::Error;

use crate::config::ConfigError;
use crate::spectrum::Hz;

/// Errors raised while reading and validating the channel list.
///
/// All of them abort the run before any solving starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Channel {0} Hz lies outside the licensed bands")]
    OutOfBand(Hz),

    #[error("Channel {0} Hz is listed more than once")]
    DuplicateChannel(Hz),

    #[error("Line {line}: cannot parse '{text}' as a frequency")]
    Parse { line: usize, text: String },

    #[error("No channels were given")]
    Empty,

    #[error("Cannot build channels: {0}")]
    Config(#[from] ConfigError),
}
