//! Fixed-width radio channel.

use std::fmt::Display;

use super::{Hz, Span};

/// A channel that must be passed intact by exactly one filter.
///
/// Identity is the center frequency: channels order and compare by center first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    center: Hz,
    span: Span,
}

impl Channel {
    /// Creates a channel of `width` centered on `center`.
    pub const fn new(center: Hz, width: Hz) -> Self {
        Self {
            center,
            span: Span::centered(center, width),
        }
    }

    pub const fn center(&self) -> Hz {
        self.center
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    pub const fn low(&self) -> Hz {
        self.span.low()
    }

    pub const fn high(&self) -> Hz {
        self.span.high()
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "channel {} Hz {}", self.center, self.span)
    }
}
