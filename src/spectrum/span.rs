//! Closed frequency span used for both channels and filters.

use std::fmt::Display;

use super::Hz;

/// Closed range `[low, high]` of frequencies in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    low: Hz,
    high: Hz,
}

impl Span {
    /// Creates span `[low, high]`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub const fn new(low: Hz, high: Hz) -> Self {
        assert!(low <= high, "Span low edge must be <= high edge");
        Self { low, high }
    }

    /// Creates a span of `width` centered on `center`.
    ///
    /// `width` is expected to be even; [`crate::config::SolverConfig::validate`]
    /// rejects odd widths so that both edges stay on integer Hz.
    pub const fn centered(center: Hz, width: Hz) -> Self {
        Self::new(center - width / 2, center + width / 2)
    }

    pub const fn low(&self) -> Hz {
        self.low
    }

    pub const fn high(&self) -> Hz {
        self.high
    }

    /// Returns true if `other` lies within `[low, high]`, edges included.
    pub const fn contains(&self, other: &Span) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Returns true if `freq` lies strictly inside `(low, high)`.
    pub const fn contains_strictly(&self, freq: Hz) -> bool {
        self.low < freq && freq < self.high
    }

    /// Checks if the two spans share more than an edge.
    ///
    /// Touching spans (`self.high == other.low`) do not overlap.
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.low < other.high && other.low < self.high
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(100, 200);
        assert_eq!(span.low(), 100);
        assert_eq!(span.high(), 200);
    }

    #[test]
    fn test_span_centered() {
        let span = Span::centered(851_037_500, 12_500);
        assert_eq!(span.low(), 851_031_250);
        assert_eq!(span.high(), 851_043_750);
    }

    #[test]
    #[should_panic(expected = "Span low edge must be <= high edge")]
    fn test_inverted_span_panics() {
        let _ = Span::new(10, 0);
    }

    #[test]
    fn test_span_contains() {
        let outer = Span::new(0, 100);
        assert!(outer.contains(&Span::new(0, 100)));
        assert!(outer.contains(&Span::new(10, 90)));
        assert!(!outer.contains(&Span::new(-1, 50)));
        assert!(!outer.contains(&Span::new(50, 101)));
    }

    #[test]
    fn test_span_contains_strictly() {
        let span = Span::new(0, 100);
        assert!(span.contains_strictly(50));
        assert!(!span.contains_strictly(0));
        assert!(!span.contains_strictly(100));
    }

    #[test]
    fn test_span_overlaps() {
        let a = Span::new(0, 100);
        let b = Span::new(50, 150);
        let c = Span::new(100, 200);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Shared edge only.
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(-5, 5).to_string(), "[-5, 5]");
    }
}
