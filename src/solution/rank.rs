//! Total order over candidate coverings.

use std::cmp::Ordering;

/// Ranking key for a covering. Smaller is better.
///
/// Compares by filter count (fewer first), then channel score (higher first),
/// then center score (higher first). Scores use IEEE-754 total order, so the
/// key is usable with `sort`, `min` and ordered containers.
#[derive(Debug, Clone, Copy)]
pub struct Rank {
    pub filter_count: usize,
    pub channel_score: f64,
    pub center_score: f64,
}

impl Rank {
    pub fn new(filter_count: usize, channel_score: f64, center_score: f64) -> Self {
        Self {
            filter_count,
            channel_score,
            center_score,
        }
    }

    /// Returns true if `self` ranks strictly ahead of `other`.
    pub fn is_better_than(&self, other: &Rank) -> bool {
        self.cmp(other) == Ordering::Less
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.filter_count
            .cmp(&other.filter_count)
            .then_with(|| other.channel_score.total_cmp(&self.channel_score))
            .then_with(|| other.center_score.total_cmp(&self.center_score))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_filters_win() {
        let a = Rank::new(2, -100.0, -100.0);
        let b = Rank::new(3, 0.0, 0.0);
        assert!(a < b);
        assert!(a.is_better_than(&b));
    }

    #[test]
    fn higher_channel_score_breaks_count_tie() {
        let a = Rank::new(2, -4.0, -1.0);
        let b = Rank::new(2, -9.0, 0.0);
        assert!(a < b);
    }

    #[test]
    fn higher_center_score_breaks_remaining_tie() {
        let a = Rank::new(2, -4.0, -0.001);
        let b = Rank::new(2, -4.0, -0.002);
        assert!(a < b);
        assert!(!b.is_better_than(&a));
    }

    #[test]
    fn equal_keys_are_equal() {
        let a = Rank::new(1, -1.0, 0.0);
        assert_eq!(a, Rank::new(1, -1.0, 0.0));
        assert!(!a.is_better_than(&a));
    }

    #[test]
    fn sorting_puts_best_first() {
        let mut ranks = vec![
            Rank::new(3, -1.0, 0.0),
            Rank::new(2, -9.0, 0.0),
            Rank::new(2, -4.0, -0.5),
            Rank::new(2, -4.0, 0.0),
        ];
        ranks.sort();
        assert_eq!(ranks[0], Rank::new(2, -4.0, 0.0));
        assert_eq!(ranks[1], Rank::new(2, -4.0, -0.5));
        assert_eq!(ranks[2], Rank::new(2, -9.0, 0.0));
        assert_eq!(ranks[3], Rank::new(3, -1.0, 0.0));
    }
}
