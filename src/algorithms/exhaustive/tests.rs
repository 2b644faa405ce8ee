//! Test suite for the exhaustive covering search.

use super::*;
use crate::spectrum::{fully_contains, splits, Channel, Hz, Span};
use crate::validation::check_solution;
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Narrow widths keep the grid small enough for brute-force comparison.
fn narrow() -> SolverConfig {
    SolverConfig::new(12_500, 25_000)
}

fn group(centers: &[Hz], config: &SolverConfig) -> ChannelGroup {
    ChannelGroup::new(
        centers
            .iter()
            .map(|&c| Channel::new(c, config.channel_width))
            .collect(),
    )
}

fn solve(group: &ChannelGroup, config: &SolverConfig) -> SolutionTable {
    ExhaustiveSearch::new()
        .solve_group(group, config, &CancelToken::new())
        .unwrap()
}

/// Asserts every covering in `table` is a valid, split-free cover of `group`.
fn assert_table_valid(table: &SolutionTable, group: &ChannelGroup) {
    for (count, sub) in table.filter_counts().zip(table.values()) {
        assert_eq!(sub.filter_count(), count);
        let spans: Vec<Span> = sub.filters().iter().map(|f| f.span()).collect();
        let report = check_solution(group.channels(), &spans);
        assert!(report.is_valid(), "invalid covering: {report:?}");
        for span in &spans {
            for channel in group.channels() {
                assert!(!splits(span, &channel.span()), "{span} splits {channel}");
            }
        }
        let passed: usize = sub.filters().iter().map(|f| f.channels().len()).sum();
        assert_eq!(passed, group.len());
    }
}

/// Tries every subset of grid centers and keeps the best valid covering per count.
fn brute_force(group: &ChannelGroup, config: &SolverConfig) -> SolutionTable {
    let grid = PlacementGrid::new(
        group.lowest().unwrap(),
        group.highest().unwrap(),
        config,
    );
    let centers: Vec<Hz> = grid.centers().collect();
    assert!(centers.len() <= 16, "grid too large for brute force");

    let mut table = SolutionTable::new();
    for mask in 1u32..(1 << centers.len()) {
        let chosen: Vec<Hz> = centers
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &c)| c)
            .collect();
        let spans: Vec<Span> = chosen
            .iter()
            .map(|&c| Span::centered(c, config.filter_width))
            .collect();

        if !check_solution(group.channels(), &spans).is_valid() {
            continue;
        }
        let admissible = spans.iter().all(|span| {
            group.channels().iter().all(|c| !splits(span, &c.span()))
                && group.channels().iter().any(|c| fully_contains(span, &c.span()))
        });
        if !admissible {
            continue;
        }

        let filters = chosen
            .iter()
            .zip(&spans)
            .map(|(&center, span)| {
                let passed = group
                    .channels()
                    .iter()
                    .filter(|c| fully_contains(span, &c.span()))
                    .copied()
                    .collect();
                Filter::new(center, config.filter_width, passed)
            })
            .collect();
        table.offer(SubSolution::new(filters, group.channels().to_vec()));
    }
    table
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_single_channel_gets_centered_filter() {
        let config = SolverConfig::default();
        let g = group(&[851_037_500], &config);
        let table = solve(&g, &config);

        assert_eq!(table.len(), 1);
        let sub = table.get(1).unwrap();
        assert_eq!(sub.filters()[0].center(), 851_037_500);
        assert_abs_diff_eq!(sub.center_score(), 0.0);
        assert_abs_diff_eq!(sub.channel_score(), -1.0);
    }

    #[test]
    fn test_adjacent_pair_one_or_two_filters() {
        let config = narrow();
        let g = group(&[0, 12_500], &config);
        let table = solve(&g, &config);

        assert_eq!(table.filter_counts().collect::<Vec<_>>(), vec![1, 2]);

        let one = table.get(1).unwrap();
        assert_eq!(one.filters()[0].center(), 6_250);
        assert_eq!(one.filters()[0].channels().len(), 2);
        assert_abs_diff_eq!(one.center_score(), 0.0);

        let two = table.get(2).unwrap();
        let centers: Vec<Hz> = two.filters().iter().map(|f| f.center()).collect();
        assert_eq!(centers, vec![-6_250, 18_750]);
        assert_table_valid(&table, &g);
    }

    #[test]
    fn test_chain_of_overlapping_channels_is_infeasible() {
        let config = narrow();
        // The open channel intervals cover (-6250, 31250) without a gap, wider than a filter.
        let g = group(&[0, 6_250, 12_500, 18_750, 25_000], &config);
        assert!(solve(&g, &config).is_empty());
    }

    #[test]
    fn test_three_spread_channels() {
        let config = narrow();
        let g = group(&[0, 12_500, 25_000], &config);
        let table = solve(&g, &config);

        // Span of 37.5 kHz cannot fit one 25 kHz filter, and the middle
        // channel cannot be passed alone without splitting a neighbour.
        assert_eq!(table.filter_counts().collect::<Vec<_>>(), vec![2]);
        assert_table_valid(&table, &g);
    }

    #[test]
    fn test_equal_count_prefers_balanced_filters() {
        let config = narrow();
        let g = group(&[0, 12_500, 25_000, 37_500], &config);
        let table = solve(&g, &config);

        let two = table.get(2).unwrap();
        assert!(two.filters().iter().all(|f| f.channels().len() == 2));
        assert_abs_diff_eq!(two.channel_score(), -4.0);
    }

    #[test]
    fn test_dense_group_at_default_widths() {
        let config = SolverConfig::default();
        let g = group(
            &[
                851_037_500,
                851_150_000,
                851_200_000,
                851_262_500,
                851_287_500,
            ],
            &config,
        );
        let table = solve(&g, &config);
        assert!(!table.is_empty());
        assert_table_valid(&table, &g);
    }

    #[test]
    fn test_empty_group() {
        let config = SolverConfig::default();
        let table = solve(&ChannelGroup::new(Vec::new()), &config);
        assert!(table.is_empty());
    }
}

#[cfg(test)]
mod completeness {
    use super::*;

    #[test]
    fn test_matches_brute_force_on_fixed_groups() {
        let config = narrow();
        for centers in [
            vec![0, 12_500],
            vec![0, 12_500, 25_000],
            vec![0, 6_250, 25_000],
            vec![0, 18_750, 31_250],
            vec![0, 9_375, 21_875, 43_750],
        ] {
            let g = group(&centers, &config);
            let table = solve(&g, &config);
            let expected = brute_force(&g, &config);

            assert_eq!(
                table.filter_counts().collect::<Vec<_>>(),
                expected.filter_counts().collect::<Vec<_>>(),
                "filter counts differ for {centers:?}"
            );
            for count in expected.filter_counts() {
                assert_eq!(
                    table.get(count).map(SubSolution::rank),
                    expected.get(count).map(SubSolution::rank),
                    "best {count}-filter covering differs for {centers:?}"
                );
            }
        }
    }

    #[test]
    fn test_matches_brute_force_on_random_groups() {
        let config = narrow();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..40 {
            let n = rng.gen_range(2..=4);
            let mut centers: Vec<Hz> = Vec::with_capacity(n);
            while centers.len() < n {
                let c = rng.gen_range(0..=16) * 3_125;
                if !centers.contains(&c) {
                    centers.push(c);
                }
            }
            let g = group(&centers, &config);
            let table = solve(&g, &config);
            let expected = brute_force(&g, &config);

            assert_eq!(
                table.filter_counts().collect::<Vec<_>>(),
                expected.filter_counts().collect::<Vec<_>>(),
                "filter counts differ for {centers:?}"
            );
            for count in expected.filter_counts() {
                assert_eq!(
                    table.get(count).map(SubSolution::rank),
                    expected.get(count).map(SubSolution::rank),
                    "best {count}-filter covering differs for {centers:?}"
                );
            }
            assert_table_valid(&table, &g);
        }
    }
}

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn test_cancelled_token_aborts_search() {
        let config = narrow();
        let g = group(&[0, 12_500], &config);
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = ExhaustiveSearch::new().solve_group(&g, &config, &cancel);
        assert_eq!(
            result,
            Err(SolveError::Cancelled {
                lowest_channel: 0,
                channels: 2
            })
        );
    }

    #[test]
    fn test_expired_deadline_aborts_search() {
        let config = narrow();
        let g = group(&[0, 12_500, 25_000], &config);
        let cancel = CancelToken::new().child(Some(std::time::Duration::ZERO));

        let result = ExhaustiveSearch::new().solve_group(&g, &config, &cancel);
        assert!(matches!(result, Err(SolveError::Cancelled { .. })));
    }
}
