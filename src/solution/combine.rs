//! Global combiner: picks one covering per group and keeps the best combination.

use log::{debug, warn};

use super::errors::CombineError;
use super::rank::Rank;
use super::sub_solution::{SolutionTable, SubSolution};
use super::Solution;
use crate::algorithms::CancelToken;

/// Rank of the combination of `parts`: filter counts add up, scores are averaged.
pub(crate) fn combined_rank<'a, I>(parts: I) -> Rank
where
    I: IntoIterator<Item = &'a SubSolution>,
{
    let mut filter_count = 0;
    let mut channel_score = 0.0;
    let mut center_score = 0.0;
    let mut n = 0usize;
    for part in parts {
        filter_count += part.filter_count();
        channel_score += part.channel_score();
        center_score += part.center_score();
        n += 1;
    }
    let n = n.max(1) as f64;
    Rank::new(filter_count, channel_score / n, center_score / n)
}

/// Selects the best solution using at most `filter_count_max` filters.
///
/// Takes exactly one covering from each table. Filter count is the leading
/// [`Rank`] key and adds up across groups, so the best combination within
/// budget is always the one taking every group's fewest-filter covering, and
/// that covering is already its group's best at that count. It is
/// assembled group by group without ranking any other combination.
///
/// # Errors
///
/// - [`CombineError::NoGroups`] if `tables` is empty.
/// - [`CombineError::InfeasibleGroup`] if any table is empty.
/// - [`CombineError::BudgetExceeded`] if even the smallest combination is over budget.
/// - [`CombineError::Cancelled`] if `cancel` fires while assembling.
pub fn combine(
    tables: &[SolutionTable],
    filter_count_max: usize,
    cancel: &CancelToken,
) -> Result<Solution, CombineError> {
    if tables.is_empty() {
        return Err(CombineError::NoGroups);
    }

    let mut parts = Vec::with_capacity(tables.len());
    let mut min_filter_count = 0usize;
    for (group, table) in tables.iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(CombineError::Cancelled { group });
        }
        let Some(fewest) = table.fewest() else {
            return Err(CombineError::InfeasibleGroup { group });
        };
        min_filter_count = min_filter_count.saturating_add(fewest.filter_count());
        parts.push(fewest);
    }

    if min_filter_count > filter_count_max {
        warn!(
            "No solution fits the budget of {} filter(s); minimum achievable is {}",
            filter_count_max, min_filter_count
        );
        return Err(CombineError::BudgetExceeded {
            min_filter_count,
            filter_count_max,
        });
    }

    debug!(
        "Combined the fewest-filter coverings of {} group(s) into {} filter(s)",
        tables.len(),
        min_filter_count
    );
    Ok(Solution::new(parts.into_iter().cloned().collect()))
}
