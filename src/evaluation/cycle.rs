//! Closed-cycle distance of a city permutation.

use crate::distance::DistanceTable;

/// Fitness assigned to a tour that cannot be evaluated.
///
/// Larger than any real tour length, so such tours lose every comparison
/// against a valid one but still take part in the population.
pub const INVALID_FITNESS: u64 = u64::MAX;

/// Total directed distance of the closed cycle `tour[0] → … → tour[n-1] → tour[0]`.
///
/// Returns `None` if the tour length differs from the table's city count,
/// an index is out of range, or any edge along the cycle is missing under
/// the table's edge convention.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceTable;
/// use u_tsp::evaluation::cycle_distance;
///
/// let table = DistanceTable::build(vec![
///     ("A", vec![0, 10, 15]),
///     ("B", vec![10, 0, 35]),
///     ("C", vec![15, 35, 0]),
/// ]);
/// assert_eq!(cycle_distance(&table, &[0, 1, 2]), Some(10 + 35 + 15));
/// assert_eq!(cycle_distance(&table, &[0, 1]), None);
/// ```
pub fn cycle_distance(table: &DistanceTable, tour: &[usize]) -> Option<u64> {
    let n = table.city_count();
    if tour.len() != n || n == 0 {
        return None;
    }
    if tour.iter().any(|&c| c >= n) {
        return None;
    }

    let mut total = 0u64;
    for k in 0..n {
        let from = tour[k];
        let to = tour[(k + 1) % n];
        total += u64::from(table.edge_unchecked(from, to)?);
    }
    Some(total)
}

/// GA fitness: [`cycle_distance`] or [`INVALID_FITNESS`]. Lower is better.
pub fn fitness(table: &DistanceTable, tour: &[usize]) -> u64 {
    cycle_distance(table, tour).unwrap_or(INVALID_FITNESS)
}
