//! Crossover strategies for fixed-start permutations.
//!
//! Both strategies take two parents whose first gene is the start city and
//! produce one child with the same first gene.
//!
//! - [`OrderCrossover`] (OX): Davis (1985), keeps a segment of parent 1 and
//!   fills the rest in parent 2's relative order
//! - [`HeuristicGreedyCrossover`] (HGreX): Grefenstette (1987), grows the
//!   child along the cheaper of the two parents' successor edges
//!
//! [`Crossover`] selects one of them by value, e.g. from a configuration file.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceTable;

/// Produces one child permutation from two parent permutations.
///
/// Parents must be permutations of `0..n` of equal length sharing the same
/// first gene. The child is a permutation of `0..n` with that first gene.
pub trait CrossoverStrategy {
    /// Builds a child from `parent1` and `parent2`.
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        table: &DistanceTable,
        rng: &mut R,
    ) -> Vec<usize>;

    /// Human-readable operator name.
    fn name(&self) -> &'static str;
}

/// Order Crossover (OX) restricted to the free segment `1..n`.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Draw two cut points in `1..n`; `a = min`, `b = max`
/// 2. Copy `parent1[a..=b]` into the child at the same positions
/// 3. Walk parent 2's free segment starting after `b` (wrapping inside
///    `1..n`) and place each value not yet in the child at the next empty
///    child position, also starting after `b` and wrapping inside `1..n`
///
/// Position 0 is copied from parent 1 and never rearranged.
///
/// # Complexity
/// O(n) time, O(n) space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderCrossover;

impl CrossoverStrategy for OrderCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        _table: &DistanceTable,
        rng: &mut R,
    ) -> Vec<usize> {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");

        if n < 3 {
            return parent1.to_vec();
        }

        let cut1 = rng.random_range(1..n);
        let cut2 = rng.random_range(1..n);
        ox_child(parent1, parent2, cut1.min(cut2), cut1.max(cut2))
    }

    fn name(&self) -> &'static str {
        "Order Crossover (OX)"
    }
}

/// Builds one OX child for the segment `[a, b]`, `1 <= a <= b < n`.
fn ox_child(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = parent1.len();
    let free = n - 1;
    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];

    child[0] = parent1[0];
    used[parent1[0]] = true;
    for i in a..=b {
        child[i] = parent1[i];
        used[parent1[i]] = true;
    }

    // Positions 1..n visited in order starting right after b
    let after_b = |k: usize| 1 + (b + k) % free;

    let mut targets = (0..free).map(after_b).filter(|&p| p < a || p > b);
    for donor in (0..free).map(after_b).map(|p| parent2[p]) {
        if used[donor] {
            continue;
        }
        match targets.next() {
            Some(pos) => {
                child[pos] = donor;
                used[donor] = true;
            }
            None => break,
        }
    }

    debug_assert!(child.iter().all(|&c| c != usize::MAX), "OX left a hole");
    child
}

/// Heuristic Greedy Crossover (HGreX).
///
/// Starting from the start city, repeatedly looks at the city following the
/// current one in each parent:
///
/// - both successors missing or already placed → nearest unplaced city
///   reachable from the current one (lowest unplaced index if none is
///   reachable)
/// - exactly one usable → take it
/// - both usable → take the one over the cheaper edge; a missing edge is
///   costlier than any existing edge; ties favor parent 1
///
/// The last gene of a parent has no successor. The child is a valid
/// permutation by construction, no repair needed.
///
/// # Complexity
/// O(n²) worst case (nearest-city fallback), O(n) typical
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicGreedyCrossover;

impl CrossoverStrategy for HeuristicGreedyCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        table: &DistanceTable,
        _rng: &mut R,
    ) -> Vec<usize> {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");
        if n == 0 {
            return Vec::new();
        }

        let next1 = successors(parent1);
        let next2 = successors(parent2);

        let mut used = vec![false; n];
        let mut child = Vec::with_capacity(n);
        child.push(parent1[0]);
        used[parent1[0]] = true;

        while child.len() < n {
            let current = child[child.len() - 1];
            let usable = |s: Option<usize>| s.filter(|&c| !used[c]);

            let next = match (usable(next1[current]), usable(next2[current])) {
                (Some(s1), Some(s2)) => {
                    if edge_cost(table, current, s2) < edge_cost(table, current, s1) {
                        s2
                    } else {
                        s1
                    }
                }
                (Some(s1), None) => s1,
                (None, Some(s2)) => s2,
                (None, None) => {
                    let unused: Vec<usize> = (0..n).filter(|&c| !used[c]).collect();
                    let Some(&first) = unused.first() else {
                        break;
                    };
                    table.nearest_reachable(current, &unused).unwrap_or(first)
                }
            };

            used[next] = true;
            child.push(next);
        }

        child
    }

    fn name(&self) -> &'static str {
        "Heuristic Greedy Crossover (HGreX)"
    }
}

/// `succ[c]` = the gene following `c` in `parent`, `None` for the last gene.
fn successors(parent: &[usize]) -> Vec<Option<usize>> {
    let mut succ = vec![None; parent.len()];
    for pair in parent.windows(2) {
        succ[pair[0]] = Some(pair[1]);
    }
    succ
}

fn edge_cost(table: &DistanceTable, from: usize, to: usize) -> u64 {
    table
        .edge(from, to)
        .ok()
        .flatten()
        .map_or(u64::MAX, u64::from)
}

/// Crossover operator chosen by value.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::{Crossover, CrossoverStrategy};
///
/// assert_eq!(Crossover::default(), Crossover::Order);
/// assert_eq!(Crossover::HeuristicGreedy.name(), "Heuristic Greedy Crossover (HGreX)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossover {
    /// [`OrderCrossover`]
    #[default]
    Order,
    /// [`HeuristicGreedyCrossover`]
    HeuristicGreedy,
}

impl CrossoverStrategy for Crossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        table: &DistanceTable,
        rng: &mut R,
    ) -> Vec<usize> {
        match self {
            Crossover::Order => OrderCrossover.crossover(parent1, parent2, table, rng),
            Crossover::HeuristicGreedy => {
                HeuristicGreedyCrossover.crossover(parent1, parent2, table, rng)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Crossover::Order => OrderCrossover.name(),
            Crossover::HeuristicGreedy => HeuristicGreedyCrossover.name(),
        }
    }
}
