//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::chromosome::Chromosome;

/// Picks a parent index by tournament.
///
/// Draws `tournament_size` indices uniformly at random **with replacement**
/// and returns the one with the lowest fitness. Ties go to the first drawn.
/// A `tournament_size` of 0 is treated as 1.
///
/// Higher `tournament_size` = stronger selection pressure.
///
/// # Panics
///
/// Panics if `population` is empty.
///
/// # Complexity
/// O(k) per selection
pub fn tournament_select<R: Rng>(
    population: &[Chromosome],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    assert!(!population.is_empty(), "population must not be empty");

    let mut best = rng.random_range(0..population.len());
    for _ in 1..tournament_size {
        let candidate = rng.random_range(0..population.len());
        if population[candidate].fitness() < population[best].fitness() {
            best = candidate;
        }
    }
    best
}
