//! Fixed-start permutation chromosome.
//!
//! A chromosome encodes a closed tour as a permutation of all city indices
//! whose first gene is the start city. Only positions `1..n` (the free
//! segment) are ever rearranged by crossover and mutation.

use rand::Rng;

use crate::evaluation::INVALID_FITNESS;

/// A candidate tour: a permutation of `0..n` with `genes[0] == start`.
///
/// The fitness value caches the total cycle distance. Lower fitness = better
/// solution; unevaluated chromosomes carry [`INVALID_FITNESS`].
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Chromosome;
///
/// let c = Chromosome::new(vec![2, 0, 1]);
/// assert_eq!(c.start(), Some(2));
/// assert!(c.is_valid_tour(2, 3));
/// assert_eq!(c.fitness(), u64::MAX);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<usize>,
    fitness: u64,
}

impl Chromosome {
    /// Creates an unevaluated chromosome from a permutation.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: INVALID_FITNESS,
        }
    }

    /// Creates `[start] + shuffle(all other indices)` over `city_count` cities.
    pub fn random<R: Rng>(start: usize, city_count: usize, rng: &mut R) -> Self {
        let mut genes = Vec::with_capacity(city_count);
        genes.push(start);
        genes.extend((0..city_count).filter(|&c| c != start));

        // Fisher-Yates over the free segment
        for i in (2..genes.len()).rev() {
            let j = rng.random_range(1..=i);
            genes.swap(i, j);
        }

        Self::new(genes)
    }

    /// Returns the city permutation.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of genes (cities).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// First gene, the fixed start city.
    pub fn start(&self) -> Option<usize> {
        self.genes.first().copied()
    }

    /// Cached fitness (total cycle distance).
    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    /// Stores an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: u64) {
        self.fitness = fitness;
    }

    /// Swap mutation over the free segment.
    ///
    /// Picks two distinct positions in `1..n` and swaps them. Position 0 is
    /// never touched. No-op for `n <= 2`. Resets the cached fitness.
    pub fn swap_mutate<R: Rng>(&mut self, rng: &mut R) {
        let n = self.genes.len();
        if n <= 2 {
            return;
        }
        let i = rng.random_range(1..n);
        let mut j = rng.random_range(1..n);
        while j == i {
            j = rng.random_range(1..n);
        }
        self.genes.swap(i, j);
        self.fitness = INVALID_FITNESS;
    }

    /// Returns true if the genes are a permutation of `0..city_count`
    /// starting at `start`.
    pub fn is_valid_tour(&self, start: usize, city_count: usize) -> bool {
        is_valid_tour(&self.genes, start, city_count)
    }
}

/// Returns true if `genes` is a permutation of `0..city_count` with
/// `genes[0] == start`.
pub fn is_valid_tour(genes: &[usize], start: usize, city_count: usize) -> bool {
    if genes.len() != city_count || genes.first() != Some(&start) {
        return false;
    }
    let mut seen = vec![false; city_count];
    for &g in genes {
        if g >= city_count || seen[g] {
            return false;
        }
        seen[g] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chromosome_new() {
        let c = Chromosome::new(vec![0, 1, 2]);
        assert_eq!(c.genes(), &[0, 1, 2]);
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert_eq!(c.fitness(), INVALID_FITNESS);
    }

    #[test]
    fn test_chromosome_set_fitness() {
        let mut c = Chromosome::new(vec![0, 1, 2]);
        c.set_fitness(42);
        assert_eq!(c.fitness(), 42);
        let cloned = c.clone();
        assert_eq!(cloned.fitness(), 42);
    }

    #[test]
    fn test_random_keeps_start() {
        let mut rng = StdRng::seed_from_u64(42);
        for start in 0..6 {
            for _ in 0..20 {
                let c = Chromosome::random(start, 6, &mut rng);
                assert!(c.is_valid_tour(start, 6), "{:?}", c.genes());
            }
        }
    }

    #[test]
    fn test_random_covers_all_orders() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(Chromosome::random(0, 4, &mut rng).genes().to_vec());
        }
        // 3! arrangements of the free segment
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_random_tiny() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Chromosome::random(0, 1, &mut rng).genes(), &[0]);
        assert_eq!(Chromosome::random(1, 2, &mut rng).genes(), &[1, 0]);
    }

    #[test]
    fn test_swap_mutate_changes_two_free_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut c = Chromosome::new(vec![0, 1, 2, 3, 4]);
            c.set_fitness(10);
            c.swap_mutate(&mut rng);
            assert!(c.is_valid_tour(0, 5));
            let moved = c
                .genes()
                .iter()
                .enumerate()
                .filter(|&(i, &g)| i != g)
                .count();
            assert_eq!(moved, 2);
            assert_eq!(c.fitness(), INVALID_FITNESS);
        }
    }

    #[test]
    fn test_swap_mutate_skips_small() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = Chromosome::new(vec![1, 0]);
        c.swap_mutate(&mut rng);
        assert_eq!(c.genes(), &[1, 0]);
        let mut c = Chromosome::new(vec![0]);
        c.swap_mutate(&mut rng);
        assert_eq!(c.genes(), &[0]);
    }

    #[test]
    fn test_is_valid_tour() {
        assert!(is_valid_tour(&[1, 0, 2], 1, 3));
        assert!(!is_valid_tour(&[0, 1, 2], 1, 3));
        assert!(!is_valid_tour(&[1, 1, 2], 1, 3));
        assert!(!is_valid_tour(&[1, 0], 1, 3));
        assert!(!is_valid_tour(&[1, 0, 3], 1, 3));
    }
}
