//! GA evolutionary loop.
//!
//! [`GeneticSolver`] owns the population and orchestrates each generation:
//! evaluation → elitism → tournament selection → crossover → mutation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::chromosome::Chromosome;
use super::config::GeneticConfig;
use super::crossover::{Crossover, CrossoverStrategy};
use super::progress::{NoProgress, ProgressObserver};
use super::selection::tournament_select;
use crate::distance::DistanceTable;
use crate::error::TspError;
use crate::evaluation::fitness;
use crate::models::Route;

/// Genetic algorithm for the fixed-start TSP.
///
/// Every chromosome starts at the start city; crossover and mutation only
/// rearrange the remaining positions. All randomness comes from one
/// solver-owned generator, so the same seed reproduces the same run.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceTable;
/// use u_tsp::ga::{GeneticConfig, GeneticSolver};
///
/// let table = DistanceTable::build(vec![
///     ("A", vec![0, 10, 15, 20]),
///     ("B", vec![10, 0, 35, 25]),
///     ("C", vec![15, 35, 0, 30]),
///     ("D", vec![20, 25, 30, 0]),
/// ]);
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_seed(42);
///
/// let mut solver = GeneticSolver::new(&table, "A", config).unwrap();
/// let route = solver.run(50).unwrap();
/// assert_eq!(route.names().first().map(String::as_str), Some("A"));
/// assert_eq!(route.names().last().map(String::as_str), Some("A"));
/// assert!(route.total_distance() <= 80);
/// ```
#[derive(Debug)]
pub struct GeneticSolver<'a, C: CrossoverStrategy = Crossover> {
    table: &'a DistanceTable,
    start: usize,
    config: GeneticConfig,
    crossover: C,
    rng: StdRng,
    seed: u64,
    population: Vec<Chromosome>,
    fitness_history: Vec<u64>,
}

impl<'a> GeneticSolver<'a, Crossover> {
    /// Creates a solver using the crossover operator named in `config`.
    ///
    /// Sizes are taken as given. For values typed in by a user, apply
    /// [`GeneticConfig::with_fallbacks`] first to replace a population below
    /// 10 or fewer than 10 generations with the defaults.
    ///
    /// # Errors
    ///
    /// [`TspError::CityNotFound`] for an unknown start city,
    /// [`TspError::InvalidConfig`] if `config` fails validation.
    pub fn new(
        table: &'a DistanceTable,
        start: &str,
        config: GeneticConfig,
    ) -> Result<Self, TspError> {
        let crossover = config.crossover;
        Self::with_crossover(table, start, config, crossover)
    }
}

impl<'a, C: CrossoverStrategy> GeneticSolver<'a, C> {
    /// Creates a solver bound to an explicit crossover strategy.
    ///
    /// `config.crossover` is ignored in favor of `crossover`. The initial
    /// population is generated and evaluated immediately.
    pub fn with_crossover(
        table: &'a DistanceTable,
        start: &str,
        config: GeneticConfig,
        crossover: C,
    ) -> Result<Self, TspError> {
        let start = table.require_city(start)?;
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let n = table.city_count();
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(start, n, &mut rng))
            .collect();
        evaluate_population(table, &mut population);

        let mut solver = Self {
            table,
            start,
            config,
            crossover,
            rng,
            seed,
            population,
            fitness_history: Vec::new(),
        };
        solver.fitness_history.push(solver.best().fitness());
        Ok(solver)
    }

    /// Runs `generations` generations and returns the best route.
    pub fn run(&mut self, generations: usize) -> Result<Route, TspError> {
        self.run_with_observer(generations, &mut NoProgress)
    }

    /// Runs the number of generations set in the configuration.
    pub fn run_configured(&mut self) -> Result<Route, TspError> {
        self.run(self.config.generations)
    }

    /// Runs `generations` generations, reporting progress to `observer`.
    ///
    /// The observer sees generation indices `0, k, 2k, …` for
    /// `k = progress_interval`, plus the final generation.
    pub fn run_with_observer<O: ProgressObserver>(
        &mut self,
        generations: usize,
        observer: &mut O,
    ) -> Result<Route, TspError> {
        let interval = self.config.progress_interval;
        for generation in 0..generations {
            self.evolve();

            let best = self.best().fitness();
            self.fitness_history.push(best);

            if interval > 0 && (generation % interval == 0 || generation + 1 == generations) {
                observer.on_generation(generation, best);
            }
        }
        self.best_route()
    }

    /// Produces the next generation and replaces the current one.
    fn evolve(&mut self) {
        let size = self.config.population_size;
        let elite_count = self.config.elite_count.min(size);

        // Stable: equal fitness keeps population order
        self.population.sort_by_key(Chromosome::fitness);

        let mut next: Vec<Chromosome> = Vec::with_capacity(size);
        next.extend(self.population[..elite_count].iter().cloned());

        while next.len() < size {
            let p1 = tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament_select(&self.population, self.config.tournament_size, &mut self.rng);

            let genes = self.crossover.crossover(
                self.population[p1].genes(),
                self.population[p2].genes(),
                self.table,
                &mut self.rng,
            );
            let mut child = Chromosome::new(genes);

            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                child.swap_mutate(&mut self.rng);
            }

            next.push(child);
        }

        // Elites keep their cached fitness
        evaluate_population(self.table, &mut next[elite_count..]);
        self.population = next;
    }

    fn best_route(&self) -> Result<Route, TspError> {
        let best = self.best();
        let mut stops = best.genes().to_vec();
        stops.push(self.start);
        Route::from_stops(self.table, stops, best.fitness())
    }

    /// The fittest chromosome of the current population (first on ties).
    pub fn best(&self) -> &Chromosome {
        self.population
            .iter()
            .min_by_key(|c| c.fitness())
            .expect("population must not be empty")
    }

    /// Current population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Best fitness of the initial population followed by the best fitness
    /// after each generation run so far.
    pub fn fitness_history(&self) -> &[u64] {
        &self.fitness_history
    }

    /// Index of the start city.
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Seed the random generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Solver configuration as passed in.
    ///
    /// For a solver built with [`with_crossover`](Self::with_crossover),
    /// `config().crossover` is not used; [`crossover`](Self::crossover)
    /// returns the strategy actually bound.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Bound crossover strategy.
    pub fn crossover(&self) -> &C {
        &self.crossover
    }
}

/// Evaluate all chromosomes of `population`.
fn evaluate_population(table: &DistanceTable, population: &mut [Chromosome]) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        population.par_iter_mut().for_each(|c| {
            let f = fitness(table, c.genes());
            c.set_fitness(f);
        });
    }

    #[cfg(not(feature = "parallel"))]
    for c in population.iter_mut() {
        let f = fitness(table, c.genes());
        c.set_fitness(f);
    }
}
