//! GA configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use super::crossover::Crossover;
use crate::error::TspError;

/// Population size used when a requested size is below [`MIN_POPULATION_SIZE`].
pub const DEFAULT_POPULATION_SIZE: usize = 50;

/// Generation count used when a requested count is below [`MIN_GENERATIONS`].
pub const DEFAULT_GENERATIONS: usize = 200;

/// Smallest population size accepted by [`GeneticConfig::with_fallbacks`].
pub const MIN_POPULATION_SIZE: usize = 10;

/// Smallest generation count accepted by [`GeneticConfig::with_fallbacks`].
pub const MIN_GENERATIONS: usize = 10;

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::{Crossover, GeneticConfig};
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.mutation_rate, 0.01);
/// assert_eq!(config.tournament_size, 5);
/// assert_eq!(config.elite_count, 2);
/// assert_eq!(config.crossover, Crossover::Order);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{Crossover, GeneticConfig};
///
/// let config = GeneticConfig::default()
///     .with_population_size(100)
///     .with_crossover(Crossover::HeuristicGreedy)
///     .with_elite_count(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Generations run by [`GeneticSolver::run_configured`](super::GeneticSolver::run_configured).
    pub generations: usize,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of draws per tournament selection.
    pub tournament_size: usize,

    /// Best chromosomes copied unchanged into the next generation.
    pub elite_count: usize,

    /// Crossover operator.
    pub crossover: Crossover,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the solver exposes the seed it used.
    pub seed: Option<u64>,

    /// Report progress every this many generations (and on the last one).
    ///
    /// Set to 0 to disable progress reporting.
    pub progress_interval: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            mutation_rate: 0.01,
            tournament_size: 5,
            elite_count: 2,
            crossover: Crossover::default(),
            seed: None,
            progress_interval: 10,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_progress_interval(mut self, every: usize) -> Self {
        self.progress_interval = every;
        self
    }

    /// Replaces unusably small sizes with defaults.
    ///
    /// A population below [`MIN_POPULATION_SIZE`] becomes
    /// [`DEFAULT_POPULATION_SIZE`]; fewer than [`MIN_GENERATIONS`] generations
    /// become [`DEFAULT_GENERATIONS`]. Meant for values typed in by a user.
    ///
    /// ```
    /// use u_tsp::ga::GeneticConfig;
    ///
    /// let config = GeneticConfig::default()
    ///     .with_population_size(3)
    ///     .with_generations(0)
    ///     .with_fallbacks();
    /// assert_eq!(config.population_size, 50);
    /// assert_eq!(config.generations, 200);
    /// ```
    pub fn with_fallbacks(mut self) -> Self {
        if self.population_size < MIN_POPULATION_SIZE {
            self.population_size = DEFAULT_POPULATION_SIZE;
        }
        if self.generations < MIN_GENERATIONS {
            self.generations = DEFAULT_GENERATIONS;
        }
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.elite_count > self.population_size {
            return Err(invalid("elite_count cannot exceed population_size"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> TspError {
    TspError::InvalidConfig(msg.to_string())
}
