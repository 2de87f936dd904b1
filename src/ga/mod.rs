//! Genetic algorithm for the fixed-start TSP.
//!
//! - [`Chromosome`]: permutation with the start city pinned at position 0
//! - [`GeneticConfig`]: population, operator rates, seed
//! - [`tournament_select`]: parent selection
//! - [`CrossoverStrategy`]: [`OrderCrossover`] (OX) and [`HeuristicGreedyCrossover`] (HGreX)
//! - [`GeneticSolver`]: elitist generational loop

mod chromosome;
mod config;
mod crossover;
mod progress;
mod selection;
mod solver;

pub use chromosome::{is_valid_tour, Chromosome};
pub use config::{
    GeneticConfig, DEFAULT_GENERATIONS, DEFAULT_POPULATION_SIZE, MIN_GENERATIONS,
    MIN_POPULATION_SIZE,
};
pub use crossover::{Crossover, CrossoverStrategy, HeuristicGreedyCrossover, OrderCrossover};
pub use progress::{NoProgress, ProgressObserver};
pub use selection::tournament_select;
pub use solver::GeneticSolver;
