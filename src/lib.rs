//! # u-tsp
//!
//! Fixed-start Traveling Salesman Problem over named cities with a directed,
//! possibly asymmetric and incomplete distance table.
//!
//! ## Modules
//!
//! - [`distance`]: named distance table and the edge convention
//! - [`models`]: the [`Route`](models::Route) returned by every solver
//! - [`evaluation`]: closed-cycle distance and GA fitness
//! - [`constructive`]: nearest-neighbor heuristic
//! - [`ga`]: genetic algorithm with OX and HGreX crossover
//! - [`error`]: [`TspError`]
//!
//! ## Edge convention
//!
//! A stored distance of `0` between two distinct cities means "no edge".
//! The nearest-neighbor heuristic never takes such an edge and GA fitness
//! marks any tour that uses one as invalid.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;

pub use error::TspError;
