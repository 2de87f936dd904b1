//! Tour cost evaluation.

mod cycle;

pub use cycle::{cycle_distance, fitness, INVALID_FITNESS};
