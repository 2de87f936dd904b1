//! City distance table.
//!
//! Provides a dense, directed, named distance table for TSP instances.

mod table;

pub use table::DistanceTable;
