//! Domain model types.
//!
//! Solvers return a [`Route`]: the visited cities closed back at the start
//! city, with the total directed distance.

mod route;

pub use route::Route;
