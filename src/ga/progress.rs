//! Generation progress callbacks.

/// Receives the best distance found so far while the GA runs.
///
/// Called every [`progress_interval`](super::GeneticConfig::progress_interval)
/// generations and on the final generation. Implemented for any
/// `FnMut(usize, u64)` closure.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::ProgressObserver;
///
/// let mut lines = Vec::new();
/// let mut observer = |generation: usize, best: u64| {
///     lines.push(format!("Generation {generation}: Best distance = {best} km"));
/// };
/// observer.on_generation(0, 120);
/// assert_eq!(lines, ["Generation 0: Best distance = 120 km"]);
/// ```
pub trait ProgressObserver {
    /// Called after `generation` (0-based) has been produced.
    fn on_generation(&mut self, generation: usize, best_distance: u64);
}

impl<F: FnMut(usize, u64)> ProgressObserver for F {
    fn on_generation(&mut self, generation: usize, best_distance: u64) {
        self(generation, best_distance)
    }
}

/// Observer that ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_generation(&mut self, _generation: usize, _best_distance: u64) {}
}
