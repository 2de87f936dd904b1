//! Closed tour returned by the solvers.

use std::fmt;

use crate::distance::DistanceTable;
use crate::error::TspError;

/// An ordered sequence of cities that starts and ends at the start city,
/// together with its total directed distance.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceTable;
/// use u_tsp::models::Route;
///
/// let table = DistanceTable::build(vec![("A", vec![0, 4]), ("B", vec![6, 0])]);
/// let route = Route::from_stops(&table, vec![0, 1, 0], 10).unwrap();
/// assert_eq!(route.names(), &["A", "B", "A"]);
/// assert_eq!(route.total_distance(), 10);
/// assert!(route.is_closed());
/// assert_eq!(route.to_string(), "A -> B -> A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<usize>,
    names: Vec<String>,
    total_distance: u64,
}

impl Route {
    /// Builds a route from city indices, resolving their names in `table`.
    ///
    /// `stops` must already include the closing return to the start city.
    pub fn from_stops(
        table: &DistanceTable,
        stops: Vec<usize>,
        total_distance: u64,
    ) -> Result<Self, TspError> {
        let names = stops
            .iter()
            .map(|&i| table.city_name(i).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            stops,
            names,
            total_distance,
        })
    }

    /// City indices in visit order, closing stop included.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// City names in visit order, closing stop included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Sum of the directed edges along the route.
    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    /// Number of stops, closing stop included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if the first and last stops are the same city.
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2 && self.stops.first() == self.stops.last()
    }

    /// Returns `true` if every one of `city_count` cities is visited.
    ///
    /// `false` for the degenerate nearest-neighbor tour that stopped early
    /// because no unvisited city was reachable.
    pub fn visits_all(&self, city_count: usize) -> bool {
        let mut seen = vec![false; city_count];
        for &s in &self.stops {
            if let Some(slot) = seen.get_mut(s) {
                *slot = true;
            }
        }
        seen.into_iter().all(|v| v)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" -> "))
    }
}
