//! Named-city distance table.

use crate::error::TspError;

/// City names plus a dense n×n directed distance grid stored in row-major order.
///
/// Index `i` is the canonical identity of `city_names()[i]`. The grid may be
/// asymmetric and incomplete.
///
/// # Edge convention
///
/// A stored `0` between two **distinct** cities means "no edge": both the
/// nearest-neighbor heuristic and GA fitness treat it as unreachable. A
/// self-edge `(i, i)` always exists and costs its stored value. Use
/// [`edge`](Self::edge) for the convention-aware lookup and
/// [`distance`](Self::distance) for the raw stored value.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceTable;
///
/// let table = DistanceTable::build(vec![
///     ("A", vec![0, 10, 15]),
///     ("B", vec![10, 0, 35]),
///     ("C", vec![15, 35]),
/// ]);
/// assert_eq!(table.city_count(), 3);
/// assert_eq!(table.city_index("B"), Some(1));
/// assert_eq!(table.distance(0, 2).unwrap(), 15);
/// assert_eq!(table.distance(2, 2).unwrap(), 0); // short row, zero default
/// assert_eq!(table.edge(2, 2).unwrap(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    names: Vec<String>,
    data: Vec<u32>,
    size: usize,
}

impl DistanceTable {
    /// Builds a table from `(city name, distances)` rows.
    ///
    /// Entry `j` of row `i` becomes the distance from city `i` to city `j`.
    /// Rows shorter than the city count leave trailing entries at zero;
    /// entries past the city count are ignored.
    pub fn build<N, R>(rows: R) -> Self
    where
        N: Into<String>,
        R: IntoIterator<Item = (N, Vec<u32>)>,
    {
        let (names, grid): (Vec<String>, Vec<Vec<u32>>) =
            rows.into_iter().map(|(name, row)| (name.into(), row)).unzip();
        let size = names.len();
        let mut data = vec![0; size * size];
        for (i, row) in grid.iter().enumerate() {
            for (j, &d) in row.iter().take(size).enumerate() {
                data[i * size + j] = d;
            }
        }
        Self { names, data, size }
    }

    /// Creates a table from city names and an explicit row-major grid.
    ///
    /// Returns `None` if the data length doesn't match `names.len()²`.
    pub fn from_data(names: Vec<String>, data: Vec<u32>) -> Option<Self> {
        let size = names.len();
        if data.len() != size * size {
            return None;
        }
        Some(Self { names, data, size })
    }

    /// Number of loaded cities.
    pub fn city_count(&self) -> usize {
        self.size
    }

    /// All city names in index order.
    pub fn city_names(&self) -> &[String] {
        &self.names
    }

    /// Name of the city at `index`.
    pub fn city_name(&self, index: usize) -> Result<&str, TspError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(TspError::IndexOutOfRange {
                index,
                len: self.size,
            })
    }

    /// Index of the first city whose name matches exactly (case-sensitive).
    pub fn city_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Like [`city_index`](Self::city_index) but fails with
    /// [`TspError::CityNotFound`].
    pub fn require_city(&self, name: &str) -> Result<usize, TspError> {
        self.city_index(name)
            .ok_or_else(|| TspError::CityNotFound(name.to_string()))
    }

    /// Raw stored distance from `from` to `to`.
    ///
    /// `0` is a valid stored value and is returned as-is.
    pub fn distance(&self, from: usize, to: usize) -> Result<u32, TspError> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.raw(from, to))
    }

    /// Cost of the directed edge `from → to`, or `None` if no edge exists.
    pub fn edge(&self, from: usize, to: usize) -> Result<Option<u32>, TspError> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.edge_unchecked(from, to))
    }

    /// Returns the candidate reachable from `from` over the cheapest edge.
    ///
    /// Candidates without an edge from `from` (or out of range) are skipped.
    /// Ties go to the earlier candidate. Returns `None` if no candidate is
    /// reachable.
    pub fn nearest_reachable(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        if from >= self.size {
            return None;
        }
        let mut best: Option<(usize, u32)> = None;
        for &c in candidates {
            if c >= self.size {
                continue;
            }
            if let Some(d) = self.edge_unchecked(from, c) {
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((c, d));
                }
            }
        }
        best.map(|(c, _)| c)
    }

    /// Returns `true` if `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.raw(i, j) != self.raw(j, i) {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn edge_unchecked(&self, from: usize, to: usize) -> Option<u32> {
        let d = self.raw(from, to);
        if d == 0 && from != to {
            None
        } else {
            Some(d)
        }
    }

    fn raw(&self, from: usize, to: usize) -> u32 {
        self.data[from * self.size + to]
    }

    fn check(&self, index: usize) -> Result<(), TspError> {
        if index < self.size {
            Ok(())
        } else {
            Err(TspError::IndexOutOfRange {
                index,
                len: self.size,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cities() -> DistanceTable {
        DistanceTable::build(vec![
            ("A", vec![0, 10, 15, 20]),
            ("B", vec![10, 0, 35, 25]),
            ("C", vec![15, 35, 0, 30]),
            ("D", vec![20, 25, 30, 0]),
        ])
    }

    #[test]
    fn test_build() {
        let t = four_cities();
        assert_eq!(t.city_count(), 4);
        assert_eq!(t.city_names(), &["A", "B", "C", "D"]);
        assert_eq!(t.distance(1, 3).unwrap(), 25);
        assert_eq!(t.distance(3, 1).unwrap(), 25);
    }

    #[test]
    fn test_build_short_and_long_rows() {
        let t = DistanceTable::build(vec![
            ("X", vec![0, 7]),
            ("Y", vec![3, 0, 9, 99]),
            ("Z", vec![]),
        ]);
        assert_eq!(t.distance(0, 1).unwrap(), 7);
        assert_eq!(t.distance(0, 2).unwrap(), 0);
        assert_eq!(t.distance(1, 2).unwrap(), 9);
        assert_eq!(t.distance(2, 0).unwrap(), 0);
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = four_cities();
        let b = four_cities();
        assert_eq!(a, b);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(a.distance(i, j), b.distance(i, j));
            }
        }
    }

    #[test]
    fn test_name_index_round_trip() {
        let t = four_cities();
        for i in 0..t.city_count() {
            let name = t.city_name(i).unwrap();
            assert_eq!(t.city_index(name), Some(i));
        }
    }

    #[test]
    fn test_city_index_exact_match() {
        let t = four_cities();
        assert_eq!(t.city_index("a"), None);
        assert_eq!(t.city_index("A "), None);
        assert_eq!(
            t.require_city("Warsaw"),
            Err(TspError::CityNotFound("Warsaw".into()))
        );
    }

    #[test]
    fn test_duplicate_name_resolves_to_first() {
        let t = DistanceTable::build(vec![("A", vec![]), ("A", vec![])]);
        assert_eq!(t.city_index("A"), Some(0));
    }

    #[test]
    fn test_out_of_range() {
        let t = four_cities();
        assert_eq!(
            t.city_name(4),
            Err(TspError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(t.distance(0, 4).is_err());
        assert!(t.distance(9, 0).is_err());
        assert!(t.edge(4, 4).is_err());
    }

    #[test]
    fn test_edge_convention() {
        let t = DistanceTable::build(vec![("A", vec![5, 0]), ("B", vec![4, 0])]);
        assert_eq!(t.edge(0, 0).unwrap(), Some(5));
        assert_eq!(t.edge(1, 1).unwrap(), Some(0));
        assert_eq!(t.edge(0, 1).unwrap(), None);
        assert_eq!(t.edge(1, 0).unwrap(), Some(4));
        assert_eq!(t.distance(0, 1).unwrap(), 0);
    }

    #[test]
    fn test_from_data() {
        let t = DistanceTable::from_data(vec!["P".into(), "Q".into()], vec![0, 5, 6, 0])
            .expect("valid");
        assert_eq!(t.distance(0, 1).unwrap(), 5);
        assert_eq!(t.distance(1, 0).unwrap(), 6);
        assert!(DistanceTable::from_data(vec!["P".into()], vec![0, 1]).is_none());
    }

    #[test]
    fn test_nearest_reachable() {
        let t = DistanceTable::build(vec![
            ("A", vec![0, 8, 0, 3, 3]),
            ("B", vec![]),
            ("C", vec![]),
            ("D", vec![]),
            ("E", vec![]),
        ]);
        assert_eq!(t.nearest_reachable(0, &[1, 2, 3, 4]), Some(3));
        assert_eq!(t.nearest_reachable(0, &[4, 3]), Some(4));
        assert_eq!(t.nearest_reachable(0, &[2]), None);
        assert_eq!(t.nearest_reachable(0, &[]), None);
        assert_eq!(t.nearest_reachable(1, &[0, 2]), None);
    }

    #[test]
    fn test_symmetry() {
        assert!(four_cities().is_symmetric());
        let t = DistanceTable::build(vec![("A", vec![0, 10]), ("B", vec![15, 0])]);
        assert!(!t.is_symmetric());
    }
}
