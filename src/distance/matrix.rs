//! Dense rounded-Euclidean distance matrix.

use crate::error::{Result, TspError};
use crate::models::City;

/// A dense, symmetric n×n matrix of integer distances stored in row-major
/// order, with a zero diagonal.
///
/// Entries built from coordinates are `round(sqrt(dx² + dy²))` using
/// round-half-to-even, so a distance of exactly 2.5 becomes 2 and 3.5
/// becomes 4.
///
/// Every matrix satisfies `max_distance * size <= u64::MAX`, so the length
/// of any tour fits in a `u64`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 3.0, 4.0),
///     City::new(3, 10.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 14); // 14.14 rounds down
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean matrix for a list of cities.
    ///
    /// An empty list yields an empty matrix. Fails if any coordinate is
    /// non-finite, or with [`TspError::DistanceOverflow`] if a tour could
    /// overflow `u64`.
    pub fn from_cities(cities: &[City]) -> Result<Self> {
        if let Some(index) = cities.iter().position(|c| !c.is_finite()) {
            return Err(TspError::NonFiniteCoordinate { index });
        }
        let n = cities.len();
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = round_distance(cities[i].distance_to(&cities[j])).ok_or(
                    TspError::DistanceOverflow {
                        size: n,
                        max_distance: u64::MAX,
                    },
                )?;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        let dm = Self { data, size: n };
        dm.ensure_tour_fits()?;
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// The grid must be symmetric with a zero diagonal.
    pub fn from_data(size: usize, data: Vec<u64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TspError::malformed_matrix(format!(
                "expected {} entries for size {}, got {}",
                size * size,
                size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        for i in 0..size {
            if dm.get(i, i) != 0 {
                return Err(TspError::malformed_matrix(format!(
                    "diagonal entry ({i}, {i}) is non-zero"
                )));
            }
        }
        if let Some((i, j)) = dm.first_asymmetry() {
            return Err(TspError::malformed_matrix(format!(
                "entries ({i}, {j}) and ({j}, {i}) differ"
            )));
        }
        dm.ensure_tour_fits()?;
        Ok(dm)
    }

    /// Distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Distances from city `from` to every city.
    pub fn row(&self, from: usize) -> &[u64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no cities.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if `matrix[i][j] == matrix[j][i]` everywhere.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// Fails with [`TspError::EmptyInstance`] if there are no cities.
    pub(crate) fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(TspError::EmptyInstance);
        }
        Ok(())
    }

    /// Fails with [`TspError::InvalidStart`] if `start` is not a city index.
    pub(crate) fn ensure_start(&self, start: usize) -> Result<()> {
        self.ensure_non_empty()?;
        if start >= self.size {
            return Err(TspError::InvalidStart {
                start,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Returns the nearest city to `from` among those with `visited[j] == false`.
    ///
    /// Scans in index order with a strict comparison, so ties go to the
    /// lowest index. Returns `None` if every city is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (j, &d) in self.row(from).iter().enumerate() {
            if visited[j] {
                continue;
            }
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((j, d)),
            }
        }
        best.map(|(j, _)| j)
    }

    /// Fails unless `max_distance * size` fits in `u64`.
    fn ensure_tour_fits(&self) -> Result<()> {
        let max_distance = self.data.iter().copied().max().unwrap_or(0);
        match max_distance.checked_mul(self.size as u64) {
            Some(_) => Ok(()),
            None => Err(TspError::DistanceOverflow {
                size: self.size,
                max_distance,
            }),
        }
    }

    fn first_asymmetry(&self) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

/// Rounds half to even; `None` if the result does not fit in `u64`.
fn round_distance(d: f64) -> Option<u64> {
    let rounded = d.round_ties_even();
    // 2^64 is the first f64 past u64::MAX.
    (rounded.is_finite() && rounded < 18_446_744_073_709_551_616.0).then_some(rounded as u64)
}
