//! Closed tour over city indices.

use crate::error::{Result, TspError};

/// An ordered, closed visiting sequence over the cities `0..n`.
///
/// The stored sequence has `n + 1` entries: it starts and ends at the same
/// city and visits every other city exactly once in between. The invariant
/// is checked by [`Route::new`]; algorithms inside the crate build routes
/// that satisfy it by construction.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 0], 3).unwrap();
/// assert_eq!(route.num_cities(), 3);
/// assert_eq!(route.start(), 0);
/// assert_eq!(route.cities(), &[0, 2, 1]);
///
/// assert!(Route::new(vec![0, 1, 1, 0], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    sequence: Vec<usize>,
}

impl Route {
    /// Validates a closed sequence against an instance of `size` cities.
    pub fn new(sequence: Vec<usize>, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(TspError::EmptyInstance);
        }
        if sequence.len() != size + 1 {
            return Err(TspError::malformed_route(format!(
                "expected {} entries for {} cities, got {}",
                size + 1,
                size,
                sequence.len()
            )));
        }
        if sequence[0] != sequence[size] {
            return Err(TspError::malformed_route(format!(
                "route starts at {} but ends at {}",
                sequence[0], sequence[size]
            )));
        }
        let mut seen = vec![false; size];
        for &city in &sequence[..size] {
            if city >= size {
                return Err(TspError::InvalidRoute { index: city, size });
            }
            if seen[city] {
                return Err(TspError::malformed_route(format!(
                    "city {city} is visited more than once"
                )));
            }
            seen[city] = true;
        }
        Ok(Self { sequence })
    }

    /// Closes an open visiting order, trusting that it is a permutation.
    pub(crate) fn from_open(mut order: Vec<usize>) -> Self {
        debug_assert!(!order.is_empty());
        let start = order[0];
        order.push(start);
        Self { sequence: order }
    }

    /// Wraps an already closed sequence, trusting its invariant.
    pub(crate) fn from_closed(sequence: Vec<usize>) -> Self {
        debug_assert!(sequence.len() >= 2 && sequence.first() == sequence.last());
        Self { sequence }
    }

    /// The full closed sequence (`n + 1` entries).
    pub fn as_slice(&self) -> &[usize] {
        &self.sequence
    }

    /// The open visiting order (`n` entries, start not repeated).
    pub fn cities(&self) -> &[usize] {
        &self.sequence[..self.sequence.len() - 1]
    }

    /// Number of distinct cities visited.
    pub fn num_cities(&self) -> usize {
        self.sequence.len() - 1
    }

    /// City the tour starts and ends at.
    pub fn start(&self) -> usize {
        self.sequence[0]
    }

    /// Consumes the route, returning the closed sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.sequence
    }

    /// Re-anchors the cycle so that it starts and ends at `start`.
    ///
    /// The set of traversed edges, and therefore the cost, is unchanged.
    pub fn rotate_to(&self, start: usize) -> Result<Self> {
        let open = self.cities();
        let pos = open
            .iter()
            .position(|&c| c == start)
            .ok_or(TspError::InvalidStart {
                start,
                size: open.len(),
            })?;
        let mut order = Vec::with_capacity(self.sequence.len());
        order.extend_from_slice(&open[pos..]);
        order.extend_from_slice(&open[..pos]);
        Ok(Self::from_open(order))
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_route() {
        let r = Route::new(vec![2, 0, 1, 2], 3).expect("valid");
        assert_eq!(r.start(), 2);
        assert_eq!(r.num_cities(), 3);
        assert_eq!(r.as_slice(), &[2, 0, 1, 2]);
    }

    #[test]
    fn test_single_city() {
        let r = Route::new(vec![0, 0], 1).expect("valid");
        assert_eq!(r.cities(), &[0]);
    }

    #[test]
    fn test_rejects_open_route() {
        assert!(matches!(
            Route::new(vec![0, 1, 2, 1], 3),
            Err(TspError::MalformedRoute(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            Route::new(vec![0, 1, 0], 3),
            Err(TspError::MalformedRoute(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Route::new(vec![0, 5, 1, 0], 3),
            Err(TspError::InvalidRoute { index: 5, size: 3 })
        );
    }

    #[test]
    fn test_rejects_empty_instance() {
        assert_eq!(Route::new(vec![], 0), Err(TspError::EmptyInstance));
    }

    #[test]
    fn test_rotate_to() {
        let r = Route::new(vec![0, 1, 2, 3, 0], 4).expect("valid");
        let rotated = r.rotate_to(2).expect("city present");
        assert_eq!(rotated.as_slice(), &[2, 3, 0, 1, 2]);
        assert!(r.rotate_to(9).is_err());
    }
}
