//! City type.

/// A city in a Euclidean TSP instance.
///
/// A city's identity inside the algorithms is its position in the input
/// list; `id` is only a display label and need not equal that position.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(17, 0.0, 0.0);
/// let b = City::new(4, 3.0, 4.0);
/// assert_eq!(a.id(), 17);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    id: i64,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Display label.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unrounded Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(i64, f64, f64)> for City {
    fn from((id, x, y): (i64, f64, f64)) -> Self {
        Self::new(id, x, y)
    }
}
