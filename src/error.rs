//! Error type shared by every algorithm in the crate.

use thiserror::Error as ThisError;

/// Input-contract violations detected before an algorithm starts.
///
/// None of these are transient: an operation either returns a complete,
/// valid result or fails with one of these variants.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TspError {
    /// Start city outside `[0, size)`.
    #[error("start city {start} is out of range for an instance of {size} cities")]
    InvalidStart {
        /// Requested start index.
        start: usize,
        /// Number of cities in the instance.
        size: usize,
    },
    /// An algorithm parameter is outside its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with the supplied value.
        reason: String,
    },
    /// A route references a city index that the matrix does not have.
    #[error("route references city {index}, but the matrix has {size} cities")]
    InvalidRoute {
        /// Offending city index.
        index: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// The instance has no cities.
    #[error("instance has no cities")]
    EmptyInstance,
    /// A sequence is not a closed tour visiting every city exactly once.
    #[error("malformed route: {0}")]
    MalformedRoute(String),
    /// An explicit distance grid is not a valid distance matrix.
    #[error("malformed distance matrix: {0}")]
    MalformedMatrix(String),
    /// Distances are too large for tour lengths to fit in `u64`.
    #[error("tour length over {size} cities with edges up to {max_distance} overflows u64")]
    DistanceOverflow {
        /// Number of cities.
        size: usize,
        /// Largest edge, saturated at `u64::MAX` when not representable.
        max_distance: u64,
    },
    /// A city coordinate is NaN or infinite.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the city in the input list.
        index: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_route(message: impl Into<String>) -> Self {
        Self::MalformedRoute(message.into())
    }

    pub(crate) fn malformed_matrix(message: impl Into<String>) -> Self {
        Self::MalformedMatrix(message.into())
    }
}
