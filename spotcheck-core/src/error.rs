use thiserror::Error;

/// Errors reported by an [`AssetRepository`](crate::AssetRepository).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing catalog could not be read.
    #[error("asset catalog unavailable: {message}")]
    Unavailable {
        /// Human-readable cause.
        message: String,
    },
}

/// Errors returned while sampling assets and planning routes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuditError {
    /// The sampling ratio was NaN or outside `[0.0, 1.0]`.
    #[error("sampling ratio {ratio} must be between 0.0 and 1.0")]
    InvalidRatio {
        /// Ratio supplied by the caller.
        ratio: f64,
    },
    /// There were no assets to sample from.
    #[error("asset pool is empty")]
    EmptyPool,
    /// The requested ratio rounds to a sample of zero assets.
    #[error("sample would contain no assets")]
    EmptySample,
    /// More assets were requested than the planner accepts.
    #[error("sample of {requested} assets exceeds capacity of {capacity}")]
    CapacityExceeded {
        /// Number of assets requested.
        requested: usize,
        /// Largest permitted sample.
        capacity: usize,
    },
    /// A sampled asset has not been placed on the floor plan.
    #[error("asset {name:?} has no grid position")]
    MissingCoordinate {
        /// Name of the unplaced asset.
        name: String,
    },
    /// The duplicate-rejecting draw loop gave up.
    #[error("sample selection stalled after {attempts} draws")]
    SelectionStall {
        /// Draws made before giving up.
        attempts: usize,
    },
    /// A route was requested from a vertex outside the sample.
    #[error("start vertex {start} is outside a sample of {size}")]
    StartOutOfRange {
        /// Requested start vertex.
        start: usize,
        /// Number of sampled assets.
        size: usize,
    },
    /// The asset repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
