//! Read-only access to the asset catalog.
//!
//! Storage, record editing and floor-plan ingestion live outside this crate.
//! The audit pipeline only needs every asset with its resolved position.

use crate::{Asset, RepositoryError};

/// Source of the asset pool sampled by an audit.
///
/// Implementations must be `Send + Sync` so a repository can be shared
/// across threads.
///
/// # Examples
/// ```
/// use spotcheck_core::{Asset, AssetRepository, GridPosition, RepositoryError};
///
/// struct Fixed(Vec<Asset>);
///
/// impl AssetRepository for Fixed {
///     fn fetch_all(&self) -> Result<Vec<Asset>, RepositoryError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let repo = Fixed(vec![Asset::new("desk").at(GridPosition::new(0, 0))]);
/// assert_eq!(repo.fetch_all().map(|assets| assets.len()), Ok(1));
/// ```
pub trait AssetRepository: Send + Sync {
    /// Return every asset in catalog order.
    ///
    /// # Errors
    /// Returns [`RepositoryError`] when the catalog cannot be read.
    fn fetch_all(&self) -> Result<Vec<Asset>, RepositoryError>;
}
