//! Test-only, in-memory `AssetRepository` implementations used by unit and
//! behaviour tests.

use crate::{Asset, AssetRepository, GridPosition, RepositoryError};

/// In-memory `AssetRepository` returning a fixed catalog.
#[derive(Default, Debug, Clone)]
pub struct MemoryRepository {
    assets: Vec<Asset>,
}

impl MemoryRepository {
    /// Create a repository from a collection of assets.
    pub fn with_assets<I>(assets: I) -> Self
    where
        I: IntoIterator<Item = Asset>,
    {
        Self {
            assets: assets.into_iter().collect(),
        }
    }

    /// Create a repository with `count` assets laid out row by row on a grid
    /// `width` columns wide. Assets are named `asset-<n>`.
    #[must_use]
    pub fn grid(count: u16, width: u16) -> Self {
        let width = width.max(1);
        Self::with_assets((0..count).map(|n| {
            #[expect(
                clippy::integer_division,
                clippy::integer_division_remainder_used,
                reason = "row-major layout splits the index into row and column"
            )]
            let position = GridPosition::new(n / width, n % width);
            Asset::new(format!("asset-{n}")).at(position)
        }))
    }
}

impl AssetRepository for MemoryRepository {
    fn fetch_all(&self) -> Result<Vec<Asset>, RepositoryError> {
        Ok(self.assets.clone())
    }
}

/// `AssetRepository` that always reports the catalog as unavailable.
#[derive(Debug, Clone)]
pub struct FailingRepository {
    message: String,
}

impl FailingRepository {
    /// Create a repository failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AssetRepository for FailingRepository {
    fn fetch_all(&self) -> Result<Vec<Asset>, RepositoryError> {
        Err(RepositoryError::Unavailable {
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn grid_lays_assets_out_row_by_row() {
        let assets = MemoryRepository::grid(10, 4)
            .fetch_all()
            .expect("memory repository");
        let positions: Vec<_> = assets.iter().filter_map(|a| a.position).collect();
        assert_eq!(positions.len(), 10);
        assert_eq!(positions.first(), Some(&GridPosition::new(0, 0)));
        assert_eq!(positions.get(3), Some(&GridPosition::new(0, 3)));
        assert_eq!(positions.get(4), Some(&GridPosition::new(1, 0)));
        assert_eq!(positions.last(), Some(&GridPosition::new(2, 1)));
        assert_eq!(assets.get(9).map(|a| a.name.as_str()), Some("asset-9"));
    }
}
