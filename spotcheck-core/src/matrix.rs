//! Pairwise squared distances between sampled assets.
//!
//! Distances stay in integers: every comparison downstream is monotonic in
//! squared distance, so no square root is ever taken.

use crate::{Asset, AuditError, GridPosition, MAX_SAMPLE, SampleSet};

/// Largest squared distance between two cells of a `u16` grid.
pub const MAX_SQUARED_DISTANCE: u64 = {
    let side = u16::MAX as u64;
    2 * side * side
};

/// Sentinel larger than any real matrix entry.
///
/// Seeds the nearest-frontier search so "no candidate" never collides with a
/// real distance.
pub const UNREACHABLE: u64 = u64::MAX;

const _: () = assert!(MAX_SQUARED_DISTANCE < UNREACHABLE);

/// Symmetric `k x k` table of squared distances with a zero diagonal.
///
/// # Examples
/// ```
/// use spotcheck_core::{Asset, DistanceMatrix, GridPosition, SampleSet};
///
/// # fn main() -> Result<(), spotcheck_core::AuditError> {
/// let sample = SampleSet::from_assets(vec![
///     Asset::new("a").at(GridPosition::new(0, 0)),
///     Asset::new("b").at(GridPosition::new(3, 4)),
/// ]);
/// let matrix = DistanceMatrix::build(&sample)?;
/// assert_eq!(matrix.get(0, 1), Some(25));
/// assert_eq!(matrix.get(1, 0), Some(25));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<u64>,
}

impl DistanceMatrix {
    /// Build the matrix for every asset in `sample`.
    ///
    /// # Errors
    /// Returns [`AuditError::EmptySample`] for an empty sample,
    /// [`AuditError::CapacityExceeded`] when the sample is larger than
    /// [`MAX_SAMPLE`] and [`AuditError::MissingCoordinate`] when any asset has
    /// not been placed on the grid.
    pub fn build(sample: &SampleSet) -> Result<Self, AuditError> {
        Self::from_assets(sample.assets())
    }

    /// Build the matrix for a slice of assets.
    ///
    /// # Errors
    /// See [`DistanceMatrix::build`].
    pub fn from_assets(assets: &[Asset]) -> Result<Self, AuditError> {
        if assets.is_empty() {
            return Err(AuditError::EmptySample);
        }
        if assets.len() > MAX_SAMPLE {
            return Err(AuditError::CapacityExceeded {
                requested: assets.len(),
                capacity: MAX_SAMPLE,
            });
        }
        let positions = assets
            .iter()
            .map(|asset| {
                asset.position.ok_or_else(|| AuditError::MissingCoordinate {
                    name: asset.name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_positions(&positions))
    }

    /// Build the matrix directly from grid positions.
    #[must_use]
    pub fn from_positions(positions: &[GridPosition]) -> Self {
        let size = positions.len();
        let mut cells = vec![0; size * size];
        for (i, a) in positions.iter().enumerate() {
            for (j, b) in positions.iter().enumerate().skip(i + 1) {
                let distance = a.squared_distance(*b);
                if let Some(cell) = cells.get_mut(i * size + j) {
                    *cell = distance;
                }
                if let Some(cell) = cells.get_mut(j * size + i) {
                    *cell = distance;
                }
            }
        }
        Self { size, cells }
    }

    /// Number of vertices.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Distance between vertices `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.cells.get(i * self.size + j).copied()
    }

    /// Row of distances from vertex `i`.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[u64]> {
        if i >= self.size {
            return None;
        }
        self.cells.get(i * self.size..(i + 1) * self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn square() -> Vec<Asset> {
        vec![
            Asset::new("A").at(GridPosition::new(0, 0)),
            Asset::new("B").at(GridPosition::new(0, 1)),
            Asset::new("C").at(GridPosition::new(1, 0)),
            Asset::new("D").at(GridPosition::new(1, 1)),
        ]
    }

    #[rstest]
    fn unit_square_distances(square: Vec<Asset>) {
        let matrix = DistanceMatrix::from_assets(&square).expect("placed assets");
        let expected: [[u64; 4]; 4] = [[0, 1, 1, 2], [1, 0, 2, 1], [1, 2, 0, 1], [2, 1, 1, 0]];
        for (i, row) in expected.iter().enumerate() {
            assert_eq!(matrix.row(i), Some(row.as_slice()));
        }
    }

    #[rstest]
    fn missing_position_is_reported(mut square: Vec<Asset>) {
        if let Some(asset) = square.get_mut(2) {
            asset.position = None;
        }
        let err = DistanceMatrix::from_assets(&square).expect_err("unplaced asset");
        assert_eq!(
            err,
            AuditError::MissingCoordinate {
                name: "C".to_owned()
            }
        );
    }

    #[rstest]
    fn empty_sample_is_rejected() {
        let err = DistanceMatrix::from_assets(&[]).expect_err("empty sample");
        assert_eq!(err, AuditError::EmptySample);
    }

    #[rstest]
    fn oversized_sample_is_rejected() {
        let assets: Vec<Asset> = (0..=MAX_SAMPLE)
            .map(|i| Asset::new(format!("a{i}")).at(GridPosition::new(0, 0)))
            .collect();
        let err = DistanceMatrix::from_assets(&assets).expect_err("too many assets");
        assert_eq!(
            err,
            AuditError::CapacityExceeded {
                requested: MAX_SAMPLE + 1,
                capacity: MAX_SAMPLE,
            }
        );
    }

    #[rstest]
    fn out_of_range_lookups_return_none(square: Vec<Asset>) {
        let matrix = DistanceMatrix::from_assets(&square).expect("placed assets");
        assert_eq!(matrix.get(4, 0), None);
        assert_eq!(matrix.get(0, 4), None);
        assert_eq!(matrix.row(4), None);
    }
}
