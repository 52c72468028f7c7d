//! Core sampling and routing for physical-asset spot-check audits.
//!
//! An audit draws a random subset of the asset catalog, measures squared grid
//! distances between the chosen assets and plans one greedy inspection route
//! from every chosen asset. Constructors and planners return `Result` so bad
//! ratios, oversized samples and unplaced assets surface early.
//!
//! # Examples
//!
//! ```
//! use spotcheck_core::{Asset, DistanceMatrix, GridPosition, SampleSet, TourCoordinator};
//!
//! # fn main() -> Result<(), spotcheck_core::AuditError> {
//! let sample = SampleSet::from_assets(vec![
//!     Asset::new("A").at(GridPosition::new(0, 0)),
//!     Asset::new("B").at(GridPosition::new(0, 1)),
//!     Asset::new("C").at(GridPosition::new(1, 0)),
//!     Asset::new("D").at(GridPosition::new(1, 1)),
//! ]);
//! let matrix = DistanceMatrix::build(&sample)?;
//! let routes = TourCoordinator::new(&sample, &matrix).plan_all()?;
//! assert_eq!(routes[0].path(&sample), "A→B→C→D");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod asset;
mod error;
mod matrix;
mod planner;
mod repository;
mod sample;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use asset::{Asset, GridPosition};
pub use error::{AuditError, RepositoryError};
pub use matrix::{DistanceMatrix, MAX_SQUARED_DISTANCE, UNREACHABLE};
pub use planner::{Leg, PATH_SEPARATOR, Route, RoutePlanner};
pub use repository::AssetRepository;
pub use sample::{SampleSelector, SampleSet, SelectorConfig, sample_size};
pub use tour::{AuditPlan, TourCoordinator, plan_audit};

/// Largest number of assets a single audit may sample.
pub const MAX_SAMPLE: usize = 20;
