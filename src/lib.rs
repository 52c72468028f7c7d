//! Facade crate for the Spotcheck audit planner.
//!
//! This crate re-exports the core domain types and operations: sample
//! selection, distance matrices and greedy inspection routes.

#![forbid(unsafe_code)]

pub use spotcheck_core::{
    Asset, AssetRepository, AuditError, AuditPlan, DistanceMatrix, GridPosition, Leg, MAX_SAMPLE,
    RepositoryError, Route, RoutePlanner, SampleSelector, SampleSet, SelectorConfig,
    TourCoordinator, plan_audit, sample_size,
};

#[cfg(feature = "test-support")]
pub use spotcheck_core::test_support;
