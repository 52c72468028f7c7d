//! One route per sampled asset, and the end-to-end audit pipeline.

use rand::Rng;

use crate::{
    AssetRepository, AuditError, DistanceMatrix, Route, RoutePlanner, SampleSelector, SampleSet,
};

/// Plans a route from every vertex of a sample.
///
/// No route is preferred: auditors start from whichever asset is convenient.
#[derive(Debug, Clone, Copy)]
pub struct TourCoordinator<'a> {
    sample: &'a SampleSet,
    matrix: &'a DistanceMatrix,
}

impl<'a> TourCoordinator<'a> {
    /// Construct a coordinator for `sample` and its distance `matrix`.
    #[must_use]
    pub const fn new(sample: &'a SampleSet, matrix: &'a DistanceMatrix) -> Self {
        Self { sample, matrix }
    }

    /// Plan one route per vertex, in sample order.
    ///
    /// # Errors
    /// Returns [`AuditError::StartOutOfRange`] when the matrix has fewer
    /// vertices than the sample.
    pub fn plan_all(&self) -> Result<Vec<Route>, AuditError> {
        let planner = RoutePlanner::new(self.matrix);
        (0..self.sample.len())
            .map(|start| {
                let route = planner.plan(start)?;
                log::debug!("route from vertex {start}: {}", route.path(self.sample));
                Ok(route)
            })
            .collect()
    }
}

/// Outcome of a complete audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPlan {
    sample: SampleSet,
    matrix: DistanceMatrix,
    routes: Vec<Route>,
}

impl AuditPlan {
    /// Assets selected for inspection.
    #[must_use]
    pub const fn sample(&self) -> &SampleSet {
        &self.sample
    }

    /// Squared distances between the selected assets.
    #[must_use]
    pub const fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// One route per selected asset, in sample order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes rendered as `A→B→C`.
    #[must_use]
    pub fn route_paths(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|route| route.path(&self.sample))
            .collect()
    }
}

/// Sample the repository at `ratio` and plan every route.
///
/// # Errors
/// Propagates repository failures, selection failures, missing positions in
/// the sample and planning failures as [`AuditError`].
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use spotcheck_core::{
///     Asset, AssetRepository, GridPosition, RepositoryError, SampleSelector, plan_audit,
/// };
///
/// struct Corridor;
///
/// impl AssetRepository for Corridor {
///     fn fetch_all(&self) -> Result<Vec<Asset>, RepositoryError> {
///         Ok((0..10_u16)
///             .map(|i| Asset::new(format!("a{i}")).at(GridPosition::new(i, 0)))
///             .collect())
///     }
/// }
///
/// # fn main() -> Result<(), spotcheck_core::AuditError> {
/// let repo = Corridor;
/// let plan = plan_audit(&repo, 0.3, &SampleSelector::default(), &mut StdRng::seed_from_u64(1))?;
/// assert_eq!(plan.routes().len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn plan_audit<A, R>(
    repository: &A,
    ratio: f64,
    selector: &SampleSelector,
    rng: &mut R,
) -> Result<AuditPlan, AuditError>
where
    A: AssetRepository + ?Sized,
    R: Rng + ?Sized,
{
    let pool = repository.fetch_all()?;
    let sample = selector.select(&pool, ratio, rng)?;
    let matrix = DistanceMatrix::build(&sample)?;
    let routes = TourCoordinator::new(&sample, &matrix).plan_all()?;
    Ok(AuditPlan {
        sample,
        matrix,
        routes,
    })
}
