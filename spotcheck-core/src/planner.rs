//! Greedy nearest-frontier routing over a [`DistanceMatrix`].
//!
//! The planner grows a visited set one vertex at a time, always adding the
//! open vertex closest to any vertex already visited. This is Prim's
//! spanning-tree expansion read as a visiting order: a short tour heuristic,
//! not an optimal Hamiltonian path.

use crate::{AuditError, DistanceMatrix, SampleSet, UNREACHABLE};

/// Separator placed between asset names in a rendered route.
pub const PATH_SEPARATOR: &str = "→";

/// Spanning edge emitted when a vertex joins the visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// Visited vertex nearest to `to` at the time it was chosen.
    pub from: usize,
    /// Newly visited vertex.
    pub to: usize,
    /// Squared distance between `from` and `to`.
    pub cost: u64,
}

/// Visiting order for one start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<usize>,
    legs: Vec<Leg>,
}

impl Route {
    /// Vertex the route starts from.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Vertices in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Spanning edges in emission order; one fewer than the stops.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Names of the visited assets in order.
    #[must_use]
    pub fn names<'a>(&self, sample: &'a SampleSet) -> Vec<&'a str> {
        self.stops
            .iter()
            .filter_map(|&vertex| sample.name(vertex))
            .collect()
    }

    /// Render the route as `A→B→C`.
    #[must_use]
    pub fn path(&self, sample: &SampleSet) -> String {
        self.names(sample).join(PATH_SEPARATOR)
    }
}

/// Plans routes over a borrowed distance matrix.
///
/// Planning is deterministic: the same matrix and start vertex always give
/// the same route.
///
/// Visited vertices are tracked separately from their frontier cost, so
/// assets sharing a grid cell (distance zero) are still visited.
///
/// # Examples
/// ```
/// use spotcheck_core::{DistanceMatrix, GridPosition, RoutePlanner};
///
/// # fn main() -> Result<(), spotcheck_core::AuditError> {
/// let matrix = DistanceMatrix::from_positions(&[
///     GridPosition::new(0, 0),
///     GridPosition::new(0, 1),
///     GridPosition::new(1, 0),
///     GridPosition::new(1, 1),
/// ]);
/// let route = RoutePlanner::new(&matrix).plan(0)?;
/// assert_eq!(route.stops(), &[0, 1, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoutePlanner<'m> {
    matrix: &'m DistanceMatrix,
}

impl<'m> RoutePlanner<'m> {
    /// Construct a planner over `matrix`.
    #[must_use]
    pub const fn new(matrix: &'m DistanceMatrix) -> Self {
        Self { matrix }
    }

    /// Plan the visiting order starting at `start`.
    ///
    /// # Errors
    /// Returns [`AuditError::StartOutOfRange`] when `start` is not a vertex
    /// of the matrix.
    pub fn plan(&self, start: usize) -> Result<Route, AuditError> {
        let size = self.matrix.size();
        let Some(start_row) = self.matrix.row(start) else {
            return Err(AuditError::StartOutOfRange { start, size });
        };

        let mut lowcost = start_row.to_vec();
        let mut closest = vec![start; size];
        let mut visited = vec![false; size];
        if let Some(flag) = visited.get_mut(start) {
            *flag = true;
        }

        let mut stops = Vec::with_capacity(size);
        let mut legs = Vec::with_capacity(size.saturating_sub(1));
        stops.push(start);

        while let Some((selected, cost)) = nearest_open(&lowcost, &visited) {
            let from = closest.get(selected).copied().unwrap_or(start);
            legs.push(Leg {
                from,
                to: selected,
                cost,
            });
            stops.push(selected);
            if let Some(flag) = visited.get_mut(selected) {
                *flag = true;
            }
            if let Some(row) = self.matrix.row(selected) {
                relax(row, selected, &visited, &mut lowcost, &mut closest);
            }
        }

        Ok(Route { stops, legs })
    }
}

/// Open vertex with the strictly smallest cost; ties keep the lowest index.
fn nearest_open(lowcost: &[u64], visited: &[bool]) -> Option<(usize, u64)> {
    let mut best = UNREACHABLE;
    let mut found = None;
    for (vertex, (&cost, &done)) in lowcost.iter().zip(visited).enumerate() {
        if !done && cost < best {
            best = cost;
            found = Some(vertex);
        }
    }
    found.map(|vertex| (vertex, best))
}

fn relax(
    row: &[u64],
    selected: usize,
    visited: &[bool],
    lowcost: &mut [u64],
    closest: &mut [usize],
) {
    let open = row
        .iter()
        .zip(visited)
        .zip(lowcost.iter_mut().zip(closest.iter_mut()));
    for ((&distance, &done), (cost, nearest)) in open {
        if !done && distance < *cost {
            *cost = distance;
            *nearest = selected;
        }
    }
}
