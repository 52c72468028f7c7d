//! Assets placed on a floor-plan grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell on the floor-plan grid.
///
/// Coordinates are bounded by `u16` so every squared distance between two
/// cells fits in a `u64` without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPosition {
    /// Zero-based row on the floor plan.
    pub row: u16,
    /// Zero-based column on the floor plan.
    pub column: u16,
}

impl GridPosition {
    /// Construct a grid position.
    #[must_use]
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use spotcheck_core::GridPosition;
    ///
    /// let a = GridPosition::new(0, 0);
    /// let b = GridPosition::new(3, 4);
    /// assert_eq!(a.squared_distance(b), 25);
    /// ```
    #[must_use]
    pub const fn squared_distance(self, other: Self) -> u64 {
        let dr = self.row.abs_diff(other.row) as u64;
        let dc = self.column.abs_diff(other.column) as u64;
        dr * dr + dc * dc
    }
}

/// A physical asset listed in the audit catalog.
///
/// Only `name` and `position` take part in sampling and routing. The
/// remaining fields are bookkeeping carried through to reports.
///
/// # Examples
/// ```
/// use spotcheck_core::{Asset, GridPosition};
///
/// let desk = Asset::new("desk-14").at(GridPosition::new(2, 3));
/// assert_eq!(desk.position, Some(GridPosition::new(2, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Asset {
    /// Unique catalog key.
    pub name: String,
    /// Grid cell, unset until a floor plan has been applied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<GridPosition>,
    /// Date the asset entered the books, as recorded by the catalog.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub registration_date: Option<String>,
    /// Model or specification string.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub specification: Option<String>,
    /// Where the asset is stored.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub stored_place: Option<String>,
    /// Book value in whole currency units.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<i64>,
}

impl Asset {
    /// Construct an unplaced asset with no bookkeeping fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Place the asset on the grid.
    #[must_use]
    pub fn at(mut self, position: GridPosition) -> Self {
        self.position = Some(position);
        self
    }
}
