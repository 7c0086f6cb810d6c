//! The derived per-cell occupancy view.
//!
//! Rebuilt from scratch after every batch; never the source of truth.

use hackney_foundation::{Coord, PassengerId, TaxiId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What occupies one cell: at most one taxi and at most one grounded
/// passenger. Passengers aboard a taxi do not appear here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupancyCell {
    /// The taxi on this cell, if any.
    pub taxi: Option<TaxiId>,
    /// The grounded passenger on this cell, if any.
    pub passenger: Option<PassengerId>,
}

impl OccupancyCell {
    /// Returns true if neither a taxi nor a passenger occupies the cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.taxi.is_none() && self.passenger.is_none()
    }
}

/// Per-cell occupancy for one time step, handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupancyView {
    rows: i32,
    cols: i32,
    cells: Vec<OccupancyCell>,
}

impl OccupancyView {
    /// Creates an all-empty view with the given dimensions.
    #[must_use]
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        let len = usize::try_from(rows.max(0)).unwrap_or(0) * usize::try_from(cols.max(0)).unwrap_or(0);
        Self {
            rows,
            cols,
            cells: vec![OccupancyCell::default(); len],
        }
    }

    fn index(&self, cell: Coord) -> Option<usize> {
        if cell.row < 0 || cell.row >= self.rows || cell.col < 0 || cell.col >= self.cols {
            return None;
        }
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        let cols = usize::try_from(self.cols).ok()?;
        Some(row * cols + col)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Returns the occupancy of a cell, or `None` out of bounds.
    #[must_use]
    pub fn cell(&self, cell: Coord) -> Option<&OccupancyCell> {
        self.index(cell).map(|i| &self.cells[i])
    }

    pub(crate) fn place_taxi(&mut self, cell: Coord, id: TaxiId) {
        if let Some(i) = self.index(cell) {
            self.cells[i].taxi = Some(id);
        }
    }

    pub(crate) fn place_passenger(&mut self, cell: Coord, id: PassengerId) {
        if let Some(i) = self.index(cell) {
            self.cells[i].passenger = Some(id);
        }
    }

    /// Iterates all cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &OccupancyCell)> {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            (Coord::new(i / cols, i % cols), cell)
        })
    }
}
