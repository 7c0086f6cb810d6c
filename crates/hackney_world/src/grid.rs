//! The static grid: dimensions, walls, and stations.
//!
//! Immutable after load. Wall and station sets are `BTreeSet`s so iteration
//! is row-major scan order, which keeps everything derived from the grid
//! deterministic.

use std::collections::BTreeSet;

use hackney_foundation::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The static portion of a grid world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Number of rows.
    rows: i32,
    /// Number of columns.
    cols: i32,
    /// Cells occupied by walls.
    walls: BTreeSet<Coord>,
    /// Cells marked as stations.
    stations: BTreeSet<Coord>,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    #[must_use]
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            walls: BTreeSet::new(),
            stations: BTreeSet::new(),
        }
    }

    pub(crate) fn add_wall(&mut self, cell: Coord) {
        self.walls.insert(cell);
    }

    pub(crate) fn add_station(&mut self, cell: Coord) {
        self.stations.insert(cell);
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

    /// Returns true if the cell lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, cell: Coord) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Returns true if the cell is a wall.
    #[must_use]
    pub fn is_wall(&self, cell: Coord) -> bool {
        self.walls.contains(&cell)
    }

    /// Returns true if the cell is a station.
    #[must_use]
    pub fn is_station(&self, cell: Coord) -> bool {
        self.stations.contains(&cell)
    }

    /// Iterates wall cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.walls.iter().copied()
    }

    /// Iterates station cells in row-major order.
    pub fn stations(&self) -> impl Iterator<Item = Coord> + '_ {
        self.stations.iter().copied()
    }
}
