//! Core vocabulary types shared by every Hackney layer.
//!
//! These are the terms the whole system speaks in: grid coordinates,
//! movement directions, entity identifiers, and plan outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 0-based grid coordinate.
///
/// Rows grow downward, columns grow rightward. Coordinates are signed so
/// that a position one step off the grid edge is representable mid-batch;
/// bounds are enforced by invariant validation at batch boundaries, not by
/// the coordinate type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// Row index (0-based, grows downward).
    pub row: i32,
    /// Column index (0-based, grows rightward).
    pub col: i32,
}

impl Coord {
    /// Creates a coordinate from row and column indices.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate one unit step away in the given direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A unit movement direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward smaller row indices.
    Up,
    /// Toward larger row indices.
    Down,
    /// Toward smaller column indices.
    Left,
    /// Toward larger column indices.
    Right,
}

impl Direction {
    /// Returns the `(row, col)` unit vector for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the solver's one-letter spelling of this direction.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    /// Parses a direction from either the solver's one-letter form
    /// (`u`/`d`/`l`/`r`) or the full word (`up`/`down`/`left`/`right`).
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "l" | "left" => Some(Self::Left),
            "r" | "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{word}")
    }
}

/// Identifier of a taxi: a single glyph in `'1'..='9'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxiId(char);

impl TaxiId {
    /// Creates a taxi id from its map glyph.
    ///
    /// Returns `None` unless the glyph is in `'1'..='9'`.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        if glyph.is_ascii_digit() && glyph != '0' {
            Some(Self(glyph))
        } else {
            None
        }
    }

    /// Returns the underlying glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl fmt::Display for TaxiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a passenger: a single glyph in `'a'..='z'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassengerId(char);

impl PassengerId {
    /// Creates a passenger id from its map glyph.
    ///
    /// Returns `None` unless the glyph is in `'a'..='z'`.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        if glyph.is_ascii_lowercase() {
            Some(Self(glyph))
        } else {
            None
        }
    }

    /// Returns the underlying glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of reading a solver plan.
///
/// These are first-class results handed to comparison and replay callers,
/// not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanStatus {
    /// The text contained a usable plan.
    Ok,
    /// The solver reported the instance unsatisfiable.
    Unsat,
    /// The text contained no state markers at all.
    NoPlan,
    /// The plan file was absent (recorded by the caller; text never
    /// produces this status).
    Missing,
}

impl PlanStatus {
    /// Returns true for [`PlanStatus::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::Unsat => "UNSAT",
            Self::NoPlan => "NO_PLAN",
            Self::Missing => "MISSING",
        };
        write!(f, "{label}")
    }
}
