//! Error types for the Hackney system.
//!
//! Uses `thiserror` for ergonomic error definition. Recoverable conditions
//! (a malformed plan token, an absent plan file) are not represented here;
//! they are diagnostics or [`PlanStatus`](crate::PlanStatus) values owned by
//! their callers.

use std::fmt;

use thiserror::Error;

use crate::types::{Coord, PassengerId, TaxiId};

/// The main error type for Hackney operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a malformed-map error for the given defect.
    #[must_use]
    pub fn malformed_map(defect: MapDefect) -> Self {
        Self::new(ErrorKind::MalformedMap(defect))
    }

    /// Creates an unknown-taxi error.
    #[must_use]
    pub fn unknown_taxi(id: TaxiId) -> Self {
        Self::new(ErrorKind::UnknownTaxi(id))
    }

    /// Creates an unknown-passenger error.
    #[must_use]
    pub fn unknown_passenger(id: PassengerId) -> Self {
        Self::new(ErrorKind::UnknownPassenger(id))
    }

    /// Creates a malformed-action-token error.
    #[must_use]
    pub fn malformed_token(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedActionToken {
            token: token.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invariant-violation error.
    #[must_use]
    pub fn violation(violation: Violation) -> Self {
        Self::new(ErrorKind::InvariantViolation(violation))
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(source))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The map text could not be loaded. Fatal; aborts the load.
    #[error("malformed map: {0}")]
    MalformedMap(MapDefect),

    /// An action or lookup referenced a taxi that was never declared.
    /// Fatal for the batch being applied.
    #[error("unknown taxi: {0}")]
    UnknownTaxi(TaxiId),

    /// A lookup referenced a passenger that was never declared.
    /// Fatal for the batch being applied.
    #[error("unknown passenger: {0}")]
    UnknownPassenger(PassengerId),

    /// A plan token could not be decoded into an action. Recovered locally
    /// by the plan parser: the token is skipped and a diagnostic recorded.
    #[error("malformed action token `{token}`: {reason}")]
    MalformedActionToken {
        /// The offending token text.
        token: String,
        /// Why it could not be decoded.
        reason: String,
    },

    /// A world invariant did not hold after a fully-applied batch.
    #[error("invariant violation: {0}")]
    InvariantViolation(Violation),

    /// An I/O failure while presenting a replay frame.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural defects that make a map unloadable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapDefect {
    /// The map text contained no lines.
    Empty,
    /// A row's length differed from the first row's.
    RaggedRow {
        /// 0-based index of the offending row.
        row: i32,
        /// Width of the first row.
        expected: i32,
        /// Width of the offending row.
        actual: i32,
    },
    /// The same taxi or passenger glyph appeared on two cells.
    DuplicateEntity {
        /// The repeated glyph.
        glyph: char,
        /// Where it first appeared.
        first: Coord,
        /// Where it appeared again.
        second: Coord,
    },
}

impl fmt::Display for MapDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has width {actual}, expected {expected}")
            }
            Self::DuplicateEntity {
                glyph,
                first,
                second,
            } => {
                write!(f, "entity `{glyph}` appears at both {first} and {second}")
            }
        }
    }
}

/// Breaches of the world invariants, detected after a batch is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Two taxis ended the batch on the same cell.
    TaxiOverlap {
        /// The first taxi found on the cell.
        first: TaxiId,
        /// The second taxi found on the cell.
        second: TaxiId,
        /// The contested cell.
        cell: Coord,
    },
    /// A taxi ended the batch on a wall cell.
    TaxiOnWall {
        /// The offending taxi.
        taxi: TaxiId,
        /// The wall cell.
        cell: Coord,
    },
    /// A grounded passenger ended the batch on a wall cell.
    PassengerOnWall {
        /// The offending passenger.
        passenger: PassengerId,
        /// The wall cell.
        cell: Coord,
    },
    /// A taxi ended the batch outside the grid.
    TaxiOutOfBounds {
        /// The offending taxi.
        taxi: TaxiId,
        /// Its out-of-bounds position.
        cell: Coord,
    },
    /// A grounded passenger ended the batch outside the grid.
    PassengerOutOfBounds {
        /// The offending passenger.
        passenger: PassengerId,
        /// Its out-of-bounds position.
        cell: Coord,
    },
    /// A taxi's cargo and a passenger's location disagree.
    CargoMismatch {
        /// The taxi involved.
        taxi: TaxiId,
        /// The passenger involved.
        passenger: PassengerId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaxiOverlap {
                first,
                second,
                cell,
            } => {
                write!(f, "taxis {first} and {second} both occupy {cell}")
            }
            Self::TaxiOnWall { taxi, cell } => {
                write!(f, "taxi {taxi} occupies wall cell {cell}")
            }
            Self::PassengerOnWall { passenger, cell } => {
                write!(f, "passenger {passenger} occupies wall cell {cell}")
            }
            Self::TaxiOutOfBounds { taxi, cell } => {
                write!(f, "taxi {taxi} is out of bounds at {cell}")
            }
            Self::PassengerOutOfBounds { passenger, cell } => {
                write!(f, "passenger {passenger} is out of bounds at {cell}")
            }
            Self::CargoMismatch { taxi, passenger } => {
                write!(
                    f,
                    "taxi {taxi} and passenger {passenger} disagree about who carries whom"
                )
            }
        }
    }
}
