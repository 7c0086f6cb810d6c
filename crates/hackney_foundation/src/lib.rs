//! Core vocabulary types, identifiers, and errors for Hackney.
//!
//! This crate provides:
//! - [`Coord`] and [`Direction`] - grid geometry
//! - [`TaxiId`] and [`PassengerId`] - single-glyph entity identifiers
//! - [`PlanStatus`] - first-class plan outcomes
//! - [`Error`] - the shared error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod types;

pub use error::{Error, ErrorKind, MapDefect, Violation};
pub use types::{Coord, Direction, PassengerId, PlanStatus, TaxiId};

/// The result type used throughout Hackney.
pub type Result<T> = std::result::Result<T, Error>;
