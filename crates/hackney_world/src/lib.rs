//! Grid-world model for Hackney.
//!
//! This crate provides:
//! - [`Grid`] - the static map: dimensions, walls, stations
//! - [`Taxi`], [`Passenger`], [`PassengerLocation`] - dynamic entities
//! - [`World`] - the owned, mutable world state with invariant validation
//! - [`OccupancyView`] - the derived per-cell view handed to renderers
//!
//! The world applies no actions itself; the replay layer mutates it through
//! the accessor API and validates invariants at batch boundaries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod grid;
mod occupancy;
mod world;

pub use entity::{Passenger, PassengerLocation, Taxi};
pub use grid::Grid;
pub use occupancy::{OccupancyCell, OccupancyView};
pub use world::World;
