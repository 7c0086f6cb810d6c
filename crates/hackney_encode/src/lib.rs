//! Fact encoding for Hackney.
//!
//! Serializes an initial [`hackney_world::World`] into the flat declarative
//! fact text consumed by the external temporal-logic solver.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod encoder;

pub use encoder::{encode_map, encode_world};
