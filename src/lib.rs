//! Hackney - Grid-world multi-taxi planning toolkit
//!
//! This crate re-exports all layers of the Hackney system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: hackney_replay     — action interpreter, replay driver, frame sinks
//! Layer 2: hackney_plan       — plan parser, metrics, comparison report
//!          hackney_encode     — fact encoder for the external solver
//! Layer 1: hackney_world      — grid, entities, world state, occupancy
//! Layer 0: hackney_foundation — core types (Coord, ids, PlanStatus, Error)
//! ```

pub use hackney_encode as encode;
pub use hackney_foundation as foundation;
pub use hackney_plan as plan;
pub use hackney_replay as replay;
pub use hackney_world as world;
