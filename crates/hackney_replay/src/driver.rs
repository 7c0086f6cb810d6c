//! The replay driver: steps through parsed batches and hands frames to a
//! sink.
//!
//! The driver owns one world per run. Between batches it blocks on the
//! sink's verdict; that wait is a pure scheduling boundary (an interactive
//! sink blocks on a keypress there) and is never reordered relative to
//! batch application.

use hackney_foundation::Result;
use hackney_plan::ActionBatch;
use hackney_world::{OccupancyView, World};
use tracing::debug;

use crate::interpreter::ActionInterpreter;

/// What the sink wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Apply the next batch.
    Continue,
    /// Stop the replay before the next batch.
    Halt,
}

/// Which moment a frame depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayStep {
    /// The freshly loaded world, before any batch.
    Initial,
    /// The world after the batch with this time index.
    Batch(u32),
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Batch(index) => write!(f, "state {index}"),
        }
    }
}

/// Receives one frame per replay step and paces the run.
pub trait FrameSink {
    /// Presents one frame. Returning [`Advance::Halt`] stops the replay
    /// before the next batch is applied.
    ///
    /// # Errors
    /// Implementations may fail on I/O; the failure aborts the run.
    fn present(&mut self, step: ReplayStep, view: &OccupancyView) -> Result<Advance>;
}

/// How a replay run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of batches fully applied.
    pub batches_applied: usize,
    /// True if the sink halted the run early.
    pub halted: bool,
}

/// Steps a world through an ordered batch sequence.
#[derive(Clone, Debug)]
pub struct ReplayDriver {
    world: World,
    batches: Vec<ActionBatch>,
    interpreter: ActionInterpreter,
}

impl ReplayDriver {
    /// Creates a driver owning the given world and batches.
    #[must_use]
    pub const fn new(world: World, batches: Vec<ActionBatch>) -> Self {
        Self {
            world,
            batches,
            interpreter: ActionInterpreter::new(),
        }
    }

    /// The world in its current state.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Runs the replay: the initial frame first, then one frame per batch.
    ///
    /// # Errors
    /// Propagates fatal interpreter errors (unknown taxi, invariant
    /// violation) and sink failures; recoverable plan damage never reaches
    /// this layer.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> Result<ReplaySummary> {
        let initial = self.world.occupancy_view();
        if sink.present(ReplayStep::Initial, &initial)? == Advance::Halt {
            return Ok(ReplaySummary {
                batches_applied: 0,
                halted: true,
            });
        }

        let mut batches_applied = 0;
        for batch in &self.batches {
            let view = self.interpreter.apply_batch(&mut self.world, batch)?;
            batches_applied += 1;
            if sink.present(ReplayStep::Batch(batch.time_index), &view)? == Advance::Halt {
                debug!(time_index = batch.time_index, "sink halted replay");
                return Ok(ReplaySummary {
                    batches_applied,
                    halted: true,
                });
            }
        }
        Ok(ReplaySummary {
            batches_applied,
            halted: false,
        })
    }
}
