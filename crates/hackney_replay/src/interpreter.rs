//! The action interpreter: one batch in, one occupancy view out.
//!
//! Within a batch every action mutates the world immediately, in token
//! order. Invariants are required to hold only once the whole batch has
//! been applied: two taxis passing through the same cell mid-batch is
//! tolerated, two taxis ending on it is not.

use hackney_foundation::Result;
use hackney_plan::{Action, ActionBatch};
use hackney_world::{OccupancyView, World};
use tracing::debug;

/// Applies action batches to a world.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionInterpreter;

impl ActionInterpreter {
    /// Creates an interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies one batch and returns the occupancy view for its time step.
    ///
    /// # Errors
    /// Returns [`hackney_foundation::ErrorKind::UnknownTaxi`] when an action
    /// references an undeclared taxi, and
    /// [`hackney_foundation::ErrorKind::InvariantViolation`] when the world
    /// is inconsistent after the full batch. Both are fatal for the batch;
    /// nothing else is.
    pub fn apply_batch(&self, world: &mut World, batch: &ActionBatch) -> Result<OccupancyView> {
        debug!(
            time_index = batch.time_index,
            actions = batch.actions.len(),
            "applying batch"
        );
        for action in &batch.actions {
            Self::apply_action(world, *action)?;
        }
        world.check_invariants()?;
        Ok(world.occupancy_view())
    }

    fn apply_action(world: &mut World, action: Action) -> Result<()> {
        match action {
            Action::Move { taxi, direction } => {
                let cab = world.taxi_mut(taxi)?;
                cab.set_position(cab.position().step(direction));
            }
            Action::Pick { taxi } => {
                let cell = world.taxi(taxi)?.position();
                if let Some(passenger) = world.grounded_passenger_at(cell) {
                    world.passenger_mut(passenger)?.board(taxi);
                    world.taxi_mut(taxi)?.board(passenger);
                } else {
                    // Nobody here to pick up; mirrors the permissive
                    // token-skipping policy.
                    debug!(%taxi, %cell, "pick with no passenger present");
                }
            }
            Action::Drop { taxi } => {
                let cab = world.taxi(taxi)?;
                if let Some(passenger) = cab.carrying() {
                    let cell = cab.position();
                    world.passenger_mut(passenger)?.ground(cell);
                    world.taxi_mut(taxi)?.discharge();
                } else {
                    debug!(%taxi, "drop while free");
                }
            }
            Action::Wait { taxi } => {
                world.taxi(taxi)?;
            }
        }
        Ok(())
    }
}
