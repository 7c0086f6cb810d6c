//! The mutable world state: one grid plus the taxis and passengers on it.
//!
//! The world is a passive store with an on-demand invariant validator. No
//! action-applying logic lives here; the interpreter in the replay layer
//! drives all mutation through the accessors below. Each replay run owns
//! exactly one `World`; there is no shared or global state.

use std::collections::{BTreeMap, HashMap};

use hackney_foundation::{
    Coord, Error, MapDefect, PassengerId, Result, TaxiId, Violation,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::{Passenger, PassengerLocation, Taxi};
use crate::grid::Grid;
use crate::occupancy::OccupancyView;

/// The complete state of a grid world at one instant.
///
/// Taxis and passengers live in id-ordered maps so every derived artifact
/// (occupancy, fact encoding) iterates deterministically.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    grid: Grid,
    taxis: BTreeMap<TaxiId, Taxi>,
    passengers: BTreeMap<PassengerId, Passenger>,
}

impl World {
    /// Loads a world from ASCII map text.
    ///
    /// Glyphs: `#` wall, `X` station, `a`-`z` passenger, `1`-`9` taxi;
    /// anything else is empty space and silently ignored.
    ///
    /// # Errors
    /// Returns [`MapDefect::Empty`] for an empty map,
    /// [`MapDefect::RaggedRow`] when lines have unequal length, and
    /// [`MapDefect::DuplicateEntity`] when a taxi or passenger glyph appears
    /// twice, the only way two dynamic entities can collide in a
    /// one-glyph-per-cell map.
    pub fn load(map_text: &str) -> Result<Self> {
        let mut rows = 0_i32;
        let mut expected_cols: Option<i32> = None;
        let mut walls: Vec<Coord> = Vec::new();
        let mut stations: Vec<Coord> = Vec::new();
        let mut taxis: BTreeMap<TaxiId, Taxi> = BTreeMap::new();
        let mut passengers: BTreeMap<PassengerId, Passenger> = BTreeMap::new();

        for line in map_text.lines() {
            let row = rows;
            let mut col = 0_i32;
            for glyph in line.chars() {
                let cell = Coord::new(row, col);
                match glyph {
                    '#' => walls.push(cell),
                    'X' => stations.push(cell),
                    _ => {
                        if let Some(id) = TaxiId::from_glyph(glyph) {
                            if let Some(existing) = taxis.get(&id) {
                                return Err(Error::malformed_map(MapDefect::DuplicateEntity {
                                    glyph,
                                    first: existing.position(),
                                    second: cell,
                                }));
                            }
                            taxis.insert(id, Taxi::new(cell));
                        } else if let Some(id) = PassengerId::from_glyph(glyph) {
                            if let Some(first) = passengers.get(&id).and_then(Passenger::cell) {
                                return Err(Error::malformed_map(MapDefect::DuplicateEntity {
                                    glyph,
                                    first,
                                    second: cell,
                                }));
                            }
                            passengers.insert(id, Passenger::at_cell(cell));
                        }
                        // anything else is empty space
                    }
                }
                col += 1;
            }
            match expected_cols {
                None => expected_cols = Some(col),
                Some(expected) if expected != col => {
                    return Err(Error::malformed_map(MapDefect::RaggedRow {
                        row,
                        expected,
                        actual: col,
                    }));
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = expected_cols.ok_or_else(|| Error::malformed_map(MapDefect::Empty))?;
        let mut grid = Grid::new(rows, cols);
        for wall in walls {
            grid.add_wall(wall);
        }
        for station in stations {
            grid.add_station(station);
        }
        Ok(Self {
            grid,
            taxis,
            passengers,
        })
    }

    /// The static grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Looks up a taxi by id.
    ///
    /// # Errors
    /// Returns [`Error::unknown_taxi`] if the id was never declared.
    pub fn taxi(&self, id: TaxiId) -> Result<&Taxi> {
        self.taxis.get(&id).ok_or_else(|| Error::unknown_taxi(id))
    }

    /// Looks up a taxi by id for mutation.
    ///
    /// # Errors
    /// Returns [`Error::unknown_taxi`] if the id was never declared.
    pub fn taxi_mut(&mut self, id: TaxiId) -> Result<&mut Taxi> {
        self.taxis
            .get_mut(&id)
            .ok_or_else(|| Error::unknown_taxi(id))
    }

    /// Looks up a passenger by id.
    ///
    /// # Errors
    /// Returns [`Error::unknown_passenger`] if the id was never declared.
    pub fn passenger(&self, id: PassengerId) -> Result<&Passenger> {
        self.passengers
            .get(&id)
            .ok_or_else(|| Error::unknown_passenger(id))
    }

    /// Looks up a passenger by id for mutation.
    ///
    /// # Errors
    /// Returns [`Error::unknown_passenger`] if the id was never declared.
    pub fn passenger_mut(&mut self, id: PassengerId) -> Result<&mut Passenger> {
        self.passengers
            .get_mut(&id)
            .ok_or_else(|| Error::unknown_passenger(id))
    }

    /// Iterates taxis in ascending id order.
    pub fn taxis(&self) -> impl Iterator<Item = (TaxiId, &Taxi)> {
        self.taxis.iter().map(|(id, taxi)| (*id, taxi))
    }

    /// Iterates passengers in ascending id order.
    pub fn passengers(&self) -> impl Iterator<Item = (PassengerId, &Passenger)> {
        self.passengers.iter().map(|(id, passenger)| (*id, passenger))
    }

    /// Finds the grounded passenger standing on the given cell, if any.
    #[must_use]
    pub fn grounded_passenger_at(&self, cell: Coord) -> Option<PassengerId> {
        self.passengers
            .iter()
            .find(|(_, p)| p.cell() == Some(cell))
            .map(|(id, _)| *id)
    }

    /// Derives the per-cell occupancy view for the current state.
    ///
    /// Every taxi appears at its cell; every grounded passenger appears at
    /// its cell; aboard passengers do not appear.
    #[must_use]
    pub fn occupancy_view(&self) -> OccupancyView {
        let mut view = OccupancyView::new(self.grid.rows(), self.grid.cols());
        for (id, taxi) in &self.taxis {
            view.place_taxi(taxi.position(), *id);
        }
        for (id, passenger) in &self.passengers {
            if let Some(cell) = passenger.cell() {
                view.place_passenger(cell, *id);
            }
        }
        view
    }

    /// Validates the world invariants, reporting the first breach found.
    ///
    /// Checked on demand: the interpreter calls this once per fully-applied
    /// batch; transient mid-batch states are never validated.
    ///
    /// # Errors
    /// Returns [`Error::violation`] describing the breach, or
    /// [`Error::unknown_taxi`] if a passenger claims to be aboard a taxi
    /// that does not exist.
    pub fn check_invariants(&self) -> Result<()> {
        let mut occupied: HashMap<Coord, TaxiId> = HashMap::new();
        for (id, taxi) in &self.taxis {
            let cell = taxi.position();
            if !self.grid.contains(cell) {
                return Err(Error::violation(Violation::TaxiOutOfBounds {
                    taxi: *id,
                    cell,
                }));
            }
            if self.grid.is_wall(cell) {
                return Err(Error::violation(Violation::TaxiOnWall { taxi: *id, cell }));
            }
            if let Some(first) = occupied.insert(cell, *id) {
                return Err(Error::violation(Violation::TaxiOverlap {
                    first,
                    second: *id,
                    cell,
                }));
            }
            if let Some(passenger) = taxi.carrying() {
                let aboard = self
                    .passengers
                    .get(&passenger)
                    .is_some_and(|p| p.location() == PassengerLocation::AboardTaxi(*id));
                if !aboard {
                    return Err(Error::violation(Violation::CargoMismatch {
                        taxi: *id,
                        passenger,
                    }));
                }
            }
        }
        for (id, passenger) in &self.passengers {
            match passenger.location() {
                PassengerLocation::AtCell(cell) => {
                    if !self.grid.contains(cell) {
                        return Err(Error::violation(Violation::PassengerOutOfBounds {
                            passenger: *id,
                            cell,
                        }));
                    }
                    if self.grid.is_wall(cell) {
                        return Err(Error::violation(Violation::PassengerOnWall {
                            passenger: *id,
                            cell,
                        }));
                    }
                }
                PassengerLocation::AboardTaxi(taxi) => {
                    let carried = self
                        .taxis
                        .get(&taxi)
                        .ok_or_else(|| Error::unknown_taxi(taxi))?
                        .carrying()
                        == Some(*id);
                    if !carried {
                        return Err(Error::violation(Violation::CargoMismatch {
                            taxi,
                            passenger: *id,
                        }));
                    }
                }
            }
        }
        Ok(())
    }
}
