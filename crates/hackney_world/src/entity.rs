//! Dynamic entities: taxis and passengers.

use hackney_foundation::{Coord, PassengerId, TaxiId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A taxi on the grid.
///
/// Created at load time from a map glyph, mutated only by the action
/// interpreter, never destroyed during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taxi {
    /// Current cell.
    position: Coord,
    /// The passenger aboard, if any.
    carrying: Option<PassengerId>,
}

impl Taxi {
    /// Creates a free taxi at the given cell.
    #[must_use]
    pub const fn new(position: Coord) -> Self {
        Self {
            position,
            carrying: None,
        }
    }

    /// The taxi's current cell.
    #[must_use]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Moves the taxi to a new cell. An aboard passenger rides along
    /// implicitly; its location stays `AboardTaxi`.
    pub fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    /// The passenger aboard, if any.
    #[must_use]
    pub const fn carrying(&self) -> Option<PassengerId> {
        self.carrying
    }

    /// A taxi is free exactly when it carries nobody.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.carrying.is_none()
    }

    /// Takes a passenger aboard.
    pub fn board(&mut self, passenger: PassengerId) {
        self.carrying = Some(passenger);
    }

    /// Discharges the current passenger, returning who was aboard.
    pub fn discharge(&mut self) -> Option<PassengerId> {
        self.carrying.take()
    }
}

/// Where a passenger currently is: on a grid cell or aboard a taxi.
/// Never both, never neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PassengerLocation {
    /// Standing on a grid cell.
    AtCell(Coord),
    /// Riding the given taxi.
    AboardTaxi(TaxiId),
}

/// A passenger on the grid or aboard a taxi.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Passenger {
    /// Current location.
    location: PassengerLocation,
}

impl Passenger {
    /// Creates a passenger standing on the given cell.
    #[must_use]
    pub const fn at_cell(cell: Coord) -> Self {
        Self {
            location: PassengerLocation::AtCell(cell),
        }
    }

    /// The passenger's current location.
    #[must_use]
    pub const fn location(&self) -> PassengerLocation {
        self.location
    }

    /// Returns true if the passenger is aboard any taxi.
    #[must_use]
    pub const fn is_aboard(&self) -> bool {
        matches!(self.location, PassengerLocation::AboardTaxi(_))
    }

    /// The cell the passenger stands on, or `None` while aboard.
    #[must_use]
    pub const fn cell(&self) -> Option<Coord> {
        match self.location {
            PassengerLocation::AtCell(cell) => Some(cell),
            PassengerLocation::AboardTaxi(_) => None,
        }
    }

    /// Puts the passenger aboard the given taxi.
    pub fn board(&mut self, taxi: TaxiId) {
        self.location = PassengerLocation::AboardTaxi(taxi);
    }

    /// Grounds the passenger on the given cell.
    pub fn ground(&mut self, cell: Coord) {
        self.location = PassengerLocation::AtCell(cell);
    }
}
