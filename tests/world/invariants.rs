//! Integration tests for on-demand invariant validation.

use hackney_foundation::{Coord, ErrorKind, PassengerId, TaxiId, Violation};
use hackney_world::World;

fn taxi(glyph: char) -> TaxiId {
    TaxiId::from_glyph(glyph).unwrap()
}

fn passenger(glyph: char) -> PassengerId {
    PassengerId::from_glyph(glyph).unwrap()
}

#[test]
fn valid_worlds_validate_cleanly() {
    let world = World::load("#X#\n1a2\nb..").unwrap();
    world.check_invariants().unwrap();
}

#[test]
fn consistent_boarding_validates_cleanly() {
    let mut world = World::load("1a").unwrap();
    world.taxi_mut(taxi('1')).unwrap().board(passenger('a'));
    world
        .passenger_mut(passenger('a'))
        .unwrap()
        .board(taxi('1'));
    world.check_invariants().unwrap();
}

#[test]
fn grounded_passenger_on_a_wall_is_caught() {
    let mut world = World::load("a#").unwrap();
    world
        .passenger_mut(passenger('a'))
        .unwrap()
        .ground(Coord::new(0, 1));
    let err = world.check_invariants().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvariantViolation(Violation::PassengerOnWall { .. })
    ));
}

#[test]
fn grounded_passenger_out_of_bounds_is_caught() {
    let mut world = World::load("a.").unwrap();
    world
        .passenger_mut(passenger('a'))
        .unwrap()
        .ground(Coord::new(5, 5));
    let err = world.check_invariants().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvariantViolation(Violation::PassengerOutOfBounds { .. })
    ));
}

#[test]
fn taxi_carrying_an_absent_passenger_is_caught() {
    let mut world = World::load("1.").unwrap();
    world.taxi_mut(taxi('1')).unwrap().board(passenger('q'));
    let err = world.check_invariants().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvariantViolation(Violation::CargoMismatch { .. })
    ));
}

#[test]
fn passenger_aboard_an_unknown_taxi_is_caught() {
    let mut world = World::load("a.").unwrap();
    world
        .passenger_mut(passenger('a'))
        .unwrap()
        .board(taxi('5'));
    let err = world.check_invariants().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownTaxi(_)));
}
