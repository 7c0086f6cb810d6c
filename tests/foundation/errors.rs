//! Integration tests for the error taxonomy.

use hackney_foundation::{
    Coord, Error, ErrorKind, MapDefect, PassengerId, TaxiId, Violation,
};

#[test]
fn errors_render_their_context() {
    let err = Error::malformed_map(MapDefect::DuplicateEntity {
        glyph: '3',
        first: Coord::new(1, 1),
        second: Coord::new(4, 0),
    });
    let msg = err.to_string();
    assert!(msg.starts_with("malformed map:"));
    assert!(msg.contains('3'));
}

#[test]
fn kinds_are_matchable() {
    let taxi = TaxiId::from_glyph('2').unwrap();
    let err = Error::unknown_taxi(taxi);
    assert!(matches!(err.kind, ErrorKind::UnknownTaxi(id) if id == taxi));

    let passenger = PassengerId::from_glyph('c').unwrap();
    let err = Error::unknown_passenger(passenger);
    assert!(matches!(err.kind, ErrorKind::UnknownPassenger(id) if id == passenger));
}

#[test]
fn io_errors_wrap_transparently() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.to_string().contains("sink closed"));
}

#[test]
fn violations_name_the_entities_involved() {
    let err = Error::violation(Violation::CargoMismatch {
        taxi: TaxiId::from_glyph('1').unwrap(),
        passenger: PassengerId::from_glyph('b').unwrap(),
    });
    let msg = err.to_string();
    assert!(msg.contains("taxi 1"));
    assert!(msg.contains("passenger b"));
}
