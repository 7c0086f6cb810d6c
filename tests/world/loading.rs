//! Integration tests for map loading.

use hackney_foundation::{Coord, ErrorKind, MapDefect, PassengerId, TaxiId};
use hackney_world::World;

const DEPOT: &str = "\
#####
#1.a#
#.#.#
#b.2#
##X##";

#[test]
fn a_realistic_map_loads_completely() {
    let world = World::load(DEPOT).unwrap();
    assert_eq!(world.grid().rows(), 5);
    assert_eq!(world.grid().cols(), 5);
    assert_eq!(world.grid().walls().count(), 16);
    assert_eq!(world.grid().stations().count(), 1);
    assert_eq!(world.taxis().count(), 2);
    assert_eq!(world.passengers().count(), 2);

    let two = TaxiId::from_glyph('2').unwrap();
    assert_eq!(world.taxi(two).unwrap().position(), Coord::new(3, 3));
    let b = PassengerId::from_glyph('b').unwrap();
    assert_eq!(world.passenger(b).unwrap().cell(), Some(Coord::new(3, 1)));
}

#[test]
fn every_loaded_taxi_starts_free() {
    let world = World::load(DEPOT).unwrap();
    assert!(world.taxis().all(|(_, taxi)| taxi.is_free()));
}

#[test]
fn every_loaded_passenger_starts_grounded() {
    let world = World::load(DEPOT).unwrap();
    assert!(world.passengers().all(|(_, p)| !p.is_aboard()));
}

#[test]
fn whitespace_only_maps_are_rejected() {
    assert!(matches!(
        World::load("").unwrap_err().kind,
        ErrorKind::MalformedMap(MapDefect::Empty)
    ));
}

#[test]
fn ragged_rows_report_the_offending_row() {
    let err = World::load("####\n###\n####").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedMap(MapDefect::RaggedRow {
            row: 1,
            expected: 4,
            actual: 3
        })
    ));
}

#[test]
fn duplicate_passenger_reports_both_cells() {
    let err = World::load("a..\n..a").unwrap_err();
    match err.kind {
        ErrorKind::MalformedMap(MapDefect::DuplicateEntity {
            glyph,
            first,
            second,
        }) => {
            assert_eq!(glyph, 'a');
            assert_eq!(first, Coord::new(0, 0));
            assert_eq!(second, Coord::new(1, 2));
        }
        other => panic!("expected duplicate entity defect, got {other}"),
    }
}

#[test]
fn decorative_glyphs_are_empty_space() {
    let world = World::load("~-=+\n*..|").unwrap();
    assert_eq!(world.taxis().count(), 0);
    assert_eq!(world.passengers().count(), 0);
    assert_eq!(world.grid().walls().count(), 0);
}
