//! Integration tests for the action interpreter, fed from parsed plans.

use hackney_foundation::{Coord, ErrorKind, PassengerId, TaxiId};
use hackney_plan::parse_plan;
use hackney_replay::ActionInterpreter;
use hackney_world::World;

fn taxi(glyph: char) -> TaxiId {
    TaxiId::from_glyph(glyph).unwrap()
}

fn passenger(glyph: char) -> PassengerId {
    PassengerId::from_glyph(glyph).unwrap()
}

/// Runs every batch of a plan against a world, returning the final state.
fn replay(map: &str, plan: &str) -> World {
    let mut world = World::load(map).unwrap();
    let interpreter = ActionInterpreter::new();
    for batch in &parse_plan(plan).batches {
        interpreter.apply_batch(&mut world, batch).unwrap();
    }
    world
}

#[test]
fn a_full_delivery_run() {
    // Taxi 1 fetches passenger a and delivers her to the station cell.
    let map = "\
1.a
..X";
    let plan = "\
State 0:
State 1: move(1,r)
State 2: move(1,r) pick(1)
State 3: move(1,d)
State 4: drop(1)
";
    let world = replay(map, plan);
    assert_eq!(world.taxi(taxi('1')).unwrap().position(), Coord::new(1, 2));
    assert!(world.taxi(taxi('1')).unwrap().is_free());
    assert_eq!(
        world.passenger(passenger('a')).unwrap().cell(),
        Some(Coord::new(1, 2))
    );
    world.check_invariants().unwrap();
}

#[test]
fn two_taxis_swap_lanes_simultaneously() {
    let map = "\
1.
.2";
    let plan = "State 1: move(1,d) move(2,u)\n";
    let world = replay(map, plan);
    assert_eq!(world.taxi(taxi('1')).unwrap().position(), Coord::new(1, 0));
    assert_eq!(world.taxi(taxi('2')).unwrap().position(), Coord::new(0, 1));
}

#[test]
fn order_within_a_batch_matters_for_pick() {
    // Moving before picking grabs the passenger at the destination cell.
    let map = "1a";
    let picked_after_move = replay(map, "State 1: move(1,r) pick(1)\n");
    assert!(!picked_after_move.taxi(taxi('1')).unwrap().is_free());

    // Picking before moving finds nobody at the starting cell.
    let picked_before_move = replay(map, "State 1: pick(1) move(1,r)\n");
    assert!(picked_before_move.taxi(taxi('1')).unwrap().is_free());
}

#[test]
fn malformed_plan_fragments_do_not_derail_replay() {
    let map = "1..";
    let plan = "State 1: mve(1,r move(1,r)\nState 2: move(1,r)\n";
    let world = replay(map, plan);
    assert_eq!(world.taxi(taxi('1')).unwrap().position(), Coord::new(0, 2));
}

#[test]
fn an_undeclared_taxi_aborts_its_batch() {
    let mut world = World::load("1.").unwrap();
    let interpreter = ActionInterpreter::new();
    let outcome = parse_plan("State 1: move(4,r)\n");
    let err = interpreter
        .apply_batch(&mut world, &outcome.batches[0])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownTaxi(id) if id == taxi('4')));
}

#[test]
fn invariants_hold_after_every_batch_of_a_valid_plan() {
    let map = "\
#####
#1.a#
#...#
#b.2#
#####";
    let plan = "\
State 0:
State 1: move(1,r) move(2,l)
State 2: move(1,r) pick(1) move(2,l) pick(2)
State 3: move(1,d) move(2,u)
State 4: drop(1) drop(2)
";
    let mut world = World::load(map).unwrap();
    let interpreter = ActionInterpreter::new();
    for batch in &parse_plan(plan).batches {
        interpreter.apply_batch(&mut world, batch).unwrap();
        world.check_invariants().unwrap();
    }
}
