//! Integration tests for fact encoding.

use hackney_encode::{encode_map, encode_world};
use hackney_world::World;

// =============================================================================
// The Reference Example
// =============================================================================

#[test]
fn two_by_three_reference_encoding() {
    let facts = encode_map("#.X\n1.a").unwrap();
    for expected in [
        "row(1..2).",
        "col(1..3).",
        "wall(1,1).",
        "station(1,3).",
        "taxi(1).",
        "init(at(1,2,1)).",
        "passenger(a).",
        "init(passenger_at(a,2,3)).",
    ] {
        assert!(facts.contains(expected), "missing fact: {expected}");
    }
}

#[test]
fn full_output_shape_for_the_reference_example() {
    let facts = encode_map("#.X\n1.a").unwrap();
    let expected = "\
% Grid Dimensions
row(1..2).
col(1..3).

% Walls
wall(1,1).

% Stations
station(1,3).

% Taxis
taxi(1).
init(at(1,2,1)).

% Passengers
passenger(a).
init(passenger_at(a,2,3)).
";
    assert_eq!(facts, expected);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn equal_maps_encode_byte_identically() {
    let map = "####\n#12#\n#ab#\n#X.#\n####";
    let first = encode_map(map).unwrap();
    let second = encode_map(map).unwrap();
    assert_eq!(first, second);
}

#[test]
fn world_and_map_encodings_agree() {
    let map = "#X\n1a";
    let world = World::load(map).unwrap();
    assert_eq!(encode_map(map).unwrap(), encode_world(&world));
}

// =============================================================================
// Boundary Translation
// =============================================================================

#[test]
fn coordinates_are_one_based() {
    // A taxi on the model's (0,0) must encode as the solver's (1,1).
    let facts = encode_map("1").unwrap();
    assert!(facts.contains("init(at(1,1,1))."));
}

#[test]
fn declaration_precedes_initial_condition() {
    let facts = encode_map("1.a").unwrap();
    assert!(facts.find("taxi(1).").unwrap() < facts.find("init(at(1,").unwrap());
    assert!(facts.find("passenger(a).").unwrap() < facts.find("init(passenger_at(a,").unwrap());
}

#[test]
fn comment_headers_are_percent_lines() {
    let facts = encode_map("#X\n1a").unwrap();
    for line in facts.lines() {
        if line.starts_with('%') {
            continue;
        }
        assert!(line.is_empty() || line.ends_with('.'), "unterminated fact: {line}");
    }
}
