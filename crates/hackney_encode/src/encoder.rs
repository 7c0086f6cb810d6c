//! One-way translation from a loaded world to solver facts.
//!
//! The output vocabulary is what every plan refers back to, so the encoding
//! is fully deterministic: equal worlds produce byte-identical text. Facts
//! are grouped into sections in a fixed order (dimensions, walls, stations,
//! taxis, passengers), each introduced by a `%` comment header that
//! downstream tooling ignores.
//!
//! Coordinates are emitted 1-based even though the model is 0-based; the
//! external solver's convention is 1-based and this boundary must be
//! preserved exactly.

use hackney_foundation::{Coord, Result};
use hackney_world::World;

/// Loads a map and encodes it to fact text.
///
/// # Errors
/// Returns the load error for a malformed map.
pub fn encode_map(map_text: &str) -> Result<String> {
    let world = World::load(map_text)?;
    Ok(encode_world(&world))
}

/// Encodes an initial world state as solver facts.
///
/// Pure: equal worlds yield byte-identical text. Within the taxi and
/// passenger sections, entities appear in ascending id order.
#[must_use]
pub fn encode_world(world: &World) -> String {
    let grid = world.grid();
    let mut facts: Vec<String> = Vec::new();

    facts.push("% Grid Dimensions".to_string());
    facts.push(format!("row(1..{}).", grid.rows()));
    facts.push(format!("col(1..{}).", grid.cols()));
    facts.push(String::new());

    let walls: Vec<String> = grid
        .walls()
        .map(|cell| format!("wall({}).", solver_coord(cell)))
        .collect();
    if !walls.is_empty() {
        facts.push("% Walls".to_string());
        facts.extend(walls);
        facts.push(String::new());
    }

    let stations: Vec<String> = grid
        .stations()
        .map(|cell| format!("station({}).", solver_coord(cell)))
        .collect();
    if !stations.is_empty() {
        facts.push("% Stations".to_string());
        facts.extend(stations);
        facts.push(String::new());
    }

    let taxis: Vec<String> = world
        .taxis()
        .flat_map(|(id, taxi)| {
            [
                format!("taxi({id})."),
                format!("init(at({},{})).", id, solver_coord(taxi.position())),
            ]
        })
        .collect();
    if !taxis.is_empty() {
        facts.push("% Taxis".to_string());
        facts.extend(taxis);
        facts.push(String::new());
    }

    let passengers: Vec<String> = world
        .passengers()
        .filter_map(|(id, passenger)| passenger.cell().map(|cell| (id, cell)))
        .flat_map(|(id, cell)| {
            [
                format!("passenger({id})."),
                format!("init(passenger_at({},{})).", id, solver_coord(cell)),
            ]
        })
        .collect();
    if !passengers.is_empty() {
        facts.push("% Passengers".to_string());
        facts.extend(passengers);
        facts.push(String::new());
    }

    facts.join("\n")
}

/// Renders a cell in the solver's 1-based `r,c` convention.
fn solver_coord(cell: Coord) -> String {
    format!("{},{}", cell.row + 1, cell.col + 1)
}
