//! Textual frame rendering.
//!
//! One character per cell: taxi digit over passenger letter over wall over
//! station. Windowed rendering lives outside this workspace; this sink is
//! the reference implementation used by tests and terminal display.

use std::io::Write;

use hackney_foundation::{Coord, Result};
use hackney_world::{Grid, OccupancyView};

use crate::driver::{Advance, FrameSink, ReplayStep};

/// Renders one frame as ASCII art.
///
/// Cell precedence: taxi, then grounded passenger, then `#` wall, then `X`
/// station, then `.`.
#[must_use]
pub fn render_frame(grid: &Grid, view: &OccupancyView) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Coord::new(row, col);
            let glyph = view
                .cell(cell)
                .and_then(|occupancy| {
                    occupancy
                        .taxi
                        .map(|t| t.glyph())
                        .or_else(|| occupancy.passenger.map(|p| p.glyph()))
                })
                .unwrap_or_else(|| {
                    if grid.is_wall(cell) {
                        '#'
                    } else if grid.is_station(cell) {
                        'X'
                    } else {
                        '.'
                    }
                });
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// A [`FrameSink`] that writes ASCII frames to any writer and never pauses.
#[derive(Debug)]
pub struct AsciiSink<W> {
    writer: W,
    grid: Grid,
}

impl<W: Write> AsciiSink<W> {
    /// Creates a sink rendering against the given grid.
    #[must_use]
    pub fn new(writer: W, grid: Grid) -> Self {
        Self { writer, grid }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for AsciiSink<W> {
    fn present(&mut self, step: ReplayStep, view: &OccupancyView) -> Result<Advance> {
        writeln!(self.writer, "-- {step} --")?;
        self.writer.write_all(render_frame(&self.grid, view).as_bytes())?;
        writeln!(self.writer)?;
        Ok(Advance::Continue)
    }
}
