use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::cell_layout::CellLayout;
use crate::core::data::colour::Colour;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, PartialEq)]
pub enum StepAutomatonError {
    Cancelled(Cancelled),
    CanvasMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for StepAutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::CanvasMismatch { expected, actual } => write!(
                f,
                "buffer is {}x{} but the cell layout expects {}x{}",
                actual.width(),
                actual.height(),
                expected.width(),
                expected.height()
            ),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for StepAutomatonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::CanvasMismatch { .. } => None,
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for StepAutomatonError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Conway's rules applied to one cell's colour.
///
/// A live cell with two or three live neighbours keeps its colour, any other
/// live cell turns white. A dead cell with exactly three live neighbours
/// turns black, any other dead cell keeps its colour.
#[must_use]
pub fn next_colour(current: Colour, live_neighbours: u8) -> Colour {
    match (current.is_dark(), live_neighbours) {
        (true, 2 | 3) => current,
        (true, _) => Colour::WHITE,
        (false, 3) => Colour::BLACK,
        (false, _) => current,
    }
}

/// Live cells among the eight neighbours of `cell`, wrapping at every edge.
#[must_use]
pub fn count_live_neighbours(alive: &[bool], grid: Dimensions, cell: Point) -> u8 {
    let width = i64::from(grid.width());
    let height = i64::from(grid.height());

    MOORE_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let neighbour = Point {
                x: (i64::from(cell.x) + dx).rem_euclid(width) as u32,
                y: (i64::from(cell.y) + dy).rem_euclid(height) as u32,
            };
            alive[grid.index_of(neighbour)]
        })
        .count() as u8
}

/// Advances the automaton seeded from `buffer` by one generation.
pub fn step_automaton(
    buffer: &PixelBuffer,
    layout: CellLayout,
) -> Result<PixelBuffer, StepAutomatonError> {
    step_automaton_cancelable(buffer, layout, &NeverCancel)
}

/// Like [`step_automaton`], polling `cancel` between rows.
///
/// Each cell samples one representative pixel of `buffer`; the next
/// generation is computed from that snapshot and written into a fresh buffer,
/// whole blocks at a time in row-major order.
pub fn step_automaton_cancelable<C: CancelToken>(
    buffer: &PixelBuffer,
    layout: CellLayout,
    cancel: &C,
) -> Result<PixelBuffer, StepAutomatonError> {
    if buffer.dimensions() != layout.canvas() {
        return Err(StepAutomatonError::CanvasMismatch {
            expected: layout.canvas(),
            actual: buffer.dimensions(),
        });
    }

    let grid = layout.grid();
    let current = grid
        .points()
        .map(|cell| buffer.pixel(layout.representative_pixel(cell)))
        .collect::<Result<Vec<Colour>, PixelBufferError>>()?;
    let alive: Vec<bool> = current.iter().map(Colour::is_dark).collect();

    let rows: Result<Vec<Vec<Colour>>, StepAutomatonError> = (0..grid.height())
        .into_par_iter()
        .map(|y| {
            if cancel.is_cancelled() {
                return Err(StepAutomatonError::Cancelled(Cancelled));
            }

            Ok((0..grid.width())
                .map(|x| {
                    let cell = Point { x, y };
                    let neighbours = count_live_neighbours(&alive, grid, cell);
                    next_colour(current[grid.index_of(cell)], neighbours)
                })
                .collect())
        })
        .collect();
    let next = rows?;

    let mut pixel_buffer = PixelBuffer::new(layout.canvas());

    for (i, (cell, colour)) in grid.points().zip(next.into_iter().flatten()).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
            return Err(StepAutomatonError::Cancelled(Cancelled));
        }

        pixel_buffer.fill_block(layout.cell_block(cell), colour)?;
    }

    Ok(pixel_buffer)
}
