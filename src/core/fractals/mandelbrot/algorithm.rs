use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::{CellOutsideGridError, MandelbrotError};
use std::num::NonZeroU32;

/// Squared escape radius; an orbit with `|z| >= 2` never returns.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Normalised escape time of `c` under `z -> z^2 + c` starting from `z = 0`.
///
/// Returns `iterations / max_iterations`, so points that never escape within
/// the budget yield exactly `1.0`. The first step always runs, so the
/// smallest possible value is `1 / max_iterations`.
#[must_use]
pub fn escape_value(c: Complex, max_iterations: NonZeroU32) -> f64 {
    let max_iterations = max_iterations.get();
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z.square() + c;
        iteration += 1;
    }

    f64::from(iteration) / f64::from(max_iterations)
}

/// Evaluates grid cells against a snapshot of the viewport.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: NonZeroU32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;
    type Failure = CellOutsideGridError;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
        let grid = self.viewport.grid();

        if !grid.contains_point(cell) {
            return Err(CellOutsideGridError { cell, grid });
        }

        Ok(escape_value(
            self.viewport.cell_point_to_plane(cell),
            self.max_iterations,
        ))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: Viewport, max_iterations: u32) -> Result<Self, MandelbrotError> {
        let max_iterations =
            NonZeroU32::new(max_iterations).ok_or(MandelbrotError::ZeroMaxIterationsError)?;

        Ok(Self {
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations.get()
    }
}
