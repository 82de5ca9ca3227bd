use crate::core::data::point::Point;
use std::error::Error;

/// Per-cell evaluation of an escape-time fractal.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure>;
}
