use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOutsideGridError {
    pub cell: Point,
    pub grid: Dimensions,
}

impl fmt::Display for CellOutsideGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell at x:{}, y:{} outside of grid {}x{}",
            self.cell.x,
            self.cell.y,
            self.grid.width(),
            self.grid.height()
        )
    }
}

impl Error for CellOutsideGridError {}
