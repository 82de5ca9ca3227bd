use crate::core::data::dimensions::{Dimensions, DimensionsError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::RenderParameters;
use std::time::Duration;

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
pub const DEFAULT_GRID_WIDTH: u32 = 2000;
pub const DEFAULT_GRID_HEIGHT: u32 = 1500;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Start-up settings for a session. Canvas and grid are fixed once a
/// session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub canvas: Dimensions,
    pub grid: Dimensions,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub tick_interval: Duration,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            canvas: Dimensions::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
                .expect("default canvas dimensions are valid"),
            grid: Dimensions::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
                .expect("default grid dimensions are valid"),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl MandelbrotConfig {
    pub fn with_sizes(
        canvas_width: u32,
        canvas_height: u32,
        grid_width: u32,
        grid_height: u32,
    ) -> Result<Self, DimensionsError> {
        Ok(Self {
            canvas: Dimensions::new(canvas_width, canvas_height)?,
            grid: Dimensions::new(grid_width, grid_height)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn build_viewport(&self) -> Viewport {
        Viewport::new(self.canvas, self.grid)
    }

    pub fn build_render_parameters(&self) -> Result<RenderParameters, MandelbrotError> {
        RenderParameters::new(self.max_iterations, self.colour_map_kind)
    }
}
