use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::errors::{CellOutsideGridError, MandelbrotError};
use crate::core::fractals::mandelbrot::params::RenderParameters;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFractalError {
    Cancelled(Cancelled),
    Mandelbrot(MandelbrotError),
    Algorithm(CellOutsideGridError),
    PixelBuffer(GeneratePixelBufferError),
}

impl RenderFractalError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for RenderFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Mandelbrot(err) => write!(f, "invalid render parameters: {}", err),
            Self::Algorithm(err) => write!(f, "fractal evaluation failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "rasterisation failed: {}", err),
        }
    }
}

impl Error for RenderFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Mandelbrot(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GenerateFractalError<CellOutsideGridError>> for RenderFractalError {
    fn from(err: GenerateFractalError<CellOutsideGridError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Algorithm(e),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFractalError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            other => Self::PixelBuffer(other),
        }
    }
}

impl From<MandelbrotError> for RenderFractalError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

/// Renders the whole grid for `viewport` into a fresh canvas-sized buffer.
pub fn render_fractal(
    viewport: &Viewport,
    params: &RenderParameters,
) -> Result<PixelBuffer, RenderFractalError> {
    render_fractal_cancelable(viewport, params, &NeverCancel)
}

/// Evaluates cells in parallel, then paints them in row-major order.
///
/// Both inputs are copied up front, so later changes to the caller's viewport
/// cannot affect a pass in flight.
pub fn render_fractal_cancelable<C: CancelToken>(
    viewport: &Viewport,
    params: &RenderParameters,
    cancel: &C,
) -> Result<PixelBuffer, RenderFractalError> {
    let algorithm = MandelbrotAlgorithm::new(*viewport, params.max_iterations())?;
    let colour_map = mandelbrot_colour_map_factory(params.colour_map_kind());

    let values = generate_fractal_parallel_rayon_cancelable(viewport.grid(), &algorithm, cancel)?;
    let pixel_buffer =
        generate_pixel_buffer_cancelable(values, &*colour_map, viewport.layout(), cancel)?;

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::dimensions::Dimensions;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn viewport(canvas: (u32, u32), grid: (u32, u32)) -> Viewport {
        Viewport::new(
            Dimensions::new(canvas.0, canvas.1).unwrap(),
            Dimensions::new(grid.0, grid.1).unwrap(),
        )
    }

    fn grayscale(max_iterations: u32) -> RenderParameters {
        RenderParameters::new(max_iterations, MandelbrotColourMapKinds::Grayscale).unwrap()
    }

    #[test]
    fn test_render_fills_the_whole_canvas_opaque() {
        let viewport = viewport((40, 30), (100, 75));

        let buffer = render_fractal(&viewport, &grayscale(50)).unwrap();

        assert_eq!(buffer.dimensions(), viewport.canvas());
        for pixel in viewport.canvas().points() {
            assert_eq!(buffer.alpha(pixel).unwrap(), 255);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let viewport = viewport((32, 24), (64, 48));
        let params = RenderParameters::new(80, MandelbrotColourMapKinds::Rainbow).unwrap();

        let first = render_fractal(&viewport, &params).unwrap();
        let second = render_fractal(&viewport, &params).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_centre_cell_is_in_the_set() {
        // Cell (2, 1) of a 4x2 grid maps to c = 0
        let viewport = viewport((4, 2), (4, 2));

        let buffer = render_fractal(&viewport, &grayscale(100)).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_palette_changes_the_output() {
        let viewport = viewport((16, 12), (16, 12));
        let fire = RenderParameters::new(60, MandelbrotColourMapKinds::Fire).unwrap();

        let a = render_fractal(&viewport, &grayscale(60)).unwrap();
        let b = render_fractal(&viewport, &fire).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_cancelled_render_is_reported_as_cancelled() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = render_fractal_cancelable(&viewport((8, 6), (8, 6)), &grayscale(10), &token);

        let err = result.unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "operation cancelled");
    }
}
