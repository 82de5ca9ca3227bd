use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::cell_layout::CellLayout;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Error type for pixel buffer generation.
#[derive(Debug)]
pub enum GeneratePixelBufferError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// A colour mapping error occurred.
    ColourMap(Box<dyn Error>),
    /// A block fell outside the canvas.
    PixelBuffer(PixelBufferError),
    /// One value per grid cell is required.
    InputSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::InputSizeMismatch { expected, actual } => {
                write!(f, "expected {} cell values, got {}", expected, actual)
            }
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
            Self::InputSizeMismatch { .. } => None,
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Paints one value per grid cell onto a cleared canvas.
///
/// Cells are written in row-major order, each filling its whole pixel block,
/// so where blocks overlap the later cell wins.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T> + ?Sized>(
    input: Vec<T>,
    mapper: &CMap,
    layout: CellLayout,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, layout, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_CELLS`] cells. A cancelled pass returns no buffer.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    layout: CellLayout,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T> + ?Sized,
    C: CancelToken,
{
    let expected = layout.grid().size() as usize;
    if input.len() != expected {
        return Err(GeneratePixelBufferError::InputSizeMismatch {
            expected,
            actual: input.len(),
        });
    }

    let mut pixel_buffer = PixelBuffer::new(layout.canvas());

    for (i, (cell, value)) in layout.grid().points().zip(input).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let colour = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;
        pixel_buffer.fill_block(layout.cell_block(cell), colour)?;
    }

    Ok(pixel_buffer)
}
