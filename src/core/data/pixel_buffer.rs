use crate::core::data::cell_layout::PixelBlock;
use crate::core::data::colour::Colour;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

const OPAQUE: u8 = 255;

fn dimensions_to_buffer_size(dimensions: Dimensions) -> usize {
    dimensions.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        dimensions: Dimensions,
    },
    BoundsMismatch {
        dimensions_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                dimensions_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    dimensions_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, dimensions } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of canvas {}x{}",
                    pixel.x,
                    pixel.y,
                    dimensions.width(),
                    dimensions.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Dense RGBA raster, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A cleared canvas: every pixel transparent black.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: vec![0; dimensions_to_buffer_size(dimensions)],
        }
    }

    #[must_use]
    pub fn filled(dimensions: Dimensions, colour: Colour) -> Self {
        let buffer = [colour.r, colour.g, colour.b, OPAQUE]
            .into_iter()
            .cycle()
            .take(dimensions_to_buffer_size(dimensions))
            .collect();

        Self { dimensions, buffer }
    }

    pub fn from_data(
        dimensions: Dimensions,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let dimensions_size = dimensions_to_buffer_size(dimensions);

        if dimensions_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                dimensions_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { dimensions, buffer })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.byte_index(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn alpha(&self, pixel: Point) -> Result<u8, PixelBufferError> {
        let index = self.byte_index(pixel)?;

        Ok(self.buffer[index + 3])
    }

    /// Writes `colour` with alpha forced opaque.
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_index(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL]
            .copy_from_slice(&[colour.r, colour.g, colour.b, OPAQUE]);

        Ok(())
    }

    /// Paints every pixel of `block` with `colour`, alpha forced opaque.
    pub fn fill_block(&mut self, block: PixelBlock, colour: Colour) -> Result<(), PixelBufferError> {
        if block.right > self.dimensions.width() || block.bottom > self.dimensions.height() {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point {
                    x: block.right.saturating_sub(1),
                    y: block.bottom.saturating_sub(1),
                },
                dimensions: self.dimensions,
            });
        }

        let rgba = [colour.r, colour.g, colour.b, OPAQUE];
        let row_bytes = self.dimensions.width() as usize * BYTES_PER_PIXEL;

        for y in block.top..block.bottom {
            let row_start = y as usize * row_bytes;
            let span = &mut self.buffer[row_start + block.left as usize * BYTES_PER_PIXEL
                ..row_start + block.right as usize * BYTES_PER_PIXEL];

            for chunk in span.chunks_exact_mut(BYTES_PER_PIXEL) {
                chunk.copy_from_slice(&rgba);
            }
        }

        Ok(())
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.dimensions.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                dimensions: self.dimensions,
            });
        }

        Ok(self.dimensions.index_of(pixel) * BYTES_PER_PIXEL)
    }
}
