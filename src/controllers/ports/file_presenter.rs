use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished canvas to disk.
pub trait FilePresenterPort {
    /// Extension appended to output paths that carry none.
    fn file_extension(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
