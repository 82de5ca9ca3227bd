use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::check_unit_interval;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

#[derive(Debug, Clone, Copy, Default)]
pub struct MandelbrotGrayscale;

impl ColourMap<f64> for MandelbrotGrayscale {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        let value = check_unit_interval(value)?;

        Ok(Colour::grey((value * 255.0).floor() as u8))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Grayscale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_zero_is_black() {
        assert_eq!(MandelbrotGrayscale.map(0.0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_one_is_white() {
        assert_eq!(MandelbrotGrayscale.map(1.0).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_map_floors_the_level() {
        // 0.5 * 255 = 127.5
        assert_eq!(MandelbrotGrayscale.map(0.5).unwrap(), Colour::grey(127));
        // 0.999 * 255 = 254.745
        assert_eq!(MandelbrotGrayscale.map(0.999).unwrap(), Colour::grey(254));
    }

    #[test]
    fn test_map_channels_are_equal() {
        let colour = MandelbrotGrayscale.map(0.3).unwrap();

        assert_eq!(colour.r, colour.g);
        assert_eq!(colour.g, colour.b);
    }
}
