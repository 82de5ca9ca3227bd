use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::check_unit_interval;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

const RAMP_SCALE: f64 = 1020.0;

/// Black through red and yellow to white, one channel saturating per quarter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandelbrotFireGradient;

fn ramp_channel(scaled: f64, start: f64) -> u8 {
    (scaled - start).clamp(0.0, 255.0).floor() as u8
}

impl ColourMap<f64> for MandelbrotFireGradient {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        let scaled = check_unit_interval(value)? * RAMP_SCALE;

        Ok(Colour {
            r: ramp_channel(scaled, 0.0),
            g: ramp_channel(scaled, 255.0),
            b: ramp_channel(scaled, 510.0),
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Fire
    }
}
