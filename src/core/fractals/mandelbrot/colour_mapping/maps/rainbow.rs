use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::check_unit_interval;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

/// Hue sweep at full saturation and half lightness; `0.0` and `1.0` are both red.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandelbrotRainbow;

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn hsl_to_colour(hue_degrees: f64, saturation: f64, lightness: f64) -> Colour {
    let h = hue_degrees / 360.0;
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let to_byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;

    Colour {
        r: to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_byte(hue_to_channel(p, q, h)),
        b: to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

impl ColourMap<f64> for MandelbrotRainbow {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        let value = check_unit_interval(value)?;
        let hue = (value * 360.0).floor();

        Ok(hsl_to_colour(hue, 1.0, 0.5))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotRainbow {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Rainbow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(colour: Colour) -> (u8, u8, u8) {
        (colour.r, colour.g, colour.b)
    }

    #[test]
    fn test_map_zero_is_red() {
        let colour = MandelbrotRainbow.map(0.0).unwrap();

        assert_eq!(rgb(colour), (255, 0, 0));
    }

    #[test]
    fn test_map_one_wraps_to_red() {
        let colour = MandelbrotRainbow.map(1.0).unwrap();

        assert_eq!(rgb(colour), (255, 0, 0));
    }

    #[test]
    fn test_map_primary_and_secondary_hues() {
        assert_eq!(rgb(MandelbrotRainbow.map(60.0 / 360.0).unwrap()), (255, 255, 0));
        assert_eq!(rgb(MandelbrotRainbow.map(0.5).unwrap()), (0, 255, 255));
    }

    #[test]
    fn test_map_intermediate_hue_is_orange() {
        let colour = MandelbrotRainbow.map(30.5 / 360.0).unwrap();

        assert_eq!(colour.r, 255);
        assert!((127..=128).contains(&colour.g));
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_map_hue_is_floored() {
        // 0.0015 * 360 = 0.54 -> hue 0
        let colour = MandelbrotRainbow.map(0.0015).unwrap();

        assert_eq!(rgb(colour), (255, 0, 0));
    }

    #[test]
    fn test_map_rejects_out_of_range() {
        assert!(MandelbrotRainbow.map(1.5).is_err());
        assert!(MandelbrotRainbow.map(-0.5).is_err());
    }
}
