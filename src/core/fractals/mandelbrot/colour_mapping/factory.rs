use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{fire_gradient::MandelbrotFireGradient, grayscale::MandelbrotGrayscale, rainbow::MandelbrotRainbow},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: MandelbrotColourMapKinds) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::Rainbow => Box::new(MandelbrotRainbow),
        MandelbrotColourMapKinds::Grayscale => Box::new(MandelbrotGrayscale),
        MandelbrotColourMapKinds::Fire => Box::new(MandelbrotFireGradient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn every_palette_rejects_values_outside_unit_interval() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind);

            assert!(map.map(-0.01).is_err());
            assert!(map.map(1.01).is_err());
            assert!(map.map(f64::NAN).is_err());
            assert!(map.map(0.0).is_ok());
            assert!(map.map(1.0).is_ok());
        }
    }
}
