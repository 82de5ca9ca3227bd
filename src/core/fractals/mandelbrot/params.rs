use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::num::NonZeroU32;

/// Lower end of the iteration budget offered by the slider.
pub const MAX_ITERATIONS_SLIDER_MIN: u32 = 10;
/// Upper end of the iteration budget offered by the slider.
pub const MAX_ITERATIONS_SLIDER_MAX: u32 = 1000;
pub const MAX_ITERATIONS_SLIDER_STEP: u32 = 10;

/// Iteration budget and palette for a render pass.
///
/// Any budget of at least one is accepted; the slider range is only a
/// recommendation for interactive controls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderParameters {
    max_iterations: NonZeroU32,
    colour_map_kind: MandelbrotColourMapKinds,
}

impl RenderParameters {
    pub fn new(
        max_iterations: u32,
        colour_map_kind: MandelbrotColourMapKinds,
    ) -> Result<Self, MandelbrotError> {
        Ok(Self {
            max_iterations: validate_max_iterations(max_iterations)?,
            colour_map_kind,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations.get()
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map_kind
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), MandelbrotError> {
        self.max_iterations = validate_max_iterations(max_iterations)?;
        Ok(())
    }

    pub fn set_colour_map_kind(&mut self, colour_map_kind: MandelbrotColourMapKinds) {
        self.colour_map_kind = colour_map_kind;
    }
}

fn validate_max_iterations(max_iterations: u32) -> Result<NonZeroU32, MandelbrotError> {
    NonZeroU32::new(max_iterations).ok_or(MandelbrotError::ZeroMaxIterationsError)
}

/// Snaps a raw budget onto the slider's range and step.
#[must_use]
pub fn snap_to_slider(max_iterations: u32) -> u32 {
    let clamped = max_iterations.clamp(MAX_ITERATIONS_SLIDER_MIN, MAX_ITERATIONS_SLIDER_MAX);
    let steps = (clamped - MAX_ITERATIONS_SLIDER_MIN + MAX_ITERATIONS_SLIDER_STEP / 2)
        / MAX_ITERATIONS_SLIDER_STEP;

    MAX_ITERATIONS_SLIDER_MIN + steps * MAX_ITERATIONS_SLIDER_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_iterations() {
        let result = RenderParameters::new(0, MandelbrotColourMapKinds::Grayscale);

        assert_eq!(result, Err(MandelbrotError::ZeroMaxIterationsError));
    }

    #[test]
    fn test_new_accepts_budgets_outside_slider_range() {
        let params = RenderParameters::new(5000, MandelbrotColourMapKinds::Fire).unwrap();

        assert_eq!(params.max_iterations(), 5000);
        assert_eq!(params.colour_map_kind(), MandelbrotColourMapKinds::Fire);
    }

    #[test]
    fn test_rejected_update_leaves_parameters_untouched() {
        let mut params = RenderParameters::new(100, MandelbrotColourMapKinds::Rainbow).unwrap();

        assert!(params.set_max_iterations(0).is_err());
        assert_eq!(params.max_iterations(), 100);

        params.set_max_iterations(250).unwrap();
        assert_eq!(params.max_iterations(), 250);
    }

    #[test]
    fn test_snap_to_slider() {
        assert_eq!(snap_to_slider(0), 10);
        assert_eq!(snap_to_slider(14), 10);
        assert_eq!(snap_to_slider(15), 20);
        assert_eq!(snap_to_slider(100), 100);
        assert_eq!(snap_to_slider(99_999), 1000);
    }
}
