pub mod adapters;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::controllers::cli::render::CliRenderController;
pub use crate::controllers::interactive::scheduler::{RenderScheduler, SchedulerAction, SchedulerMode};
pub use crate::controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
};
pub use crate::core::actions::render_fractal::render_fractal::{render_fractal, RenderFractalError};
pub use crate::core::actions::step_automaton::step_automaton::{step_automaton, StepAutomatonError};
pub use crate::core::data::cell_layout::CellLayout;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::dimensions::Dimensions;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_value;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::fractals::mandelbrot::params::{RenderParameters, snap_to_slider};
pub use crate::presenters::file::ppm::PpmFilePresenter;
