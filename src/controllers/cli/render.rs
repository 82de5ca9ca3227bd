use std::error::Error;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_fractal::render_fractal::render_fractal;
use crate::core::actions::step_automaton::step_automaton::step_automaton;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::params::RenderParameters;

/// One-shot rendering: draw the fractal, optionally evolve the automaton a
/// fixed number of generations, then hand the result to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    viewport: Viewport,
    params: RenderParameters,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: &MandelbrotConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            presenter,
            viewport: config.build_viewport(),
            params: config.build_render_parameters()?,
            buffer: None,
        })
    }

    pub fn set_view(&mut self, zoom: f64, offset_x: f64, offset_y: f64) -> Result<(), ViewportError> {
        self.viewport.set_view(zoom, offset_x, offset_y)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let canvas = self.viewport.canvas();
        let grid = self.viewport.grid();

        info!(
            canvas = %format!("{}x{}", canvas.width(), canvas.height()),
            grid = %format!("{}x{}", grid.width(), grid.height()),
            max_iterations = self.params.max_iterations(),
            palette = %self.params.colour_map_kind(),
            zoom = self.viewport.zoom(),
            "rendering mandelbrot set"
        );

        let start = Instant::now();
        self.buffer = Some(render_fractal(&self.viewport, &self.params)?);

        info!(duration = ?start.elapsed(), "render finished");

        Ok(())
    }

    /// Steps the automaton `generations` times, rendering first if needed.
    pub fn evolve(&mut self, generations: u32) -> Result<(), Box<dyn Error>> {
        if generations == 0 {
            return Ok(());
        }

        let mut buffer = match self.buffer.take() {
            Some(buffer) => buffer,
            None => render_fractal(&self.viewport, &self.params)?,
        };
        let layout = self.viewport.layout();
        let start = Instant::now();

        for _ in 0..generations {
            buffer = step_automaton(&buffer, layout)?;
        }

        info!(generations, duration = ?start.elapsed(), "automaton evolved");
        self.buffer = Some(buffer);

        Ok(())
    }

    /// Writes the current canvas, if any. A path without an extension gets
    /// the presenter's.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };

        let filepath = filepath.as_ref();
        if filepath.extension().is_some() {
            self.presenter.present(buffer, filepath)
        } else {
            self.presenter
                .present(buffer, filepath.with_extension(self.presenter.file_extension()))
        }
    }
}
