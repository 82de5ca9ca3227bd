use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fractal_life::{
    CliRenderController, MandelbrotColourMapKinds, MandelbrotConfig, PpmFilePresenter, snap_to_slider,
};

/// Render the Mandelbrot set onto a cell grid and optionally let Conway's
/// Game of Life loose on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Logical grid width in cells
    #[arg(long, default_value_t = 2000)]
    grid_width: u32,

    /// Logical grid height in cells
    #[arg(long, default_value_t = 1500)]
    grid_height: u32,

    /// Iteration budget per cell
    #[arg(short = 'i', long, default_value_t = 100)]
    max_iterations: u32,

    /// Palette name
    #[arg(short, long, default_value_t = MandelbrotColourMapKinds::default())]
    palette: MandelbrotColourMapKinds,

    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_x: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_y: f64,

    /// Game of Life generations to run after rendering
    #[arg(short, long, default_value_t = 0)]
    generations: u32,

    /// Output PPM file
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Print the available palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if args.list_palettes {
        for kind in MandelbrotColourMapKinds::ALL {
            println!("{:<10} {}", kind.name(), kind.display_name());
        }
        return Ok(());
    }

    let nearest_slider_value = snap_to_slider(args.max_iterations);
    if nearest_slider_value != args.max_iterations {
        tracing::warn!(
            max_iterations = args.max_iterations,
            nearest_slider_value,
            "iteration budget is not reachable from the interactive slider"
        );
    }

    let config = MandelbrotConfig {
        max_iterations: args.max_iterations,
        colour_map_kind: args.palette,
        ..MandelbrotConfig::with_sizes(args.width, args.height, args.grid_width, args.grid_height)?
    };

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), &config)?;

    controller.set_view(args.zoom, args.offset_x, args.offset_y)?;
    controller.generate()?;
    controller.evolve(args.generations)?;
    controller.write(&args.output)?;

    tracing::info!(output = %args.output.display(), "frame written");

    Ok(())
}
