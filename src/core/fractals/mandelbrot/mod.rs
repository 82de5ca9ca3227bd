pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod mandelbrot_config;
pub mod params;
