use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::dimensions::Dimensions;

/// Evaluates every cell of `grid` on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    grid: Dimensions,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    grid.points().map(|cell| algorithm.compute(cell)).collect()
}
