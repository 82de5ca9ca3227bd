/// Integer coordinate on a raster: a grid cell or a canvas pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
