use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;

/// Half-open pixel rectangle `[left, right) x [top, bottom)` covered by one grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelBlock {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelBlock {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (left, right) = (self.left, self.right);

        (self.top..self.bottom).flat_map(move |y| (left..right).map(move |x| Point { x, y }))
    }
}

/// Maps cells of the logical grid onto pixels of the canvas.
///
/// A cell `(x, y)` covers `[x*pw, (x+1)*pw) x [y*ph, (y+1)*ph)` where
/// `pw = canvas_width / grid_width` and `ph = canvas_height / grid_height`.
/// Bounds are floored with exact integer arithmetic. When the grid is finer
/// than the canvas a block would be empty, so it is widened to the single
/// pixel at its floored origin; several cells then share that pixel and
/// whichever is written last in row-major order wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellLayout {
    grid: Dimensions,
    canvas: Dimensions,
}

impl CellLayout {
    #[must_use]
    pub fn new(grid: Dimensions, canvas: Dimensions) -> Self {
        Self { grid, canvas }
    }

    #[must_use]
    pub fn grid(&self) -> Dimensions {
        self.grid
    }

    #[must_use]
    pub fn canvas(&self) -> Dimensions {
        self.canvas
    }

    /// Canvas pixels per cell horizontally; below 1.0 for an oversampled grid.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        f64::from(self.canvas.width()) / f64::from(self.grid.width())
    }

    /// Canvas pixels per cell vertically.
    #[must_use]
    pub fn pixel_height(&self) -> f64 {
        f64::from(self.canvas.height()) / f64::from(self.grid.height())
    }

    /// Pixel sampled to decide the state of `cell`: the floored block origin,
    /// clamped into the canvas.
    #[must_use]
    pub fn representative_pixel(&self, cell: Point) -> Point {
        Point {
            x: scale_floor(cell.x, self.canvas.width(), self.grid.width())
                .min(self.canvas.width() - 1),
            y: scale_floor(cell.y, self.canvas.height(), self.grid.height())
                .min(self.canvas.height() - 1),
        }
    }

    #[must_use]
    pub fn cell_block(&self, cell: Point) -> PixelBlock {
        let (left, right) = block_span(cell.x, self.canvas.width(), self.grid.width());
        let (top, bottom) = block_span(cell.y, self.canvas.height(), self.grid.height());

        PixelBlock {
            left,
            top,
            right,
            bottom,
        }
    }
}

fn scale_floor(coord: u32, canvas_extent: u32, grid_extent: u32) -> u32 {
    (u64::from(coord) * u64::from(canvas_extent) / u64::from(grid_extent)) as u32
}

fn block_span(coord: u32, canvas_extent: u32, grid_extent: u32) -> (u32, u32) {
    let start = scale_floor(coord, canvas_extent, grid_extent).min(canvas_extent - 1);
    let end = scale_floor(coord.saturating_add(1), canvas_extent, grid_extent).min(canvas_extent);

    (start, end.max(start + 1))
}
