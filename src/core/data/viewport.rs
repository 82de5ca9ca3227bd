use crate::core::data::cell_layout::CellLayout;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Wheel zoom factor when scrolling towards the user (`delta_y <= 0`).
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;
/// Wheel zoom factor when scrolling away from the user (`delta_y > 0`).
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoomFactor { factor: f64 },
    NonPositiveZoom { zoom: f64 },
    NonFiniteInput { x: f64, y: f64 },
    OffsetOverflow { offset_x: f64, offset_y: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be finite and positive: {}", factor)
            }
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom would leave the valid range: {}", zoom)
            }
            Self::NonFiniteInput { x, y } => {
                write!(f, "pointer input must be finite: x:{}, y:{}", x, y)
            }
            Self::OffsetOverflow { offset_x, offset_y } => {
                write!(
                    f,
                    "view offset would leave the finite range: x:{}, y:{}",
                    offset_x, offset_y
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Pan/zoom state mapping grid cells onto the complex plane.
///
/// Offsets are in grid-cell units and unbounded. Both plane axes are scaled
/// by `grid_width / 4`, so the aspect ratio of the fractal follows the grid
/// width whatever the grid height is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    canvas: Dimensions,
    grid: Dimensions,
}

impl Viewport {
    #[must_use]
    pub fn new(canvas: Dimensions, grid: Dimensions) -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            canvas,
            grid,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn canvas(&self) -> Dimensions {
        self.canvas
    }

    #[must_use]
    pub fn grid(&self) -> Dimensions {
        self.grid
    }

    #[must_use]
    pub fn layout(&self) -> CellLayout {
        CellLayout::new(self.grid, self.canvas)
    }

    /// Places the view at an explicit zoom and offset.
    pub fn set_view(&mut self, zoom: f64, offset_x: f64, offset_y: f64) -> Result<(), ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::NonPositiveZoom { zoom });
        }
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(ViewportError::NonFiniteInput {
                x: offset_x,
                y: offset_y,
            });
        }

        self.zoom = zoom;
        self.offset_x = offset_x;
        self.offset_y = offset_y;

        Ok(())
    }

    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Plane coordinate of a (possibly fractional) grid position.
    #[must_use]
    pub fn cell_to_plane(&self, x: f64, y: f64) -> Complex {
        let grid_width = f64::from(self.grid.width());
        let grid_height = f64::from(self.grid.height());
        let scale = grid_width / 4.0;

        Complex {
            real: (x - grid_width / 2.0 + self.offset_x) / scale / self.zoom,
            imag: (y - grid_height / 2.0 + self.offset_y) / scale / self.zoom,
        }
    }

    #[must_use]
    pub fn cell_point_to_plane(&self, cell: Point) -> Complex {
        self.cell_to_plane(f64::from(cell.x), f64::from(cell.y))
    }

    /// Grid position under a canvas pixel position.
    #[must_use]
    pub fn screen_to_grid(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            screen_x / f64::from(self.canvas.width()) * f64::from(self.grid.width()),
            screen_y / f64::from(self.canvas.height()) * f64::from(self.grid.height()),
        )
    }

    #[must_use]
    pub fn screen_to_plane(&self, screen_x: f64, screen_y: f64) -> Complex {
        let (x, y) = self.screen_to_grid(screen_x, screen_y);

        self.cell_to_plane(x, y)
    }

    /// Applies a drag of `(dx, dy)` canvas pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ViewportError::NonFiniteInput { x: dx, y: dy });
        }

        self.commit_offsets(self.offset_x - dx / self.zoom, self.offset_y - dy / self.zoom)
    }

    /// Multiplies the zoom by `factor`, keeping the plane point under
    /// `(screen_x, screen_y)` fixed on screen.
    ///
    /// The state is left untouched when the factor or the resulting zoom is
    /// not finite and positive.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, factor: f64) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }
        if !screen_x.is_finite() || !screen_y.is_finite() {
            return Err(ViewportError::NonFiniteInput {
                x: screen_x,
                y: screen_y,
            });
        }

        let zoom = self.zoom * factor;
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::NonPositiveZoom { zoom });
        }

        let (grid_x, grid_y) = self.screen_to_grid(screen_x, screen_y);
        let anchor_x = grid_x - f64::from(self.grid.width()) / 2.0;
        let anchor_y = grid_y - f64::from(self.grid.height()) / 2.0;

        // (anchor + offset) / zoom is invariant across the update
        self.commit_offsets(
            (anchor_x + self.offset_x) * factor - anchor_x,
            (anchor_y + self.offset_y) * factor - anchor_y,
        )?;
        self.zoom = zoom;

        Ok(())
    }

    fn commit_offsets(&mut self, offset_x: f64, offset_y: f64) -> Result<(), ViewportError> {
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(ViewportError::OffsetOverflow { offset_x, offset_y });
        }

        self.offset_x = offset_x;
        self.offset_y = offset_y;

        Ok(())
    }

    /// Wheel convention: positive `delta_y` zooms out, anything else zooms in.
    pub fn wheel(&mut self, delta_y: f64, screen_x: f64, screen_y: f64) -> Result<(), ViewportError> {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT_FACTOR
        } else {
            WHEEL_ZOOM_IN_FACTOR
        };

        self.zoom_at(screen_x, screen_y, factor)
    }
}
