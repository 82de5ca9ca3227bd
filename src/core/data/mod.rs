pub mod cell_layout;
pub mod colour;
pub mod complex;
pub mod dimensions;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
