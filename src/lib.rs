#![doc = include_str!("../README.md")]

pub mod buffer;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod ops;

// --- High-level re-exports -------------------------------------------------

pub use crate::buffer::pgm::{load_pgm, save_pgm};
pub use crate::buffer::{BufferError, PixelBuffer};
pub use crate::geometry::{Point, Rect, Size};
pub use crate::ops::convolution::{Convolution, Kernel, Scaling};
pub use crate::ops::ImageOp;

/// Small prelude for quick experiments.
///
/// ```
/// use gray_raster::prelude::*;
///
/// let mut img = PixelBuffer::new(4, 4);
/// img.set_pixel(1, 2, 300); // clamped to 255
/// assert_eq!(img.at(1, 2), 255);
///
/// img.crop(Rect::new(1, 0, 3, 3)).unwrap();
/// assert_eq!((img.width(), img.height()), (3, 3));
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::ops::convolution::{Convolution, Kernel, Scaling};
    pub use crate::ops::ImageOp;
}
