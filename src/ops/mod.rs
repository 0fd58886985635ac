//! Image operators: the transform contract and its implementations.

pub mod convolution;
pub mod point;

pub use convolution::{Convolution, Kernel, Scaling};
pub use point::{BrightnessContrast, Gamma};

use crate::buffer::PixelBuffer;

/// A transform from one pixel buffer to a freshly allocated result.
///
/// `src` is read-only; the result may have different dimensions than the
/// source (the convolution engine truncates its frame). Implementations
/// carry no mutable state across calls, so processing the same source twice
/// yields the same result.
pub trait ImageOp {
    fn process(&self, src: &PixelBuffer) -> PixelBuffer;
}
