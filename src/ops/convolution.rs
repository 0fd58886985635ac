//! Sliding-window kernel filtering with pluggable output scaling.
//!
//! The engine truncates its destination to the largest multiple of the
//! kernel dimensions that fits the source, then filters every position a
//! full window can be centred on. The border strip of the half-kernel width
//! and any truncated remainder keep their zero fill: convolution never
//! extrapolates or mirrors at edges.

use super::ImageOp;
use crate::buffer::PixelBuffer;
use log::debug;

const MEAN_BLUR_3X3: [[i32; 3]; 3] = [[1, 1, 1], [1, 1, 1], [1, 1, 1]];
const GAUSSIAN_3X3: [[i32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];
const SOBEL_HORIZONTAL_3X3: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
const SOBEL_VERTICAL_3X3: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Integer convolution kernel with dimensions fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    width: usize,
    height: usize,
    weights: Vec<i32>,
}

impl Kernel {
    /// Build a kernel from row-major weight rows. The rows are copied; the
    /// kernel never borrows caller data.
    ///
    /// Panics when `rows` is empty or ragged.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "kernel requires at least one row");
        let width = rows[0].as_ref().len();
        assert!(width > 0, "kernel requires at least one column");
        let mut weights = Vec::with_capacity(width * rows.len());
        for row in rows {
            assert_eq!(row.as_ref().len(), width, "kernel rows must have equal length");
            weights.extend_from_slice(row.as_ref());
        }
        Self {
            width,
            height: rows.len(),
            weights,
        }
    }

    /// 3×3 box kernel; pair with [`Scaling::MeanBlur`].
    pub fn mean_blur_3x3() -> Self {
        Self::from_rows(&MEAN_BLUR_3X3)
    }

    /// 3×3 binomial kernel `1 2 1 / 2 4 2 / 1 2 1`; pair with
    /// [`Scaling::GaussianBlur`].
    pub fn gaussian_3x3() -> Self {
        Self::from_rows(&GAUSSIAN_3X3)
    }

    /// Horizontal-edge Sobel kernel; pair with [`Scaling::HorizontalSobel`].
    pub fn sobel_horizontal_3x3() -> Self {
        Self::from_rows(&SOBEL_HORIZONTAL_3X3)
    }

    /// Vertical-edge Sobel kernel; pair with [`Scaling::VerticalSobel`].
    pub fn sobel_vertical_3x3() -> Self {
        Self::from_rows(&SOBEL_VERTICAL_3X3)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[row * self.width + col]
    }
}

/// Maps a raw convolution accumulator to an output sample.
///
/// The presets mirror the kernels they are normally paired with. `Custom`
/// accepts any pure, total function; its `u8` return already carries the
/// range contract, so the engine never re-clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scaling {
    /// Divide by 9 and clamp.
    MeanBlur,
    /// Divide by 16 and clamp.
    GaussianBlur,
    /// Map the signed gradient range of roughly [-1020, 1020] onto [0, 255].
    HorizontalSobel,
    /// Same mapping as `HorizontalSobel`.
    VerticalSobel,
    Custom(fn(i32) -> u8),
}

impl Scaling {
    #[inline]
    pub fn apply(&self, accumulated: i32) -> u8 {
        match self {
            Scaling::MeanBlur => clamp(accumulated / 9),
            Scaling::GaussianBlur => clamp(accumulated / 16),
            Scaling::HorizontalSobel | Scaling::VerticalSobel => sobel_scale(accumulated),
            Scaling::Custom(f) => f(accumulated),
        }
    }
}

#[inline]
fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn sobel_scale(accumulated: i32) -> u8 {
    let normalized = (f64::from(accumulated) + 4.0 * 255.0) / (8.0 * 255.0);
    let scaled = normalized * 255.0;
    if scaled < 0.0 {
        0
    } else if scaled > 255.0 {
        255
    } else {
        scaled as u8
    }
}

/// An [`ImageOp`] that owns an integer kernel and a scaling policy.
///
/// Stateless across `process` calls: the kernel and scaling are fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct Convolution {
    kernel: Kernel,
    scaling: Scaling,
}

impl Convolution {
    pub fn new(kernel: Kernel, scaling: Scaling) -> Self {
        Self { kernel, scaling }
    }

    #[inline]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    #[inline]
    pub fn scaling(&self) -> Scaling {
        self.scaling
    }

    /// Weighted sum of the kernel window centred at (row, col).
    ///
    /// The window spans `index - dim / 2` for each kernel index, so an
    /// even-dimensioned kernel samples one step further up/left than down/
    /// right. Callers must keep the whole window inside the source.
    pub fn weighted_sum(&self, src: &PixelBuffer, row: u32, col: u32) -> i32 {
        let pad_w = (self.kernel.width / 2) as i64;
        let pad_h = (self.kernel.height / 2) as i64;
        let mut accumulated = 0i32;
        for ki in 0..self.kernel.height {
            let sy = (i64::from(row) + ki as i64 - pad_h) as u32;
            for kj in 0..self.kernel.width {
                let sx = (i64::from(col) + kj as i64 - pad_w) as u32;
                accumulated += i32::from(src.at(sy, sx)) * self.kernel.weight(ki, kj);
            }
        }
        accumulated
    }
}

impl ImageOp for Convolution {
    fn process(&self, src: &PixelBuffer) -> PixelBuffer {
        let kw = self.kernel.width as u32;
        let kh = self.kernel.height as u32;
        let out_w = src.width() - src.width() % kw;
        let out_h = src.height() - src.height() % kh;
        let pad_w = kw / 2;
        let pad_h = kh / 2;

        debug!(
            "Convolution: {kw}x{kh} kernel over {}x{} source, {out_w}x{out_h} frame, border {pad_w}x{pad_h}",
            src.width(),
            src.height()
        );

        let mut dst = PixelBuffer::new(out_w, out_h);
        for row in pad_h..out_h.saturating_sub(pad_h) {
            for col in pad_w..out_w.saturating_sub(pad_w) {
                let accumulated = self.weighted_sum(src, row, col);
                dst.set_pixel(row, col, i32::from(self.scaling.apply(accumulated)));
            }
        }
        dst
    }
}
