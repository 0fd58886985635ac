//! Synthetic buffers for end-to-end tests.

use gray_raster::PixelBuffer;

/// Uniform buffer holding `value` everywhere.
pub fn constant(width: u32, height: u32, value: i32) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for row in 0..height {
        for col in 0..width {
            img.set_pixel(row, col, value);
        }
    }
    img
}

/// Left-to-right linear ramp covering the sample range.
pub fn horizontal_ramp(width: u32, height: u32) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let value = if width > 1 { col * 255 / (width - 1) } else { 0 };
            img.set_pixel(row, col, value as i32);
        }
    }
    img
}

/// Alternating light/dark cells of `cell` pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let dark = ((row / cell) + (col / cell)) % 2 == 0;
            img.set_pixel(row, col, if dark { 32 } else { 224 });
        }
    }
    img
}
