//! Rasterization primitives over a pixel buffer.
//!
//! Classical integer algorithms: Bresenham lines and midpoint circles.
//! Plots falling outside the buffer are skipped, not reported.

use crate::buffer::PixelBuffer;
use crate::geometry::{Point, Rect};

#[inline]
fn plot(img: &mut PixelBuffer, x: i32, y: i32, color: u8) {
    if x >= 0 && (x as u32) < img.width() && y >= 0 && (y as u32) < img.height() {
        img.set_pixel(y as u32, x as u32, i32::from(color));
    }
}

/// Draw a straight segment from `p1` to `p2`.
pub fn draw_line(img: &mut PixelBuffer, p1: Point, p2: Point, color: u8) {
    let mut x = p1.x;
    let mut y = p1.y;
    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();
    let sx = if p1.x < p2.x { 1 } else { -1 };
    let sy = if p1.y < p2.y { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        plot(img, x, y, color);
        if x == p2.x && y == p2.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a circle outline around `center`.
pub fn draw_circle(img: &mut PixelBuffer, center: Point, radius: i32, color: u8) {
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - x;

    while x >= y {
        plot(img, center.x + x, center.y + y, color);
        plot(img, center.x + y, center.y + x, color);
        plot(img, center.x + y, center.y - x, color);
        plot(img, center.x + x, center.y - y, color);
        plot(img, center.x - x, center.y - y, color);
        plot(img, center.x - y, center.y - x, color);
        plot(img, center.x - y, center.y + x, color);
        plot(img, center.x - x, center.y + y, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }
}

/// Outline a rectangle by its four edges.
pub fn draw_rect(img: &mut PixelBuffer, r: Rect, color: u8) {
    let tl = Point::new(r.x, r.y);
    let br = Point::new(r.x + r.width as i32, r.y + r.height as i32);
    draw_rect_corners(img, tl, br, color);
}

/// Outline the rectangle spanned by a top-left and a bottom-right corner.
pub fn draw_rect_corners(img: &mut PixelBuffer, tl: Point, br: Point, color: u8) {
    draw_line(img, Point::new(tl.x, tl.y), Point::new(br.x, tl.y), color);
    draw_line(img, Point::new(tl.x, tl.y), Point::new(tl.x, br.y), color);
    draw_line(img, Point::new(tl.x, br.y), Point::new(br.x, br.y), color);
    draw_line(img, Point::new(br.x, tl.y), Point::new(br.x, br.y), color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_fills_the_row() {
        let mut img = PixelBuffer::new(8, 4);
        draw_line(&mut img, Point::new(1, 2), Point::new(6, 2), 200);
        for x in 1..=6 {
            assert_eq!(img.at(2, x), 200);
        }
        assert_eq!(img.at(2, 0), 0);
        assert_eq!(img.at(2, 7), 0);
    }

    #[test]
    fn diagonal_line_touches_both_endpoints() {
        let mut img = PixelBuffer::new(8, 8);
        draw_line(&mut img, Point::new(0, 0), Point::new(7, 7), 255);
        assert_eq!(img.at(0, 0), 255);
        assert_eq!(img.at(7, 7), 255);
        assert_eq!(img.at(3, 3), 255);
    }

    #[test]
    fn line_clips_silently_at_the_edge() {
        let mut img = PixelBuffer::new(4, 4);
        draw_line(&mut img, Point::new(-3, 1), Point::new(6, 1), 99);
        for x in 0..4 {
            assert_eq!(img.at(1, x), 99);
        }
    }

    #[test]
    fn circle_marks_the_cardinal_points() {
        let mut img = PixelBuffer::new(16, 16);
        draw_circle(&mut img, Point::new(8, 8), 5, 180);
        assert_eq!(img.at(8, 13), 180);
        assert_eq!(img.at(8, 3), 180);
        assert_eq!(img.at(13, 8), 180);
        assert_eq!(img.at(3, 8), 180);
        assert_eq!(img.at(8, 8), 0, "center stays untouched");
    }

    #[test]
    fn circle_partially_off_buffer_does_not_panic() {
        let mut img = PixelBuffer::new(6, 6);
        draw_circle(&mut img, Point::new(0, 0), 4, 60);
        assert_eq!(img.at(0, 4), 60);
        assert_eq!(img.at(4, 0), 60);
    }

    #[test]
    fn rect_outline_touches_all_corners() {
        let mut img = PixelBuffer::new(10, 10);
        draw_rect(&mut img, Rect::new(2, 3, 5, 4), 140);
        assert_eq!(img.at(3, 2), 140);
        assert_eq!(img.at(3, 7), 140);
        assert_eq!(img.at(7, 2), 140);
        assert_eq!(img.at(7, 7), 140);
        assert_eq!(img.at(5, 4), 0, "interior stays untouched");
    }
}
