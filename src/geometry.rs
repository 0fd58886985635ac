//! Plain geometric value types shared by the buffer and operator layers.

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, Sub};

/// Integer pixel coordinate, x to the right and y down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column covered by the rectangle.
    #[inline]
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// One past the bottom row covered by the rectangle.
    #[inline]
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Overlapping area of two rectangles; the zero rectangle when disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if i64::from(x) >= right || i64::from(y) >= bottom {
            return Rect::default();
        }
        Rect::new(x, y, (right - i64::from(x)) as u32, (bottom - i64::from(y)) as u32)
    }

    /// Smallest rectangle containing both.
    pub fn union_with(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, (right - i64::from(x)) as u32, (bottom - i64::from(y)) as u32)
    }
}

impl Add<Point> for Rect {
    type Output = Rect;

    /// Translate the rectangle by `offset`.
    fn add(self, offset: Point) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;

    fn sub(self, offset: Point) -> Rect {
        Rect::new(self.x - offset.x, self.y - offset.y, self.width, self.height)
    }
}

impl BitAnd for Rect {
    type Output = Rect;

    fn bitand(self, rhs: Rect) -> Rect {
        self.intersect(&rhs)
    }
}

impl BitOr for Rect {
    type Output = Rect;

    fn bitor(self, rhs: Rect) -> Rect {
        self.union_with(&rhs)
    }
}

/// Width/height pair compared by area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl PartialOrd for Size {
    /// Ordered by area. Distinct sizes with equal areas are incomparable so
    /// that `partial_cmp` stays consistent with `==`.
    fn partial_cmp(&self, other: &Size) -> Option<Ordering> {
        match self.area().cmp(&other.area()) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}
