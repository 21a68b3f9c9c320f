//! Planar coordinates and axis-aligned bounding boxes.
//!
//! The park is a flat rectangle measured in abstract "units"; `(0, 0)` is the
//! bottom-left corner.  Everything is `f64` because patron steering
//! accumulates many small steps and the extra precision keeps seeded runs
//! stable.

use std::fmt;

/// A point in park coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point `step` units from `self` along the straight line to
    /// `target`.
    ///
    /// Returns `self` unchanged when the two points coincide (there is no
    /// direction to move in).
    pub fn step_toward(self, target: Point, step: f64) -> Point {
        let dist = self.distance(target);
        if dist == 0.0 {
            return self;
        }
        Point {
            x: self.x + step * (target.x - self.x) / dist,
            y: self.y + step * (target.y - self.y) / dist,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// An axis-aligned box, inclusive on every edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Box of `width` × `height` centred on `center`.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min_x: center.x - half_w,
            max_x: center.x + half_w,
            min_y: center.y - half_h,
            max_y: center.y + half_h,
        }
    }

    /// The same box grown by `pad` on all four sides.
    #[inline]
    pub fn padded(self, pad: f64) -> Self {
        Self {
            min_x: self.min_x - pad,
            max_x: self.max_x + pad,
            min_y: self.min_y - pad,
            max_y: self.max_y + pad,
        }
    }

    /// `true` if `p` lies inside or on the edge of the box.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// `true` if the two boxes share any point.  Touching edges intersect.
    #[inline]
    pub fn intersects(self, other: Bounds) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }
}
