use crate::core::geo::Point;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in map projection coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

impl Extent {
    /// Creates an extent from its bottom-left and top-right points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates an extent from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates an extent from a center point and size
    pub fn from_center_and_size(center: Point, width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::new(
            Point::new(center.x - half_width, center.y - half_height),
            Point::new(center.x + half_width, center.y + half_height),
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn bottom_left(&self) -> Point {
        self.min
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    pub fn top_right(&self) -> Point {
        self.max
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }

    /// Gets the four corner points of the extent
    pub fn corners(&self) -> [Point; 4] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }

    /// Checks if the extent contains a point. Edges count as inside.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns a new extent grown by `amount` on every side.
    /// A negative amount shrinks it; the result may be inverted.
    pub fn buffered(&self, amount: f64) -> Extent {
        Extent::from_coords(
            self.min.x - amount,
            self.min.y - amount,
            self.max.x + amount,
            self.max.y + amount,
        )
    }

    /// Checks if the extent is valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Fails with [`MapError::InvalidExtent`] if any bound is not finite or
    /// the extent is inverted
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(MapError::InvalidExtent(format!(
                "{:?} has non-finite bounds",
                self
            )));
        }
        if !self.is_valid() {
            return Err(MapError::InvalidExtent(format!(
                "min ({}, {}) exceeds max ({}, {})",
                self.min.x, self.min.y, self.max.x, self.max.y
            )));
        }
        Ok(())
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}

impl From<[f64; 4]> for Extent {
    fn from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Self {
        Self::from_coords(min_x, min_y, max_x, max_y)
    }
}

#[cfg(feature = "geo-interop")]
impl From<Extent> for geo_types::Rect<f64> {
    fn from(extent: Extent) -> Self {
        geo_types::Rect::new(
            geo_types::Coord::from(extent.min),
            geo_types::Coord::from(extent.max),
        )
    }
}

#[cfg(feature = "geo-interop")]
impl From<geo_types::Rect<f64>> for Extent {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        Extent::new(rect.min().into(), rect.max().into())
    }
}
