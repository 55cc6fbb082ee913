use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A coordinate in map projection units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Fails with [`MapError::InvalidCoordinates`] on NaN or infinite components
    pub fn validate(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(MapError::InvalidCoordinates(format!(
                "({}, {}) is not finite",
                self.x, self.y
            )))
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(feature = "geo-interop")]
impl From<geo_types::Coord<f64>> for Point {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

#[cfg(feature = "geo-interop")]
impl From<Point> for geo_types::Coord<f64> {
    fn from(point: Point) -> Self {
        geo_types::Coord {
            x: point.x,
            y: point.y,
        }
    }
}

/// Size of the map viewport in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size with no area cannot be used to derive a resolution
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_validate() {
        assert!(Point::new(10.0, -3.5).validate().is_ok());
        assert!(matches!(
            Point::new(f64::NAN, 0.0).validate(),
            Err(MapError::InvalidCoordinates(_))
        ));
        assert!(Point::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_pixel_size_empty() {
        assert!(!PixelSize::new(800.0, 600.0).is_empty());
        assert!(PixelSize::new(0.0, 600.0).is_empty());
        assert!(PixelSize::new(800.0, f64::NAN).is_empty());
    }

    #[cfg(feature = "geo-interop")]
    #[test]
    fn test_geo_types_conversion() {
        let coord = geo_types::Coord { x: 3.0, y: 7.0 };
        let point: Point = coord.into();
        assert_eq!(point, Point::new(3.0, 7.0));
        let back: geo_types::Coord<f64> = point.into();
        assert_eq!(back, coord);
    }
}
