//! Popup placement engine
//!
//! Everything here is a pure function of the visible extent, the view
//! resolution and a candidate coordinate. Pixel sizes from
//! [`PopupPlacementOptions`] are turned into map units by multiplying with the
//! resolution.
//!
//! Inputs are checked before any geometry runs: the resolution must be finite
//! and positive, the extent finite and not inverted, the coordinate finite.
//! Violations are reported as errors rather than producing a placement.

pub mod layout;
pub mod safe_zone;
pub mod zones;

pub use layout::{reset_placement, Placement, PopupLayout, Positioning};
pub use safe_zone::{is_coordinate_safe, CornerRects};
pub use zones::{select_placement, PlacementZones, Zone};

use crate::core::{config::PopupPlacementOptions, extent::Extent, geo::Point};
use crate::{MapError, Result};

/// The four lines obtained by moving each extent edge inward by the corner size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerEdges {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl InnerEdges {
    pub fn new(extent: &Extent, corner_size: f64) -> Self {
        Self {
            left: extent.min.x + corner_size,
            bottom: extent.min.y + corner_size,
            right: extent.max.x - corner_size,
            top: extent.max.y - corner_size,
        }
    }
}

/// Converts a pixel count into map units at the given resolution
pub fn pixels_to_map_units(pixels: f64, resolution: f64) -> f64 {
    resolution * pixels
}

pub(crate) fn check_inputs(
    extent: &Extent,
    resolution: f64,
    coordinate: &Point,
    options: &PopupPlacementOptions,
) -> Result<()> {
    if !(resolution.is_finite() && resolution > 0.0) {
        return Err(MapError::InvalidResolution(resolution));
    }
    extent.validate()?;
    coordinate.validate()?;
    options.validate()
}
