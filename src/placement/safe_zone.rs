use crate::core::{config::PopupPlacementOptions, extent::Extent, geo::Point};
use crate::placement::{check_inputs, pixels_to_map_units, InnerEdges};
use crate::Result;

/// The four square corners of the viewport where there is not enough room to
/// show a popup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRects {
    pub top_left: Extent,
    pub top_right: Extent,
    pub bottom_left: Extent,
    pub bottom_right: Extent,
}

impl CornerRects {
    /// Corners of side `corner_size` (map units) anchored at each extent corner
    pub fn new(extent: &Extent, corner_size: f64) -> Self {
        let inner = InnerEdges::new(extent, corner_size);
        Self {
            top_left: Extent::from_coords(extent.min.x, inner.top, inner.left, extent.max.y),
            top_right: Extent::from_coords(inner.right, inner.top, extent.max.x, extent.max.y),
            bottom_left: Extent::from_coords(extent.min.x, extent.min.y, inner.left, inner.bottom),
            bottom_right: Extent::from_coords(inner.right, extent.min.y, extent.max.x, inner.bottom),
        }
    }

    pub fn as_array(&self) -> [Extent; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Corner edges are part of the corner
    pub fn contains(&self, point: &Point) -> bool {
        self.as_array().iter().any(|corner| corner.contains(point))
    }
}

/// Whether a popup anchored at `coordinate` fits in the viewport.
///
/// It does not if the coordinate is within `pixel_buffer` pixels of an edge,
/// or inside one of the four `corner_pixel_size` corners.
pub fn is_coordinate_safe(
    extent: &Extent,
    resolution: f64,
    coordinate: &Point,
    options: &PopupPlacementOptions,
) -> Result<bool> {
    check_inputs(extent, resolution, coordinate, options)?;

    let buffer = pixels_to_map_units(options.pixel_buffer, resolution);
    if !extent.buffered(-buffer).contains(coordinate) {
        return Ok(false);
    }

    let corner_size = pixels_to_map_units(options.corner_pixel_size, resolution);
    Ok(!CornerRects::new(extent, corner_size).contains(coordinate))
}
