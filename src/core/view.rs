use crate::core::{
    extent::Extent,
    geo::{PixelSize, Point},
};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// The current view of a map: where it is centered and how many map units a
/// pixel covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Center of the view in map projection units
    pub center: Point,
    /// Map units per pixel
    pub resolution: f64,
}

impl View {
    pub fn new(center: Point, resolution: f64) -> Self {
        Self { center, resolution }
    }

    /// Fits a view to an extent displayed at the given pixel size
    pub fn fit(extent: &Extent, size: PixelSize) -> Result<Self> {
        let resolution = resolution_for_extent(extent, size)?;
        Ok(Self::new(extent.center(), resolution))
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolution = resolution;
    }

    /// The extent visible in a viewport of `size` pixels
    pub fn calculate_extent(&self, size: PixelSize) -> Extent {
        Extent::from_center_and_size(
            self.center,
            size.width * self.resolution,
            size.height * self.resolution,
        )
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(Point::default(), 1.0)
    }
}

/// The resolution needed to show the whole extent in a viewport of `size`
/// pixels. Takes the coarser of the horizontal and vertical resolutions.
pub fn resolution_for_extent(extent: &Extent, size: PixelSize) -> Result<f64> {
    if size.is_empty() {
        return Err(MapError::InvalidSize(format!(
            "{}x{} has no area",
            size.width, size.height
        )));
    }
    let x_resolution = extent.width() / size.width;
    let y_resolution = extent.height() / size.height;
    Ok(x_resolution.max(y_resolution))
}
