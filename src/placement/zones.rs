use crate::core::{config::PopupPlacementOptions, extent::Extent, geo::Point};
use crate::placement::{
    check_inputs, layout::reset_placement, pixels_to_map_units, InnerEdges, Placement,
    PopupLayout,
};
use crate::Result;

/// Region of the viewport a coordinate falls in. Named after where the
/// coordinate is, not where the popup goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Bottom,
    Top,
    Left,
    Right,
}

impl Zone {
    /// Order in which zones are matched. Bottom comes first so that popups
    /// drawn above their anchor win whenever zones share a boundary.
    pub const PRIORITY: [Zone; 4] = [Zone::Bottom, Zone::Top, Zone::Left, Zone::Right];

    /// Popups are pushed away from the edge the zone touches
    pub fn placement(&self) -> Placement {
        match self {
            Zone::Bottom => Placement::Top,
            Zone::Top => Placement::Bottom,
            Zone::Left => Placement::Right,
            Zone::Right => Placement::Left,
        }
    }
}

/// The four zones of a viewport.
///
/// ```text
/// -------------
/// | |___t___| |
/// |l|       |r|
/// | |   b   | |
/// -------------
/// ```
///
/// The bottom zone is the largest, so most popups are drawn above their
/// anchor. Each zone includes its lower bounds and excludes its upper bounds,
/// except upper bounds lying on the outer extent edge. With a corner size
/// below half the extent width the zones tile the extent without overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementZones {
    pub outer: Extent,
    pub bottom: Extent,
    pub top: Extent,
    pub left: Extent,
    pub right: Extent,
}

impl PlacementZones {
    pub fn new(extent: &Extent, corner_size: f64) -> Self {
        let inner = InnerEdges::new(extent, corner_size);
        Self {
            outer: *extent,
            bottom: Extent::from_coords(inner.left, extent.min.y, inner.right, inner.top),
            top: Extent::from_coords(inner.left, inner.top, inner.right, extent.max.y),
            left: Extent::from_coords(extent.min.x, extent.min.y, inner.left, extent.max.y),
            right: Extent::from_coords(inner.right, extent.min.y, extent.max.x, extent.max.y),
        }
    }

    pub fn zone(&self, zone: Zone) -> &Extent {
        match zone {
            Zone::Bottom => &self.bottom,
            Zone::Top => &self.top,
            Zone::Left => &self.left,
            Zone::Right => &self.right,
        }
    }

    /// Whether `point` lies in `zone`, using the half-open convention above
    pub fn zone_contains(&self, zone: Zone, point: &Point) -> bool {
        let rect = self.zone(zone);
        let within = |value: f64, min: f64, max: f64, outer_max: f64| {
            value >= min && (value < max || (max == outer_max && value <= max))
        };
        within(point.x, rect.min.x, rect.max.x, self.outer.max.x)
            && within(point.y, rect.min.y, rect.max.y, self.outer.max.y)
    }

    /// First zone in [`Zone::PRIORITY`] order containing `point`
    pub fn locate(&self, point: &Point) -> Option<Zone> {
        Zone::PRIORITY
            .into_iter()
            .find(|zone| self.zone_contains(*zone, point))
    }
}

/// Chooses the side of `coordinate` where the popup body should be drawn.
///
/// Coordinates outside the extent get the default layout from
/// [`reset_placement`].
pub fn select_placement(
    extent: &Extent,
    resolution: f64,
    coordinate: &Point,
    options: &PopupPlacementOptions,
) -> Result<PopupLayout> {
    check_inputs(extent, resolution, coordinate, options)?;

    let corner_size = pixels_to_map_units(options.corner_pixel_size, resolution);
    let layout = match PlacementZones::new(extent, corner_size).locate(coordinate) {
        Some(zone) => PopupLayout::from(zone.placement()),
        None => reset_placement(),
    };
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Positioning;

    fn square() -> Extent {
        Extent::from_coords(0.0, 0.0, 1000.0, 1000.0)
    }

    fn layout_at(x: f64, y: f64) -> PopupLayout {
        select_placement(
            &square(),
            1.0,
            &Point::new(x, y),
            &PopupPlacementOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_zone_rects() {
        let zones = PlacementZones::new(&square(), 100.0);
        assert_eq!(zones.bottom, Extent::from_coords(100.0, 0.0, 900.0, 900.0));
        assert_eq!(zones.top, Extent::from_coords(100.0, 900.0, 900.0, 1000.0));
        assert_eq!(zones.left, Extent::from_coords(0.0, 0.0, 100.0, 1000.0));
        assert_eq!(zones.right, Extent::from_coords(900.0, 0.0, 1000.0, 1000.0));
    }

    #[test]
    fn test_center_goes_above() {
        let layout = layout_at(500.0, 500.0);
        assert_eq!(layout.placement, Placement::Top);
        assert_eq!(layout.positioning, Positioning::BottomCenter);
    }

    #[test]
    fn test_near_top_goes_below() {
        let layout = layout_at(500.0, 900.0);
        assert_eq!(layout.placement, Placement::Bottom);
        assert_eq!(layout.positioning, Positioning::TopCenter);
    }

    #[test]
    fn test_near_left_goes_right() {
        let layout = layout_at(20.0, 500.0);
        assert_eq!(layout.placement, Placement::Right);
        assert_eq!(layout.positioning, Positioning::CenterLeft);
    }

    #[test]
    fn test_near_right_goes_left() {
        let layout = layout_at(960.0, 500.0);
        assert_eq!(layout.placement, Placement::Left);
        assert_eq!(layout.positioning, Positioning::CenterRight);
    }

    #[test]
    fn test_shared_boundaries() {
        let zones = PlacementZones::new(&square(), 100.0);
        assert_eq!(zones.locate(&Point::new(100.0, 500.0)), Some(Zone::Bottom));
        assert_eq!(zones.locate(&Point::new(900.0, 500.0)), Some(Zone::Right));
        assert_eq!(zones.locate(&Point::new(500.0, 1000.0)), Some(Zone::Top));
        assert_eq!(zones.locate(&Point::new(1000.0, 1000.0)), Some(Zone::Right));
        assert_eq!(zones.locate(&Point::new(0.0, 0.0)), Some(Zone::Left));
    }

    #[test]
    fn test_zones_partition_extent() {
        let zones = PlacementZones::new(&square(), 100.0);
        for i in 0..=40 {
            for j in 0..=40 {
                let point = Point::new(i as f64 * 25.0, j as f64 * 25.0);
                let matches = Zone::PRIORITY
                    .iter()
                    .filter(|zone| zones.zone_contains(**zone, &point))
                    .count();
                assert_eq!(matches, 1, "{:?} matched {} zones", point, matches);
            }
        }
    }

    #[test]
    fn test_overlapping_zones_follow_priority() {
        // corners wider than half the extent make left and right overlap
        let zones = PlacementZones::new(&square(), 600.0);
        assert_eq!(zones.locate(&Point::new(500.0, 500.0)), Some(Zone::Left));
    }

    #[test]
    fn test_outside_extent_resets() {
        assert_eq!(layout_at(-10.0, 500.0), reset_placement());
        assert_eq!(layout_at(500.0, 1200.0), reset_placement());
    }

    #[test]
    fn test_idempotent() {
        let first = layout_at(30.0, 640.0);
        let second = layout_at(30.0, 640.0);
        assert_eq!(first, second);
    }
}
