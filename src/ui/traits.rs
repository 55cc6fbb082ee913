use crate::core::{
    extent::Extent,
    geo::{PixelSize, Point},
    view::View,
};
use crate::{input::events::InputEvent, Result};

/// What a control needs from the map it is attached to
pub trait MapHost {
    /// Extent currently visible in the viewport
    fn viewport_extent(&self) -> Extent;

    /// Map units per pixel, if the host tracks it. When `None`, callers
    /// derive it from the extent and [`MapHost::size`].
    fn resolution(&self) -> Option<f64> {
        None
    }

    /// Viewport size in pixels
    fn size(&self) -> PixelSize;

    /// Recenters the view on a coordinate
    fn set_center(&mut self, center: Point);
}

impl<T: MapHost + ?Sized> MapHost for &mut T {
    fn viewport_extent(&self) -> Extent {
        (**self).viewport_extent()
    }

    fn resolution(&self) -> Option<f64> {
        (**self).resolution()
    }

    fn size(&self) -> PixelSize {
        (**self).size()
    }

    fn set_center(&mut self, center: Point) {
        (**self).set_center(center)
    }
}

impl<T: MapHost + ?Sized> MapHost for Box<T> {
    fn viewport_extent(&self) -> Extent {
        (**self).viewport_extent()
    }

    fn resolution(&self) -> Option<f64> {
        (**self).resolution()
    }

    fn size(&self) -> PixelSize {
        (**self).size()
    }

    fn set_center(&mut self, center: Point) {
        (**self).set_center(center)
    }
}

/// Map controls attach to a host, receive its input events and release it on
/// detach
pub trait Control<H: MapHost> {
    fn attach(&mut self, host: H);

    /// Returns the host that was attached, if any
    fn detach(&mut self) -> Option<H>;

    fn is_attached(&self) -> bool;

    fn handle_event(&mut self, event: &InputEvent) -> Result<()>;
}

/// A host backed by a plain [`View`] and a fixed viewport size
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportHost {
    pub view: View,
    pub size: PixelSize,
}

impl ViewportHost {
    pub fn new(view: View, size: PixelSize) -> Self {
        Self { view, size }
    }
}

impl MapHost for ViewportHost {
    fn viewport_extent(&self) -> Extent {
        self.view.calculate_extent(self.size)
    }

    fn resolution(&self) -> Option<f64> {
        Some(self.view.resolution)
    }

    fn size(&self) -> PixelSize {
        self.size
    }

    fn set_center(&mut self, center: Point) {
        self.view.set_center(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_host() {
        let mut host = ViewportHost::new(
            View::new(Point::new(500.0, 500.0), 1.0),
            PixelSize::new(1000.0, 1000.0),
        );
        assert_eq!(
            host.viewport_extent(),
            Extent::from_coords(0.0, 0.0, 1000.0, 1000.0)
        );
        host.set_center(Point::new(0.0, 0.0));
        assert_eq!(
            host.viewport_extent(),
            Extent::from_coords(-500.0, -500.0, 500.0, 500.0)
        );
    }

    #[test]
    fn test_borrowed_host_forwards() {
        let mut host = ViewportHost::new(View::default(), PixelSize::new(10.0, 10.0));
        {
            let mut borrowed = &mut host;
            MapHost::set_center(&mut borrowed, Point::new(3.0, 4.0));
            assert_eq!(borrowed.resolution(), Some(1.0));
        }
        assert_eq!(host.view.center, Point::new(3.0, 4.0));
    }
}
