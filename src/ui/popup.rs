use crate::core::geo::Point;
use crate::placement::{reset_placement, PopupLayout};
use serde::{Deserialize, Serialize};

/// Notifications sent to popup listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PopupEvent {
    Shown {
        coordinate: Point,
        layout: PopupLayout,
        content: String,
    },
    Closed,
}

/// The single popup a directions control shows next to a route step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Popup {
    position: Option<Point>,
    content: String,
    layout: PopupLayout,
    visible: bool,
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any open popup with a new one at `coordinate`
    pub fn open(&mut self, coordinate: Point, content: String, layout: PopupLayout) -> PopupEvent {
        self.position = Some(coordinate);
        self.content = content;
        self.layout = layout;
        self.visible = true;
        PopupEvent::Shown {
            coordinate,
            layout,
            content: self.content.clone(),
        }
    }

    /// Hides the popup. Returns `None` if it was already hidden.
    pub fn close(&mut self) -> Option<PopupEvent> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.position = None;
        self.content.clear();
        Some(PopupEvent::Closed)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Layout the next render should use
    pub fn layout(&self) -> PopupLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: PopupLayout) {
        self.layout = layout;
    }

    pub fn reset_layout(&mut self) {
        self.layout = reset_placement();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Placement;

    #[test]
    fn test_open_and_close() {
        let mut popup = Popup::new();
        assert!(!popup.is_visible());
        assert_eq!(popup.close(), None);

        let layout = PopupLayout::from(Placement::Left);
        let event = popup.open(Point::new(1.0, 2.0), "Merge".to_string(), layout);
        assert!(matches!(event, PopupEvent::Shown { .. }));
        assert!(popup.is_visible());
        assert_eq!(popup.position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(popup.content(), "Merge");
        assert_eq!(popup.layout(), layout);

        assert_eq!(popup.close(), Some(PopupEvent::Closed));
        assert!(!popup.is_visible());
        assert_eq!(popup.position(), None);
    }

    #[test]
    fn test_reset_layout() {
        let mut popup = Popup::new();
        popup.set_layout(PopupLayout::from(Placement::Bottom));
        popup.reset_layout();
        assert_eq!(popup.layout(), reset_placement());
    }
}
