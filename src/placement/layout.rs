use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the anchor coordinate on which the popup body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }

    /// The point of the popup element pinned to the anchor coordinate.
    /// A popup drawn above the coordinate hangs from its bottom center, and
    /// so on for the other sides.
    pub fn positioning(&self) -> Positioning {
        match self {
            Placement::Top => Positioning::BottomCenter,
            Placement::Bottom => Positioning::TopCenter,
            Placement::Left => Positioning::CenterRight,
            Placement::Right => Positioning::CenterLeft,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchor point of the popup element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Positioning {
    #[default]
    BottomCenter,
    TopCenter,
    CenterLeft,
    CenterRight,
}

impl Positioning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Positioning::BottomCenter => "bottom-center",
            Positioning::TopCenter => "top-center",
            Positioning::CenterLeft => "center-left",
            Positioning::CenterRight => "center-right",
        }
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement and positioning travel together: the renderer needs the first
/// to draw the pointer arrow and the second to pin the element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PopupLayout {
    pub placement: Placement,
    pub positioning: Positioning,
}

impl From<Placement> for PopupLayout {
    fn from(placement: Placement) -> Self {
        Self {
            placement,
            positioning: placement.positioning(),
        }
    }
}

/// The default layout: popup above the coordinate, anchored bottom-center
pub fn reset_placement() -> PopupLayout {
    PopupLayout::from(Placement::Top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_placement() {
        let layout = reset_placement();
        assert_eq!(layout.placement, Placement::Top);
        assert_eq!(layout.positioning, Positioning::BottomCenter);
        assert_eq!(layout, PopupLayout::default());
    }

    #[test]
    fn test_positioning_pairs() {
        assert_eq!(Placement::Bottom.positioning(), Positioning::TopCenter);
        assert_eq!(Placement::Left.positioning(), Positioning::CenterRight);
        assert_eq!(Placement::Right.positioning(), Positioning::CenterLeft);
    }

    #[test]
    fn test_serialized_names() {
        let layout = PopupLayout::from(Placement::Right);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"{"placement":"right","positioning":"center-left"}"#);
        assert_eq!(Positioning::BottomCenter.to_string(), "bottom-center");
    }
}
