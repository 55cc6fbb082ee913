//! Prelude module for common directions-popup types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use directions_popup::prelude::*;`

pub use crate::core::{
    config::PopupPlacementOptions,
    extent::Extent,
    geo::{PixelSize, Point},
    view::{resolution_for_extent, View},
};

pub use crate::placement::{
    is_coordinate_safe, reset_placement, select_placement, CornerRects, Placement,
    PlacementZones, PopupLayout, Positioning, Zone,
};

pub use crate::input::events::{InputEvent, PressEvent};

pub use crate::ui::{
    controls::{DirectionsPopup, ListenerId, PressOutcome},
    popup::{Popup, PopupEvent},
    summary::{format_distance, format_duration, route_summary, RouteLeg},
    traits::{Control, MapHost, ViewportHost},
};

pub use crate::{MapError, Result};
