//! # directions-popup
//!
//! Popup placement for map directions panels.
//!
//! Given the visible extent of a map, its resolution and a coordinate, the
//! engine decides whether a popup can be anchored at that coordinate without
//! being clipped, and on which side of the coordinate the popup body should
//! be drawn so it points away from the nearest viewport edge.
//!
//! The geometry lives in [`placement`] as free functions. [`ui`] wraps it in a
//! control that attaches to a host map and reacts to press events.

pub mod core;
pub mod input;
pub mod placement;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::PopupPlacementOptions,
    extent::Extent,
    geo::{PixelSize, Point},
    view::View,
};

pub use placement::{
    is_coordinate_safe, reset_placement, select_placement, Placement, PopupLayout, Positioning,
};

pub use input::events::{InputEvent, PressEvent};

pub use ui::{
    controls::{DirectionsPopup, PressOutcome},
    popup::Popup,
    summary::RouteLeg,
    traits::{Control, MapHost},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid extent: {0}")]
    InvalidExtent(String),

    #[error("Invalid resolution: {0} (must be finite and positive)")]
    InvalidResolution(f64),

    #[error("Invalid viewport size: {0}")]
    InvalidSize(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Control is not attached to a map")]
    NotAttached,

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
