pub mod config;
pub mod constants;
pub mod extent;
pub mod geo;
pub mod view;

// Re-export the essential types
pub use config::PopupPlacementOptions;
pub use extent::Extent;
pub use geo::{PixelSize, Point};
pub use view::{resolution_for_extent, View};
