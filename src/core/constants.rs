//! Popup placement defaults.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Side in pixels of the four viewport corners where a popup is never
/// anchored. Should be around half the size of the popup.
pub const DEFAULT_CORNER_PIXEL_SIZE: f64 = 100.0;

/// Margin in pixels kept between a popup anchor and the viewport edges.
pub const DEFAULT_PIXEL_BUFFER: f64 = 30.0;
