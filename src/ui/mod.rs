pub mod controls;
pub mod popup;
pub mod summary;
pub mod traits;

pub use traits::{Control, MapHost, ViewportHost};

pub use controls::{DirectionsPopup, ListenerId, PressOutcome};

pub use popup::{Popup, PopupEvent};

pub use summary::{format_distance, format_duration, route_summary, RouteLeg};
