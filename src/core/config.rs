//! Configuration for popup placement
//!
//! Both sizes are in screen pixels. They are converted to map units with the
//! resolution of the view at the time a placement is computed, so the same
//! options keep working across zoom levels.

use crate::core::constants::{DEFAULT_CORNER_PIXEL_SIZE, DEFAULT_PIXEL_BUFFER};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupPlacementOptions {
    /// Side of the square viewport corners where a popup is never anchored
    pub corner_pixel_size: f64,
    /// Minimum distance between the anchor and the viewport edges
    pub pixel_buffer: f64,
}

impl PopupPlacementOptions {
    pub fn new(corner_pixel_size: f64, pixel_buffer: f64) -> Self {
        Self {
            corner_pixel_size,
            pixel_buffer,
        }
    }

    pub fn with_corner_pixel_size(mut self, corner_pixel_size: f64) -> Self {
        self.corner_pixel_size = corner_pixel_size;
        self
    }

    pub fn with_pixel_buffer(mut self, pixel_buffer: f64) -> Self {
        self.pixel_buffer = pixel_buffer;
        self
    }

    /// Both sizes must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        check_pixels("corner_pixel_size", self.corner_pixel_size)?;
        check_pixels("pixel_buffer", self.pixel_buffer)
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Default for PopupPlacementOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CORNER_PIXEL_SIZE, DEFAULT_PIXEL_BUFFER)
    }
}

fn check_pixels(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MapError::InvalidConfig(format!(
            "{} must be a finite, non-negative pixel count, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PopupPlacementOptions::default();
        assert_eq!(options.corner_pixel_size, 100.0);
        assert_eq!(options.pixel_buffer, 30.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = PopupPlacementOptions::from_json_str(r#"{ "pixel_buffer": 12 }"#).unwrap();
        assert_eq!(options.pixel_buffer, 12.0);
        assert_eq!(options.corner_pixel_size, DEFAULT_CORNER_PIXEL_SIZE);
    }

    #[test]
    fn test_rejects_negative_sizes() {
        let err = PopupPlacementOptions::from_json_str(r#"{ "corner_pixel_size": -1 }"#)
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidConfig(_)));

        let options = PopupPlacementOptions::default().with_pixel_buffer(f64::NAN);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PopupPlacementOptions::from_json_str("{ corner"),
            Err(MapError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PopupPlacementOptions::from_file("/definitely/not/here.json"),
            Err(MapError::Io(_))
        ));
    }
}
