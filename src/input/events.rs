use crate::core::geo::Point;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Input events the directions popup reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// An instruction in the directions list was pressed
    Press(PressEvent),
    /// Single click on the map itself
    SingleClick { coordinate: Point },
}

/// Press on a directions step: where its popup goes and what it shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressEvent {
    pub coordinate: Point,
    pub content: String,
}

impl PressEvent {
    pub fn new(coordinate: Point, content: impl Into<String>) -> Self {
        Self {
            coordinate,
            content: content.into(),
        }
    }

    /// Builds a press from the string attributes carried by a list element
    /// (`data-x`, `data-y` and the instruction text).
    pub fn from_attributes(x: &str, y: &str, content: impl Into<String>) -> Result<Self> {
        let coordinate = Point::new(parse_ordinate("x", x)?, parse_ordinate("y", y)?);
        coordinate.validate()?;
        Ok(Self::new(coordinate, content))
    }
}

fn parse_ordinate(axis: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|e| {
        MapError::ParseError(format!("{} ordinate {:?}: {}", axis, raw, e))
    })
}
