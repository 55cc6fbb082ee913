//! Plain-text route totals shown next to each route in the directions panel.
//!
//! Distances and durations arrive per leg from the directions service; the
//! panel shows their sums as `"12.3 km"` and `"1 hour 5 minutes"`.

use serde::{Deserialize, Serialize};

/// Distances up to this many metres are shown in metres
const KILOMETRE_THRESHOLD_M: u64 = 100;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// One leg of a route as reported by the directions service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg length in metres
    pub distance_m: u64,
    /// Leg travel time in seconds
    pub duration_s: u64,
}

impl RouteLeg {
    pub fn new(distance_m: u64, duration_s: u64) -> Self {
        Self {
            distance_m,
            duration_s,
        }
    }
}

pub fn total_distance(legs: &[RouteLeg]) -> u64 {
    legs.iter().map(|leg| leg.distance_m).sum()
}

pub fn total_duration(legs: &[RouteLeg]) -> u64 {
    legs.iter().map(|leg| leg.duration_s).sum()
}

/// Formats a distance in metres.
///
/// Above 100 m the value is shown in kilometres rounded to one decimal
/// (`"0.1 km"`, `"12.3 km"`, `"2 km"`); otherwise in whole metres.
pub fn format_distance(meters: u64) -> String {
    if meters > KILOMETRE_THRESHOLD_M {
        let tenths = (meters as f64 / 100.0).round();
        format!("{} km", tenths / 10.0)
    } else {
        format!("{} m", meters)
    }
}

/// Formats a duration in seconds as hours and minutes.
///
/// Hours are only shown above one hour. Leftover seconds round the minutes
/// up from 30. Units take a plural `s` when the count is greater than one.
pub fn format_duration(seconds: u64) -> String {
    let mut parts = Vec::with_capacity(2);

    let mut remaining = seconds;
    if seconds > SECONDS_PER_HOUR {
        let hours = seconds / SECONDS_PER_HOUR;
        remaining = seconds - hours * SECONDS_PER_HOUR;
        parts.push(format!("{} {}", hours, plural("hour", hours)));
    }

    let mut minutes = remaining / SECONDS_PER_MINUTE;
    if remaining - minutes * SECONDS_PER_MINUTE >= 30 {
        minutes += 1;
    }
    parts.push(format!("{} {}", minutes, plural("minute", minutes)));

    parts.join(" ")
}

/// Distance and duration text for a whole route
pub fn route_summary(legs: &[RouteLeg]) -> (String, String) {
    (
        format_distance(total_distance(legs)),
        format_duration(total_duration(legs)),
    )
}

fn plural(unit: &str, count: u64) -> String {
    if count > 1 {
        format!("{}s", unit)
    } else {
        unit.to_string()
    }
}
