use anyhow::Context;
use clap::Parser;
use directions_popup::prelude::*;
use serde::Deserialize;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "popup-inspect",
    about = "Print popup safe-zone and placement decisions for a viewport scenario"
)]
struct Args {
    /// Path to a JSON scenario with `extent`, `resolution`, `options` and `points`
    #[arg(value_name = "path")]
    scenario: PathBuf,
}

/// A viewport and the coordinates to check in it
#[derive(Debug, Deserialize)]
struct Scenario {
    /// `[min_x, min_y, max_x, max_y]`
    extent: [f64; 4],
    resolution: f64,
    #[serde(default)]
    options: PopupPlacementOptions,
    points: Vec<[f64; 2]>,
    /// Route legs to summarise, if any
    #[serde(default)]
    legs: Vec<RouteLeg>,
}

/// One line of output per point
struct Report {
    coordinate: Point,
    safe: bool,
    layout: PopupLayout,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let path = args.scenario;

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&json)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    scenario.options.validate()?;

    let extent = Extent::from(scenario.extent);
    log::info!(
        "Checking {} coordinates in {:?} at resolution {}",
        scenario.points.len(),
        scenario.extent,
        scenario.resolution
    );

    for point in &scenario.points {
        let coordinate = Point::from(*point);
        let report = inspect(&extent, scenario.resolution, coordinate, &scenario.options)?;
        println!(
            "({}, {})\tsafe={}\tplacement={}\tpositioning={}",
            report.coordinate.x,
            report.coordinate.y,
            report.safe,
            report.layout.placement,
            report.layout.positioning
        );
    }

    if !scenario.legs.is_empty() {
        let (distance, duration) = route_summary(&scenario.legs);
        println!("route\t{}, {}", distance, duration);
    }

    Ok(())
}

/// Mirrors what the directions control does on press, without a host to
/// recenter: unsafe coordinates report the default layout
fn inspect(
    extent: &Extent,
    resolution: f64,
    coordinate: Point,
    options: &PopupPlacementOptions,
) -> Result<Report> {
    let safe = is_coordinate_safe(extent, resolution, &coordinate, options)?;
    let layout = if safe {
        select_placement(extent, resolution, &coordinate, options)?
    } else {
        reset_placement()
    };
    Ok(Report {
        coordinate,
        safe,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_take_scenario_path() {
        let args = Args::try_parse_from(["popup-inspect", "scenarios/square.json"]).unwrap();
        assert_eq!(args.scenario, PathBuf::from("scenarios/square.json"));
        assert!(Args::try_parse_from(["popup-inspect"]).is_err());
    }

    #[test]
    fn test_scenario_parsing_defaults_options() {
        let scenario: Scenario = serde_json::from_str(
            r#"{ "extent": [0, 0, 1000, 1000], "resolution": 1, "points": [[500, 900]] }"#,
        )
        .unwrap();
        assert_eq!(scenario.options, PopupPlacementOptions::default());
        assert_eq!(scenario.points, vec![[500.0, 900.0]]);
        assert!(scenario.legs.is_empty());
    }

    #[test]
    fn test_scenario_with_route_legs() {
        let scenario: Scenario = serde_json::from_str(
            r#"{
                "extent": [0, 0, 1000, 1000],
                "resolution": 1,
                "points": [],
                "legs": [
                    { "distance_m": 4200, "duration_s": 2400 },
                    { "distance_m": 900, "duration_s": 1500 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(scenario.legs.len(), 2);
        assert_eq!(
            route_summary(&scenario.legs),
            ("5.1 km".to_string(), "1 hour 5 minutes".to_string())
        );
    }

    #[test]
    fn test_inspect() {
        let extent = Extent::from_coords(0.0, 0.0, 1000.0, 1000.0);
        let options = PopupPlacementOptions::default();

        let report = inspect(&extent, 1.0, Point::new(500.0, 900.0), &options).unwrap();
        assert!(report.safe);
        assert_eq!(report.layout.placement, Placement::Bottom);

        let report = inspect(&extent, 1.0, Point::new(5.0, 5.0), &options).unwrap();
        assert!(!report.safe);
        assert_eq!(report.layout, reset_placement());

        assert!(inspect(&extent, 0.0, Point::new(5.0, 5.0), &options).is_err());
    }
}
