//! Composable test fixtures using rstest.
//!
//! Record constructors build the smallest valid parser records; the
//! [`task_data`] fixture combines them into a result set with one record of
//! every kind.
//!
//! # Example
//!
//! ```ignore
//! use rstest::*;
//! use crate::test_fixtures::*;
//!
//! #[rstest]
//! fn my_test(task_data: TaskData) {
//!     let schema = build_schema("Grid", CollectionKind::Grid, &task_data).unwrap();
//! }
//! ```

use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;

use crate::config::ReaderConfig;
use crate::model::{
    DataLogValue, Grid, GridCell, GuidancePattern, GuidancePatternType, Partfield, Point,
    Polygon, PolygonType, Position, TaskFile, TimeLog, TimeStep,
};
use crate::source::TaskData;

/// Start of every fixture time log: 2024-05-01T10:00:00Z.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

pub fn log_value(ddi: &[u8], device_element: &str, value: i32) -> DataLogValue {
    DataLogValue {
        process_data_ddi: ddi.to_vec(),
        device_element_id_ref: device_element.to_string(),
        process_data_value: value,
    }
}

/// A time step `offset_secs` after [`base_time`], positioned near Münster.
pub fn time_step(offset_secs: i64, values: Vec<DataLogValue>) -> TimeStep {
    TimeStep {
        start: base_time() + chrono::Duration::seconds(offset_secs),
        position: Some(Position {
            latitude: 51.96,
            longitude: 7.62,
        }),
        data_log_values: values,
    }
}

pub fn time_log(filename: &str, times: Vec<TimeStep>) -> TimeLog {
    TimeLog {
        filename: filename.to_string(),
        times,
    }
}

pub fn grid_cell(latitude: f64, longitude: f64, values: &[i32]) -> GridCell {
    GridCell {
        position: Point::new(latitude, longitude),
        values: values.to_vec(),
    }
}

pub fn square(polygon_type: PolygonType, origin: f64) -> Polygon {
    Polygon {
        polygon_type,
        exterior: vec![
            Point::new(origin, origin),
            Point::new(origin, origin + 1.0),
            Point::new(origin + 1.0, origin + 1.0),
            Point::new(origin + 1.0, origin),
        ],
        interiors: vec![],
    }
}

/// Reader config with tiny batches so batching is exercised.
#[fixture]
pub fn small_batches() -> ReaderConfig {
    ReaderConfig { batch_size: 2 }
}

#[fixture]
pub fn partfield() -> Partfield {
    Partfield {
        id: "PFD1".to_string(),
        code: Some("N-01".to_string()),
        designator: "North field".to_string(),
        area: 120_000,
        customer_id_ref: Some("CTR1".to_string()),
        farm_id_ref: Some("FRM1".to_string()),
        crop_type_id_ref: None,
        crop_variety_id_ref: None,
        field_id_ref: None,
        polygons: vec![
            square(PolygonType::PartfieldBoundary, 0.0),
            square(PolygonType::TreatmentZone, 0.25),
        ],
        guidance_patterns: vec![GuidancePattern {
            id: "GPN1".to_string(),
            designator: Some("AB line".to_string()),
            pattern_type: GuidancePatternType::AB,
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        }],
    }
}

/// One partfield, two time logs (one empty), and two grids of uneven width.
#[fixture]
pub fn task_data(partfield: Partfield) -> TaskData {
    TaskData {
        task_file: TaskFile {
            partfields: vec![partfield],
        },
        time_logs: vec![
            time_log(
                "TLG00001",
                vec![
                    time_step(
                        0,
                        vec![
                            log_value(&[0x00, 0x05], "DE1", 100),
                            log_value(&[0x00, 0x74], "DE2", 7),
                        ],
                    ),
                    time_step(1, vec![log_value(&[0x00, 0x05], "DE1", 101)]),
                    time_step(2, vec![]),
                ],
            ),
            time_log("TLG00002", vec![]),
        ],
        grids: vec![
            Grid {
                filename: "GRD00001".to_string(),
                cells: vec![grid_cell(52.0, 7.0, &[1, 2, 3])],
            },
            Grid {
                filename: "GRD00002".to_string(),
                cells: vec![
                    grid_cell(52.1, 7.1, &[4, 5, 6, 7, 8]),
                    grid_cell(52.2, 7.2, &[9]),
                ],
            },
        ],
    }
}
