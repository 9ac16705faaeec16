//! Parsed task data records.
//!
//! These are the in-memory records the upstream ISO 11783-10 parser hands
//! over once a task archive has been decoded. The feature layer only reads
//! them; decoding `TASKDATA.XML` and the binary log files happens elsewhere.
//!
//! All coordinates are WGS84 decimal degrees.

pub mod grid;
pub mod task;
pub mod time_log;

pub use grid::{Grid, GridCell};
pub use task::{
    GuidancePattern, GuidancePatternType, Partfield, Point, Polygon, PolygonType, TaskFile,
};
pub use time_log::{DataLogValue, Position, TimeLog, TimeStep};
