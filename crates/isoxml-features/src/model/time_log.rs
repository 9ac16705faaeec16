//! Time log records (ISO 11783-10 `TLG` binary files).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One time log file: a sequence of time-stamped sensor snapshots.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimeLog {
    /// Base file name, e.g. `TLG00001`.
    pub filename: String,
    pub times: Vec<TimeStep>,
}

/// One logged instant (`TIM`) with its position and data log values.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeStep {
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub data_log_values: Vec<DataLogValue>,
}

/// GNSS position recorded with a time step (`PTN`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single logged process data value (`DLV`).
#[derive(Debug, Clone, Deserialize)]
pub struct DataLogValue {
    /// Raw DDI bytes, big-endian. Well-formed values are exactly two bytes.
    pub process_data_ddi: Vec<u8>,
    pub device_element_id_ref: String,
    pub process_data_value: i32,
}
