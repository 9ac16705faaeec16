//! Access to the parser's result set.
//!
//! [`TaskDataSource`] is the seam between the feature layer and whatever
//! decoded the task archive. [`TaskData`] is a plain in-memory result set,
//! which can also be loaded from a JSON dump.

use std::path::Path;

use serde::Deserialize;

use crate::model::{Grid, TaskFile, TimeLog};
use crate::FeatureError;

/// Parsed records of one loaded task archive.
///
/// Implementations must be fully loaded before the feature layer reads them;
/// nothing here blocks or performs I/O.
pub trait TaskDataSource: Send + Sync {
    /// Static partfield and guidance pattern records.
    fn task_file(&self) -> &TaskFile;

    /// Time logs in archive order.
    fn time_logs(&self) -> &[TimeLog];

    /// Grids in archive order.
    fn grids(&self) -> &[Grid];
}

/// In-memory parser result set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskData {
    pub task_file: TaskFile,
    pub time_logs: Vec<TimeLog>,
    pub grids: Vec<Grid>,
}

impl TaskData {
    /// Decode a result set from JSON.
    pub fn from_json(json: &str) -> Result<Self, FeatureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON dump from disk.
    pub fn load(path: &Path) -> Result<Self, FeatureError> {
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            partfields = data.task_file.partfields.len(),
            time_logs = data.time_logs.len(),
            grids = data.grids.len(),
            "Loaded task data"
        );
        Ok(data)
    }
}

impl TaskDataSource for TaskData {
    fn task_file(&self) -> &TaskFile {
        &self.task_file
    }

    fn time_logs(&self) -> &[TimeLog] {
        &self.time_logs
    }

    fn grids(&self) -> &[Grid] {
        &self.grids
    }
}
