//! Time log rows.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryBuilder, Int32Builder, Int64Builder};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use super::{BatchCursor, FeatureReader};
use crate::config::ReaderConfig;
use crate::ddi::ChannelKey;
use crate::geometry;
use crate::model::{TimeLog, TimeStep};
use crate::schema::time_log::{POSITION, TIME};
use crate::schema::FeatureSchema;
use crate::FeatureError;

/// WKB point size.
const POINT_LEN: usize = 21;

/// Where each schema attribute's values come from.
#[derive(Debug, Clone, Copy)]
enum Column {
    Position,
    Time,
    /// Index into the per-row channel value buffer.
    Channel(usize),
}

/// One row per time step, across every time log.
///
/// Every step of every log produces a row, including logs whose first step
/// contributed no channels to the schema. Logged values whose channel is not
/// in the schema are dropped.
pub struct TimeLogReader<'a> {
    steps: Vec<&'a TimeStep>,
    columns: Vec<Column>,
    channels: HashMap<String, usize>,
    schema: SchemaRef,
    cursor: BatchCursor,
}

impl<'a> TimeLogReader<'a> {
    pub fn new(time_logs: &'a [TimeLog], schema: &FeatureSchema, config: ReaderConfig) -> Self {
        let mut channels = HashMap::new();
        let columns: Vec<Column> = schema
            .attribute_names()
            .map(|name| match name {
                POSITION => Column::Position,
                TIME => Column::Time,
                channel => {
                    let next = channels.len();
                    Column::Channel(*channels.entry(channel.to_owned()).or_insert(next))
                }
            })
            .collect();

        let steps: Vec<_> = time_logs.iter().flat_map(|log| &log.times).collect();
        // A schema without attributes has nothing to fill.
        let total = if columns.is_empty() { 0 } else { steps.len() };

        Self {
            steps,
            columns,
            channels,
            schema: schema.arrow_schema(),
            cursor: BatchCursor::new(total, config),
        }
    }

    fn convert(&self, steps: &[&TimeStep]) -> Result<RecordBatch, FeatureError> {
        let capacity = steps.len();
        let mut position = BinaryBuilder::with_capacity(capacity, capacity * POINT_LEN);
        let mut time = Int64Builder::with_capacity(capacity);
        let mut channel_columns: Vec<Int32Builder> = (0..self.channels.len())
            .map(|_| Int32Builder::with_capacity(capacity))
            .collect();
        let mut row: Vec<Option<i32>> = vec![None; self.channels.len()];

        for step in steps {
            position.append_option(step.position.as_ref().map(geometry::from_position));
            time.append_value(step.start.timestamp_millis());

            row.iter_mut().for_each(|slot| *slot = None);
            for value in &step.data_log_values {
                let key = ChannelKey::from_log_value(value)?;
                match self.channels.get(&key.attribute_name()) {
                    Some(&index) => row[index] = Some(value.process_data_value),
                    None => tracing::trace!(channel = %key, "Dropping value for unmapped channel"),
                }
            }
            for (column, value) in channel_columns.iter_mut().zip(&row) {
                column.append_option(*value);
            }
        }

        let position: ArrayRef = Arc::new(position.finish());
        let time: ArrayRef = Arc::new(time.finish());
        let channel_arrays: Vec<ArrayRef> = channel_columns
            .iter_mut()
            .map(|column| Arc::new(column.finish()) as ArrayRef)
            .collect();

        // A name listed twice maps to one channel and shares its array.
        let columns: Vec<ArrayRef> = self
            .columns
            .iter()
            .map(|column| match column {
                Column::Position => Arc::clone(&position),
                Column::Time => Arc::clone(&time),
                Column::Channel(index) => Arc::clone(&channel_arrays[*index]),
            })
            .collect();

        Ok(RecordBatch::try_new(Arc::clone(&self.schema), columns)?)
    }
}

impl Iterator for TimeLogReader<'_> {
    type Item = Result<RecordBatch, FeatureError>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.cursor.next_range()?;
        let result = self.convert(&self.steps[range]);
        if result.is_err() {
            self.cursor.finish();
        }
        Some(result)
    }
}

impl FeatureReader for TimeLogReader<'_> {
    fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }
}
