//! Guidance pattern rows.

use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryBuilder, StringBuilder};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use super::{BatchCursor, FeatureReader};
use crate::config::ReaderConfig;
use crate::geometry;
use crate::model::{GuidancePattern, TaskFile};
use crate::schema::FeatureSchema;
use crate::FeatureError;

/// One row per guidance pattern, across every partfield of the task file.
pub struct GuidancePatternReader<'a> {
    patterns: Vec<&'a GuidancePattern>,
    schema: SchemaRef,
    cursor: BatchCursor,
}

impl<'a> GuidancePatternReader<'a> {
    pub fn new(task_file: &'a TaskFile, schema: &FeatureSchema, config: ReaderConfig) -> Self {
        let patterns: Vec<_> = task_file.guidance_patterns().collect();
        let cursor = BatchCursor::new(patterns.len(), config);
        Self {
            patterns,
            schema: schema.arrow_schema(),
            cursor,
        }
    }

    fn convert(&self, patterns: &[&GuidancePattern]) -> Result<RecordBatch, FeatureError> {
        let capacity = patterns.len();
        let mut id = StringBuilder::with_capacity(capacity, capacity * 8);
        let mut designator = StringBuilder::with_capacity(capacity, capacity * 32);
        let mut pattern_type = StringBuilder::with_capacity(capacity, capacity * 8);
        let mut line = BinaryBuilder::with_capacity(capacity, capacity * 256);

        for pattern in patterns {
            id.append_value(&pattern.id);
            designator.append_option(pattern.designator.as_deref());
            pattern_type.append_value(pattern.pattern_type.as_str());
            line.append_value(geometry::line_string(&pattern.points)?);
        }

        let columns: Vec<ArrayRef> = vec![
            Arc::new(id.finish()),
            Arc::new(designator.finish()),
            Arc::new(pattern_type.finish()),
            Arc::new(line.finish()),
        ];

        Ok(RecordBatch::try_new(Arc::clone(&self.schema), columns)?)
    }
}

impl Iterator for GuidancePatternReader<'_> {
    type Item = Result<RecordBatch, FeatureError>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.cursor.next_range()?;
        let result = self.convert(&self.patterns[range]);
        if result.is_err() {
            self.cursor.finish();
        }
        Some(result)
    }
}

impl FeatureReader for GuidancePatternReader<'_> {
    fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }
}
