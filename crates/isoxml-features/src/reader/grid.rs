//! Grid cell rows.

use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryBuilder, Int32Builder};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use super::{BatchCursor, FeatureReader};
use crate::config::ReaderConfig;
use crate::geometry;
use crate::model::{Grid, GridCell};
use crate::schema::FeatureSchema;
use crate::FeatureError;

/// WKB point size.
const POINT_LEN: usize = 21;

/// One row per cell, across every grid.
///
/// The number of value columns comes from the schema. Cells with fewer
/// values get nulls in the trailing columns.
pub struct GridReader<'a> {
    cells: Vec<&'a GridCell>,
    value_columns: usize,
    schema: SchemaRef,
    cursor: BatchCursor,
}

impl<'a> GridReader<'a> {
    pub fn new(grids: &'a [Grid], schema: &FeatureSchema, config: ReaderConfig) -> Self {
        let cells: Vec<_> = grids.iter().flat_map(|grid| &grid.cells).collect();
        let cursor = BatchCursor::new(cells.len(), config);
        Self {
            cells,
            // Everything after the leading point attribute is a value column.
            value_columns: schema.len().saturating_sub(1),
            schema: schema.arrow_schema(),
            cursor,
        }
    }

    fn convert(&self, cells: &[&GridCell]) -> Result<RecordBatch, FeatureError> {
        let capacity = cells.len();
        let mut point = BinaryBuilder::with_capacity(capacity, capacity * POINT_LEN);
        let mut values: Vec<Int32Builder> = (0..self.value_columns)
            .map(|_| Int32Builder::with_capacity(capacity))
            .collect();

        for cell in cells {
            point.append_value(geometry::from_point(&cell.position));
            for (index, column) in values.iter_mut().enumerate() {
                column.append_option(cell.values.get(index).copied());
            }
        }

        let mut columns: Vec<ArrayRef> = Vec::with_capacity(1 + self.value_columns);
        columns.push(Arc::new(point.finish()));
        columns.extend(
            values
                .iter_mut()
                .map(|column| Arc::new(column.finish()) as ArrayRef),
        );

        Ok(RecordBatch::try_new(Arc::clone(&self.schema), columns)?)
    }
}

impl Iterator for GridReader<'_> {
    type Item = Result<RecordBatch, FeatureError>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.cursor.next_range()?;
        let result = self.convert(&self.cells[range]);
        if result.is_err() {
            self.cursor.finish();
        }
        Some(result)
    }
}

impl FeatureReader for GridReader<'_> {
    fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }
}
