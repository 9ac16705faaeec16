//! Row producers turning parsed records into Arrow record batches.
//!
//! Each collection kind has one reader. Readers borrow the records they
//! convert and emit batches of at most [`ReaderConfig::batch_size`] rows
//! against the schema they were opened with.

use std::ops::Range;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::config::ReaderConfig;
use crate::kind::CollectionKind;
use crate::schema::FeatureSchema;
use crate::source::TaskDataSource;
use crate::FeatureError;

pub mod grid;
pub mod guidance;
pub mod partfield;
pub mod time_log;

pub use grid::GridReader;
pub use guidance::GuidancePatternReader;
pub use partfield::PartfieldReader;
pub use time_log::TimeLogReader;

/// A source of feature rows for one collection.
pub trait FeatureReader: Iterator<Item = Result<RecordBatch, FeatureError>> {
    /// Schema every emitted batch conforms to.
    fn schema(&self) -> SchemaRef;
}

/// Open the reader for `kind`, or `None` if no reader exists for it.
pub fn open_reader<'a>(
    kind: CollectionKind,
    source: &'a dyn TaskDataSource,
    schema: &FeatureSchema,
    config: ReaderConfig,
) -> Option<Box<dyn FeatureReader + 'a>> {
    let reader: Box<dyn FeatureReader + 'a> = match kind {
        CollectionKind::Partfield => Box::new(PartfieldReader::new(
            &source.task_file().partfields,
            schema,
            config,
        )),
        CollectionKind::TimeLog => Box::new(TimeLogReader::new(source.time_logs(), schema, config)),
        CollectionKind::Grid => Box::new(GridReader::new(source.grids(), schema, config)),
        CollectionKind::GuidancePattern => Box::new(GuidancePatternReader::new(
            source.task_file(),
            schema,
            config,
        )),
        CollectionKind::Unknown => return None,
    };
    Some(reader)
}

/// Walks `0..total` in slices of at most `batch_size`.
#[derive(Debug, Clone)]
pub(crate) struct BatchCursor {
    total: usize,
    next: usize,
    batch_size: usize,
}

impl BatchCursor {
    pub(crate) fn new(total: usize, config: ReaderConfig) -> Self {
        Self {
            total,
            next: 0,
            batch_size: config.batch_size.max(1),
        }
    }

    pub(crate) fn next_range(&mut self) -> Option<Range<usize>> {
        if self.next >= self.total {
            return None;
        }
        let start = self.next;
        self.next = (start + self.batch_size).min(self.total);
        Some(start..self.next)
    }

    /// Stop producing further ranges.
    pub(crate) fn finish(&mut self) {
        self.next = self.total;
    }
}
