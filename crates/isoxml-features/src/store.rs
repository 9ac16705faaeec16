//! Feature store over one loaded task archive.
//!
//! [`FeatureStore`] lists the collections a task archive exposes and hands
//! out a [`FeatureSource`] per requested name. A feature source classifies
//! its name once; schema builds and readers are then routed on the kind.
//!
//! ```text
//! name → classify → CollectionKind
//!                        ├── build_schema → FeatureSchema (Arrow)
//!                        └── open_reader  → FeatureReader → RecordBatch*
//! ```

use std::sync::Arc;

use crate::config::ReaderConfig;
use crate::kind::{classify, CollectionKind};
use crate::reader::{open_reader, FeatureReader};
use crate::schema::{build_schema, FeatureSchema};
use crate::source::TaskDataSource;
use crate::FeatureError;

/// An axis-aligned bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

/// Collections over one parser result set.
#[derive(Clone)]
pub struct FeatureStore {
    source: Arc<dyn TaskDataSource>,
    config: ReaderConfig,
}

impl FeatureStore {
    pub fn new(source: Arc<dyn TaskDataSource>, config: ReaderConfig) -> Self {
        Self { source, config }
    }

    /// Names of the collections this store serves, one per kind.
    pub fn collection_names(&self) -> Vec<&'static str> {
        CollectionKind::KNOWN
            .iter()
            .filter_map(CollectionKind::prefix)
            .collect()
    }

    /// Feature source for `name`.
    ///
    /// Never fails: a name matching no kind yields a source whose reader is
    /// absent.
    #[tracing::instrument(skip(self))]
    pub fn feature_source(&self, name: &str) -> FeatureSource {
        let kind = classify(name);
        if !kind.is_known() {
            tracing::debug!(collection = %name, "No reader for collection");
        }
        FeatureSource {
            name: name.to_owned(),
            kind,
            source: Arc::clone(&self.source),
            config: self.config,
        }
    }
}

impl std::fmt::Debug for FeatureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One named collection.
#[derive(Clone)]
pub struct FeatureSource {
    name: String,
    kind: CollectionKind,
    source: Arc<dyn TaskDataSource>,
    config: ReaderConfig,
}

impl FeatureSource {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Build the schema from the records currently held by the source.
    ///
    /// Each call rescans the records and returns a new schema.
    pub fn schema(&self) -> Result<FeatureSchema, FeatureError> {
        build_schema(&self.name, self.kind, self.source.as_ref())
    }

    /// Open a reader against a schema obtained from [`Self::schema`].
    pub fn reader_with_schema(
        &self,
        schema: &FeatureSchema,
    ) -> Option<Box<dyn FeatureReader + '_>> {
        open_reader(self.kind, self.source.as_ref(), schema, self.config)
    }

    /// Build the schema and open the matching reader.
    ///
    /// `Ok(None)` means the collection is not supported; `Err` means the
    /// schema could not be built.
    #[tracing::instrument(skip(self), fields(collection = %self.name, kind = %self.kind))]
    pub fn reader(&self) -> Result<Option<Box<dyn FeatureReader + '_>>, FeatureError> {
        if !self.kind.is_known() {
            return Ok(None);
        }
        let schema = self.schema()?;
        Ok(self.reader_with_schema(&schema))
    }

    /// Like [`Self::reader`], but treats an unsupported collection as an error.
    pub fn require_reader(&self) -> Result<Box<dyn FeatureReader + '_>, FeatureError> {
        self.reader()?
            .ok_or_else(|| FeatureError::UnsupportedCollection {
                name: self.name.clone(),
            })
    }

    /// Bounds are not computed by this layer; always unknown.
    ///
    /// Callers needing bounds must scan the rows themselves.
    pub fn bounds(&self) -> Option<Envelope> {
        None
    }

    /// Feature count is not computed by this layer; always unknown.
    ///
    /// `None` is not zero: callers needing a count must scan the rows.
    pub fn count(&self) -> Option<usize> {
        None
    }
}

impl std::fmt::Debug for FeatureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureSource")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TaskData;
    use crate::test_fixtures::task_data;
    use rstest::rstest;

    fn store(data: TaskData) -> FeatureStore {
        FeatureStore::new(Arc::new(data), ReaderConfig::default())
    }

    #[test]
    fn lists_one_collection_per_kind() {
        let names = store(TaskData::default()).collection_names();
        assert_eq!(names, ["Partfield", "TimeLog", "Grid", "GuidancePattern"]);
    }

    #[rstest]
    fn unknown_collection_has_no_reader(task_data: TaskData) {
        let store = store(task_data);
        let source = store.feature_source("Foo");

        assert_eq!(source.kind(), CollectionKind::Unknown);
        assert!(source.reader().unwrap().is_none());

        let err = source.require_reader().err().unwrap();
        assert!(matches!(err, FeatureError::UnsupportedCollection { name } if name == "Foo"));
    }

    #[rstest]
    fn bounds_and_count_are_unknown(task_data: TaskData) {
        let store = store(task_data);
        for name in store.collection_names() {
            let source = store.feature_source(name);
            assert!(source.bounds().is_none());
            assert!(source.count().is_none());
        }
    }

    #[rstest]
    fn suffixed_names_share_kind(task_data: TaskData) {
        let store = store(task_data);
        let first = store.feature_source("TimeLog1").schema().unwrap();
        let second = store.feature_source("TimeLog2").schema().unwrap();

        assert_eq!(first.name(), "TimeLog1");
        assert_eq!(second.name(), "TimeLog2");
        assert_eq!(first.attributes(), second.attributes());
        assert_eq!(first.reference_system(), second.reference_system());
    }

    #[rstest]
    fn reader_schema_matches_source_schema(task_data: TaskData) {
        let store = store(task_data);
        let source = store.feature_source("Grid");
        let reader = source.require_reader().unwrap();

        assert_eq!(reader.schema(), source.schema().unwrap().arrow_schema());
    }
}
