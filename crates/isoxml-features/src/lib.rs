//! ISO 11783-10 task data as typed geospatial feature collections.
//!
//! This crate sits between a task archive parser and a feature consumer:
//! - Classifies collection names (`Partfield*`, `TimeLog*`, `Grid*`, `GuidancePattern*`)
//! - Infers each collection's schema, including the sensor channels and grid
//!   widths that depend on the parsed records
//! - Produces Arrow record batches with WKB geometries tagged `OGC:CRS84`
//!
//! ## Architecture
//!
//! ```text
//! Parser result (TaskDataSource)
//!          ↓
//! collection name → CollectionKind → FeatureSchema (Arrow + GeoArrow metadata)
//!                                  ↓
//!                           FeatureReader → RecordBatch
//! ```

pub mod config;
pub mod ddi;
pub mod error;
pub mod geometry;
pub mod kind;
pub mod model;
pub mod reader;
pub mod schema;
pub mod source;
pub mod store;

#[cfg(test)]
pub mod test_fixtures;

pub use config::FeaturesConfig;
pub use ddi::ChannelKey;
pub use error::FeatureError;
pub use kind::{classify, CollectionKind};
pub use reader::{open_reader, FeatureReader};
pub use schema::{build_schema, AttributeDescriptor, AttributeType, FeatureSchema};
pub use source::{TaskData, TaskDataSource};
pub use store::{Envelope, FeatureSource, FeatureStore};
