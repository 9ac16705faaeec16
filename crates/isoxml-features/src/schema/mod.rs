//! Feature schemas for task data collections.
//!
//! A [`FeatureSchema`] is the ordered attribute list a collection's rows
//! conform to, plus the reference system its geometries are tagged with.
//! It is materialised as an Arrow schema by [`FeatureTypeBuilder`].
//!
//! # Static vs Inferred Schemas
//!
//! - **Partfield** and **GuidancePattern** schemas are fixed.
//! - **Grid** schemas have one integer column per value slot, sized by the
//!   widest cell across every grid.
//! - **TimeLog** schemas have one integer column per sensor channel, found by
//!   scanning the first time step of every non-empty time log.
//!
//! Every schema is built fresh from the current records on each call; nothing
//! is cached.

use std::sync::Arc;

use arrow::datatypes::{DataType, Schema, SchemaRef};

use crate::kind::CollectionKind;
use crate::source::TaskDataSource;
use crate::FeatureError;

pub mod builder;
pub mod grid;
pub mod guidance;
pub mod partfield;
pub mod time_log;

pub use builder::FeatureTypeBuilder;
pub use grid::add_attributes_for_grid;
pub use guidance::add_attributes_for_guidance_pattern;
pub use partfield::add_attributes_for_partfield;
pub use time_log::add_attributes_for_time_log;

/// WGS84 longitude/latitude, no projection.
pub const REFERENCE_SYSTEM: &str = "OGC:CRS84";

/// Arrow extension name for WKB-encoded geometry columns.
pub const GEOARROW_WKB: &str = "geoarrow.wkb";

/// Field metadata keys.
pub mod metadata {
    pub const EXTENSION_NAME: &str = "ARROW:extension:name";
    pub const EXTENSION_METADATA: &str = "ARROW:extension:metadata";
    pub const GEOMETRY_TYPE: &str = "geoarrow.geometry_type";
    /// Schema-level key holding the collection name.
    pub const COLLECTION: &str = "collection";
    /// Schema-level key holding the reference system.
    pub const CRS: &str = "crs";
}

/// Value type of a feature attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Point,
    LineString,
    MultiPolygon,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    String,
}

impl AttributeType {
    /// Arrow storage type. Geometries are stored as WKB.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Point | Self::LineString | Self::MultiPolygon => DataType::Binary,
            Self::Integer => DataType::Int32,
            Self::Long => DataType::Int64,
            Self::String => DataType::Utf8,
        }
    }

    /// Geometry type name, `None` for scalar attributes.
    pub const fn geometry_type(&self) -> Option<&'static str> {
        match self {
            Self::Point => Some("Point"),
            Self::LineString => Some("LineString"),
            Self::MultiPolygon => Some("MultiPolygon"),
            Self::Integer | Self::Long | Self::String => None,
        }
    }
}

/// One named, typed attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }
}

/// The schema of one feature collection.
///
/// Immutable once built; owned by the request that built it.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    name: String,
    reference_system: Option<&'static str>,
    attributes: Vec<AttributeDescriptor>,
    arrow: SchemaRef,
}

impl FeatureSchema {
    pub(crate) fn new(
        name: String,
        reference_system: Option<&'static str>,
        attributes: Vec<AttributeDescriptor>,
        arrow: Schema,
    ) -> Self {
        Self {
            name,
            reference_system,
            attributes,
            arrow: Arc::new(arrow),
        }
    }

    /// Collection name the schema was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference_system(&self) -> Option<&'static str> {
        self.reference_system
    }

    /// Attributes in row order.
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The Arrow schema rows are produced against.
    pub fn arrow_schema(&self) -> SchemaRef {
        Arc::clone(&self.arrow)
    }
}

/// Build the schema for collection `name` of the given kind.
///
/// Unknown kinds get a schema with a reference system and no attributes.
///
/// # Errors
///
/// Only time log schemas can fail, with [`FeatureError::MalformedDdi`] when a
/// scanned log value carries a DDI that is not two bytes wide.
pub fn build_schema(
    name: &str,
    kind: CollectionKind,
    source: &dyn TaskDataSource,
) -> Result<FeatureSchema, FeatureError> {
    let mut builder = FeatureTypeBuilder::new(name);
    match kind {
        CollectionKind::Partfield => add_attributes_for_partfield(&mut builder),
        CollectionKind::TimeLog => add_attributes_for_time_log(&mut builder, source.time_logs())?,
        CollectionKind::Grid => add_attributes_for_grid(&mut builder, source.grids()),
        CollectionKind::GuidancePattern => add_attributes_for_guidance_pattern(&mut builder),
        CollectionKind::Unknown => builder.set_reference_system(REFERENCE_SYSTEM),
    }
    let schema = builder.build();
    tracing::debug!(
        collection = %name,
        kind = %kind,
        attributes = schema.len(),
        "Built feature schema"
    );
    Ok(schema)
}
