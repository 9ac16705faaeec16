//! Assembles attribute descriptors into an Arrow-backed [`FeatureSchema`].

use std::collections::HashMap;

use arrow::datatypes::{Field, Schema};

use super::{metadata, AttributeDescriptor, AttributeType, FeatureSchema, GEOARROW_WKB};

/// Incremental builder for a feature schema.
///
/// Attributes keep the order they were added in, and each keeps exactly the
/// type it was declared with.
#[derive(Debug, Clone)]
pub struct FeatureTypeBuilder {
    name: String,
    reference_system: Option<&'static str>,
    attributes: Vec<AttributeDescriptor>,
}

impl FeatureTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_system: None,
            attributes: Vec::new(),
        }
    }

    pub fn set_reference_system(&mut self, crs: &'static str) {
        self.reference_system = Some(crs);
    }

    pub fn add(&mut self, name: impl Into<String>, attribute_type: AttributeType) -> &mut Self {
        self.attributes.push(AttributeDescriptor::new(name, attribute_type));
        self
    }

    /// Finish the schema.
    pub fn build(self) -> FeatureSchema {
        let fields: Vec<Field> = self
            .attributes
            .iter()
            .map(|attr| to_field(attr, self.reference_system))
            .collect();

        let mut schema_metadata = HashMap::from([(
            metadata::COLLECTION.to_owned(),
            self.name.clone(),
        )]);
        if let Some(crs) = self.reference_system {
            schema_metadata.insert(metadata::CRS.to_owned(), crs.to_owned());
        }
        let arrow = Schema::new(fields).with_metadata(schema_metadata);

        FeatureSchema::new(self.name, self.reference_system, self.attributes, arrow)
    }
}

/// Map one attribute to a nullable Arrow field.
///
/// Geometry fields carry GeoArrow WKB extension metadata with the CRS.
fn to_field(attr: &AttributeDescriptor, crs: Option<&str>) -> Field {
    let field = Field::new(&attr.name, attr.attribute_type.data_type(), true);
    let Some(geometry_type) = attr.attribute_type.geometry_type() else {
        return field;
    };

    let mut field_metadata = HashMap::from([
        (metadata::EXTENSION_NAME.to_owned(), GEOARROW_WKB.to_owned()),
        (metadata::GEOMETRY_TYPE.to_owned(), geometry_type.to_owned()),
    ]);
    if let Some(crs) = crs {
        field_metadata.insert(
            metadata::EXTENSION_METADATA.to_owned(),
            serde_json::json!({ "crs": crs }).to_string(),
        );
    }
    field.with_metadata(field_metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::REFERENCE_SYSTEM;
    use arrow::datatypes::DataType;

    #[test]
    fn preserves_order_and_types() {
        let mut builder = FeatureTypeBuilder::new("Test");
        builder.set_reference_system(REFERENCE_SYSTEM);
        builder
            .add("b", AttributeType::Long)
            .add("a", AttributeType::Point)
            .add("c", AttributeType::Integer);
        let schema = builder.build();

        let names: Vec<_> = schema.attribute_names().collect();
        assert_eq!(names, ["b", "a", "c"]);

        let arrow = schema.arrow_schema();
        let types: Vec<_> = arrow.fields().iter().map(|f| f.data_type().clone()).collect();
        assert_eq!(types, [DataType::Int64, DataType::Binary, DataType::Int32]);
        assert!(arrow.fields().iter().all(|f| f.is_nullable()));
    }

    #[test]
    fn geometry_fields_carry_geoarrow_metadata() {
        let mut builder = FeatureTypeBuilder::new("Test");
        builder.set_reference_system(REFERENCE_SYSTEM);
        builder.add("line", AttributeType::LineString);
        let arrow = builder.build().arrow_schema();

        let field = arrow.field_with_name("line").unwrap();
        let md = field.metadata();
        assert_eq!(md.get(metadata::EXTENSION_NAME).unwrap(), GEOARROW_WKB);
        assert_eq!(md.get(metadata::GEOMETRY_TYPE).unwrap(), "LineString");
        assert_eq!(
            md.get(metadata::EXTENSION_METADATA).unwrap(),
            r#"{"crs":"OGC:CRS84"}"#
        );
    }

    #[test]
    fn scalar_fields_have_no_metadata() {
        let mut builder = FeatureTypeBuilder::new("Test");
        builder.add("id", AttributeType::String);
        let arrow = builder.build().arrow_schema();

        assert!(arrow.field_with_name("id").unwrap().metadata().is_empty());
    }

    #[test]
    fn schema_metadata_names_collection() {
        let mut builder = FeatureTypeBuilder::new("TimeLog1");
        builder.set_reference_system(REFERENCE_SYSTEM);
        let schema = builder.build();
        let arrow = schema.arrow_schema();

        assert_eq!(arrow.metadata().get(metadata::COLLECTION).unwrap(), "TimeLog1");
        assert_eq!(arrow.metadata().get(metadata::CRS).unwrap(), REFERENCE_SYSTEM);
        assert_eq!(arrow.fields().len(), 0);
    }
}
