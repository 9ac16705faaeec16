//! Fixed schema for partfield boundaries.

use super::{AttributeType, FeatureTypeBuilder, REFERENCE_SYSTEM};

/// Attribute names, in row order.
pub mod attr {
    /// Boundary polygons, treatment zones excluded.
    pub const POLYGON: &str = "polygonNonTreatmentZoneOnly";
    pub const ID: &str = "partfieldId";
    pub const CODE: &str = "partfieldCode";
    pub const DESIGNATOR: &str = "partfieldDesignator";
    pub const AREA: &str = "partfieldArea";
    pub const CUSTOMER_ID_REF: &str = "customerIdRef";
    pub const FARM_ID_REF: &str = "farmIdRef";
    pub const CROP_TYPE_ID_REF: &str = "cropTypeIdRef";
    pub const CROP_VARIETY_ID_REF: &str = "cropVarietyIdRef";
    pub const FIELD_ID_REF: &str = "fieldIdRef";
}

/// Add the partfield attributes. Does not depend on any record content.
pub fn add_attributes_for_partfield(builder: &mut FeatureTypeBuilder) {
    builder.set_reference_system(REFERENCE_SYSTEM);
    builder
        .add(attr::POLYGON, AttributeType::MultiPolygon)
        .add(attr::ID, AttributeType::String)
        .add(attr::CODE, AttributeType::String)
        .add(attr::DESIGNATOR, AttributeType::String)
        .add(attr::AREA, AttributeType::Long)
        .add(attr::CUSTOMER_ID_REF, AttributeType::String)
        .add(attr::FARM_ID_REF, AttributeType::String)
        .add(attr::CROP_TYPE_ID_REF, AttributeType::String)
        .add(attr::CROP_VARIETY_ID_REF, AttributeType::String)
        .add(attr::FIELD_ID_REF, AttributeType::String);
}
