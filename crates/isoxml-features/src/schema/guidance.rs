//! Fixed schema for guidance patterns.

use super::{AttributeType, FeatureTypeBuilder, REFERENCE_SYSTEM};

/// Attribute names, in row order.
pub mod attr {
    pub const ID: &str = "guidancePatternId";
    pub const DESIGNATOR: &str = "guidancePatternDesignator";
    pub const TYPE: &str = "guidancePatternType";
    pub const LINE: &str = "guidanceLine";
}

pub fn add_attributes_for_guidance_pattern(builder: &mut FeatureTypeBuilder) {
    builder.set_reference_system(REFERENCE_SYSTEM);
    builder
        .add(attr::ID, AttributeType::String)
        .add(attr::DESIGNATOR, AttributeType::String)
        .add(attr::TYPE, AttributeType::String)
        .add(attr::LINE, AttributeType::LineString);
}
