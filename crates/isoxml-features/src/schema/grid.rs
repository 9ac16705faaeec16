//! Grid schema, sized by the widest cell.

use super::{AttributeType, FeatureTypeBuilder, REFERENCE_SYSTEM};
use crate::model::Grid;

/// Name of the cell position attribute.
pub const POINT: &str = "point";

/// Name of the `index`-th value column (1-based).
pub fn value_attribute(index: usize) -> String {
    format!("value-{index}")
}

/// Widest value vector of any cell across all grids (0 if there are none).
pub fn max_values(grids: &[Grid]) -> usize {
    grids.iter().map(Grid::max_values).max().unwrap_or(0)
}

/// Add `point` followed by `value-1` .. `value-N`.
pub fn add_attributes_for_grid(builder: &mut FeatureTypeBuilder, grids: &[Grid]) {
    builder.set_reference_system(REFERENCE_SYSTEM);
    builder.add(POINT, AttributeType::Point);

    for index in 1..=max_values(grids) {
        builder.add(value_attribute(index), AttributeType::Integer);
    }
}
