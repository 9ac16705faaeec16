//! Partfield boundary rows.

use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryBuilder, Int64Builder, StringBuilder};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use super::{BatchCursor, FeatureReader};
use crate::config::ReaderConfig;
use crate::geometry;
use crate::model::Partfield;
use crate::schema::FeatureSchema;
use crate::FeatureError;

/// Estimated average WKB size of a partfield boundary.
const CAPACITY_BOUNDARY: usize = 1024;

/// Estimated average length of identifiers and references.
const CAPACITY_IDENTIFIER: usize = 16;

/// One row per partfield.
///
/// The geometry is the multipolygon of every polygon that is not a treatment
/// zone, or null when a partfield has none.
pub struct PartfieldReader<'a> {
    partfields: &'a [Partfield],
    schema: SchemaRef,
    cursor: BatchCursor,
}

impl<'a> PartfieldReader<'a> {
    pub fn new(partfields: &'a [Partfield], schema: &FeatureSchema, config: ReaderConfig) -> Self {
        Self {
            partfields,
            schema: schema.arrow_schema(),
            cursor: BatchCursor::new(partfields.len(), config),
        }
    }

    fn convert(&self, partfields: &[Partfield]) -> Result<RecordBatch, FeatureError> {
        let capacity = partfields.len();
        let mut polygon = BinaryBuilder::with_capacity(capacity, capacity * CAPACITY_BOUNDARY);
        let mut id = string_builder(capacity);
        let mut code = string_builder(capacity);
        let mut designator = string_builder(capacity);
        let mut area = Int64Builder::with_capacity(capacity);
        let mut customer_id_ref = string_builder(capacity);
        let mut farm_id_ref = string_builder(capacity);
        let mut crop_type_id_ref = string_builder(capacity);
        let mut crop_variety_id_ref = string_builder(capacity);
        let mut field_id_ref = string_builder(capacity);

        for partfield in partfields {
            let boundaries: Vec<_> = partfield
                .polygons
                .iter()
                .filter(|p| !p.is_treatment_zone())
                .collect();
            if boundaries.is_empty() {
                polygon.append_null();
            } else {
                polygon.append_value(geometry::multi_polygon(boundaries)?);
            }

            id.append_value(&partfield.id);
            code.append_option(partfield.code.as_deref());
            designator.append_value(&partfield.designator);
            area.append_value(partfield.area);
            customer_id_ref.append_option(partfield.customer_id_ref.as_deref());
            farm_id_ref.append_option(partfield.farm_id_ref.as_deref());
            crop_type_id_ref.append_option(partfield.crop_type_id_ref.as_deref());
            crop_variety_id_ref.append_option(partfield.crop_variety_id_ref.as_deref());
            field_id_ref.append_option(partfield.field_id_ref.as_deref());
        }

        let columns: Vec<ArrayRef> = vec![
            Arc::new(polygon.finish()),
            Arc::new(id.finish()),
            Arc::new(code.finish()),
            Arc::new(designator.finish()),
            Arc::new(area.finish()),
            Arc::new(customer_id_ref.finish()),
            Arc::new(farm_id_ref.finish()),
            Arc::new(crop_type_id_ref.finish()),
            Arc::new(crop_variety_id_ref.finish()),
            Arc::new(field_id_ref.finish()),
        ];

        Ok(RecordBatch::try_new(Arc::clone(&self.schema), columns)?)
    }
}

fn string_builder(capacity: usize) -> StringBuilder {
    StringBuilder::with_capacity(capacity, capacity * CAPACITY_IDENTIFIER)
}

impl Iterator for PartfieldReader<'_> {
    type Item = Result<RecordBatch, FeatureError>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.cursor.next_range()?;
        let result = self.convert(&self.partfields[range]);
        if result.is_err() {
            self.cursor.finish();
        }
        Some(result)
    }
}

impl FeatureReader for PartfieldReader<'_> {
    fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }
}
