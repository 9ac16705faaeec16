//! Channel keys naming the dynamic time log attributes.

use crate::model::DataLogValue;
use crate::FeatureError;

/// A `(DDI, device element)` pair identifying one logged sensor channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelKey {
    pub ddi: u16,
    pub device_element: String,
}

impl ChannelKey {
    /// Decode the key of a logged value.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::MalformedDdi`] if the DDI is not exactly two bytes.
    pub fn from_log_value(value: &DataLogValue) -> Result<Self, FeatureError> {
        let ddi = decode_ddi(&value.process_data_ddi, &value.device_element_id_ref)?;
        Ok(Self {
            ddi,
            device_element: value.device_element_id_ref.clone(),
        })
    }

    /// Attribute name for this channel, e.g. `DDI5_DET-1`.
    pub fn attribute_name(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DDI{}_{}", self.ddi, self.device_element)
    }
}

/// Decode a big-endian two byte DDI.
pub fn decode_ddi(bytes: &[u8], device_element: &str) -> Result<u16, FeatureError> {
    let raw: [u8; 2] = bytes.try_into().map_err(|_| FeatureError::MalformedDdi {
        len: bytes.len(),
        device_element: device_element.to_owned(),
    })?;
    Ok(u16::from_be_bytes(raw))
}
