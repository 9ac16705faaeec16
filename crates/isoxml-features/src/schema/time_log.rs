//! Time log schema, inferred from the logged sensor channels.

use indexmap::IndexSet;

use super::{AttributeType, FeatureTypeBuilder, REFERENCE_SYSTEM};
use crate::ddi::ChannelKey;
use crate::model::TimeLog;
use crate::FeatureError;

/// Name of the position attribute.
pub const POSITION: &str = "position";

/// Name of the timestamp attribute (epoch milliseconds).
pub const TIME: &str = "time";

/// Distinct channel keys in the first time step of every non-empty time log.
///
/// Keys are returned in first-seen order. Time logs without time steps
/// contribute nothing.
///
/// # Errors
///
/// Returns [`FeatureError::MalformedDdi`] for a value whose DDI is not two bytes.
pub fn channel_keys(time_logs: &[TimeLog]) -> Result<IndexSet<ChannelKey>, FeatureError> {
    let mut keys = IndexSet::new();
    for first in time_logs.iter().filter_map(|log| log.times.first()) {
        for value in &first.data_log_values {
            keys.insert(ChannelKey::from_log_value(value)?);
        }
    }
    Ok(keys)
}

/// Add `position`, `time` and one integer column per channel key.
///
/// With no time logs at all the schema is left without attributes.
pub fn add_attributes_for_time_log(
    builder: &mut FeatureTypeBuilder,
    time_logs: &[TimeLog],
) -> Result<(), FeatureError> {
    builder.set_reference_system(REFERENCE_SYSTEM);
    if time_logs.is_empty() {
        return Ok(());
    }

    let keys = channel_keys(time_logs)?;
    builder
        .add(POSITION, AttributeType::Point)
        .add(TIME, AttributeType::Long);
    for key in &keys {
        builder.add(key.attribute_name(), AttributeType::Integer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{log_value, time_log, time_step};

    fn names(time_logs: &[TimeLog]) -> Vec<String> {
        let mut builder = FeatureTypeBuilder::new("TimeLog");
        add_attributes_for_time_log(&mut builder, time_logs).unwrap();
        builder
            .build()
            .attribute_names()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn no_time_logs_no_attributes() {
        assert!(names(&[]).is_empty());
    }

    #[test]
    fn only_empty_time_logs_keeps_fixed_attributes() {
        let logs = [time_log("TLG00001", vec![])];
        assert_eq!(names(&logs), ["position", "time"]);
    }

    #[test]
    fn channel_from_first_step() {
        let logs = [time_log(
            "TLG00001",
            vec![time_step(0, vec![log_value(&[0x00, 0x05], "DE1", 10)])],
        )];
        assert_eq!(names(&logs), ["position", "time", "DDI5_DE1"]);
    }

    #[test]
    fn duplicate_keys_collapse() {
        let logs = [
            time_log(
                "TLG00001",
                vec![time_step(0, vec![log_value(&[0x00, 0x05], "DE1", 10)])],
            ),
            time_log(
                "TLG00002",
                vec![time_step(
                    0,
                    vec![
                        log_value(&[0x00, 0x05], "DE1", 11),
                        log_value(&[0x00, 0x06], "DE1", 12),
                    ],
                )],
            ),
        ];
        assert_eq!(names(&logs), ["position", "time", "DDI5_DE1", "DDI6_DE1"]);
    }

    #[test]
    fn later_steps_are_not_scanned() {
        let logs = [time_log(
            "TLG00001",
            vec![
                time_step(0, vec![log_value(&[0x00, 0x05], "DE1", 10)]),
                time_step(1, vec![log_value(&[0x00, 0x07], "DE2", 10)]),
            ],
        )];
        assert_eq!(names(&logs), ["position", "time", "DDI5_DE1"]);
    }

    #[test]
    fn empty_logs_are_skipped_among_others() {
        let logs = [
            time_log("TLG00001", vec![]),
            time_log(
                "TLG00002",
                vec![time_step(0, vec![log_value(&[0x00, 0x74], "DET-3", 1)])],
            ),
        ];
        assert_eq!(names(&logs), ["position", "time", "DDI116_DET-3"]);
    }

    #[test]
    fn key_order_is_first_seen() {
        let logs = [time_log(
            "TLG00001",
            vec![time_step(
                0,
                vec![
                    log_value(&[0x00, 0x09], "B", 0),
                    log_value(&[0x00, 0x01], "A", 0),
                    log_value(&[0x00, 0x09], "A", 0),
                ],
            )],
        )];
        let keys = channel_keys(&logs).unwrap();
        let ordered: Vec<_> = keys.iter().map(ChannelKey::attribute_name).collect();
        assert_eq!(ordered, ["DDI9_B", "DDI1_A", "DDI9_A"]);

        // Repeated builds agree.
        assert_eq!(names(&logs), names(&logs));
    }

    #[test]
    fn malformed_ddi_propagates() {
        let logs = [time_log(
            "TLG00001",
            vec![time_step(0, vec![log_value(&[0x05], "DE1", 10)])],
        )];
        let mut builder = FeatureTypeBuilder::new("TimeLog");
        let err = add_attributes_for_time_log(&mut builder, &logs).unwrap_err();
        assert!(matches!(err, FeatureError::MalformedDdi { len: 1, .. }));
    }
}
