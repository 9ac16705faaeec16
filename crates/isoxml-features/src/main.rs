//! Inspect the feature collections of a parsed task archive.
//!
//! Loads `features.toml` (or the file named by the first argument), reads the
//! JSON task data dump it points at, and prints each collection's schema and
//! row count.

use std::sync::Arc;

use isoxml_features::{
    config::DEFAULT_CONFIG_FILE, FeatureError, FeatureStore, FeaturesConfig, TaskData,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "isoxml_features=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned());
    let config = FeaturesConfig::load_from(&config_path)?;
    tracing::info!(
        input = %config.input.path.display(),
        batch_size = config.reader.batch_size,
        "Configuration loaded"
    );

    let data = TaskData::load(&config.input.path)?;
    let store = FeatureStore::new(Arc::new(data), config.reader);

    for name in store.collection_names() {
        let source = store.feature_source(name);
        let schema = source.schema()?;
        let rows = count_rows(&source)?;
        tracing::info!(collection = %name, attributes = schema.len(), rows, "Collection ready");

        println!("{name} ({rows} rows)");
        for attribute in schema.attributes() {
            println!("  {:<32} {:?}", attribute.name, attribute.attribute_type);
        }
    }

    Ok(())
}

/// Count rows by draining the reader; the store does not know counts up front.
fn count_rows(source: &isoxml_features::FeatureSource) -> Result<usize, FeatureError> {
    let Some(reader) = source.reader()? else {
        return Ok(0);
    };
    reader.map(|batch| batch.map(|b| b.num_rows())).sum()
}
