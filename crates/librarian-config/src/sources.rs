use std::collections::BTreeMap;

use crate::model::{Config, ConfigSource};

/// One effective configuration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveValue {
    pub value: String,
    pub source: ConfigSource,
}

impl Config {
    /// Effective configuration as key/value pairs with source attribution,
    /// sorted by key.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, EffectiveValue> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: String| {
            let source = self
                .source_attribution
                .get(key)
                .cloned()
                .unwrap_or(ConfigSource::Defaults);
            config.insert(key.to_string(), EffectiveValue { value, source });
        };

        add_config("verbose", self.verbose().to_string());
        add_config(
            "processing_delay_ms",
            self.processing_delay().as_millis().to_string(),
        );
        add_config("preview_chars", self.preview_chars().to_string());
        add_config("framework_package", self.framework_package().to_string());
        add_config("export_format", self.export_format().to_string());

        config
    }
}
