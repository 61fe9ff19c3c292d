//! Pass-through draw options.
//!
//! Annotations forward an open key/value bag to the plotting surface. Each
//! annotation fills in its own defaults, but a value supplied by the caller
//! always wins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a single draw option.
pub type OptionValue = serde_json::Value;

/// Ordered map of option name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawOptions(BTreeMap<String, OptionValue>);

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert that overwrites an existing value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert `value` only if `key` is not already present.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Fill every key missing from `self` with the value from `defaults`.
    pub fn with_defaults(mut self, defaults: &DrawOptions) -> Self {
        for (key, value) in &defaults.0 {
            self.0.entry(key.clone()).or_insert_with(|| value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for DrawOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caller_values_win() {
        let defaults = DrawOptions::new()
            .with("font_size", 30)
            .with("show_points", false);
        let merged = DrawOptions::new()
            .with("font_size", 12)
            .with_defaults(&defaults);

        assert_eq!(merged.get("font_size"), Some(&json!(12)));
        assert_eq!(merged.get("show_points"), Some(&json!(false)));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_set_default_keeps_existing() {
        let mut options = DrawOptions::new().with("color", "red");
        options.set_default("color", "gray");
        options.set_default("opacity", 0.5);

        assert_eq!(options.get("color"), Some(&json!("red")));
        assert_eq!(options.get("opacity"), Some(&json!(0.5)));
    }

    #[test]
    fn test_deserialize_transparent() {
        let options: DrawOptions =
            serde_json::from_str(r#"{"loc": "upper right", "size": [0.3, 0.2]}"#).unwrap();
        assert_eq!(options.get("loc"), Some(&json!("upper right")));
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["loc", "size"]);
    }
}
