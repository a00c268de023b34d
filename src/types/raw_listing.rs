use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::json_value::is_truthy;

/// One record of the upstream `job-listings` collection, kept exactly as received.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawListing(pub Map<String, Value>);

impl RawListing {
    pub fn title_rendered(&self) -> Option<&Value> {
        self.0
            .get("title")
            .and_then(|title| title.get("rendered"))
            .filter(|rendered| !rendered.is_null())
    }

    /// WordPress serializes an empty meta map as `[]`, so anything that is not
    /// an object is treated as having no keys.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.0
            .get("meta")
            .and_then(Value::as_object)
            .and_then(|meta| meta.get(key))
    }

    pub fn truthy_meta(&self, key: &str) -> Option<&Value> {
        self.meta(key).filter(|value| is_truthy(value))
    }

    pub fn meta_strings(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("meta")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|meta| meta.values())
            .filter_map(Value::as_str)
    }

    pub fn top_level_strings(&self) -> impl Iterator<Item = &str> {
        self.0.values().filter_map(Value::as_str)
    }
}
