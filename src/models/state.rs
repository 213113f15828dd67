use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of `GET states` / `GET states/<entity_id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    pub last_changed: Option<String>,
    pub last_updated: Option<String>,
}

impl EntityState {
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes.get("friendly_name").and_then(|v| v.as_str())
    }
}
