use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of `GET services`: a domain and the services it offers.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDomain {
    pub domain: String,
    #[serde(default)]
    pub services: Map<String, Value>,
}

impl ServiceDomain {
    pub fn service_names(&self) -> Vec<&str> {
        self.services.keys().map(|k| k.as_str()).collect()
    }
}

/// Pick the entry for `domain` out of a `GET services` array.
pub fn find_domain<'a>(services: &'a [Value], domain: &str) -> Option<&'a Value> {
    services
        .iter()
        .find(|entry| entry.get("domain").and_then(|d| d.as_str()) == Some(domain))
}
