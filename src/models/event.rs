use serde::Deserialize;

/// One entry of `GET events`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventListener {
    pub event: String,
    #[serde(default)]
    pub listener_count: u64,
}
