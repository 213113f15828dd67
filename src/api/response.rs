use serde::Deserialize;

/// Error body Home Assistant returns with non-2xx statuses,
/// e.g. `{"message": "Entity not found."}`.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub message: Option<String>,
}

impl ApiMessage {
    /// The server's `message`, or the raw body when it carries none.
    pub fn extract(body: &str) -> String {
        serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| body.trim().to_string())
    }
}

/// Status codes a service call treats as success.
pub fn is_service_success(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::OK || status == reqwest::StatusCode::CREATED
}
