use serde_json::{Map, Value};
use tracing::debug;

use super::connection::Connection;
use super::response::{is_service_success, ApiMessage};
use super::service_call::{ServiceCall, ServiceData};
use crate::error::AppError;

/// Thin client over the Home Assistant REST API.
pub struct HaClient<'a> {
    client: reqwest::Client,
    connection: &'a Connection,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("haa/", env!("CARGO_PKG_VERSION")))
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

impl<'a> HaClient<'a> {
    pub fn new(connection: &'a Connection) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            connection,
        })
    }

    /// GET `root + path` and parse the body as JSON.
    ///
    /// Non-2xx statuses become [`AppError::Api`] with the server's message.
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        let url = self.connection.url(path);
        if self.connection.verbose() {
            debug!("GET {}", url);
        }

        let response = self
            .client
            .get(&url)
            .headers(self.connection.headers().clone())
            .send()
            .await?;

        let status = response.status();
        if self.connection.verbose() {
            debug!("Response code = {}", status.as_u16());
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: ApiMessage::extract(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_object(&self, path: &str) -> Result<Map<String, Value>, AppError> {
        match self.get(path).await? {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::UnexpectedShape {
                expected: "object",
                path: path.to_string(),
            }),
        }
    }

    pub async fn get_array(&self, path: &str) -> Result<Vec<Value>, AppError> {
        match self.get(path).await? {
            Value::Array(items) => Ok(items),
            _ => Err(AppError::UnexpectedShape {
                expected: "array",
                path: path.to_string(),
            }),
        }
    }

    /// POST `fields` as a JSON object to `root + path`.
    ///
    /// Returns whether the server answered 200 or 201. Other statuses are
    /// not errors; only transport failures are.
    pub async fn post(&self, path: &str, fields: &ServiceData) -> Result<bool, AppError> {
        let url = self.connection.url(path);
        let body_json = serde_json::to_string(fields)?;

        if self.connection.verbose() {
            debug!("POST to URL {}", url);
            debug!("POST data: {}", body_json);
        }

        let response = self
            .client
            .post(&url)
            .headers(self.connection.headers().clone())
            .body(body_json)
            .send()
            .await?;

        let status = response.status();
        if self.connection.verbose() {
            debug!("Response = {}", status.as_u16());
        }

        Ok(is_service_success(status))
    }

    pub async fn call_service(&self, call: &ServiceCall) -> Result<bool, AppError> {
        self.post(&call.path(), &call.payload()).await
    }
}
