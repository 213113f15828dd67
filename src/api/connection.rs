use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "homeassistant";
pub const DEFAULT_PORT: u16 = 8123;

const API_PATH: &str = "api";
const APPLICATION_JSON: &str = "application/json";

/// Everything one invocation needs to talk to the server.
///
/// Built once at startup and only ever borrowed afterwards.
#[derive(Debug, Clone)]
pub struct Connection {
    root: String,
    headers: HeaderMap,
    verbose: bool,
}

impl Connection {
    pub fn new(host: &str, port: u16, token: &str, verbose: bool) -> Result<Self, AppError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| {
                AppError::InvalidInput("Token contains characters not allowed in a header".into())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

        Ok(Self {
            root: format!("http://{}:{}/{}/", host, port, API_PATH),
            headers,
            verbose,
        })
    }

    /// `root + path`, where root is `http://host:port/api/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
