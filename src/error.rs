use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Cannot read token file {}: {source}", .path.display())]
    TokenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Token file {} is empty", .0.display())]
    EmptyToken(PathBuf),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Expected a JSON {expected} from '{path}'")]
    UnexpectedShape {
        expected: &'static str,
        path: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UnknownCommand(_) => 0,
            AppError::InvalidInput(_) | AppError::TokenFile { .. } | AppError::EmptyToken(_) => 2,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::UnknownCommand(_) => "unknown_command",
            AppError::TokenFile { .. } => "token_file",
            AppError::EmptyToken(_) => "empty_token",
            AppError::Api { .. } => "api",
            AppError::UnexpectedShape { .. } => "unexpected_shape",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let AppError::Api { status, .. } = self {
            obj["status"] = serde_json::json!(status);
        }
        obj
    }
}
