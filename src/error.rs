use std::fmt;

use thiserror::Error;

/// A single structured error returned by the admin GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQlError {
    pub message: String,
    pub code: Option<String>,
    pub path: Option<String>,
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum StorekeepError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GraphQL request failed: {}", format_graphql_errors(errors))]
    GraphQlErrors {
        errors: Vec<GraphQlError>,
        /// Whether the response carried partial data alongside the errors.
        partial_data: bool,
    },

    /// A mutation succeeded at the transport level but the platform rejected
    /// the input (non-empty userErrors in the payload).
    #[error("rejected by the platform: {0}")]
    UserErrors(String),

    #[error("{0}")]
    Other(String),
}

fn format_graphql_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, StorekeepError>;
