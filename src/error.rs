//! Error types for the AccessHub client

use thiserror::Error;

/// Result type alias for AccessHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A by-name or by-id lookup matched zero records where one was required.
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    /// A by-name lookup matched more than one record where exactly one was
    /// required. Mutating operations never proceed past this.
    #[error("{kind} name '{name}' is ambiguous: {count} records match")]
    Ambiguous {
        kind: &'static str,
        name: String,
        count: usize,
    },

    /// A caller-supplied parameter was rejected before any network call.
    #[error("Invalid parameter: {0}")]
    Validation(String),

    /// A multi-step operation completed some but not all steps.
    #[error(transparent)]
    Partial(Box<PartialCompletion>),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status from the service. The message is the response
    /// body; the API key never appears in it.
    #[error("API request to '{endpoint}' failed with status {status}: {message}")]
    Status {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API host".to_string())
        } else {
            // reqwest redacts URLs in error messages; the key travels in a
            // header and a form body, never the URL, so this is safe to show.
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Save a host and credential first.")]
    NotFound,

    #[error("No credential available: supply one explicitly or persist one for this principal")]
    MissingCredential,

    #[error("No API host configured")]
    MissingHost,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Record of a multi-step orchestrator that failed partway.
///
/// Reports which step failed and what prior side effects already occurred,
/// e.g. "removed 3 of 5 members; group not deleted". No rollback is
/// attempted: the service has no multi-resource transaction primitive.
#[derive(Debug, Error)]
#[error(
    "{operation} stopped at step '{failed_step}' after {completed} of {total} steps: {source}"
)]
pub struct PartialCompletion {
    /// Human-readable operation name, e.g. "delete technician group 'ops'"
    pub operation: String,
    /// The step that failed
    pub failed_step: String,
    /// Steps that completed (and whose side effects stand)
    pub completed: usize,
    /// Total steps the operation would have run
    pub total: usize,
    /// The underlying failure
    #[source]
    pub source: Box<Error>,
}

impl From<PartialCompletion> for Error {
    fn from(p: PartialCompletion) -> Self {
        Error::Partial(Box::new(p))
    }
}
