use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required variable: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by the review API client.
///
/// Neither variant is retried by the client itself; recovery happens at the
/// cycle boundary in the poll loop.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request went through but the server answered with a non-200
    /// status. Carries the request parameters and body for diagnostics.
    #[error("unexpected API status {status} for from_date={from_date}: {body}")]
    BadStatus {
        status: u16,
        from_date: i64,
        body: String,
    },

    /// The request itself failed: connection, timeout, or an undecodable
    /// body.
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Shape violations in a decoded API payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("API response is not a JSON object")]
    NotAnObject,

    #[error("API response has no \"homeworks\" key")]
    MissingHomeworks,

    #[error("\"homeworks\" is not an array")]
    HomeworksNotAList,
}

/// Malformed or unrecognized submission records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerdictError {
    #[error("submission record has no homework_name")]
    MissingName,

    #[error("unrecognized review status: {status:?}")]
    UnknownStatus { status: Option<String> },
}

/// Notification delivery failures.
///
/// These never propagate past the poll loop; they are logged and swallowed.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Verdict(#[from] VerdictError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
