use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{path} returned {status}")]
    Api { path: String, status: StatusCode },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("connector `{0}` is not in the current snapshot")]
    UnknownConnector(String),

    #[error("no delete confirmation is open")]
    NoPendingDelete,

    #[error("no channel settings form is open")]
    NoSettingsOpen,

    #[error("channel `{0}` is not offered by the connector's data source")]
    UnknownChannel(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
