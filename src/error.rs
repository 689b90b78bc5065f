use reqwest::StatusCode;
use thiserror::Error;

/// Broad classification of an [`OpenDataHubError`].
///
/// The rendered messages of [`ErrorKind::Transport`] and [`ErrorKind::Decode`]
/// share the `Exception: ` prefix, so the kind is the only way to tell an
/// unreachable server from a malformed response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a complete response (connect, TLS, body read).
    Transport,
    /// The server answered with a status other than `200 OK`.
    HttpStatus,
    /// The server answered `200 OK` but the body was not valid JSON.
    Decode,
    /// The client could not be constructed from its configuration.
    Configuration,
}

#[derive(Debug, Error)]
pub enum OpenDataHubError {
    #[error("Exception: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP Error: {}", .status.as_u16())]
    HttpStatus { url: String, status: StatusCode },

    #[error("Exception: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String, #[source] url::ParseError),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl OpenDataHubError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OpenDataHubError::Transport(_) => ErrorKind::Transport,
            OpenDataHubError::HttpStatus { .. } => ErrorKind::HttpStatus,
            OpenDataHubError::Decode { .. } => ErrorKind::Decode,
            OpenDataHubError::InvalidBaseUrl(..) | OpenDataHubError::ClientBuild(_) => {
                ErrorKind::Configuration
            }
        }
    }

    /// The HTTP status the server answered with, for [`ErrorKind::HttpStatus`] errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            OpenDataHubError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
