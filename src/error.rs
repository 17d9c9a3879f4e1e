use serde::Serialize;
use thiserror::Error;

/// Unified error type for the spo CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Required option webUrl missing")]
    MissingWebUrl,
    #[error("'{0}' is not a valid SharePoint Online site URL")]
    InvalidWebUrl(String),
    #[error("Specify id or fileUrl, one is required")]
    MissingFileReference,
    #[error("Specify either id or fileUrl but not both")]
    ConflictingFileReference,
    #[error("{0} is not a valid GUID")]
    InvalidId(String),
    #[error("Log in to SharePoint Online first")]
    NotConnected,
    #[error("Request cancelled")]
    Cancelled,
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Failure reported by SharePoint, carried verbatim.
///
/// The payload is never parsed: a plain string and an OData error envelope
/// both end up in `message` exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
