// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Directory(DirectoryError),
}

/// Specific error types for region directory fetches.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// The request could not be sent or the connection dropped mid-flight.
    Transport(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be decoded as a region listing.
    MalformedResponse(String),
}

impl DirectoryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DirectoryError::Transport(_) => "error-directory-transport",
            DirectoryError::Status(_) => "error-directory-status",
            DirectoryError::MalformedResponse(_) => "error-directory-malformed",
        }
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            DirectoryError::Status(code) => write!(f, "HTTP status: {}", code),
            DirectoryError::MalformedResponse(msg) => {
                write!(f, "Malformed response: {}", msg)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Directory(e) => write!(f, "Directory Error: {}", e),
        }
    }
}

impl From<DirectoryError> for Error {
    fn from(err: DirectoryError) -> Self {
        Error::Directory(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Directory(DirectoryError::Transport(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Directory(DirectoryError::MalformedResponse(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
