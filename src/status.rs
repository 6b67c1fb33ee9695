//! Response status envelope and its classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CODE_OK: &str = "Ok";

/// Status fields present at the top level of every OSRM response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStatus {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data_version: String,
}

impl ResponseStatus {
    /// Succeeds iff the code is `"Ok"`; otherwise returns the code and
    /// message as an [`ApiError`].
    pub fn classify(&self) -> Result<(), ApiError> {
        if self.code == CODE_OK {
            Ok(())
        } else {
            Err(ApiError::new(&self.code, &self.message))
        }
    }
}

/// Known OSRM error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidUrl,
    InvalidService,
    InvalidVersion,
    InvalidOptions,
    InvalidQuery,
    InvalidValue,
    NoSegment,
    TooBig,
    NoRoute,
    NoTable,
    NoMatch,
    /// Any code this crate does not know about.
    Other(String),
}

impl ErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "InvalidUrl" => ErrorCode::InvalidUrl,
            "InvalidService" => ErrorCode::InvalidService,
            "InvalidVersion" => ErrorCode::InvalidVersion,
            "InvalidOptions" => ErrorCode::InvalidOptions,
            "InvalidQuery" => ErrorCode::InvalidQuery,
            "InvalidValue" => ErrorCode::InvalidValue,
            "NoSegment" => ErrorCode::NoSegment,
            "TooBig" => ErrorCode::TooBig,
            "NoRoute" => ErrorCode::NoRoute,
            "NoTable" => ErrorCode::NoTable,
            "NoMatch" => ErrorCode::NoMatch,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::InvalidUrl => "InvalidUrl",
            ErrorCode::InvalidService => "InvalidService",
            ErrorCode::InvalidVersion => "InvalidVersion",
            ErrorCode::InvalidOptions => "InvalidOptions",
            ErrorCode::InvalidQuery => "InvalidQuery",
            ErrorCode::InvalidValue => "InvalidValue",
            ErrorCode::NoSegment => "NoSegment",
            ErrorCode::TooBig => "TooBig",
            ErrorCode::NoRoute => "NoRoute",
            ErrorCode::NoTable => "NoTable",
            ErrorCode::NoMatch => "NoMatch",
            ErrorCode::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-"Ok" status returned by the service, kept verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code} - {message}")]
pub struct ApiError {
    code: String,
    message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Raw code string as sent by the service.
    pub fn code_str(&self) -> &str {
        &self.code
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::parse(&self.code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
