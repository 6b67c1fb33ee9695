//! Error types for the OSRM client.

use thiserror::Error;

use crate::status::ApiError;

/// Errors raised by the transport collaborator.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP request could not be completed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure status and no OSRM status body.
    #[error("server responded with status {0}")]
    Status(u16),

    /// Failure reported by a non-HTTP transport.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Errors that can occur while building requests, decoding geometry or
/// talking to the routing service.
#[derive(Error, Debug)]
pub enum Error {
    /// The request descriptor has no service name.
    #[error("the request should contain a service name")]
    EmptyServiceName,

    /// The request descriptor has no profile name.
    #[error("the request should contain a profile name")]
    EmptyProfileName,

    /// The request descriptor has no coordinates.
    #[error("the request should contain coordinates")]
    NoCoordinates,

    /// A geometry could not be decoded. `position` is the byte offset into
    /// a polyline string, or the point index of a GeoJSON line.
    #[error("malformed geometry at {position}: {reason}")]
    MalformedGeometry {
        position: usize,
        reason: &'static str,
    },

    /// A structured geometry object was not valid GeoJSON.
    #[error("invalid GeoJSON geometry: {0}")]
    GeoJson(#[from] geojson::Error),

    /// A structured geometry declared a kind other than `LineString`.
    #[error("unsupported geometry kind: {0:?}")]
    UnsupportedGeometryKind(String),

    /// The service answered with a non-"Ok" status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if a caller may reasonably retry the same request.
    ///
    /// Only transport failures qualify; this crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Transport(TransportError::Http(_) | TransportError::Status(_))
        )
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
