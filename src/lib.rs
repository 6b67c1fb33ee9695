//! osrm-client
//!
//! Request builder and response decoder for the OSRM routing HTTP API:
//! polyline geometry codec, canonical query options, URL construction and
//! status classification, plus a blocking client over a pluggable transport.

pub mod error;
pub mod matching;
pub mod nearest;
pub mod options;
pub mod osrm;
pub mod params;
pub mod polyline;
pub mod request;
pub mod route;
pub mod status;
pub mod table;
pub mod traits;

pub use error::{Error, Result, TransportError};
pub use osrm::{HttpTransport, Osrm, OsrmConfig};
pub use polyline::{POLYLINE5_FACTOR, POLYLINE6_FACTOR, Point, Polyline};
pub use status::{ApiError, ErrorCode, ResponseStatus};
pub use traits::Transport;
