//! Request descriptor and URL builder.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::polyline::{POLYLINE5_FACTOR, Polyline};

const API_VERSION: &str = "v1";

/// Bytes escaped in a URL path segment: everything but ASCII alphanumerics,
/// `-_.~` and `$&+:=@`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Service-agnostic description of one OSRM request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDescriptor {
    pub profile: String,
    pub service: String,
    pub coordinates: Polyline,
    pub options: Options,
}

impl RequestDescriptor {
    /// Builds
    /// `{server_url}/{service}/v1/{profile}/polyline({coordinates})[?{options}]`.
    ///
    /// Coordinates are polyline-encoded at [`POLYLINE5_FACTOR`]. The query
    /// string is appended only when options are present.
    pub fn url(&self, server_url: &str) -> Result<String> {
        if self.service.is_empty() {
            return Err(Error::EmptyServiceName);
        }
        if self.profile.is_empty() {
            return Err(Error::EmptyProfileName);
        }
        if self.coordinates.is_empty() {
            return Err(Error::NoCoordinates);
        }

        let encoded = self.coordinates.encode(POLYLINE5_FACTOR);
        let mut url = format!(
            "{}/{}/{}/{}/polyline({})",
            server_url,
            self.service,
            API_VERSION,
            self.profile,
            utf8_percent_encode(&encoded, PATH_SEGMENT)
        );
        if !self.options.is_empty() {
            url.push('?');
            url.push_str(&self.options.encode());
        }

        Ok(url)
    }
}
