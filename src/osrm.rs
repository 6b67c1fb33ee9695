//! OSRM HTTP adapter.

use std::time::Duration;

use rayon::prelude::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{Result, TransportError};
use crate::matching::{MatchRequest, MatchResponse};
use crate::nearest::{NearestRequest, NearestResponse};
use crate::request::RequestDescriptor;
use crate::route::{RouteRequest, RouteResponse};
use crate::status::ResponseStatus;
use crate::table::{TableRequest, TableResponse};
use crate::traits::Transport;

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmConfig {
    /// Server URL without a trailing slash, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// [`Transport`] over a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> std::result::Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.bytes()?;
        debug!(status = status.as_u16(), bytes = body.len(), "OSRM responded");

        // OSRM reports API errors as a JSON envelope with a 4xx status; keep
        // those bodies and surface anything else by its status code.
        if !status.is_success() && !is_status_envelope(&body) {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(body.to_vec())
    }
}

fn is_status_envelope(body: &[u8]) -> bool {
    serde_json::from_slice::<ResponseStatus>(body).is_ok_and(|status| !status.code.is_empty())
}

/// Client for the route, match, table and nearest services.
#[derive(Debug, Clone)]
pub struct Osrm<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl Osrm<HttpTransport> {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config.base_url, transport))
    }
}

impl<T: Transport> Osrm<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip_all, fields(profile = %request.profile))]
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResponse> {
        self.query(&request.descriptor())
    }

    /// Runs route requests in parallel. Results keep the input order.
    pub fn route_batch(&self, requests: &[RouteRequest]) -> Vec<Result<RouteResponse>> {
        requests.par_iter().map(|request| self.route(request)).collect()
    }

    #[instrument(skip_all, fields(profile = %request.profile))]
    pub fn match_trace(&self, request: &MatchRequest) -> Result<MatchResponse> {
        self.query(&request.descriptor())
    }

    #[instrument(skip_all, fields(profile = %request.profile))]
    pub fn table(&self, request: &TableRequest) -> Result<TableResponse> {
        self.query(&request.descriptor())
    }

    #[instrument(skip_all, fields(profile = %request.profile))]
    pub fn nearest(&self, request: &NearestRequest) -> Result<NearestResponse> {
        self.query(&request.descriptor())
    }

    fn query<R: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> Result<R> {
        let url = descriptor.url(&self.base_url)?;
        debug!(service = %descriptor.service, %url, "OSRM request");

        let body = self.transport.fetch(&url)?;

        let status: ResponseStatus = serde_json::from_slice(&body)?;
        if let Err(err) = status.classify() {
            warn!(code = err.code_str(), message = err.message(), "OSRM returned an error");
            return Err(err.into());
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
