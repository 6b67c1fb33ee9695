//! Match service: snaps a noisy GPS trace to the road network.

use serde::{Deserialize, Serialize};

use crate::params::{Annotations, Bearing, Gaps, Geometries, Overview, Steps, Tidy};
use crate::polyline::{Point, Polyline};
use crate::request::RequestDescriptor;
use crate::route::{Route, step_options};
use crate::status::ResponseStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRequest {
    pub profile: String,
    pub coordinates: Polyline,
    pub bearings: Vec<Bearing>,
    pub steps: Steps,
    pub annotations: Annotations,
    pub tidy: Tidy,
    /// Seconds since the UNIX epoch, one per coordinate, monotonically increasing.
    pub timestamps: Vec<i64>,
    /// Standard deviation of GPS precision in meters, one per coordinate.
    pub radiuses: Vec<f64>,
    /// Hints from a previous request, one per coordinate.
    pub hints: Vec<String>,
    pub overview: Overview,
    pub gaps: Gaps,
    /// Defaults to polyline6 when unset.
    pub geometries: Geometries,
}

impl MatchRequest {
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut options = step_options(self.steps, self.annotations, self.overview, self.geometries);
        options
            .set_param("tidy", self.tidy)
            .set_param("gaps", self.gaps)
            .add_int("timestamps", self.timestamps.iter().copied())
            .add_float("radiuses", self.radiuses.iter().copied())
            .add("hints", self.hints.iter().cloned());
        if !self.bearings.is_empty() {
            options.set("bearings", Bearing::join(&self.bearings));
        }

        RequestDescriptor {
            profile: self.profile.clone(),
            service: "match".to_string(),
            coordinates: self.coordinates.clone(),
            options,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub matchings: Vec<Matching>,
    /// One entry per input coordinate; `None` for points dropped as outliers.
    pub tracepoints: Vec<Option<Tracepoint>>,
}

/// A route assembling (part of) the trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Matching {
    #[serde(flatten)]
    pub route: Route,
    /// Between 0 and 1; 1 is very confident the matching is correct.
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracepoint {
    pub waypoint_index: usize,
    pub location: Point,
    pub matchings_index: usize,
    /// Zero means the point was matched unambiguously.
    pub alternatives_count: usize,
    pub name: String,
    pub distance: f64,
    pub hint: String,
}
