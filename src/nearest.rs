//! Nearest service: snaps a coordinate to the street network.

use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::params::Bearing;
use crate::polyline::{Point, Polyline};
use crate::request::RequestDescriptor;
use crate::status::ResponseStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearestRequest {
    pub profile: String,
    /// A single coordinate.
    pub coordinates: Polyline,
    pub bearings: Vec<Bearing>,
    /// Number of nearest segments to return; the service default (1) when 0.
    pub number: u32,
}

impl NearestRequest {
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut options = Options::new();
        if self.number > 0 {
            options.add_int("number", [i64::from(self.number)]);
        }
        if !self.bearings.is_empty() {
            options.set("bearings", Bearing::join(&self.bearings));
        }

        RequestDescriptor {
            profile: self.profile.clone(),
            service: "nearest".to_string(),
            coordinates: self.coordinates.clone(),
            options,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearestResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub waypoints: Vec<NearestWaypoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearestWaypoint {
    pub location: Point,
    pub distance: f64,
    pub name: String,
    pub hint: String,
    /// OpenStreetMap node ids of the matched segment.
    pub nodes: Vec<u64>,
}
