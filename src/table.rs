//! Table service: durations of the fastest routes between all coordinate pairs.

use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::polyline::Polyline;
use crate::request::RequestDescriptor;
use crate::route::Waypoint;
use crate::status::ResponseStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRequest {
    pub profile: String,
    pub coordinates: Polyline,
    /// Coordinate indices used as sources; all coordinates when empty.
    pub sources: Vec<usize>,
    /// Coordinate indices used as destinations; all coordinates when empty.
    pub destinations: Vec<usize>,
}

impl TableRequest {
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut options = Options::new();
        options
            .add_int("sources", self.sources.iter().map(|&index| index as i64))
            .add_int("destinations", self.destinations.iter().map(|&index| index as i64));

        RequestDescriptor {
            profile: self.profile.clone(),
            service: "table".to_string(),
            coordinates: self.coordinates.clone(),
            options,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    /// Seconds, `durations[source][destination]`; `None` when unreachable.
    pub durations: Vec<Vec<Option<f64>>>,
    pub sources: Vec<Waypoint>,
    pub destinations: Vec<Waypoint>,
}
