//! Route service: fastest route between coordinates in the supplied order.

use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::params::{Annotations, Bearing, ContinueStraight, Geometries, Overview, Steps};
use crate::polyline::{Point, Polyline};
use crate::request::RequestDescriptor;
use crate::status::ResponseStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteRequest {
    pub profile: String,
    pub coordinates: Polyline,
    pub bearings: Vec<Bearing>,
    pub steps: Steps,
    pub annotations: Annotations,
    pub overview: Overview,
    /// Defaults to polyline6 when unset.
    pub geometries: Geometries,
    pub continue_straight: ContinueStraight,
    /// Indices of coordinates treated as waypoints; the rest are via points.
    pub waypoints: Vec<usize>,
}

impl RouteRequest {
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut options = step_options(self.steps, self.annotations, self.overview, self.geometries);
        options.set_param("continue_straight", self.continue_straight);
        options.add_int("waypoints", self.waypoints.iter().map(|&index| index as i64));
        if !self.bearings.is_empty() {
            options.set("bearings", Bearing::join(&self.bearings));
        }

        RequestDescriptor {
            profile: self.profile.clone(),
            service: "route".to_string(),
            coordinates: self.coordinates.clone(),
            options,
        }
    }
}

/// Options shared by the route and match services.
pub(crate) fn step_options(
    steps: Steps,
    annotations: Annotations,
    overview: Overview,
    geometries: Geometries,
) -> Options {
    let geometries = match geometries {
        Geometries::Unset => Geometries::Polyline6,
        other => other,
    };

    let mut options = Options::new();
    options
        .set_param("steps", steps)
        .set_param("annotations", annotations)
        .set_param("geometries", geometries)
        .set_param("overview", overview);
    options
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub routes: Vec<Route>,
    pub waypoints: Vec<Waypoint>,
}

/// An input coordinate snapped to the street network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Waypoint {
    pub name: String,
    pub location: Point,
    pub distance: f64,
    pub hint: String,
}

/// A route through (potentially multiple) waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub distance: f64,
    pub duration: f64,
    pub weight_name: String,
    pub weight: f64,
    pub geometry: Polyline,
    pub legs: Vec<Leg>,
}

/// A route between two waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leg {
    pub annotation: Option<Annotation>,
    pub distance: f64,
    pub duration: f64,
    pub summary: String,
    pub weight: f64,
    pub steps: Vec<Step>,
}

/// Per-segment metadata along the leg geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    pub duration: Vec<f64>,
    pub distance: Vec<f64>,
    pub nodes: Vec<u64>,
    pub datasources: Vec<u32>,
    pub weight: Vec<f64>,
    pub speed: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub distance: f64,
    pub duration: f64,
    pub geometry: Polyline,
    pub name: String,
    pub mode: String,
    pub driving_side: String,
    pub weight: f64,
    pub maneuver: StepManeuver,
    pub intersections: Vec<Intersection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepManeuver {
    pub location: Point,
    pub bearing_before: f64,
    pub bearing_after: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub modifier: Option<String>,
    pub exit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intersection {
    pub location: Point,
    pub bearings: Vec<u16>,
    pub entry: Vec<bool>,
    #[serde(rename = "in")]
    pub in_index: Option<u32>,
    #[serde(rename = "out")]
    pub out_index: Option<u32>,
    pub lanes: Vec<Lane>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lane {
    pub indications: Vec<String>,
    pub valid: bool,
}
