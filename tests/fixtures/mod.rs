//! Test fixtures for osrm-client.
//!
//! Provides:
//! - Manhattan coordinates used across the request tests
//! - Canned OSRM response bodies for each service
//! - A recording in-memory transport

#![allow(dead_code)]

use std::sync::Mutex;

use osrm_client::{Point, Polyline, Transport, TransportError};

/// Three points around Lower Manhattan.
pub fn manhattan() -> Polyline {
    Polyline::new(vec![
        Point::new(-73.990185, 40.714701),
        Point::new(-73.991801, 40.717571),
        Point::new(-73.985751, 40.715651),
    ])
}

/// `manhattan()` at polyline5, escaped for the URL path.
pub const MANHATTAN_PATH: &str = "polyline(%7BaowFrerbM%7DPbI~Jyd@)";

pub fn route_response() -> serde_json::Value {
    serde_json::json!({
        "code": "Ok",
        "data_version": "2017-11-17T21:43:02Z",
        "routes": [{
            "distance": 1190.5,
            "duration": 92.2,
            "weight_name": "routability",
            "weight": 92.2,
            "geometry": "w{_tlA~u~blCo}@oeG",
            "legs": [{
                "distance": 637.5,
                "duration": 58.0,
                "summary": "Bowery",
                "weight": 58.0,
                "annotation": {
                    "duration": [5.0, 3.2, 4.1],
                    "distance": [33.1, 20.0, 27.4],
                    "nodes": [42435889, 42435891, 42435894, 42435897]
                },
                "steps": [{
                    "distance": 33.1,
                    "duration": 5.0,
                    "weight": 5.0,
                    "name": "",
                    "mode": "driving",
                    "driving_side": "right",
                    "geometry": "w{_tlAnb_clCfEz@zJf@",
                    "maneuver": {
                        "location": [-73.9902, 40.7147],
                        "bearing_before": 0,
                        "bearing_after": 193,
                        "type": "depart"
                    },
                    "intersections": [{
                        "location": [-73.9902, 40.7147],
                        "bearings": [193],
                        "entry": [true],
                        "out": 0
                    }]
                }]
            }]
        }],
        "waypoints": [
            {"hint": "a", "distance": 1.2, "name": "", "location": [-73.9902, 40.7147]},
            {"hint": "b", "distance": 0.4, "name": "Bowery", "location": [-73.9858, 40.7157]}
        ]
    })
}

pub fn match_response() -> serde_json::Value {
    serde_json::json!({
        "code": "Ok",
        "data_version": "new",
        "matchings": [{
            "confidence": 0.023898,
            "distance": 1035.3,
            "duration": 79.0,
            "weight_name": "routability",
            "weight": 79.0,
            "geometry": "y{_tlApa_clCkz@ctG",
            "legs": [
                {"distance": 500.0, "duration": 40.0, "annotation": {"nodes": [1, 2, 3]}},
                {"distance": 535.3, "duration": 39.0, "annotation": {"nodes": [3, 4]}}
            ]
        }],
        "tracepoints": [
            {"waypoint_index": 0, "matchings_index": 0, "alternatives_count": 0, "location": [-73.990185, 40.714701], "hint": "x"},
            null,
            {"waypoint_index": 1, "matchings_index": 0, "alternatives_count": 2, "location": [-73.985751, 40.715651], "hint": "y"}
        ]
    })
}

pub fn table_response() -> serde_json::Value {
    serde_json::json!({
        "code": "Ok",
        "durations": [
            [0, 39, 46.8],
            [39.5, 0, 34.2],
            [47.2, 34.2, 0]
        ],
        "sources": [],
        "destinations": []
    })
}

pub fn nearest_response() -> serde_json::Value {
    serde_json::json!({
        "code": "Ok",
        "waypoints": [
            {"nodes": [0, 42435889], "hint": "XRAFgP___3-SAAAAXAEAAAAAAAAAAAAAfCMzQjwphUM", "distance": 4.6, "name": "Broadway", "location": [-73.994594, 40.735516]},
            {"nodes": [0, 42435891], "hint": "-B4FgP___3_mAAAAZAAAAAAAAAAAAAAAcKqmQmexskA", "distance": 9.1, "name": "East 13th Street", "location": [-73.994656, 40.735608]}
        ]
    })
}

pub fn invalid_query_response() -> serde_json::Value {
    serde_json::json!({
        "code": "InvalidQuery",
        "message": "Query string malformed close to position 28"
    })
}

/// Transport returning one canned reply and recording every requested URL.
pub struct MockTransport {
    reply: Result<Vec<u8>, String>,
    urls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn json(body: serde_json::Value) -> Self {
        Self::raw(body.to_string().into_bytes())
    }

    pub fn raw(body: Vec<u8>) -> Self {
        Self {
            reply: Ok(body),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.urls.lock().unwrap().push(url.to_string());
        self.reply.clone().map_err(TransportError::Other)
    }
}
