//! Client tests against an in-memory transport.

mod fixtures;

use fixtures::*;
use osrm_client::matching::MatchRequest;
use osrm_client::nearest::NearestRequest;
use osrm_client::params::{Annotations, ContinueStraight, Geometries, Overview};
use osrm_client::route::RouteRequest;
use osrm_client::table::TableRequest;
use osrm_client::{Error, ErrorCode, Osrm, Point, Polyline, TransportError};

const BASE_URL: &str = "http://osrm.test";

#[test]
fn route_request_builds_url_and_decodes_payload() {
    let transport = MockTransport::json(route_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let response = osrm
        .route(&RouteRequest {
            profile: "car".to_string(),
            coordinates: manhattan(),
            annotations: Annotations::True,
            geometries: Geometries::Polyline6,
            overview: Overview::Full,
            continue_straight: ContinueStraight::True,
            ..Default::default()
        })
        .expect("route succeeds");

    assert_eq!(
        transport.urls(),
        vec![format!(
            "{BASE_URL}/route/v1/car/{MANHATTAN_PATH}?annotations=true&continue_straight=true&geometries=polyline6&overview=full"
        )]
    );

    assert_eq!(response.status.data_version, "2017-11-17T21:43:02Z");
    assert_eq!(response.routes.len(), 1);
    let route = &response.routes[0];
    assert_eq!(route.distance, 1190.5);
    assert_eq!(route.duration, 92.2);
    assert_eq!(
        route.geometry.points(),
        &[Point::new(-73.99, 40.7147), Point::new(-73.9858, 40.7157)]
    );

    let leg = &route.legs[0];
    assert_eq!(leg.distance, 637.5);
    let annotation = leg.annotation.as_ref().expect("annotation present");
    assert_eq!(annotation.duration.len(), 3);
    assert_eq!(annotation.nodes.len(), 4);

    let step = &leg.steps[0];
    assert_eq!(step.mode, "driving");
    assert_eq!(step.name, "");
    assert_eq!(step.maneuver.kind, "depart");
    assert_eq!(step.maneuver.modifier, None);
    assert_eq!(step.intersections[0].out_index, Some(0));
    assert_eq!(step.intersections[0].in_index, None);
    assert_eq!(
        step.geometry,
        Polyline::new(vec![
            Point::new(-73.9902, 40.7147),
            Point::new(-73.99023, 40.7146),
            Point::new(-73.99025, 40.71441),
        ])
    );

    assert_eq!(response.waypoints.len(), 2);
    assert_eq!(response.waypoints[1].name, "Bowery");
}

#[test]
fn match_request_uses_default_geometries() {
    let transport = MockTransport::json(match_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let response = osrm
        .match_trace(&MatchRequest {
            profile: "car".to_string(),
            coordinates: manhattan(),
            ..Default::default()
        })
        .expect("match succeeds");

    assert_eq!(
        transport.urls(),
        vec![format!("{BASE_URL}/match/v1/car/{MANHATTAN_PATH}?geometries=polyline6")]
    );
    assert_eq!(response.status.data_version, "new");
    assert_eq!(response.matchings.len(), 1);
    let matching = &response.matchings[0];
    assert_eq!(matching.confidence, 0.023898);
    assert_eq!(matching.route.distance, 1035.3);
    assert_eq!(matching.route.geometry.len(), 2);
    assert_eq!(matching.route.legs.len(), 2);
    assert_eq!(
        matching.route.legs[0].annotation.as_ref().map(|a| a.nodes.len()),
        Some(3)
    );
    assert_eq!(response.tracepoints.len(), 3);
    assert!(response.tracepoints[1].is_none());
}

#[test]
fn table_request_without_options_has_no_query() {
    let transport = MockTransport::json(table_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let response = osrm
        .table(&TableRequest {
            profile: "car".to_string(),
            coordinates: manhattan(),
            ..Default::default()
        })
        .expect("table succeeds");

    assert_eq!(
        transport.urls(),
        vec![format!("{BASE_URL}/table/v1/car/{MANHATTAN_PATH}")]
    );
    assert_eq!(response.durations.len(), 3);
    assert_eq!(response.durations[0], vec![Some(0.0), Some(39.0), Some(46.8)]);
    assert_eq!(response.durations[1], vec![Some(39.5), Some(0.0), Some(34.2)]);
    assert_eq!(response.durations[2], vec![Some(47.2), Some(34.2), Some(0.0)]);
}

#[test]
fn nearest_request_sends_number() {
    let transport = MockTransport::json(nearest_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let response = osrm
        .nearest(&NearestRequest {
            profile: "car".to_string(),
            coordinates: Polyline::new(vec![Point::new(-73.994550, 40.735551)]),
            number: 5,
            ..Default::default()
        })
        .expect("nearest succeeds");

    assert_eq!(
        transport.urls(),
        vec![format!("{BASE_URL}/nearest/v1/car/polyline(edswF%7C%60sbM)?number=5")]
    );
    assert_eq!(response.waypoints.len(), 2);
    assert_eq!(response.waypoints[0].name, "Broadway");
    assert_eq!(response.waypoints[0].nodes, vec![0, 42435889]);
    assert_eq!(
        response.waypoints[0].hint,
        "XRAFgP___3-SAAAAXAEAAAAAAAAAAAAAfCMzQjwphUM"
    );
}

#[test]
fn api_error_is_surfaced_for_every_service() {
    let transport = MockTransport::json(invalid_query_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);
    let coordinates = Polyline::new(vec![Point::new(0.1, 0.1)]);

    let check = |result: Result<(), Error>| {
        let err = result.expect_err("API error expected");
        assert_eq!(
            err.to_string(),
            "InvalidQuery - Query string malformed close to position 28"
        );
        match err {
            Error::Api(api) => assert_eq!(api.code(), ErrorCode::InvalidQuery),
            other => panic!("unexpected error: {other:?}"),
        }
    };

    check(
        osrm.route(&RouteRequest {
            profile: "car".to_string(),
            coordinates: coordinates.clone(),
            ..Default::default()
        })
        .map(drop),
    );
    check(
        osrm.match_trace(&MatchRequest {
            profile: "car".to_string(),
            coordinates: coordinates.clone(),
            ..Default::default()
        })
        .map(drop),
    );
    check(
        osrm.table(&TableRequest {
            profile: "car".to_string(),
            coordinates: coordinates.clone(),
            ..Default::default()
        })
        .map(drop),
    );
    check(
        osrm.nearest(&NearestRequest {
            profile: "car".to_string(),
            coordinates,
            ..Default::default()
        })
        .map(drop),
    );
}

#[test]
fn construction_errors_skip_the_transport() {
    let transport = MockTransport::json(route_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let err = osrm.route(&RouteRequest::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyProfileName));

    let err = osrm
        .route(&RouteRequest {
            profile: "car".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, Error::NoCoordinates));

    assert!(transport.urls().is_empty());
}

#[test]
fn transport_errors_pass_through() {
    let transport = MockTransport::failing("connection reset");
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let err = osrm
        .table(&TableRequest {
            profile: "car".to_string(),
            coordinates: manhattan(),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Transport(TransportError::Other(ref reason)) if reason == "connection reset"
    ));
    assert_eq!(transport.urls().len(), 1);
}

#[test]
fn undecodable_body_is_a_decode_error() {
    let transport = MockTransport::raw(b"<html>bad gateway</html>".to_vec());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let err = osrm
        .nearest(&NearestRequest {
            profile: "car".to_string(),
            coordinates: manhattan(),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn route_batch_keeps_input_order() {
    let transport = MockTransport::json(route_response());
    let osrm = Osrm::with_transport(BASE_URL, &transport);

    let requests = vec![
        RouteRequest {
            profile: "car".to_string(),
            coordinates: manhattan(),
            ..Default::default()
        },
        RouteRequest {
            coordinates: manhattan(),
            ..Default::default()
        },
        RouteRequest {
            profile: "foot".to_string(),
            coordinates: manhattan(),
            ..Default::default()
        },
    ];

    let results = osrm.route_batch(&requests);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::EmptyProfileName)));
    assert!(results[2].is_ok());

    let mut urls = transport.urls();
    urls.sort();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].contains("/route/v1/car/"));
    assert!(urls[1].contains("/route/v1/foot/"));
}
