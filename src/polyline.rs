//! Polyline geometry codec.
//!
//! Points are encoded as signed variable-length deltas of their scaled
//! coordinates, latitude before longitude, each 5-bit group biased into the
//! printable ASCII range starting at `?`. The same precision factor must be
//! used on both ends of a round-trip.
//!
//! OSRM uses two factors: [`POLYLINE5_FACTOR`] for the `polyline(...)`
//! coordinate segment of request URLs and [`POLYLINE6_FACTOR`] for geometries
//! carried in JSON bodies. The asymmetry comes from the service protocol and
//! has to be preserved for wire compatibility.

use std::num::NonZeroU32;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// Precision factor for coordinates in request URL path segments.
pub const POLYLINE5_FACTOR: NonZeroU32 = factor(100_000);

/// Precision factor for geometries in JSON request and response bodies.
pub const POLYLINE6_FACTOR: NonZeroU32 = factor(1_000_000);

const fn factor(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(factor) => factor,
        None => panic!("precision factor must be positive"),
    }
}

const CHAR_OFFSET: u8 = 63;
const CONTINUATION_BIT: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;

/// A geographic point. Serialized as `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Point {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.lon, point.lat]
    }
}

/// Encodes `points` at the given precision factor.
pub fn encode(points: &[Point], factor: NonZeroU32) -> String {
    let factor = f64::from(factor.get());
    let mut result = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for point in points {
        let lat = scale(point.lat, factor);
        let lon = scale(point.lon, factor);

        encode_signed(lat.wrapping_sub(prev_lat), &mut result);
        encode_signed(lon.wrapping_sub(prev_lon), &mut result);

        prev_lat = lat;
        prev_lon = lon;
    }

    result
}

/// Decodes a polyline string produced at the given precision factor.
pub fn decode(encoded: &str, factor: NonZeroU32) -> Result<Vec<Point>> {
    let factor = f64::from(factor.get());
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;

    while pos < bytes.len() {
        let delta_lat = decode_signed(bytes, &mut pos)?;
        if pos == bytes.len() {
            return Err(Error::MalformedGeometry {
                position: pos,
                reason: "latitude without a longitude",
            });
        }
        let delta_lon = decode_signed(bytes, &mut pos)?;

        lat = accumulate(lat, delta_lat, pos)?;
        lon = accumulate(lon, delta_lon, pos)?;

        points.push(Point {
            lon: lon as f64 / factor,
            lat: lat as f64 / factor,
        });
    }

    Ok(points)
}

/// Rounds half up, i.e. `floor(x * factor + 0.5)`.
fn scale(value: f64, factor: f64) -> i64 {
    (value * factor + 0.5).floor() as i64
}

fn encode_signed(num: i64, out: &mut String) {
    let mut shifted = num << 1;
    if num < 0 {
        shifted = !shifted;
    }
    let mut value = shifted as u64;

    while value >= CONTINUATION_BIT {
        out.push(char::from(
            ((CONTINUATION_BIT | (value & CHUNK_MASK)) as u8) + CHAR_OFFSET,
        ));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}

fn decode_signed(bytes: &[u8], pos: &mut usize) -> Result<i64> {
    let mut result = 0u64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*pos) else {
            return Err(Error::MalformedGeometry {
                position: *pos,
                reason: "input ends inside a value",
            });
        };
        if !(CHAR_OFFSET..=CHAR_OFFSET + 63).contains(&byte) {
            return Err(Error::MalformedGeometry {
                position: *pos,
                reason: "byte outside the polyline alphabet",
            });
        }

        let chunk = u64::from(byte - CHAR_OFFSET);
        let payload = chunk & CHUNK_MASK;
        // The 13th group has room for 4 bits only.
        if shift >= u64::BITS || (payload << shift) >> shift != payload {
            return Err(Error::MalformedGeometry {
                position: *pos,
                reason: "value overflows 64 bits",
            });
        }

        result |= payload << shift;
        shift += 5;
        *pos += 1;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    let magnitude = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !magnitude } else { magnitude })
}

fn accumulate(total: i64, delta: i64, pos: usize) -> Result<i64> {
    total.checked_add(delta).ok_or(Error::MalformedGeometry {
        position: pos,
        reason: "coordinate overflows 64 bits",
    })
}

/// A route geometry as decoded coordinates.
///
/// Encoding to the compact polyline format happens at the API boundary:
/// [`Polyline::encode`] for request URLs and the serde implementation for
/// JSON bodies. Serializing always produces a polyline6 string.
/// Deserializing accepts a polyline6 string, a GeoJSON `LineString` object,
/// or `null` (empty geometry).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn encode(&self, factor: NonZeroU32) -> String {
        encode(&self.points, factor)
    }

    pub fn decode(encoded: &str, factor: NonZeroU32) -> Result<Self> {
        decode(encoded, factor).map(Self::new)
    }

    /// Builds a polyline from its JSON transport form.
    pub fn from_json_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(Self::default()),
            JsonValue::String(encoded) => Self::decode(&encoded, POLYLINE6_FACTOR),
            other => Self::from_geojson(other),
        }
    }

    fn from_geojson(value: JsonValue) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(JsonValue::as_str)
            .map(str::to_owned);
        if let Some(kind) = kind.as_deref().filter(|kind| *kind != "LineString") {
            return Err(Error::UnsupportedGeometryKind(kind.to_string()));
        }

        let geometry = geojson::Geometry::from_json_value(value)?;
        let geojson::Value::LineString(line) = geometry.value else {
            return Err(Error::UnsupportedGeometryKind(kind.unwrap_or_default()));
        };

        line.iter()
            .enumerate()
            .map(|(index, position)| match position.as_slice() {
                [lon, lat, ..] => Ok(Point::new(*lon, *lat)),
                _ => Err(Error::MalformedGeometry {
                    position: index,
                    reason: "position needs a longitude and a latitude",
                }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Serialize for Polyline {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode(POLYLINE6_FACTOR))
    }
}

impl<'de> Deserialize<'de> for Polyline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<JsonValue>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(value) => Self::from_json_value(value).map_err(D::Error::custom),
        }
    }
}
