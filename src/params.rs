//! Typed query parameter values.
//!
//! Each parameter family is a closed enum whose `Unset` variant is the
//! default. An unset parameter is left out of the query string entirely,
//! which is different from sending an explicit value.

use std::fmt;

/// A parameter value that can be placed in an [`Options`](crate::options::Options) set.
pub trait QueryParam {
    /// Wire representation, or `None` when the parameter is unset.
    fn as_query_value(&self) -> Option<&'static str>;
}

macro_rules! query_param {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            Unset,
            $($variant),+
        }

        impl QueryParam for $name {
            fn as_query_value(&self) -> Option<&'static str> {
                match self {
                    $name::Unset => None,
                    $($name::$variant => Some($wire)),+
                }
            }
        }
    };
}

query_param! {
    /// Whether to return route steps for each leg.
    Steps { True => "true", False => "false" }
}

query_param! {
    /// Additional metadata for each coordinate along the route geometry.
    Annotations {
        True => "true",
        False => "false",
        Nodes => "nodes",
        Distance => "distance",
        Duration => "duration",
        Datasources => "datasources",
        Weight => "weight",
        Speed => "speed",
    }
}

query_param! {
    /// Level of detail of the overview geometry.
    Overview { Simplified => "simplified", Full => "full", False => "false" }
}

query_param! {
    /// Format of returned geometries.
    Geometries { Polyline6 => "polyline6", GeoJson => "geojson" }
}

query_param! {
    /// Allow the match service to modify noisy input traces.
    Tidy { True => "true", False => "false" }
}

query_param! {
    /// Whether the match service splits traces at large timestamp gaps.
    Gaps { Split => "split", Ignore => "ignore" }
}

query_param! {
    /// Keep going straight at waypoints instead of making u-turns.
    ContinueStraight { Default => "default", True => "true", False => "false" }
}

/// Limits the search to segments with the given bearing, in degrees towards
/// true north clockwise, plus or minus `range` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bearing {
    pub value: u16,
    pub range: u16,
}

impl Bearing {
    pub fn new(value: u16, range: u16) -> Self {
        Self { value, range }
    }

    /// Renders a bearing list as `value,range;value,range;...`.
    pub fn join(bearings: &[Bearing]) -> String {
        bearings
            .iter()
            .map(Bearing::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.value, self.range)
    }
}
