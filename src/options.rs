//! Query option set with deterministic rendering.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::params::QueryParam;

/// Bytes escaped in query keys and values: everything but ASCII
/// alphanumerics and `-_.~`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Multi-valued query parameters keyed by name.
///
/// Keys render in ascending order. Each value is escaped on its own and the
/// values of one key are joined with a literal `;`, so a pre-joined string
/// passed to [`Options::set`] has its separators escaped while values added
/// one by one keep theirs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<String, Vec<String>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all values for `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), vec![value.into()]);
        self
    }

    /// Appends `values` under `key`. Adding nothing leaves the set unchanged.
    pub fn add<I, S>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter().map(Into::<String>::into).peekable();
        if values.peek().is_some() {
            self.values.entry(key.into()).or_default().extend(values);
        }
        self
    }

    pub fn add_int<I>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.add(key, values.into_iter().map(|value| value.to_string()))
    }

    /// Appends floats in their shortest round-trip decimal form.
    ///
    /// Values are not validated: `NaN` and infinities render as `NaN`,
    /// `inf` and `-inf`, which the service rejects as an invalid query.
    pub fn add_float<I>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.add(key, values.into_iter().map(|value| value.to_string()))
    }

    /// Sets `key` from a typed parameter. Unset parameters are skipped.
    pub fn set_param<P: QueryParam>(&mut self, key: impl Into<String>, param: P) -> &mut Self {
        if let Some(value) = param.as_query_value() {
            self.set(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Renders `key=v1;v2&key2=...` with keys in ascending order.
    pub fn encode(&self) -> String {
        self.values
            .iter()
            .map(|(key, values)| {
                let joined = values
                    .iter()
                    .map(|value| utf8_percent_encode(value, QUERY_VALUE).to_string())
                    .collect::<Vec<_>>()
                    .join(";");
                format!("{}={}", utf8_percent_encode(key, QUERY_VALUE), joined)
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
