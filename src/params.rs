//! Ordered request parameters shared by query strings and form bodies.

use chrono::{NaiveDateTime, NaiveTime};

/// Ordered list of request parameters.
///
/// The same list is serialized into a GET query string or a POST
/// form-urlencoded body. Optional values that are `None` are never pushed,
/// so an unset optional cannot reach the wire as an empty or null key.
#[derive(Debug, Default)]
pub(crate) struct Params(Vec<(String, String)>);

impl Params {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub(crate) fn push_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Wire format for datetime parameters: ISO 8601 without a zone suffix.
pub(crate) fn datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Wire format for schedule times: `HH:MM`.
pub(crate) fn clock(value: NaiveTime) -> String {
    value.format("%H:%M").to_string()
}
