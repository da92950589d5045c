use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

/// Query string for a collection request.
///
/// One parameter per filter that is set. List values are comma-joined in the order
/// given, which is how the WaniKani API expects them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, key: &'static str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
        self
    }

    pub fn list<T: Display>(mut self, key: &'static str, values: Option<&[T]>) -> Self {
        if let Some(values) = values {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.0.push((key, joined));
        }
        self
    }

    pub fn time(mut self, key: &'static str, value: Option<DateTime<Utc>>) -> Self {
        if let Some(value) = value {
            self.0
                .push((key, value.to_rfc3339_opts(SecondsFormat::AutoSi, true)));
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.as_str())
    }
}

/// A set of collection filters that renders to a [`Query`].
pub trait Filters {
    fn to_query(&self) -> Query;
}
