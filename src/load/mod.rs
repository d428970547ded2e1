//! Loaders: materialize parameter values from an input source
//!
//! The command-line loader translates a `Database` into a clap command, runs
//! it over a raw argument list, and returns the resolved values.

pub mod cli;

pub use cli::CliLoader;

use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved values produced by a load call, one entry per parameter that
/// ended up with a value. A missing entry means the parameter was neither
/// supplied nor defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedValues {
    values: BTreeMap<String, Value>,
}

impl ResolvedValues {
    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
