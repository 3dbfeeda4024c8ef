// crates/ports/src/record_source.rs
use std::collections::BTreeMap;

use salon_agg_shared_kernel::{Result, ScalarValue};
use serde::{Deserialize, Serialize};

/// A flat record as delivered by a store: field name to scalar value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, ScalarValue>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&ScalarValue> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<ScalarValue>) -> Option<ScalarValue> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<ScalarValue> {
        self.0.remove(field)
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, ScalarValue)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, ScalarValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Port for the store holding customer documents.
pub trait CustomerSource: Send + Sync {
    /// Human-readable origin used in diagnostics.
    fn describe(&self) -> String;
    fn fetch_customers(&self) -> Result<Vec<RawRecord>>;
}

/// Port for the store holding appointment rows.
pub trait AppointmentSource: Send + Sync {
    fn describe(&self) -> String;
    fn fetch_appointments(&self) -> Result<Vec<RawRecord>>;
}
