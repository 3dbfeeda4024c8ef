use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::TotalRange;
use crate::model::JoinedRow;

/// Inclusion predicates over joined rows.
///
/// An empty name or service set places no restriction. Within a set any
/// member matches; across categories every predicate must hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub names: HashSet<String>,
    #[serde(default)]
    pub services: HashSet<String>,
    #[serde(default)]
    pub total_range: TotalRange,
}

impl FilterSpec {
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services.extend(services.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn with_range(mut self, total_range: TotalRange) -> Self {
        self.total_range = total_range;
        self
    }

    pub fn matches(&self, row: &JoinedRow) -> bool {
        member_or_unrestricted(&self.names, row.nama_customer.as_deref())
            && member_or_unrestricted(&self.services, row.pelayanan.as_deref())
            && self.total_range.contains(row.total)
    }
}

#[inline]
fn member_or_unrestricted(set: &HashSet<String>, value: Option<&str>) -> bool {
    set.is_empty() || value.is_some_and(|v| set.contains(v))
}
