use std::{fmt, time::Duration};

use salon_agg_domain::{FilterSpec, GroupField, GroupedSummary, JoinedRow, options::FilterChoices};
use serde::Serialize;

use crate::decode::DecodeStats;

/// Everything one run needs besides the sources themselves.
#[derive(Debug, Clone, Default)]
pub struct AggregationRequest {
    pub filter: FilterSpec,
    pub grouping: GroupingRequest,
}

/// Whether and how the filtered rows should be grouped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GroupingRequest {
    /// Stop after filtering.
    #[default]
    None,
    /// Group by these fields, in this order. An empty list is reported as
    /// [`Warning::EmptyGroupSelection`] instead of being grouped.
    Fields(Vec<GroupField>),
}

/// Conditions worth telling the user about that do not stop the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Warning {
    NoCustomers,
    NoAppointments,
    EmptyGroupSelection,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCustomers => f.write_str("no customer records found"),
            Self::NoAppointments => f.write_str("no appointment records found"),
            Self::EmptyGroupSelection => f.write_str("select at least one field to group by"),
        }
    }
}

/// Sizes observed while joining.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub customers: usize,
    pub appointments: usize,
    pub indexed_customers: usize,
    pub overwritten_appointments: usize,
    pub unkeyed_appointments: usize,
    pub joined_rows: usize,
    pub filtered_rows: usize,
}

/// Wall-clock time spent in each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub load: Duration,
    pub join: Duration,
    pub filter: Duration,
    pub group: Duration,
}

/// Result of one run, handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct AggregationReport {
    pub rows: Vec<JoinedRow>,
    pub groups: Option<GroupedSummary>,
    pub choices: FilterChoices,
    pub join_stats: JoinStats,
    pub decode_stats: DecodeStats,
    pub timings: Timings,
    pub warnings: Vec<Warning>,
}

impl AggregationReport {
    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}
