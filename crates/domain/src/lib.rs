//! # Domain
//!
//! Join, filter and group-by engines over customer and appointment records.
//!
//! - [`model`]: typed records and the fixed-shape [`model::JoinedRow`]
//! - [`join`]: appointment index (last write wins) and the inner join
//! - [`filtering`]: name/service membership and inclusive total range
//! - [`grouping`]: composite-key partitioning and per-group aggregates
//! - [`analytics`]: presentation ordering of groups
//! - [`options`]: selectable filter values derived from joined rows
//!
//! Every engine is a pure function over borrowed input; each call builds its
//! own index and aggregate maps.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod filtering;
pub mod grouping;
pub mod join;
pub mod model;
pub mod options;

pub use filtering::{FilterSpec, TotalRange, filter};
pub use grouping::{GroupAggregate, GroupField, GroupKey, GroupSelection, GroupedSummary, group};
pub use join::{AppointmentIndex, join};
pub use model::{AppointmentRecord, CustomerRecord, JoinedRow};
