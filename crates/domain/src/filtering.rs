pub mod filter_spec;
pub mod range;

use log::debug;

pub use filter_spec::FilterSpec;
pub use range::TotalRange;

use crate::model::JoinedRow;

/// Keeps the rows that satisfy every predicate of `spec`, in input order.
pub fn filter(rows: &[JoinedRow], spec: &FilterSpec) -> Vec<JoinedRow> {
    let kept: Vec<JoinedRow> = rows.iter().filter(|row| spec.matches(row)).cloned().collect();
    debug!("filter kept {} of {} rows", kept.len(), rows.len());
    kept
}
