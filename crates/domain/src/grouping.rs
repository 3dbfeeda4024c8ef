pub mod aggregate;
pub mod field;
pub mod key;
pub mod selection;

use indexmap::IndexMap;
use log::debug;

pub use aggregate::GroupAggregate;
pub use field::GroupField;
pub use key::GroupKey;
pub use selection::GroupSelection;

use crate::model::JoinedRow;

/// Groups in first-occurrence order, together with the fields that keyed them.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSummary {
    selection: GroupSelection,
    groups: IndexMap<GroupKey, GroupAggregate>,
}

impl GroupedSummary {
    pub const fn selection(&self) -> &GroupSelection {
        &self.selection
    }

    pub const fn groups(&self) -> &IndexMap<GroupKey, GroupAggregate> {
        &self.groups
    }

    pub fn get(&self, key: &GroupKey) -> Option<&GroupAggregate> {
        self.groups.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &GroupAggregate)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of transaction counts across all groups.
    pub fn total_transactions(&self) -> usize {
        self.groups.values().map(|g| g.transactions).sum()
    }

    /// `Field: value | Field: value` label for `key`.
    pub fn label(&self, key: &GroupKey) -> String {
        self.selection
            .fields()
            .iter()
            .zip(key.parts())
            .map(|(field, value)| format!("{field}: {value}"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Partitions `rows` by the values of `selection` and folds each partition.
///
/// Rows are folded in input order, so group order is first-occurrence order
/// and the aggregates are identical for identical input.
pub fn group(rows: &[JoinedRow], selection: &GroupSelection) -> GroupedSummary {
    let mut groups: IndexMap<GroupKey, GroupAggregate> = IndexMap::new();
    for row in rows {
        groups.entry(GroupKey::of(row, selection)).or_default().absorb(row);
    }
    debug!("grouped {} rows into {} groups by [{selection}]", rows.len(), groups.len());
    GroupedSummary { selection: selection.clone(), groups }
}
