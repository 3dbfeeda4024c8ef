use std::fmt;

use salon_agg_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

use super::GroupField;

/// Ordered, distinct, non-empty list of group-by fields.
///
/// Constructing one is the only way to reach the group-by engine, so an empty
/// selection is rejected before any grouping happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupSelection(Vec<GroupField>);

impl GroupSelection {
    pub fn new(fields: Vec<GroupField>) -> DomainResult<Self> {
        if fields.is_empty() {
            return Err(DomainError::EmptyGroupSelection);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(DomainError::DuplicateGroupField { field: field.label().to_string() });
            }
        }
        Ok(Self(fields))
    }

    pub fn fields(&self) -> &[GroupField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GroupSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<_> = self.0.iter().map(|g| g.label()).collect();
        f.write_str(&labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(GroupSelection::new(vec![]), Err(DomainError::EmptyGroupSelection));
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = GroupSelection::new(vec![GroupField::Pelayanan, GroupField::Tanggal, GroupField::Pelayanan])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateGroupField { field: "Pelayanan".into() });
    }

    #[test]
    fn keeps_selection_order() {
        let selection = GroupSelection::new(vec![GroupField::Tanggal, GroupField::NamaCustomer]).unwrap();
        assert_eq!(selection.fields(), &[GroupField::Tanggal, GroupField::NamaCustomer]);
        assert_eq!(selection.to_string(), "Tanggal, Nama Customer");
    }
}
