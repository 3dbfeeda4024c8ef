use std::fmt;

use serde::Serialize;

use super::GroupSelection;
use crate::model::{FieldValue, JoinedRow};

/// Ordered tuple of a row's values for the selected group fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupKey(Vec<FieldValue>);

impl GroupKey {
    pub fn of(row: &JoinedRow, selection: &GroupSelection) -> Self {
        Self(selection.fields().iter().map(|f| row.value(f.row_field())).collect())
    }

    pub fn parts(&self) -> &[FieldValue] {
        &self.0
    }
}

impl From<Vec<FieldValue>> for GroupKey {
    fn from(parts: Vec<FieldValue>) -> Self {
        Self(parts)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "({})", parts.join(", "))
    }
}
