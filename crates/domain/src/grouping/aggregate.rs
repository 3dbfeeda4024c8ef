use indexmap::IndexMap;
use salon_agg_shared_kernel::Amount;
use serde::Serialize;

use crate::model::{FieldValue, JoinedRow};

/// Per-group fold state: transaction count, payment sum and a histogram of
/// payment methods in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupAggregate {
    pub transactions: usize,
    pub total_payment: Amount,
    pub payment_methods: IndexMap<String, usize>,
    /// Rows counted as transactions whose total was missing and thus not summed.
    pub missing_totals: usize,
}

impl GroupAggregate {
    pub fn absorb(&mut self, row: &JoinedRow) {
        self.transactions += 1;
        match row.total {
            Some(total) => self.total_payment += total,
            None => self.missing_totals += 1,
        }
        let method = row.metode_pembayaran.as_deref().unwrap_or(FieldValue::MISSING_LABEL);
        *self.payment_methods.entry(method.to_string()).or_insert(0) += 1;
    }

    /// Sum of histogram counts; equals `transactions` for any folded group.
    pub fn histogram_total(&self) -> usize {
        self.payment_methods.values().sum()
    }
}
