use indexmap::IndexMap;
use salon_agg_domain::{GroupedSummary, model::FieldValue};
use salon_agg_shared_kernel::Amount;
use serde::Serialize;

use crate::config::Config;

/// One group as presented: ordered, labelled and keyed by field label.
#[derive(Debug, Serialize)]
pub struct GroupView<'a> {
    #[serde(rename = "Group")]
    pub label: String,
    #[serde(rename = "Key")]
    pub key: IndexMap<&'static str, &'a FieldValue>,
    #[serde(rename = "Total Transaksi")]
    pub transactions: usize,
    #[serde(rename = "Total Pembayaran")]
    pub total_payment: Amount,
    #[serde(rename = "Metode Pembayaran")]
    pub payment_methods: &'a IndexMap<String, usize>,
    #[serde(rename = "Tanpa Total", skip_serializing_if = "is_zero")]
    pub missing_totals: usize,
}

impl GroupView<'_> {
    /// `Cash: 2, Card: 1`
    pub fn histogram(&self) -> String {
        self.payment_methods
            .iter()
            .map(|(method, count)| format!("{method}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Groups of `summary` in presentation order, limited to `--top`.
pub fn group_views<'a>(summary: &'a GroupedSummary, config: &Config) -> Vec<GroupView<'a>> {
    let fields = summary.selection().fields();
    config
        .sort_groups
        .ordered(summary, config.top)
        .into_iter()
        .map(|(key, aggregate)| GroupView {
            label: summary.label(key),
            key: fields.iter().map(|f| f.label()).zip(key.parts()).collect(),
            transactions: aggregate.transactions,
            total_payment: aggregate.total_payment,
            payment_methods: &aggregate.payment_methods,
            missing_totals: aggregate.missing_totals,
        })
        .collect()
}
