//! Format-neutral tables shared by the table, CSV/TSV and Markdown writers.

use salon_agg_domain::{
    GroupedSummary, JoinedRow,
    model::{FieldValue, RowField},
    options::FilterChoices,
};
use salon_agg_usecase::AggregationReport;

use super::{
    rupiah,
    view::{GroupView, group_views},
};
use crate::{config::Config, options::OutputMode};

pub const ROWS_TITLE: &str = "Hasil Agregasi (Filtered)";
pub const GROUPS_TITLE: &str = "Hasil Analisis Agregasi";
pub const CHOICES_TITLE: &str = "Pilihan Filter";

const TRANSACTIONS: &str = "Total Transaksi";
const PAYMENT: &str = "Total Pembayaran";
const METHODS: &str = "Metode Pembayaran";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Columns holding numbers (right-aligned where the format allows).
    pub numeric: Vec<usize>,
}

/// The sheets selected by the output mode, in print order.
///
/// `human` switches totals to Rupiah, missing values to `(none)` and group
/// keys to a single `Field: value | ...` label column.
pub fn sheets(report: &AggregationReport, config: &Config, human: bool) -> Vec<Sheet> {
    if config.output_mode == OutputMode::Choices {
        return vec![choices_sheet(&report.choices)];
    }
    let mut sheets = Vec::with_capacity(2);
    if config.output_mode.shows_rows() {
        sheets.push(rows_sheet(&report.rows, human));
    }
    if config.output_mode.shows_groups() {
        if let Some(summary) = &report.groups {
            sheets.push(groups_sheet(summary, &group_views(summary, config), human));
        }
    }
    sheets
}

pub fn rows_sheet(rows: &[JoinedRow], human: bool) -> Sheet {
    let header = RowField::ALL.iter().map(|f| f.label().to_string()).collect();
    let rows = rows
        .iter()
        .map(|row| {
            RowField::ALL
                .iter()
                .map(|&field| match (field, row.total) {
                    (RowField::Total, Some(total)) if human => rupiah(total),
                    _ => cell(row.value(field), human),
                })
                .collect()
        })
        .collect();
    let total_column = RowField::ALL.iter().position(|f| *f == RowField::Total);
    Sheet { title: ROWS_TITLE.to_string(), header, rows, numeric: total_column.into_iter().collect() }
}

pub fn groups_sheet(summary: &GroupedSummary, views: &[GroupView<'_>], human: bool) -> Sheet {
    let title = format!("{GROUPS_TITLE} ({})", summary.selection());
    let key_columns = if human { 1 } else { summary.selection().len() };

    let mut header: Vec<String> = if human {
        vec!["Group".to_string()]
    } else {
        summary.selection().fields().iter().map(|f| f.label().to_string()).collect()
    };
    header.extend([TRANSACTIONS, PAYMENT, METHODS].map(String::from));

    let rows = views
        .iter()
        .map(|view| {
            let mut cells: Vec<String> = if human {
                vec![view.label.clone()]
            } else {
                view.key.values().map(|v| cell((*v).clone(), false)).collect()
            };
            cells.push(view.transactions.to_string());
            cells.push(if human { rupiah(view.total_payment) } else { view.total_payment.to_string() });
            cells.push(view.histogram());
            cells
        })
        .collect();

    Sheet { title, header, rows, numeric: vec![key_columns, key_columns + 1] }
}

pub fn choices_sheet(choices: &FilterChoices) -> Sheet {
    let names = choices.names.iter().map(|n| (RowField::NamaCustomer, n));
    let services = choices.services.iter().map(|s| (RowField::Pelayanan, s));
    Sheet {
        title: CHOICES_TITLE.to_string(),
        header: vec!["Field".to_string(), "Value".to_string()],
        rows: names.chain(services).map(|(field, value)| vec![field.label().to_string(), value.clone()]).collect(),
        numeric: Vec::new(),
    }
}

fn cell(value: FieldValue, human: bool) -> String {
    if value.is_missing() && !human { String::new() } else { value.to_string() }
}
