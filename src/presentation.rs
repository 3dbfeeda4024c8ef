// src/presentation.rs
//! Rendering of an [`AggregationReport`] in the selected format.
//!
//! Results go to the given writer (stdout in the binary); warnings and
//! timings go to a separate diagnostics writer so machine formats stay
//! parseable.

mod delimited;
mod rupiah;
mod sheet;
mod structured;
mod table;
mod view;

use std::io::Write;

pub use rupiah::rupiah;
use salon_agg_shared_kernel::Result;
use salon_agg_usecase::AggregationReport;
pub use view::{GroupView, group_views};

use crate::{config::Config, options::OutputFormat};

pub fn render<W: Write>(report: &AggregationReport, config: &Config, out: &mut W) -> Result<()> {
    match config.format {
        OutputFormat::Table => table::write(report, config, out),
        OutputFormat::Csv => delimited::write(report, config, out, delimited::Style::Csv),
        OutputFormat::Tsv => delimited::write(report, config, out, delimited::Style::Tsv),
        OutputFormat::Md => delimited::write(report, config, out, delimited::Style::Markdown),
        OutputFormat::Json => structured::write_json(report, config, out),
        OutputFormat::Jsonl => structured::write_jsonl(report, config, out),
        OutputFormat::Yaml => structured::write_yaml(report, config, out),
    }
}

/// Warnings always; join statistics and stage timings with `--timings`.
pub fn write_diagnostics<W: Write>(report: &AggregationReport, config: &Config, err: &mut W) -> Result<()> {
    for warning in &report.warnings {
        writeln!(err, "Warning: {warning}")?;
    }
    if !config.timings {
        return Ok(());
    }

    let stats = &report.join_stats;
    writeln!(
        err,
        "join: {} customers x {} appointments ({} keys indexed, {} overwritten, {} without id_cust) -> {} rows, {} after filtering",
        stats.customers,
        stats.appointments,
        stats.indexed_customers,
        stats.overwritten_appointments,
        stats.unkeyed_appointments,
        stats.joined_rows,
        stats.filtered_rows
    )?;
    let decode = &report.decode_stats;
    if decode.non_numeric_totals + decode.unparsable_dates + decode.customers_without_id > 0 {
        writeln!(
            err,
            "decode: {} customers without id_cust, {} non-numeric totals, {} unparsable dates",
            decode.customers_without_id, decode.non_numeric_totals, decode.unparsable_dates
        )?;
    }
    let t = &report.timings;
    writeln!(
        err,
        "timings: load {:.2?}, join {:.2?}, filter {:.2?}, group {:.2?}",
        t.load, t.join, t.filter, t.group
    )?;
    Ok(())
}
