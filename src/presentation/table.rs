use std::io::Write;

use comfy_table::{CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use salon_agg_shared_kernel::Result;
use salon_agg_usecase::AggregationReport;

use super::sheet::{Sheet, sheets};
use crate::config::Config;

pub fn write<W: Write>(report: &AggregationReport, config: &Config, out: &mut W) -> Result<()> {
    let stats = &report.join_stats;
    writeln!(
        out,
        "salon-agg v{} · customers={} · appointments={} · joined={}",
        crate::VERSION,
        stats.customers,
        stats.appointments,
        stats.joined_rows
    )?;

    for sheet in sheets(report, config, true) {
        writeln!(out)?;
        writeln!(out, "{}", sheet.title)?;
        writeln!(out, "{}", render(&sheet))?;
    }

    writeln!(out)?;
    match &report.groups {
        Some(groups) => writeln!(
            out,
            "[salon-agg] {} rows matched the filters, {} groups.",
            stats.filtered_rows,
            groups.len()
        )?,
        None => writeln!(out, "[salon-agg] {} rows matched the filters.", stats.filtered_rows)?,
    }
    Ok(())
}

fn render(sheet: &Sheet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(sheet.header.clone());
    for row in &sheet.rows {
        table.add_row(row.clone());
    }
    for &index in &sheet.numeric {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_cells_and_alignment() {
        let sheet = Sheet {
            title: "t".into(),
            header: vec!["Name".into(), "Total".into()],
            rows: vec![vec!["Ana".into(), "Rp50,000".into()]],
            numeric: vec![1],
        };
        let text = render(&sheet).to_string();
        assert!(text.contains("Name"));
        assert!(text.contains("Rp50,000"));
        assert_eq!(text.lines().count(), 5);
    }
}
