//! CSV, TSV and Markdown writers.

use std::io::Write;

use salon_agg_shared_kernel::Result;
use salon_agg_usecase::AggregationReport;

use super::sheet::{Sheet, sheets};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Csv,
    Tsv,
    Markdown,
}

impl Style {
    const fn is_human(self) -> bool {
        matches!(self, Self::Markdown)
    }
}

/// Sheets are separated by one blank line. Markdown sheets get a `###` title.
pub fn write<W: Write>(report: &AggregationReport, config: &Config, out: &mut W, style: Style) -> Result<()> {
    for (i, sheet) in sheets(report, config, style.is_human()).iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        match style {
            Style::Csv => write_separated(sheet, out, ",", escape_csv)?,
            Style::Tsv => write_separated(sheet, out, "\t", escape_tsv)?,
            Style::Markdown => write_markdown(sheet, out)?,
        }
    }
    Ok(())
}

fn write_separated<W: Write>(sheet: &Sheet, out: &mut W, delimiter: &str, escape: fn(&str) -> String) -> Result<()> {
    writeln!(out, "{}", separated(&sheet.header, delimiter, escape))?;
    for row in &sheet.rows {
        writeln!(out, "{}", separated(row, delimiter, escape))?;
    }
    Ok(())
}

fn separated(cells: &[String], delimiter: &str, escape: fn(&str) -> String) -> String {
    cells.iter().map(|c| escape(c)).collect::<Vec<_>>().join(delimiter)
}

fn write_markdown<W: Write>(sheet: &Sheet, out: &mut W) -> Result<()> {
    writeln!(out, "### {}", sheet.title)?;
    writeln!(out)?;
    writeln!(out, "{}", markdown_row(&sheet.header))?;
    let separator: Vec<&str> = (0..sheet.header.len())
        .map(|i| if sheet.numeric.contains(&i) { "---:" } else { ":---" })
        .collect();
    writeln!(out, "|{}|", separator.join("|"))?;
    for row in &sheet.rows {
        writeln!(out, "{}", markdown_row(row))?;
    }
    Ok(())
}

fn markdown_row(cells: &[String]) -> String {
    let cells: Vec<_> = cells.iter().map(|c| escape_markdown(c)).collect();
    format!("| {} |", cells.join(" | "))
}

fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn escape_tsv(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}

fn escape_markdown(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', "<br>")
}
