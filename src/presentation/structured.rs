//! JSON, JSON Lines and YAML writers. Totals stay raw numbers.

use std::io::Write;

use salon_agg_domain::{JoinedRow, options::FilterChoices};
use salon_agg_shared_kernel::Result;
use salon_agg_usecase::AggregationReport;
use serde::Serialize;
use serde_json::Value;

use super::view::{GroupView, group_views};
use crate::{config::Config, options::OutputMode};

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Document<'a> {
    Full {
        rows: &'a [JoinedRow],
        #[serde(skip_serializing_if = "Option::is_none")]
        groups: Option<Vec<GroupView<'a>>>,
    },
    Rows(&'a [JoinedRow]),
    Groups(Vec<GroupView<'a>>),
    Choices(&'a FilterChoices),
}

fn document<'a>(report: &'a AggregationReport, config: &Config) -> Document<'a> {
    let groups = || report.groups.as_ref().map(|summary| group_views(summary, config));
    match config.output_mode {
        OutputMode::Full => Document::Full { rows: &report.rows, groups: groups() },
        OutputMode::Rows => Document::Rows(&report.rows),
        OutputMode::Groups => Document::Groups(groups().unwrap_or_default()),
        OutputMode::Choices => Document::Choices(&report.choices),
    }
}

pub fn write_json<W: Write>(report: &AggregationReport, config: &Config, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &document(report, config))?;
    writeln!(out)?;
    Ok(())
}

pub fn write_yaml<W: Write>(report: &AggregationReport, config: &Config, out: &mut W) -> Result<()> {
    serde_yaml::to_writer(&mut *out, &document(report, config))?;
    Ok(())
}

/// One object per line, tagged with `"type"`: `row`, `group`, `name` or
/// `service`.
pub fn write_jsonl<W: Write>(report: &AggregationReport, config: &Config, out: &mut W) -> Result<()> {
    if config.output_mode == OutputMode::Choices {
        for name in &report.choices.names {
            write_line(out, serde_json::json!({ "type": "name", "value": name }))?;
        }
        for service in &report.choices.services {
            write_line(out, serde_json::json!({ "type": "service", "value": service }))?;
        }
        return Ok(());
    }
    if config.output_mode.shows_rows() {
        for row in &report.rows {
            write_line(out, tagged("row", row)?)?;
        }
    }
    if config.output_mode.shows_groups() {
        if let Some(summary) = &report.groups {
            for view in group_views(summary, config) {
                write_line(out, tagged("group", &view)?)?;
            }
        }
    }
    Ok(())
}

fn tagged<T: Serialize>(kind: &str, value: &T) -> Result<Value> {
    let mut value = serde_json::to_value(value)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("type".to_string(), kind.into());
    }
    Ok(value)
}

fn write_line<W: Write>(out: &mut W, value: Value) -> Result<()> {
    serde_json::to_writer(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}
