// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};
use salon_agg_domain::analytics::SortStrategy;
use salon_agg_infra::RecordFormat;

use super::parsers::{self, AmountArg, GroupFieldList};
use crate::options::{OutputFormat, OutputMode};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "salon-agg",
    version = crate::VERSION,
    about = "Join customers with appointments, filter the result and analyse it by group"
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub grouping: GroupOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Where records come from.
#[derive(ClapArgs, Debug, Default)]
pub struct InputOptions {
    /// Customer export (.json, .jsonl, .csv)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub customers: Option<PathBuf>,

    /// Appointment export (.json, .jsonl, .csv)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub appointments: Option<PathBuf>,

    /// Override format detection for the customer file (json, jsonl, csv)
    #[arg(long, help_heading = "Input")]
    pub customers_format: Option<RecordFormat>,

    /// Override format detection for the appointment file (json, jsonl, csv)
    #[arg(long, help_heading = "Input")]
    pub appointments_format: Option<RecordFormat>,

    /// YAML or JSON file with default settings; command-line values win
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub config: Option<PathBuf>,
}

/// Row filters. Categories combine with AND, values within one with OR.
#[derive(ClapArgs, Debug, Default)]
pub struct FilterOptions {
    /// Keep only these customer names (comma-separated, repeatable)
    #[arg(long = "name", value_delimiter = ',', help_heading = "Filters")]
    pub names: Vec<String>,

    /// Keep only these services (comma-separated, repeatable)
    #[arg(long = "service", value_delimiter = ',', help_heading = "Filters")]
    pub services: Vec<String>,

    /// Lowest total to keep, inclusive [default: 0]
    #[arg(long, help_heading = "Filters")]
    pub min_total: Option<AmountArg>,

    /// Highest total to keep, inclusive [default: unbounded]
    #[arg(long, help_heading = "Filters")]
    pub max_total: Option<AmountArg>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GroupOptions {
    /// Group-by fields in order, e.g. "Nama Customer,Pelayanan" [default: Nama Customer,Pelayanan]
    #[arg(long, conflicts_with = "no_group", help_heading = "Group by")]
    pub group_by: Option<GroupFieldList>,

    /// Skip the group analysis
    #[arg(long, help_heading = "Group by")]
    pub no_group: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct OutputOptions {
    /// Output format [default: table]
    #[arg(long, value_enum, help_heading = "Output")]
    pub format: Option<OutputFormat>,

    /// What to print [default: full]
    #[arg(long, value_enum, help_heading = "Output")]
    pub output_mode: Option<OutputMode>,

    /// Group ordering, e.g. total:desc,key (count, total, key). Default keeps first-seen order.
    #[arg(long, help_heading = "Output")]
    pub sort_groups: Option<SortStrategy>,

    /// Show only the first N groups
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Output")]
    pub top: Option<usize>,

    /// Print join statistics and stage timings to stderr
    #[arg(long, help_heading = "Output")]
    pub timings: bool,
}
