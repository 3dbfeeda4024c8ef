// src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use salon_agg_domain::{FilterSpec, GroupField, TotalRange, analytics::SortStrategy};
use salon_agg_infra::{RecordFormat, persistence::FileReader};
use salon_agg_shared_kernel::{Amount, ErrorContext, PresentationError, Result};
use salon_agg_usecase::{AggregationRequest, GroupingRequest};
use serde::Deserialize;

use crate::{
    cli::Args,
    options::{OutputFormat, OutputMode},
};

/// Group-by fields used when neither the command line nor a config file
/// chooses any.
pub const DEFAULT_GROUP_FIELDS: [GroupField; 2] = [GroupField::NamaCustomer, GroupField::Pelayanan];

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub customers: PathBuf,
    pub appointments: PathBuf,
    #[builder(default)]
    pub customers_format: Option<RecordFormat>,
    #[builder(default)]
    pub appointments_format: Option<RecordFormat>,

    #[builder(default)]
    pub filter: FilterSpec,
    #[builder(default = "GroupingRequest::Fields(DEFAULT_GROUP_FIELDS.to_vec())")]
    pub grouping: GroupingRequest,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_mode: OutputMode,
    #[builder(default)]
    pub sort_groups: SortStrategy,
    #[builder(default)]
    pub top: Option<usize>,
    #[builder(default)]
    pub timings: bool,
}

impl Config {
    /// The request handed to the aggregation pipeline.
    pub fn request(&self) -> AggregationRequest {
        AggregationRequest { filter: self.filter.clone(), grouping: self.grouping.clone() }
    }
}

/// Settings read from `--config`. Every key is optional and uses the long
/// flag name (`min-total`, `group-by`, ...).
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub customers: Option<PathBuf>,
    pub appointments: Option<PathBuf>,
    pub customers_format: Option<RecordFormat>,
    pub appointments_format: Option<RecordFormat>,
    pub names: Vec<String>,
    pub services: Vec<String>,
    pub min_total: Option<Amount>,
    pub max_total: Option<Amount>,
    pub group_by: Option<Vec<String>>,
    pub no_group: bool,
    pub format: Option<OutputFormat>,
    pub output_mode: Option<OutputMode>,
    pub sort_groups: Option<String>,
    pub top: Option<usize>,
    pub timings: bool,
}

impl FileConfig {
    /// Reads a YAML (`.yaml`, `.yml`) or JSON (`.json`) settings file.
    /// Relative input paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let mut config: Self = match ext.as_deref() {
            Some("yaml" | "yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => {
                return Err(PresentationError::InvalidValue {
                    flag: "--config".to_string(),
                    value: path.display().to_string(),
                    reason: "expected a .yaml, .yml or .json file".to_string(),
                }
                .into());
            }
        };
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.customers, &mut self.appointments].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Resolves the run configuration from parsed arguments and the optional
/// config file they point at.
pub fn resolve(args: &Args) -> Result<Config> {
    let file = match &args.input.config {
        Some(path) => FileConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => FileConfig::default(),
    };
    build_config(args, file)
}

/// Merges `args` over `file`; command-line values win.
pub fn build_config(args: &Args, file: FileConfig) -> Result<Config> {
    let customers = args
        .input
        .customers
        .clone()
        .or(file.customers)
        .ok_or_else(|| PresentationError::MissingInput("--customers".to_string()))?;
    let appointments = args
        .input
        .appointments
        .clone()
        .or(file.appointments)
        .ok_or_else(|| PresentationError::MissingInput("--appointments".to_string()))?;

    let names = prefer_cli(&args.filter.names, file.names);
    let services = prefer_cli(&args.filter.services, file.services);
    let min = args.filter.min_total.map(|a| a.0).or(file.min_total).unwrap_or_else(Amount::zero);
    let max = args.filter.max_total.map(|a| a.0).or(file.max_total);
    let filter = FilterSpec::default()
        .with_names(names)
        .with_services(services)
        .with_range(TotalRange::new(Some(min), max)?);

    let grouping = resolve_grouping(args, file.no_group, file.group_by)?;

    let sort_groups = match (&args.output.sort_groups, file.sort_groups) {
        (Some(cli), _) => cli.clone(),
        (None, Some(spec)) => spec.parse::<SortStrategy>()?,
        (None, None) => SortStrategy::default(),
    };

    let top = args.output.top.or(file.top);
    if top == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: "top".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }

    ConfigBuilder::default()
        .customers(customers)
        .appointments(appointments)
        .customers_format(args.input.customers_format.or(file.customers_format))
        .appointments_format(args.input.appointments_format.or(file.appointments_format))
        .filter(filter)
        .grouping(grouping)
        .format(args.output.format.or(file.format).unwrap_or_default())
        .output_mode(args.output.output_mode.or(file.output_mode).unwrap_or_default())
        .sort_groups(sort_groups)
        .top(top)
        .timings(args.output.timings || file.timings)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}

fn prefer_cli(cli: &[String], file: Vec<String>) -> Vec<String> {
    let values = if cli.is_empty() { file } else { cli.to_vec() };
    values.into_iter().map(|v| v.trim().to_string()).filter(|v| !v.is_empty()).collect()
}

fn resolve_grouping(args: &Args, file_no_group: bool, file_fields: Option<Vec<String>>) -> Result<GroupingRequest> {
    if args.grouping.no_group {
        return Ok(GroupingRequest::None);
    }
    if let Some(list) = &args.grouping.group_by {
        return Ok(GroupingRequest::Fields(list.0.clone()));
    }
    if file_no_group {
        return Ok(GroupingRequest::None);
    }
    match file_fields {
        Some(fields) => {
            let fields = fields
                .iter()
                .map(|f| f.parse::<GroupField>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(GroupingRequest::Fields(fields))
        }
        None => Ok(GroupingRequest::Fields(DEFAULT_GROUP_FIELDS.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use salon_agg_domain::analytics::{GroupSortKey, SortSpec};
    use salon_agg_shared_kernel::{DomainError, SalonAggError};

    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["salon-agg", "--customers", "c.json", "--appointments", "a.csv"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_follow_the_interactive_tool() {
        let config = build_config(&args(&[]), FileConfig::default()).expect("config builds");

        assert_eq!(config.filter.total_range, TotalRange::default());
        assert!(config.filter.names.is_empty());
        assert_eq!(config.grouping, GroupingRequest::Fields(DEFAULT_GROUP_FIELDS.to_vec()));
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.output_mode, OutputMode::Full);
        assert!(config.sort_groups.is_empty());
        assert!(!config.timings);
    }

    #[test]
    fn filters_and_grouping_from_flags() {
        let config = build_config(
            &args(&[
                "--name", "Ana, Budi", "--service", "Haircut", "--min-total", "40000", "--max-total", "80,000",
                "--group-by", "pelayanan,payment",
            ]),
            FileConfig::default(),
        )
        .unwrap();

        assert_eq!(config.filter.names.len(), 2);
        assert!(config.filter.names.contains("Budi"));
        assert_eq!(config.filter.total_range.min, Some(Amount::from(40_000)));
        assert_eq!(config.filter.total_range.max, Some(Amount::from(80_000)));
        assert_eq!(
            config.grouping,
            GroupingRequest::Fields(vec![GroupField::Pelayanan, GroupField::MetodePembayaran])
        );
    }

    #[test]
    fn empty_group_by_is_passed_through_for_the_warning() {
        let config = build_config(&args(&["--group-by", ""]), FileConfig::default()).unwrap();
        assert_eq!(config.grouping, GroupingRequest::Fields(vec![]));

        let config = build_config(&args(&["--no-group"]), FileConfig::default()).unwrap();
        assert_eq!(config.grouping, GroupingRequest::None);
    }

    #[test]
    fn missing_inputs_are_reported_by_flag() {
        let args = Args::parse_from(["salon-agg", "--customers", "c.json"]);
        let err = build_config(&args, FileConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SalonAggError::Presentation(PresentationError::MissingInput(ref flag)) if flag == "--appointments"
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = build_config(&args(&["--min-total", "90000", "--max-total", "10000"]), FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, SalonAggError::Domain(DomainError::InvalidRange { .. })));
    }

    #[test]
    fn file_values_apply_unless_overridden() {
        let file = FileConfig {
            names: vec!["Citra".into()],
            min_total: Some(Amount::from(10_000)),
            group_by: Some(vec!["Tanggal".into()]),
            format: Some(OutputFormat::Json),
            sort_groups: Some("total:desc".into()),
            top: Some(3),
            ..FileConfig::default()
        };

        let config = build_config(&args(&["--format", "csv"]), file).unwrap();

        assert!(config.filter.names.contains("Citra"));
        assert_eq!(config.filter.total_range.min, Some(Amount::from(10_000)));
        assert_eq!(config.grouping, GroupingRequest::Fields(vec![GroupField::Tanggal]));
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.sort_groups.specs(), &[SortSpec::descending(GroupSortKey::Total)]);
        assert_eq!(config.top, Some(3));
    }

    #[test]
    fn yaml_file_is_loaded_with_paths_relative_to_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salon.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "customers: data/customers.json\nappointments: /srv/appointments.csv\nmin-total: 25000\nno-group: true\noutput-mode: rows"
        )
        .unwrap();

        let loaded = FileConfig::load(&path).unwrap();

        assert_eq!(loaded.customers, Some(dir.path().join("data/customers.json")));
        assert_eq!(loaded.appointments, Some(PathBuf::from("/srv/appointments.csv")));
        assert_eq!(loaded.min_total, Some(Amount::from(25_000)));
        assert!(loaded.no_group);
        assert_eq!(loaded.output_mode, Some(OutputMode::Rows));
    }

    #[test]
    fn unknown_keys_and_extensions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("salon.json");
        std::fs::write(&json, r#"{"colour": "blue"}"#).unwrap();
        assert!(FileConfig::load(&json).is_err());

        let toml = dir.path().join("salon.toml");
        std::fs::write(&toml, "").unwrap();
        let err = FileConfig::load(&toml).unwrap_err();
        assert!(matches!(err, SalonAggError::Presentation(PresentationError::InvalidValue { .. })));
    }
}
