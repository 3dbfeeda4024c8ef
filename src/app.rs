use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Result;
use salon_agg_infra::{FileRecordSource, RecordFormat};
use salon_agg_usecase::{AggregationReport, RunAggregation};

use crate::{
    cli::Args,
    config::{self, Config},
    presentation,
};

pub fn run(args: &Args) -> Result<()> {
    let config = config::resolve(args)?;
    let report = execute(&config)?;

    presentation::write_diagnostics(&report, &config, &mut io::stderr().lock())?;

    let mut out = BufWriter::new(io::stdout().lock());
    presentation::render(&report, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Opens both sources and runs the pipeline once.
pub fn execute(config: &Config) -> salon_agg_shared_kernel::Result<AggregationReport> {
    let customers = open_source(&config.customers, config.customers_format)?;
    let appointments = open_source(&config.appointments, config.appointments_format)?;
    RunAggregation::new(&customers, &appointments).run(&config.request())
}

fn open_source(path: &Path, format: Option<RecordFormat>) -> salon_agg_shared_kernel::Result<FileRecordSource> {
    match format {
        Some(format) => Ok(FileRecordSource::with_format(path, format)),
        None => Ok(FileRecordSource::new(path)?),
    }
}
