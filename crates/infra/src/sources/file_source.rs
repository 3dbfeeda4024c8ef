// crates/infra/src/sources/file_source.rs
use std::path::{Path, PathBuf};

use log::{debug, info};
use salon_agg_ports::{AppointmentSource, CustomerSource, RawRecord};
use salon_agg_shared_kernel::{ErrorContext, InfraResult, Result};

use super::{RecordFormat, delimited, json};
use crate::persistence::FileReader;

/// A record store backed by one local file (a database export).
///
/// The file is read afresh on every fetch.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
    format: RecordFormat,
}

impl FileRecordSource {
    /// Opens `path`, detecting the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> InfraResult<Self> {
        let path = path.into();
        let format = RecordFormat::detect(&path)?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn format(&self) -> RecordFormat {
        self.format
    }

    pub fn read_records(&self) -> InfraResult<Vec<RawRecord>> {
        let text = FileReader::read_to_string(&self.path)?;
        debug!("read {} bytes from {}", text.len(), self.path.display());
        let records = match self.format {
            RecordFormat::Json => json::parse_array(&text, &self.path)?,
            RecordFormat::Jsonl => json::parse_lines(&text, &self.path)?,
            RecordFormat::Csv => delimited::parse(&text, &self.path)?,
        };
        info!("{} {} records from {}", records.len(), self.format, self.path.display());
        Ok(records)
    }

    fn fetch(&self) -> Result<Vec<RawRecord>> {
        self.read_records().with_context(|| format!("reading {}", self.path.display()))
    }
}

impl CustomerSource for FileRecordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_customers(&self) -> Result<Vec<RawRecord>> {
        self.fetch()
    }
}

impl AppointmentSource for FileRecordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_appointments(&self) -> Result<Vec<RawRecord>> {
        self.fetch()
    }
}
