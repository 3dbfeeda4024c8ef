use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

impl OutputFormat {
    /// Formats meant for people; totals are rendered as Rupiah.
    pub const fn is_human(self) -> bool {
        matches!(self, Self::Table | Self::Md)
    }
}

/// Which parts of a run are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Filtered rows followed by the group analysis.
    #[default]
    Full,
    /// Filtered rows only.
    Rows,
    /// Group analysis only.
    Groups,
    /// Selectable customer names and services.
    Choices,
}

impl OutputMode {
    pub const fn shows_rows(self) -> bool {
        matches!(self, Self::Full | Self::Rows)
    }

    pub const fn shows_groups(self) -> bool {
        matches!(self, Self::Full | Self::Groups)
    }
}
