use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Named columns of a [`JoinedRow`](super::JoinedRow), in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowField {
    #[serde(rename = "ID Customer")]
    IdCustomer,
    #[serde(rename = "Nama Customer")]
    NamaCustomer,
    #[serde(rename = "Nama Pegawai")]
    NamaPegawai,
    #[serde(rename = "Pelayanan")]
    Pelayanan,
    #[serde(rename = "Tanggal")]
    Tanggal,
    #[serde(rename = "Total")]
    Total,
    #[serde(rename = "Metode Pembayaran")]
    MetodePembayaran,
}

impl RowField {
    pub const ALL: [Self; 7] = [
        Self::IdCustomer,
        Self::NamaCustomer,
        Self::NamaPegawai,
        Self::Pelayanan,
        Self::Tanggal,
        Self::Total,
        Self::MetodePembayaran,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::IdCustomer => "ID Customer",
            Self::NamaCustomer => "Nama Customer",
            Self::NamaPegawai => "Nama Pegawai",
            Self::Pelayanan => "Pelayanan",
            Self::Tanggal => "Tanggal",
            Self::Total => "Total",
            Self::MetodePembayaran => "Metode Pembayaran",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical value of a joined-row field, as used in group keys.
///
/// `Missing` orders first and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Missing,
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub const MISSING_LABEL: &'static str = "(none)";

    pub fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, |s| Self::Text(s.to_string()))
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Missing, Self::Date)
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str(Self::MISSING_LABEL),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
