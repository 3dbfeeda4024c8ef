use std::{fmt, str::FromStr};

use salon_agg_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

use crate::model::RowField;

/// Joined-row columns that may key a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupField {
    #[serde(rename = "Nama Customer")]
    NamaCustomer,
    #[serde(rename = "Pelayanan")]
    Pelayanan,
    #[serde(rename = "Metode Pembayaran")]
    MetodePembayaran,
    #[serde(rename = "Nama Pegawai")]
    NamaPegawai,
    #[serde(rename = "Tanggal")]
    Tanggal,
}

impl GroupField {
    pub const ALL: [Self; 5] =
        [Self::NamaCustomer, Self::Pelayanan, Self::MetodePembayaran, Self::NamaPegawai, Self::Tanggal];

    pub const fn row_field(self) -> RowField {
        match self {
            Self::NamaCustomer => RowField::NamaCustomer,
            Self::Pelayanan => RowField::Pelayanan,
            Self::MetodePembayaran => RowField::MetodePembayaran,
            Self::NamaPegawai => RowField::NamaPegawai,
            Self::Tanggal => RowField::Tanggal,
        }
    }

    pub const fn label(self) -> &'static str {
        self.row_field().label()
    }

    fn expected() -> String {
        Self::ALL.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label, the source column name, or a short alias,
/// case-insensitively (`"Nama Customer"`, `nama_cust`, `customer`).
impl FromStr for GroupField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "nama_customer" | "nama_cust" | "customer" | "name" => Ok(Self::NamaCustomer),
            "pelayanan" | "service" => Ok(Self::Pelayanan),
            "metode_pembayaran" | "cara_pembayaran" | "payment" | "method" => Ok(Self::MetodePembayaran),
            "nama_pegawai" | "pegawai" | "employee" => Ok(Self::NamaPegawai),
            "tanggal" | "date" => Ok(Self::Tanggal),
            _ => Err(DomainError::UnknownGroupField { field: s.trim().to_string(), expected: Self::expected() }),
        }
    }
}
