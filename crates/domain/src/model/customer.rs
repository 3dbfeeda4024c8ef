use salon_agg_shared_kernel::CustomerId;
use serde::{Deserialize, Serialize};

/// Customer record from the document store, validated at the loader boundary.
///
/// Every field is optional: a record missing `id_cust` simply never joins, and
/// missing display fields stay absent on the joined row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id_cust: Option<CustomerId>,
    pub nama_cust: Option<String>,
    pub nama_pegawai: Option<String>,
}

impl CustomerRecord {
    pub fn new(id_cust: impl Into<CustomerId>) -> Self {
        Self { id_cust: Some(id_cust.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_name(mut self, nama_cust: impl Into<String>) -> Self {
        self.nama_cust = Some(nama_cust.into());
        self
    }

    #[must_use]
    pub fn with_employee(mut self, nama_pegawai: impl Into<String>) -> Self {
        self.nama_pegawai = Some(nama_pegawai.into());
        self
    }
}
