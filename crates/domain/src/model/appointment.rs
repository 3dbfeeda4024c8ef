use chrono::NaiveDate;
use salon_agg_shared_kernel::{Amount, CustomerId};
use serde::{Deserialize, Serialize};

/// Appointment record from the wide-column store.
///
/// `total` is `None` when the source value was missing or not numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id_appointment: Option<String>,
    pub id_cust: Option<CustomerId>,
    pub id_pegawai: Option<String>,
    pub pelayanan: Option<String>,
    pub tanggal: Option<NaiveDate>,
    pub total: Option<Amount>,
    pub cara_pembayaran: Option<String>,
}

impl AppointmentRecord {
    pub fn new(id_cust: impl Into<CustomerId>) -> Self {
        Self { id_cust: Some(id_cust.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_service(mut self, pelayanan: impl Into<String>) -> Self {
        self.pelayanan = Some(pelayanan.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, tanggal: NaiveDate) -> Self {
        self.tanggal = Some(tanggal);
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: impl Into<Amount>) -> Self {
        self.total = Some(total.into());
        self
    }

    #[must_use]
    pub fn with_payment(mut self, cara_pembayaran: impl Into<String>) -> Self {
        self.cara_pembayaran = Some(cara_pembayaran.into());
        self
    }
}
