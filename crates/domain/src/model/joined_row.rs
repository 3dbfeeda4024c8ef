use chrono::NaiveDate;
use salon_agg_shared_kernel::{Amount, CustomerId};
use serde::{Deserialize, Serialize};

use super::{AppointmentRecord, CustomerRecord, FieldValue, RowField};

/// One customer combined with its indexed appointment.
///
/// Field names serialize with their display labels (`"Nama Customer"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    #[serde(rename = "ID Customer")]
    pub id_customer: CustomerId,
    #[serde(rename = "Nama Customer")]
    pub nama_customer: Option<String>,
    #[serde(rename = "Nama Pegawai")]
    pub nama_pegawai: Option<String>,
    #[serde(rename = "Pelayanan")]
    pub pelayanan: Option<String>,
    #[serde(rename = "Tanggal")]
    pub tanggal: Option<NaiveDate>,
    #[serde(rename = "Total")]
    pub total: Option<Amount>,
    #[serde(rename = "Metode Pembayaran")]
    pub metode_pembayaran: Option<String>,
}

impl JoinedRow {
    /// Display fields come from the customer, transaction fields from the
    /// appointment.
    pub fn combine(id: CustomerId, customer: &CustomerRecord, appointment: &AppointmentRecord) -> Self {
        Self {
            id_customer: id,
            nama_customer: customer.nama_cust.clone(),
            nama_pegawai: customer.nama_pegawai.clone(),
            pelayanan: appointment.pelayanan.clone(),
            tanggal: appointment.tanggal,
            total: appointment.total,
            metode_pembayaran: appointment.cara_pembayaran.clone(),
        }
    }

    /// Categorical value of `field`. `Total` is numeric and is exposed through
    /// [`JoinedRow::total`] instead; here it is rendered as text.
    pub fn value(&self, field: RowField) -> FieldValue {
        match field {
            RowField::IdCustomer => FieldValue::Text(self.id_customer.to_string()),
            RowField::NamaCustomer => FieldValue::text(self.nama_customer.as_deref()),
            RowField::NamaPegawai => FieldValue::text(self.nama_pegawai.as_deref()),
            RowField::Pelayanan => FieldValue::text(self.pelayanan.as_deref()),
            RowField::Tanggal => FieldValue::date(self.tanggal),
            RowField::Total => self.total.map_or(FieldValue::Missing, |t| FieldValue::Text(t.to_string())),
            RowField::MetodePembayaran => FieldValue::text(self.metode_pembayaran.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_takes_display_fields_from_customer() {
        let customer = CustomerRecord::new("C1").with_name("Ana").with_employee("Dewi");
        let appointment = AppointmentRecord::new("C1")
            .with_service("Haircut")
            .with_total(50_000)
            .with_payment("Cash");

        let row = JoinedRow::combine(CustomerId::from("C1"), &customer, &appointment);

        assert_eq!(row.nama_customer.as_deref(), Some("Ana"));
        assert_eq!(row.nama_pegawai.as_deref(), Some("Dewi"));
        assert_eq!(row.pelayanan.as_deref(), Some("Haircut"));
        assert_eq!(row.total, Some(Amount::from(50_000)));
        assert_eq!(row.value(RowField::MetodePembayaran), FieldValue::Text("Cash".into()));
        assert_eq!(row.value(RowField::Tanggal), FieldValue::Missing);
    }

    #[test]
    fn serializes_with_display_labels() {
        let row = JoinedRow::combine(
            CustomerId::from("C1"),
            &CustomerRecord::new("C1").with_name("Ana"),
            &AppointmentRecord::new("C1").with_total(50_000),
        );
        let json = serde_json::to_value(&row).expect("serializes");
        assert_eq!(json["ID Customer"], "C1");
        assert_eq!(json["Nama Customer"], "Ana");
        assert_eq!(json["Total"], 50_000.0);
        assert!(json["Metode Pembayaran"].is_null());
    }
}
