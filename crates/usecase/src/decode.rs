//! Loader-boundary validation of raw records.
//!
//! Decoding never fails: a field that is missing or of the wrong shape is left
//! absent on the typed record and counted in [`DecodeStats`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;
use salon_agg_domain::{AppointmentRecord, CustomerRecord};
use salon_agg_ports::RawRecord;
use salon_agg_shared_kernel::{Amount, CustomerId, ScalarValue};
use serde::Serialize;

/// Per-run tally of values that could not be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    pub customers_without_id: usize,
    pub appointments_without_id: usize,
    pub non_numeric_totals: usize,
    pub unparsable_dates: usize,
}

#[derive(Debug, Default)]
pub struct Decoder {
    stats: DecodeStats,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn stats(&self) -> DecodeStats {
        self.stats
    }

    pub fn customer(&mut self, raw: &RawRecord) -> CustomerRecord {
        let record = CustomerRecord {
            id_cust: customer_id(raw),
            nama_cust: text(raw, "nama_cust"),
            nama_pegawai: text(raw, "nama_pegawai"),
        };
        if record.id_cust.is_none() {
            self.stats.customers_without_id += 1;
        }
        record
    }

    pub fn appointment(&mut self, raw: &RawRecord) -> AppointmentRecord {
        let record = AppointmentRecord {
            id_appointment: text(raw, "id_appointment"),
            id_cust: customer_id(raw),
            id_pegawai: text(raw, "id_pegawai"),
            pelayanan: text(raw, "pelayanan"),
            tanggal: self.tanggal(raw),
            total: self.total(raw),
            cara_pembayaran: text(raw, "cara_pembayaran"),
        };
        if record.id_cust.is_none() {
            self.stats.appointments_without_id += 1;
        }
        record
    }

    fn total(&mut self, raw: &RawRecord) -> Option<Amount> {
        let value = raw.get("total")?;
        let amount = value.to_number().and_then(Amount::finite);
        if amount.is_none() {
            self.stats.non_numeric_totals += 1;
            warn!("non-numeric total {value:?} ignored");
        }
        amount
    }

    fn tanggal(&mut self, raw: &RawRecord) -> Option<NaiveDate> {
        let value = raw.get("tanggal")?;
        let date = match value {
            ScalarValue::Text(s) => parse_date(s),
            _ => None,
        };
        if date.is_none() {
            self.stats.unparsable_dates += 1;
            warn!("unparsable tanggal {value:?} ignored");
        }
        date
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 and `YYYY-MM-DD[T ]HH:MM:SS`; only the
/// date part is kept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok().map(|dt| dt.date()))
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok().map(|dt| dt.date()))
}

fn text(raw: &RawRecord, field: &str) -> Option<String> {
    raw.get(field)
        .and_then(ScalarValue::to_text)
        .filter(|s| !s.trim().is_empty())
}

fn customer_id(raw: &RawRecord) -> Option<CustomerId> {
    text(raw, "id_cust").map(|s| CustomerId::new(s.trim()))
}
