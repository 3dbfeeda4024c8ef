use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::JoinedRow;

/// Selectable filter values: the distinct customer names and services of the
/// joined rows, sorted. Rows missing a value contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterChoices {
    pub names: Vec<String>,
    pub services: Vec<String>,
}

impl FilterChoices {
    pub fn from_rows(rows: &[JoinedRow]) -> Self {
        let names: BTreeSet<&str> = rows.iter().filter_map(|r| r.nama_customer.as_deref()).collect();
        let services: BTreeSet<&str> = rows.iter().filter_map(|r| r.pelayanan.as_deref()).collect();
        Self {
            names: names.into_iter().map(str::to_string).collect(),
            services: services.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use salon_agg_shared_kernel::CustomerId;

    use super::*;

    fn row(name: Option<&str>, service: Option<&str>) -> JoinedRow {
        JoinedRow {
            id_customer: CustomerId::from("C"),
            nama_customer: name.map(str::to_string),
            nama_pegawai: None,
            pelayanan: service.map(str::to_string),
            tanggal: None,
            total: None,
            metode_pembayaran: None,
        }
    }

    #[test]
    fn distinct_sorted_and_skips_missing() {
        let rows = vec![
            row(Some("Citra"), Some("Haircut")),
            row(Some("Ana"), None),
            row(None, Some("Facial")),
            row(Some("Citra"), Some("Haircut")),
        ];
        let choices = FilterChoices::from_rows(&rows);
        assert_eq!(choices.names, vec!["Ana", "Citra"]);
        assert_eq!(choices.services, vec!["Facial", "Haircut"]);
    }
}
