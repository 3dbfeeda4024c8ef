//! Index-then-probe inner join of customers with appointments.

use std::collections::HashMap;

use log::{debug, warn};
use salon_agg_shared_kernel::CustomerId;

use crate::model::{AppointmentRecord, CustomerRecord, JoinedRow};

/// Lookup of appointments by `id_cust`.
///
/// Duplicate keys follow a last-write-wins policy: when the source sequence
/// holds several appointments for one customer, only the one seen last is
/// kept. Overwrites are counted so callers can report them.
#[derive(Debug, Default)]
pub struct AppointmentIndex<'a> {
    by_customer: HashMap<&'a str, &'a AppointmentRecord>,
    overwritten: usize,
    unkeyed: usize,
}

impl<'a> AppointmentIndex<'a> {
    /// Builds the index in a single pass over `appointments`, in order.
    pub fn build(appointments: &'a [AppointmentRecord]) -> Self {
        let mut index = Self { by_customer: HashMap::with_capacity(appointments.len()), ..Self::default() };
        for appointment in appointments {
            index.insert_last_wins(appointment);
        }
        index
    }

    /// Inserts `appointment`, replacing any earlier appointment for the same
    /// customer. Appointments without a join key are skipped.
    pub fn insert_last_wins(&mut self, appointment: &'a AppointmentRecord) {
        let Some(id) = appointment.id_cust.as_ref() else {
            self.unkeyed += 1;
            warn!(
                "appointment {} has no id_cust; not indexed",
                appointment.id_appointment.as_deref().unwrap_or("<unnamed>")
            );
            return;
        };
        if self.by_customer.insert(id.as_str(), appointment).is_some() {
            self.overwritten += 1;
            debug!("appointment for customer {id} replaced by a later record");
        }
    }

    pub fn get(&self, id: &CustomerId) -> Option<&'a AppointmentRecord> {
        self.by_customer.get(id.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_customer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_customer.is_empty()
    }

    /// Number of inserts that replaced an existing key.
    pub const fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Number of appointments skipped for lack of `id_cust`.
    pub const fn unkeyed(&self) -> usize {
        self.unkeyed
    }
}

/// Joins `customers` with an already built `index`.
///
/// Output order follows `customers`; customers without a key or without a
/// matching appointment produce no row.
pub fn join_with_index(customers: &[CustomerRecord], index: &AppointmentIndex<'_>) -> Vec<JoinedRow> {
    customers
        .iter()
        .filter_map(|customer| {
            let id = customer.id_cust.as_ref()?;
            let appointment = index.get(id)?;
            Some(JoinedRow::combine(id.clone(), customer, appointment))
        })
        .collect()
}

/// Inner join of `customers` with `appointments` on `id_cust`.
pub fn join(customers: &[CustomerRecord], appointments: &[AppointmentRecord]) -> Vec<JoinedRow> {
    let index = AppointmentIndex::build(appointments);
    let rows = join_with_index(customers, &index);
    debug!(
        "joined {} customers with {} indexed appointments into {} rows",
        customers.len(),
        index.len(),
        rows.len()
    );
    rows
}
