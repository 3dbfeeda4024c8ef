use std::time::Instant;

use log::{debug, info};
use salon_agg_domain::{
    GroupSelection, filter, group,
    join::{AppointmentIndex, join_with_index},
    options::FilterChoices,
};
use salon_agg_ports::{AppointmentSource, CustomerSource, RawRecord};
use salon_agg_shared_kernel::{ApplicationError, DomainError, Result, SalonAggError};

use crate::{
    decode::Decoder,
    dto::{AggregationReport, AggregationRequest, GroupingRequest, JoinStats, Timings, Warning},
};

/// Runs Load -> Join -> Filter -> Group once, synchronously.
///
/// Every call fetches fresh records and builds its own index and aggregates.
pub struct RunAggregation<'a> {
    customers: &'a dyn CustomerSource,
    appointments: &'a dyn AppointmentSource,
}

impl<'a> RunAggregation<'a> {
    pub fn new(customers: &'a dyn CustomerSource, appointments: &'a dyn AppointmentSource) -> Self {
        Self { customers, appointments }
    }

    pub fn run(&self, request: &AggregationRequest) -> Result<AggregationReport> {
        let mut timings = Timings::default();
        let mut warnings = Vec::new();

        // Reject a malformed selection before touching the stores.
        let selection = match &request.grouping {
            GroupingRequest::None => None,
            GroupingRequest::Fields(fields) => match GroupSelection::new(fields.clone()) {
                Ok(selection) => Some(selection),
                Err(DomainError::EmptyGroupSelection) => {
                    warnings.push(Warning::EmptyGroupSelection);
                    None
                }
                Err(other) => return Err(other.into()),
            },
        };

        let started = Instant::now();
        let raw_customers = load("customer", self.customers.describe(), || self.customers.fetch_customers())?;
        let raw_appointments =
            load("appointment", self.appointments.describe(), || self.appointments.fetch_appointments())?;
        timings.load = started.elapsed();

        if raw_customers.is_empty() {
            warnings.push(Warning::NoCustomers);
        }
        if raw_appointments.is_empty() {
            warnings.push(Warning::NoAppointments);
        }
        info!("loaded {} customers and {} appointments", raw_customers.len(), raw_appointments.len());

        let mut decoder = Decoder::new();
        let customers: Vec<_> = raw_customers.iter().map(|r| decoder.customer(r)).collect();
        let appointments: Vec<_> = raw_appointments.iter().map(|r| decoder.appointment(r)).collect();

        let started = Instant::now();
        let index = AppointmentIndex::build(&appointments);
        let joined = join_with_index(&customers, &index);
        timings.join = started.elapsed();

        let choices = FilterChoices::from_rows(&joined);

        let started = Instant::now();
        let rows = filter(&joined, &request.filter);
        timings.filter = started.elapsed();

        let groups = selection.map(|selection| {
            let started = Instant::now();
            let summary = group(&rows, &selection);
            timings.group = started.elapsed();
            summary
        });

        let join_stats = JoinStats {
            customers: customers.len(),
            appointments: appointments.len(),
            indexed_customers: index.len(),
            overwritten_appointments: index.overwritten(),
            unkeyed_appointments: index.unkeyed(),
            joined_rows: joined.len(),
            filtered_rows: rows.len(),
        };
        debug!("run finished: {join_stats:?} in {timings:?}");

        Ok(AggregationReport {
            rows,
            groups,
            choices,
            join_stats,
            decode_stats: decoder.stats(),
            timings,
            warnings,
        })
    }
}

fn load<F>(kind: &str, origin: String, fetch: F) -> Result<Vec<RawRecord>>
where
    F: FnOnce() -> Result<Vec<RawRecord>>,
{
    fetch().map_err(|e| {
        SalonAggError::from(ApplicationError::SourceFailed {
            source_name: format!("{kind} ({origin})"),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })
    })
}
