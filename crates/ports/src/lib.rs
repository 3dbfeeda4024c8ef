// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for the record stores feeding the aggregation.
//!
//! - [`record_source`]: customer and appointment sources handing out raw
//!   `field -> scalar` records
//!
//! Sources are explicit handles passed into each run; nothing here holds a
//! global connection.

#![allow(clippy::multiple_crate_versions)]

pub mod record_source;

pub use record_source::{AppointmentSource, CustomerSource, RawRecord};
