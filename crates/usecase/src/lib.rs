//! # Use Cases
//!
//! Application-level orchestration of one aggregation request.
//!
//! - [`decode`]: validation of raw store records into typed domain records
//! - [`dto`]: request and report types at the use case boundary
//! - [`orchestrator`]: the Load -> Join -> Filter -> Group pipeline
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod decode;
pub mod dto;
pub mod orchestrator;

pub use dto::{AggregationReport, AggregationRequest, GroupingRequest, Warning};
pub use orchestrator::RunAggregation;
