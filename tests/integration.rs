//! End-to-end tests of the `salon-agg` binary.

mod common;

#[path = "integration/config_file.rs"]
mod config_file;
#[path = "integration/end_to_end.rs"]
mod end_to_end;
#[path = "integration/output_formats.rs"]
mod output_formats;
