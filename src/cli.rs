mod args;
pub mod parsers;

pub use args::{Args, FilterOptions, GroupOptions, InputOptions, OutputOptions};
