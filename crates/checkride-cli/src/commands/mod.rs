//! CLI subcommand implementations.

pub mod catalog;
pub mod report;
pub mod serve;
