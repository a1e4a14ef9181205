//! Command-line front end over triple files.

pub mod commands;

pub use commands::CliGraph;
