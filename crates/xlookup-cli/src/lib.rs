//! Command-line host for the `xlookup` engine.
//!
//! Converts JSON or YAML arguments into engine inputs, runs one lookup, and
//! prints the outcome using spreadsheet display conventions. All matching
//! logic lives in the `xlookup` crate.

pub mod cli;
pub mod output;
pub mod request;

pub use cli::{run, Cli, Command};
pub use output::{Outcome, OutputMode, Status};
pub use request::{LookupRequest, ModeValue, Prepared, RequestFormat};
