//! Command-line arguments and command execution.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::Value as JsonValue;

use crate::output::{render_modes, render_outcome, Outcome, OutputMode};
use crate::request::{LookupRequest, ModeValue, Prepared};

/// Look up a key in a list and return the paired value
#[derive(Debug, Parser)]
#[command(name = "xlookup", version)]
#[command(long_about = "Look up a key in a list and return the paired value.\n\n\
    Values are given as JSON: numbers, strings, null for an empty cell,\n\
    arrays for rows or columns, and arrays of arrays for grids.\n\n\
    Prints the matching value, #N/A when nothing matches, or #VALUE!\n\
    when the arguments are invalid.")]
pub struct Cli {
    /// Report normalized modes and sequence lengths on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a lookup given on the command line
    Eval(EvalArgs),

    /// Evaluate a request document (JSON or YAML, `-` for stdin)
    Run(RunArgs),

    /// List match and search modes
    Modes,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// The value to search for
    #[arg(long, value_parser = parse_json, allow_hyphen_values = true)]
    pub key: JsonValue,

    /// The array or range to search
    #[arg(long, value_parser = parse_json, allow_hyphen_values = true)]
    pub lookup: JsonValue,

    /// The array or range to return from
    #[arg(long, value_parser = parse_json, allow_hyphen_values = true)]
    pub result: JsonValue,

    /// The value to return if not found
    #[arg(long, value_parser = parse_json, allow_hyphen_values = true)]
    pub if_not_found: Option<JsonValue>,

    #[command(flatten)]
    pub modes: ModeFlags,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Request document path
    pub request: PathBuf,

    #[command(flatten)]
    pub modes: ModeFlags,
}

#[derive(Debug, Default, Args)]
pub struct ModeFlags {
    /// 0 exact (default), -1 exact or next smaller, 1 exact or next larger, 2 wildcard
    #[arg(long, allow_negative_numbers = true)]
    pub match_mode: Option<f64>,

    /// 1 first-to-last (default), -1 last-to-first, 2 binary ascending, -2 binary descending
    #[arg(long, allow_negative_numbers = true)]
    pub search_mode: Option<f64>,
}

impl ModeFlags {
    /// Overrides the request's modes with any flags given. Non-finite
    /// values are passed through for the engine to reject.
    fn apply(&self, request: &mut LookupRequest) {
        if let Some(m) = self.match_mode {
            request.match_mode = ModeValue::Float(m);
        }
        if let Some(s) = self.search_mode {
            request.search_mode = ModeValue::Float(s);
        }
    }
}

fn parse_json(s: &str) -> Result<JsonValue, String> {
    serde_json::from_str(s).map_err(|e| format!("not valid JSON ({e})"))
}

impl EvalArgs {
    fn into_request(self) -> LookupRequest {
        let mut request = LookupRequest {
            key: self.key,
            lookup: Some(self.lookup),
            result: Some(self.result),
            if_not_found: self.if_not_found.unwrap_or(JsonValue::Null),
            ..LookupRequest::default()
        };
        self.modes.apply(&mut request);
        request
    }
}

/// Runs a parsed command line, writing results to `out` and diagnostics
/// to `err`.
///
/// Lookup failures (`#N/A`, `#VALUE!`) are rendered output, not errors.
/// Only unreadable requests and write failures return `Err`.
pub fn run<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> anyhow::Result<()> {
    let request = match cli.command {
        Command::Modes => {
            out.write_all(render_modes(cli.output)?.as_bytes())?;
            return Ok(());
        }
        Command::Eval(args) => args.into_request(),
        Command::Run(args) => {
            let mut request = LookupRequest::load(&args.request)?;
            args.modes.apply(&mut request);
            request
        }
    };

    let prepared = request.prepare();
    if cli.verbose {
        if let Ok(prepared) = &prepared {
            report(prepared, err).context("failed to write diagnostics")?;
        }
    }
    let result = prepared.and_then(|prepared| prepared.evaluate());

    let outcome = Outcome::from_result(&result);
    if cli.verbose {
        if let Err(e) = &result {
            writeln!(err, "lookup: {e}").context("failed to write diagnostics")?;
        }
    }
    out.write_all(render_outcome(&outcome, cli.output)?.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

/// Writes the normalized modes and sequence lengths.
fn report<E: Write>(prepared: &Prepared, err: &mut E) -> std::io::Result<()> {
    let lookup = &prepared.lookup;
    writeln!(
        err,
        "match mode: {} ({})\nsearch mode: {} ({})\nlookup: {} values, result: {} values, searched: {}",
        lookup.get_match_mode(),
        lookup.get_match_mode().code(),
        lookup.get_search_mode(),
        lookup.get_search_mode().code(),
        prepared.candidates.len(),
        prepared.results.len(),
        prepared.shared_len(),
    )
}
