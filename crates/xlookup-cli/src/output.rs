//! Rendering lookup outcomes.
//!
//! Text output follows spreadsheet display conventions: the value itself,
//! `#N/A` when nothing was found, `#VALUE!` when the arguments were
//! rejected. Structured modes serialize an [`Outcome`] instead.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;
use xlookup::{ErrorKind, MatchMode, SearchMode, Value};

use crate::request::to_json;

/// Marker shown when a lookup finds nothing.
pub const NOT_AVAILABLE_MARKER: &str = "#N/A";

/// Marker shown when lookup arguments are invalid.
pub const INVALID_VALUE_MARKER: &str = "#VALUE!";

/// Value of the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Display text with `#N/A` / `#VALUE!` markers
    #[default]
    Text,
    /// Serialize the outcome as JSON
    Json,
    /// Serialize the outcome as YAML
    Yaml,
}

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Ok,
    NotAvailable,
    InvalidInput,
}

/// Serializable result of one lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Display text for text mode; not serialized.
    #[serde(skip)]
    display: String,
}

impl Outcome {
    /// Captures a lookup result.
    pub fn from_result(result: &xlookup::Result<Value>) -> Self {
        match result {
            Ok(value) => Outcome {
                status: Status::Ok,
                value: Some(to_json(value)),
                error: None,
                display: value.to_string(),
            },
            Err(err) => {
                let (status, marker) = match err.kind() {
                    ErrorKind::NotAvailable => (Status::NotAvailable, NOT_AVAILABLE_MARKER),
                    ErrorKind::InvalidInput => (Status::InvalidInput, INVALID_VALUE_MARKER),
                };
                Outcome {
                    status,
                    value: None,
                    error: Some(err.to_string()),
                    display: marker.to_string(),
                }
            }
        }
    }

    /// Returns the text shown in text mode.
    pub fn display_text(&self) -> &str {
        &self.display
    }
}

/// One row of the mode listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeInfo {
    pub argument: &'static str,
    pub code: i64,
    pub name: &'static str,
    pub description: &'static str,
}

/// Lists every match and search mode.
pub fn mode_table() -> Vec<ModeInfo> {
    let matches = MatchMode::ALL.into_iter().map(|m| ModeInfo {
        argument: "match_mode",
        code: m.code(),
        name: m.as_str(),
        description: m.description(),
    });
    let searches = SearchMode::ALL.into_iter().map(|s| ModeInfo {
        argument: "search_mode",
        code: s.code(),
        name: s.as_str(),
        description: s.description(),
    });
    matches.chain(searches).collect()
}

/// Renders a lookup outcome, newline-terminated.
pub fn render_outcome(outcome: &Outcome, mode: OutputMode) -> Result<String, RenderError> {
    match mode {
        OutputMode::Text => Ok(format!("{}\n", outcome.display_text())),
        OutputMode::Json => Ok(format!("{}\n", serde_json::to_string_pretty(outcome)?)),
        OutputMode::Yaml => Ok(serde_yaml::to_string(outcome)?),
    }
}

/// Renders the mode listing.
pub fn render_modes(mode: OutputMode) -> Result<String, RenderError> {
    let table = mode_table();
    match mode {
        OutputMode::Text => {
            let mut out = String::new();
            for row in &table {
                out.push_str(&format!(
                    "{:<12} {:>3}  {:<22} {}\n",
                    row.argument, row.code, row.name, row.description
                ));
            }
            Ok(out)
        }
        OutputMode::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&table)?)),
        OutputMode::Yaml => Ok(serde_yaml::to_string(&table)?),
    }
}
