//! Lookup requests and the JSON to engine value conversions.
//!
//! JSON plays the part of the host's cell representation:
//!
//! | JSON | Engine |
//! |------|--------|
//! | `null` | `Value::Absent` |
//! | number | `Value::Number` |
//! | string | `Value::Text` |
//! | bool, object | `Value::Other` holding the JSON text |
//! | array of arrays | `Input::Grid` |
//! | other array | `Input::Vector` |
//! | omitted field | `Input::Missing` |

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use xlookup::{Input, Lookup, ModeArg, Value};

/// Format of a request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    Yaml,
}

impl RequestFormat {
    /// Picks the format from a file extension; anything but `.yaml` /
    /// `.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => RequestFormat::Yaml,
            _ => RequestFormat::Json,
        }
    }
}

/// One lookup call, as written in a request document.
///
/// Every field is optional. Omitted `lookup` / `result` are missing
/// inputs; omitted scalars are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupRequest {
    pub key: JsonValue,
    pub lookup: Option<JsonValue>,
    pub result: Option<JsonValue>,
    pub if_not_found: JsonValue,
    pub match_mode: ModeValue,
    pub search_mode: ModeValue,
}

/// A mode argument as written in a request or on the command line.
///
/// Kept apart from [`JsonValue`] so non-finite numbers (YAML `.nan`,
/// `.inf`, or a `NaN` flag) reach the engine and are rejected there
/// instead of collapsing to `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeValue {
    #[default]
    Unset,
    Int(i64),
    Float(f64),
    Other(JsonValue),
}

impl ModeValue {
    /// Converts to an engine mode argument. Integers stay integers, other
    /// numbers are truncated by the engine, anything non-numeric is rejected.
    pub fn to_mode_arg(&self) -> xlookup::Result<Option<ModeArg>> {
        match self {
            ModeValue::Unset => Ok(None),
            ModeValue::Int(n) => Ok(Some(ModeArg::Int(*n))),
            ModeValue::Float(f) => Ok(Some(ModeArg::Float(*f))),
            ModeValue::Other(json) => ModeArg::from_value(&to_value(json)),
        }
    }
}

/// A request converted into engine types, ready to run.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub lookup: Lookup,
    pub key: Value,
    pub candidates: Vec<Value>,
    pub results: Vec<Value>,
}

impl Prepared {
    /// Number of positions the search may visit.
    pub fn shared_len(&self) -> usize {
        self.candidates.len().min(self.results.len())
    }

    /// Runs the lookup.
    pub fn evaluate(&self) -> xlookup::Result<Value> {
        self.lookup.find(&self.key, &self.candidates, &self.results)
    }
}

impl LookupRequest {
    /// Parses a request document.
    pub fn parse(text: &str, format: RequestFormat) -> anyhow::Result<Self> {
        let request = match format {
            RequestFormat::Json => serde_json::from_str(text).context("invalid JSON request")?,
            RequestFormat::Yaml => serde_yaml::from_str(text).context("invalid YAML request")?,
        };
        Ok(request)
    }

    /// Reads a request document from a file, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request {}", path.display()))?
        };
        Self::parse(&text, RequestFormat::from_path(path))
    }

    /// Normalizes modes and flattens inputs.
    pub fn prepare(&self) -> xlookup::Result<Prepared> {
        let lookup = Lookup::from_args(
            to_value(&self.if_not_found),
            self.match_mode.to_mode_arg()?,
            self.search_mode.to_mode_arg()?,
        )?;
        Ok(Prepared {
            lookup,
            key: to_value(&self.key),
            candidates: to_input(self.lookup.as_ref()).flatten(),
            results: to_input(self.result.as_ref()).flatten(),
        })
    }

    /// Prepares and runs the request.
    pub fn evaluate(&self) -> xlookup::Result<Value> {
        self.prepare()?.evaluate()
    }
}

/// Converts a JSON scalar into a cell value.
pub fn to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Absent,
        JsonValue::Number(n) => n.as_f64().map_or(Value::Absent, Value::Number),
        JsonValue::String(s) => Value::Text(s.clone()),
        other => Value::Other(other.to_string()),
    }
}

/// Converts a JSON argument into a lookup input.
pub fn to_input(json: Option<&JsonValue>) -> Input {
    match json {
        None => Input::Missing,
        Some(JsonValue::Array(items)) if !items.is_empty() && items.iter().all(JsonValue::is_array) => {
            Input::Grid(
                items
                    .iter()
                    .filter_map(JsonValue::as_array)
                    .map(|row| row.iter().map(to_value).collect())
                    .collect(),
            )
        }
        Some(JsonValue::Array(items)) => Input::Vector(items.iter().map(to_value).collect()),
        Some(scalar) => Input::Scalar(to_value(scalar)),
    }
}

/// Converts a cell value back into JSON.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Number(n) => serde_json::Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Absent => JsonValue::Null,
        Value::Other(s) => serde_json::from_str(s).unwrap_or_else(|_| JsonValue::String(s.clone())),
    }
}
