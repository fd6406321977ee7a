//! Lookup builder and the raw host-facing entry point.
//!
//! [`Lookup`] holds the already-normalized options and runs searches
//! against slices or [`Input`]s. [`lookup`] is the loosely-typed form a host
//! adapter calls with arguments straight from its cells.

use crate::error::{LookupError, Result};
use crate::flatten::Input;
use crate::mode::{MatchMode, ModeArg, SearchMode};
use crate::project::project;
use crate::search::{search, MatchResult};
use crate::value::Value;

/// A configured lookup.
///
/// # Example
///
/// ```
/// use xlookup::{Input, Lookup, MatchMode, SearchMode, Value};
///
/// let sizes: Input = [1, 3, 5, 7].into_iter().collect();
/// let labels: Input = ["a", "b", "c", "d"].into_iter().collect();
///
/// let value = Lookup::new()
///     .match_mode(MatchMode::ExactOrNextLarger)
///     .search_mode(SearchMode::BinaryAscending)
///     .if_not_found("none")
///     .run(&Value::from(4), sizes, labels)
///     .unwrap();
/// assert_eq!(value, Value::from("c"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    match_mode: MatchMode,
    search_mode: SearchMode,
    if_not_found: Option<Value>,
}

impl Lookup {
    /// Creates a lookup with exact matching, forward search and no fallback.
    pub fn new() -> Self {
        Lookup::default()
    }

    /// Builds a lookup from raw host arguments.
    ///
    /// An `Absent` fallback counts as not supplied.
    pub fn from_args(
        if_not_found: Value,
        match_mode: Option<ModeArg>,
        search_mode: Option<ModeArg>,
    ) -> Result<Self> {
        Ok(Lookup::new()
            .match_mode(MatchMode::normalize(match_mode)?)
            .search_mode(SearchMode::normalize(search_mode)?)
            .if_not_found(if_not_found))
    }

    /// Sets the match mode.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Sets the search mode.
    pub fn search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Sets the value returned when nothing matches.
    ///
    /// Passing `Value::Absent` clears the fallback.
    pub fn if_not_found(mut self, value: impl Into<Value>) -> Self {
        self.if_not_found = Some(value.into()).filter(|v| !v.is_absent());
        self
    }

    /// Returns the match mode.
    pub fn get_match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Returns the search mode.
    pub fn get_search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Returns the fallback value, if set.
    pub fn get_if_not_found(&self) -> Option<&Value> {
        self.if_not_found.as_ref()
    }

    /// Finds the index of the matching candidate.
    ///
    /// Fails with [`LookupError::EmptyLookup`] if `candidates` is empty.
    pub fn position(&self, key: &Value, candidates: &[Value]) -> Result<MatchResult> {
        if candidates.is_empty() {
            return Err(LookupError::EmptyLookup);
        }
        search(key, candidates, self.match_mode, self.search_mode)
    }

    /// Finds the result value paired with the matching candidate.
    ///
    /// Only the first `min(lookup.len(), results.len())` positions are
    /// searched, so a match is always projectable.
    pub fn find(&self, key: &Value, lookup: &[Value], results: &[Value]) -> Result<Value> {
        if lookup.is_empty() {
            return Err(LookupError::EmptyLookup);
        }
        let shared = lookup.len().min(results.len());
        let found = search(key, &lookup[..shared], self.match_mode, self.search_mode)?;
        project(found, results, self.if_not_found.as_ref())
    }

    /// Flattens both inputs and runs [`Lookup::find`].
    pub fn run(&self, key: &Value, lookup: impl Into<Input>, results: impl Into<Input>) -> Result<Value> {
        let lookup = lookup.into().flatten();
        let results = results.into().flatten();
        self.find(key, &lookup, &results)
    }
}

/// Looks up `key` with loosely-typed host arguments.
///
/// Modes are normalized first (`match_mode` defaults to `0`, `search_mode`
/// to `1`), then both inputs are flattened, then the search runs. An
/// `Absent` fallback means none was supplied.
///
/// # Example
///
/// ```
/// use xlookup::{lookup, Input, ModeArg, Value};
///
/// let value = lookup(
///     Value::from(4),
///     [1, 3, 5, 7].into_iter().collect(),
///     ["a", "b", "c", "d"].into_iter().collect(),
///     Value::Absent,
///     Some(ModeArg::Float(-1.0)),
///     None,
/// )
/// .unwrap();
/// assert_eq!(value, Value::from("b"));
///
/// let err = lookup(
///     Value::from("xyz"),
///     Input::Missing,
///     Input::Missing,
///     Value::Absent,
///     None,
///     None,
/// )
/// .unwrap_err();
/// assert!(err.is_invalid_input());
/// ```
pub fn lookup(
    key: Value,
    lookup_input: Input,
    result_input: Input,
    if_not_found: Value,
    match_mode: Option<ModeArg>,
    search_mode: Option<ModeArg>,
) -> Result<Value> {
    Lookup::from_args(if_not_found, match_mode, search_mode)?.run(&key, lookup_input, result_input)
}
