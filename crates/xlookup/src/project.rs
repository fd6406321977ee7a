//! Result projection: from a search outcome to the value handed back.

use crate::error::{LookupError, Result};
use crate::search::MatchResult;
use crate::value::Value;

/// Maps a search outcome onto the result sequence.
///
/// - `Found(i)` with `i` inside `results` returns `results[i]`.
/// - `Found(i)` past the end of `results` is treated as not found.
/// - Not found returns `fallback` when supplied, otherwise
///   [`LookupError::NotAvailable`].
pub fn project(result: MatchResult, results: &[Value], fallback: Option<&Value>) -> Result<Value> {
    if let Some(value) = result.index().and_then(|i| results.get(i)) {
        return Ok(value.clone());
    }
    fallback.cloned().ok_or(LookupError::NotAvailable)
}
