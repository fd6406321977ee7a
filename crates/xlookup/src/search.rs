//! The search engine: finds the index of the candidate that matches a key.
//!
//! # Linear modes
//!
//! A single scan in [`ScanDir`] order. Exact and wildcard modes stop at the
//! first match. The nearest-value modes also stop at the first exact match,
//! otherwise they remember the closest number on the requested side of the
//! key and keep the earliest one (in scan order) when several tie.
//!
//! # Binary modes
//!
//! `BinaryAscending` expects candidates sorted ascending by this order:
//!
//! ```text
//! numbers (numerically) < text (ASCII case-insensitive) < other < absent
//! ```
//!
//! `BinaryDescending` expects the reverse, and is searched as if walking from
//! the last index down. On data sorted that way the chosen index is the
//! one `ForwardLinear` / `BackwardLinear` would choose. On unsorted data the
//! result is unspecified (but always a valid index or `NotFound`), whereas
//! linear modes still find the defined answer. A NaN candidate has no place
//! in the order, so data containing one counts as unsorted, although the
//! next-smaller run never starts on it.
//!
//! Wildcard matching has no usable order, so binary modes scan linearly for
//! it, in their logical direction.

use crate::error::Result;
use crate::matcher::{is_match, sorts_before};
use crate::mode::{MatchMode, ScanDir, SearchMode};
use crate::pattern::WildcardPattern;
use crate::value::Value;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// Index of the chosen candidate.
    Found(usize),
    /// No candidate qualified.
    NotFound,
}

impl MatchResult {
    /// Returns the found index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            MatchResult::Found(i) => Some(i),
            MatchResult::NotFound => None,
        }
    }

    /// Returns `true` if a candidate was found.
    pub fn is_found(self) -> bool {
        matches!(self, MatchResult::Found(_))
    }
}

impl From<Option<usize>> for MatchResult {
    fn from(index: Option<usize>) -> Self {
        index.map_or(MatchResult::NotFound, MatchResult::Found)
    }
}

/// Searches `candidates` for `key`.
///
/// An empty slice yields `NotFound`; rejecting empty lookup input is the
/// caller's job (see [`crate::Lookup::position`]). The only error is a
/// wildcard pattern too large to compile.
///
/// # Example
///
/// ```
/// use xlookup::{search, MatchMode, MatchResult, SearchMode, Value};
///
/// let candidates: Vec<Value> = [1, 3, 5, 7].into_iter().map(Value::from).collect();
/// let result = search(
///     &Value::from(4),
///     &candidates,
///     MatchMode::ExactOrNextSmaller,
///     SearchMode::ForwardLinear,
/// )
/// .unwrap();
/// assert_eq!(result, MatchResult::Found(1));
/// ```
pub fn search(
    key: &Value,
    candidates: &[Value],
    match_mode: MatchMode,
    search_mode: SearchMode,
) -> Result<MatchResult> {
    let dir = search_mode.scan_dir();
    let result = match match_mode {
        MatchMode::Wildcard => {
            let pattern = WildcardPattern::from_key(key)?;
            scan_wildcard(&pattern, candidates, dir)
        }
        _ if search_mode.is_binary() => binary(key, candidates, match_mode, dir),
        MatchMode::Exact => scan_exact(key, candidates, dir),
        MatchMode::ExactOrNextSmaller | MatchMode::ExactOrNextLarger => {
            scan_nearest(key, candidates, match_mode, dir)
        }
    };
    Ok(result)
}

fn scan_exact(key: &Value, candidates: &[Value], dir: ScanDir) -> MatchResult {
    dir.indices(candidates.len())
        .find(|&i| is_match(key, &candidates[i]))
        .into()
}

fn scan_wildcard(pattern: &WildcardPattern, candidates: &[Value], dir: ScanDir) -> MatchResult {
    dir.indices(candidates.len())
        .find(|&i| pattern.matches_value(&candidates[i]))
        .into()
}

fn scan_nearest(key: &Value, candidates: &[Value], mode: MatchMode, dir: ScanDir) -> MatchResult {
    let target = key.as_number();
    let mut best: Option<(usize, f64)> = None;

    for i in dir.indices(candidates.len()) {
        let candidate = &candidates[i];
        if is_match(key, candidate) {
            return MatchResult::Found(i);
        }

        let (Some(t), Some(v)) = (target, candidate.as_number()) else {
            continue;
        };
        let closer = match mode {
            MatchMode::ExactOrNextSmaller => v < t && best.map_or(true, |(_, b)| v > b),
            MatchMode::ExactOrNextLarger => v > t && best.map_or(true, |(_, b)| v < b),
            _ => false,
        };
        if closer {
            best = Some((i, v));
        }
    }

    best.map(|(i, _)| i).into()
}

/// Candidates seen in logical scan order, so descending data searched
/// backward reads as ascending.
struct ScanView<'a> {
    items: &'a [Value],
    dir: ScanDir,
}

impl<'a> ScanView<'a> {
    fn len(&self) -> usize {
        self.items.len()
    }

    /// Maps a logical position to the index in the underlying slice.
    fn index(&self, pos: usize) -> usize {
        match self.dir {
            ScanDir::Forward => pos,
            ScanDir::Backward => self.items.len() - 1 - pos,
        }
    }

    fn get(&self, pos: usize) -> &'a Value {
        let items = self.items;
        &items[self.index(pos)]
    }

    /// First logical position in `0..end` where `pred` fails, assuming it
    /// holds for a prefix.
    fn partition_point(&self, end: usize, pred: impl Fn(&Value) -> bool) -> usize {
        let (mut lo, mut hi) = (0, end);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(self.get(mid)) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

fn binary(key: &Value, candidates: &[Value], mode: MatchMode, dir: ScanDir) -> MatchResult {
    if key.is_other() || key.as_number().is_some_and(f64::is_nan) {
        return MatchResult::NotFound;
    }

    let view = ScanView {
        items: candidates,
        dir,
    };
    let split = view.partition_point(view.len(), |c| sorts_before(c, key));
    let at_split = (split < view.len()).then(|| view.get(split));

    if at_split.is_some_and(|c| is_match(key, c)) {
        return MatchResult::Found(view.index(split));
    }
    let Some(target) = key.as_number() else {
        return MatchResult::NotFound;
    };

    match mode {
        // Everything before the split is a number below the key; the
        // largest is the last one, and its run of equal values starts at
        // the first position not below it.
        MatchMode::ExactOrNextSmaller if split > 0 => {
            match view.get(split - 1).as_number() {
                Some(largest) => {
                    let first = view.partition_point(split - 1, |c| {
                        c.as_number().is_some_and(|v| v.is_nan() || v < largest)
                    });
                    MatchResult::Found(view.index(first))
                }
                None => MatchResult::NotFound,
            }
        }
        MatchMode::ExactOrNextLarger => match at_split.and_then(Value::as_number) {
            Some(v) if v > target => MatchResult::Found(view.index(split)),
            _ => MatchResult::NotFound,
        },
        _ => MatchResult::NotFound,
    }
}
