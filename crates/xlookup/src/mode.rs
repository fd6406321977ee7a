//! Match and search modes, and normalization of loosely-typed mode arguments.
//!
//! Hosts pass modes as whatever number type their cells hold. [`ModeArg`]
//! captures that, and [`MatchMode::normalize`] / [`SearchMode::normalize`]
//! turn it into a strict enumeration. Unknown codes are errors, never
//! silently replaced by the default.

use crate::error::{LookupError, Result};
use crate::value::Value;

/// A raw mode argument as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeArg {
    /// Integer-typed argument.
    Int(i64),
    /// Floating-point argument; truncated toward zero.
    Float(f64),
}

impl ModeArg {
    /// Converts a cell value into a mode argument.
    ///
    /// `Absent` means "not supplied" and yields `None`. Numbers yield
    /// `Float`. Every other kind is rejected.
    pub fn from_value(value: &Value) -> Result<Option<ModeArg>> {
        match value {
            Value::Absent => Ok(None),
            Value::Number(n) => Ok(Some(ModeArg::Float(*n))),
            other => Err(LookupError::NonNumericMode(other.kind_name())),
        }
    }

    /// Truncates this argument to an integer code.
    pub fn to_code(self) -> Result<i64> {
        match self {
            ModeArg::Int(n) => Ok(n),
            ModeArg::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            ModeArg::Float(f) => Err(LookupError::NonFiniteMode(f)),
        }
    }
}

impl From<i32> for ModeArg {
    fn from(n: i32) -> Self {
        ModeArg::Int(n as i64)
    }
}

impl From<i64> for ModeArg {
    fn from(n: i64) -> Self {
        ModeArg::Int(n)
    }
}

impl From<f64> for ModeArg {
    fn from(n: f64) -> Self {
        ModeArg::Float(n)
    }
}

/// How a candidate must relate to the key to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Candidate must equal the key (code `0`).
    #[default]
    Exact,
    /// Exact match, else the largest number below the key (code `-1`).
    ExactOrNextSmaller,
    /// Exact match, else the smallest number above the key (code `1`).
    ExactOrNextLarger,
    /// Key is a `*`/`?` pattern matched against candidate text (code `2`).
    Wildcard,
}

impl MatchMode {
    /// All match modes, in code order.
    pub const ALL: [MatchMode; 4] = [
        MatchMode::ExactOrNextSmaller,
        MatchMode::Exact,
        MatchMode::ExactOrNextLarger,
        MatchMode::Wildcard,
    ];

    /// Maps an integer code to a match mode.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(MatchMode::Exact),
            -1 => Ok(MatchMode::ExactOrNextSmaller),
            1 => Ok(MatchMode::ExactOrNextLarger),
            2 => Ok(MatchMode::Wildcard),
            other => Err(LookupError::InvalidMatchMode(other)),
        }
    }

    /// Normalizes an optional raw argument, defaulting to `Exact`.
    pub fn normalize(arg: Option<ModeArg>) -> Result<Self> {
        match arg {
            None => Ok(MatchMode::default()),
            Some(arg) => Self::from_code(arg.to_code()?),
        }
    }

    /// Returns the integer code for this mode.
    pub fn code(self) -> i64 {
        match self {
            MatchMode::Exact => 0,
            MatchMode::ExactOrNextSmaller => -1,
            MatchMode::ExactOrNextLarger => 1,
            MatchMode::Wildcard => 2,
        }
    }

    /// Returns `true` for the two nearest-value modes.
    pub fn is_approximate(self) -> bool {
        matches!(
            self,
            MatchMode::ExactOrNextSmaller | MatchMode::ExactOrNextLarger
        )
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::ExactOrNextSmaller => "exact-or-next-smaller",
            MatchMode::ExactOrNextLarger => "exact-or-next-larger",
            MatchMode::Wildcard => "wildcard",
        }
    }

    /// Returns the one-line description a host shows for this mode.
    pub fn description(self) -> &'static str {
        match self {
            MatchMode::Exact => "Exact match (default)",
            MatchMode::ExactOrNextSmaller => "Exact match or next smaller item",
            MatchMode::ExactOrNextLarger => "Exact match or next larger item",
            MatchMode::Wildcard => "Wildcard match (* and ?)",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Traversal direction of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanDir {
    /// From index 0 upward.
    #[default]
    Forward,
    /// From the last shared index downward.
    Backward,
}

impl ScanDir {
    /// Returns `true` if this is a forward scan.
    pub fn is_forward(self) -> bool {
        matches!(self, ScanDir::Forward)
    }

    /// Returns the indices `0..len` in this direction.
    pub fn indices(self, len: usize) -> Box<dyn Iterator<Item = usize>> {
        match self {
            ScanDir::Forward => Box::new(0..len),
            ScanDir::Backward => Box::new((0..len).rev()),
        }
    }
}

/// Direction and algorithm used to traverse the lookup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// First to last (code `1`).
    #[default]
    ForwardLinear,
    /// Last to first (code `-1`).
    BackwardLinear,
    /// Binary search over data sorted ascending (code `2`).
    BinaryAscending,
    /// Binary search over data sorted descending (code `-2`).
    BinaryDescending,
}

impl SearchMode {
    /// All search modes, in code order.
    pub const ALL: [SearchMode; 4] = [
        SearchMode::BinaryDescending,
        SearchMode::BackwardLinear,
        SearchMode::ForwardLinear,
        SearchMode::BinaryAscending,
    ];

    /// Maps an integer code to a search mode.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(SearchMode::ForwardLinear),
            -1 => Ok(SearchMode::BackwardLinear),
            2 => Ok(SearchMode::BinaryAscending),
            -2 => Ok(SearchMode::BinaryDescending),
            other => Err(LookupError::InvalidSearchMode(other)),
        }
    }

    /// Normalizes an optional raw argument, defaulting to `ForwardLinear`.
    pub fn normalize(arg: Option<ModeArg>) -> Result<Self> {
        match arg {
            None => Ok(SearchMode::default()),
            Some(arg) => Self::from_code(arg.to_code()?),
        }
    }

    /// Returns the integer code for this mode.
    pub fn code(self) -> i64 {
        match self {
            SearchMode::ForwardLinear => 1,
            SearchMode::BackwardLinear => -1,
            SearchMode::BinaryAscending => 2,
            SearchMode::BinaryDescending => -2,
        }
    }

    /// Returns `true` for the two binary modes.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            SearchMode::BinaryAscending | SearchMode::BinaryDescending
        )
    }

    /// Returns the logical scan direction.
    ///
    /// Ascending binary search resolves ties like a forward scan, and
    /// descending like a backward one.
    pub fn scan_dir(self) -> ScanDir {
        match self {
            SearchMode::ForwardLinear | SearchMode::BinaryAscending => ScanDir::Forward,
            SearchMode::BackwardLinear | SearchMode::BinaryDescending => ScanDir::Backward,
        }
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::ForwardLinear => "forward",
            SearchMode::BackwardLinear => "backward",
            SearchMode::BinaryAscending => "binary-ascending",
            SearchMode::BinaryDescending => "binary-descending",
        }
    }

    /// Returns the one-line description a host shows for this mode.
    pub fn description(self) -> &'static str {
        match self {
            SearchMode::ForwardLinear => "Search first-to-last (default)",
            SearchMode::BackwardLinear => "Search last-to-first",
            SearchMode::BinaryAscending => "Binary search (sorted ascending)",
            SearchMode::BinaryDescending => "Binary search (sorted descending)",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
