//! XLookup - spreadsheet-style lookup over flattened value sequences.
//!
//! Given a key, a sequence of candidates and a parallel sequence of results,
//! the engine finds the candidate matching the key and returns the result
//! at the same position, a fallback, or a "not available" error.
//!
//! # Quick Start
//!
//! ```rust
//! use xlookup::{Input, Lookup, MatchMode, Value};
//!
//! let codes: Input = ["AX-1", "BX-2", "CX-3"].into_iter().collect();
//! let prices: Input = [9.5, 12.0, 3.25].into_iter().collect();
//!
//! let price = Lookup::new()
//!     .match_mode(MatchMode::Wildcard)
//!     .run(&Value::from("b*"), codes, prices)
//!     .unwrap();
//! assert_eq!(price, Value::Number(12.0));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! raw modes ── normalize ──┐
//!                          ├── search ── project ── Value | NotAvailable
//! raw inputs ── flatten ───┘
//! ```
//!
//! - **Normalize**: [`MatchMode::normalize`] / [`SearchMode::normalize`]
//!   turn host numbers into strict modes. Unknown codes are errors.
//! - **Flatten**: [`Input::flatten`] turns scalars, vectors and grids
//!   (row-major) into sequences.
//! - **Search**: [`search`] picks an index using [`is_match`] and
//!   [`compare_numbers`], or a [`WildcardPattern`].
//! - **Project**: [`project`] maps the index into the result sequence, or
//!   applies the fallback.
//!
//! # Modes
//!
//! | Code | Match mode | Code | Search mode |
//! |------|------------|------|-------------|
//! | `0` | Exact (default) | `1` | First to last (default) |
//! | `-1` | Exact or next smaller | `-1` | Last to first |
//! | `1` | Exact or next larger | `2` | Binary, sorted ascending |
//! | `2` | Wildcard (`*`, `?`) | `-2` | Binary, sorted descending |
//!
//! # Errors
//!
//! Every failure is a [`LookupError`]. [`LookupError::kind`] separates
//! invalid arguments ([`ErrorKind::InvalidInput`]) from a completed search
//! that found nothing ([`ErrorKind::NotAvailable`]).

mod error;
mod flatten;
mod lookup;
mod matcher;
mod mode;
mod pattern;
mod project;
mod search;
mod value;

// Re-export public API
pub use error::{ErrorKind, LookupError, Result};
pub use flatten::Input;
pub use lookup::{lookup, Lookup};
pub use matcher::{compare_numbers, is_match, NUMERIC_TOLERANCE};
pub use mode::{MatchMode, ModeArg, ScanDir, SearchMode};
pub use pattern::WildcardPattern;
pub use project::project;
pub use search::{search, MatchResult};
pub use value::Value;
