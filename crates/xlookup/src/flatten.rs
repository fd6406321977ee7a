//! Lookup and result inputs, and their flattening into sequences.

use crate::value::Value;

/// A caller-supplied lookup or result argument.
///
/// Hosts pass a single cell, a row or column, or a whole range. The engine
/// only ever searches one-dimensional sequences, so every shape is
/// flattened first with [`Input::flatten`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Input {
    /// The argument was not supplied at all.
    #[default]
    Missing,
    /// A single value.
    Scalar(Value),
    /// A row or column.
    Vector(Vec<Value>),
    /// A grid of rows.
    Grid(Vec<Vec<Value>>),
}

impl Input {
    /// Flattens this input into an ordered sequence.
    ///
    /// - `Missing` becomes an empty sequence.
    /// - `Scalar` becomes a one-element sequence, even when the value is
    ///   `Absent` (an empty cell is still a cell).
    /// - `Vector` is returned unchanged.
    /// - `Grid` is flattened row-major: row 0 left to right, then row 1.
    ///   Rows of unequal length are concatenated as they are.
    ///
    /// # Example
    ///
    /// ```
    /// use xlookup::{Input, Value};
    ///
    /// let grid = Input::Grid(vec![
    ///     vec![Value::from(1), Value::from(2)],
    ///     vec![Value::from(3), Value::from(4)],
    /// ]);
    /// assert_eq!(
    ///     grid.flatten(),
    ///     vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]
    /// );
    /// ```
    pub fn flatten(self) -> Vec<Value> {
        match self {
            Input::Missing => Vec::new(),
            Input::Scalar(v) => vec![v],
            Input::Vector(values) => values,
            Input::Grid(rows) => rows.into_iter().flatten().collect(),
        }
    }

    /// Returns the number of values this input flattens to.
    pub fn len(&self) -> usize {
        match self {
            Input::Missing => 0,
            Input::Scalar(_) => 1,
            Input::Vector(values) => values.len(),
            Input::Grid(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    /// Returns `true` if this input flattens to an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Value> for Input {
    fn from(v: Value) -> Self {
        Input::Scalar(v)
    }
}

impl From<Vec<Value>> for Input {
    fn from(values: Vec<Value>) -> Self {
        Input::Vector(values)
    }
}

impl From<Vec<Vec<Value>>> for Input {
    fn from(rows: Vec<Vec<Value>>) -> Self {
        Input::Grid(rows)
    }
}

impl<T: Into<Value>> FromIterator<T> for Input {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Input::Vector(iter.into_iter().map(Into::into).collect())
    }
}
