//! Displayable cell values and nested child rows.

use std::fmt;

/// A displayable scalar value for one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One record in a row's nested detail table.
///
/// Fields are an ordered sequence of `(name, value)` pairs; iteration and
/// header derivation preserve insertion order. Children of one parent are
/// expected to share a field set, but nothing enforces that: nested-table
/// headers come from the first child only (see
/// [`crate::column::derive_child_columns`]) and a child missing a derived
/// field renders as a placeholder cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildRow {
    fields: Vec<(String, CellValue)>,
}

impl ChildRow {
    /// Creates an empty child row.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field, preserving insertion order (builder pattern).
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Returns the value for a field name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<CellValue>> FromIterator<(N, V)> for ChildRow {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}
