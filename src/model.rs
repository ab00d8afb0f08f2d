use std::fmt;

use anyhow::{Context, Result, bail};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Group {
    A,
    B,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(interval: ConfidenceInterval) -> Self {
        (interval.lower_bound, interval.upper_bound)
    }
}

/// One cell of a query result, following SQLite storage classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Real(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn column(&self, name: &str) -> Result<Vec<&SqlValue>> {
        let index = self
            .column_index(name)
            .with_context(|| format!("unknown column: {name}"))?;
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Numeric column for the resampling functions; NULLs and text are rejected.
    pub fn f64_column(&self, name: &str) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(self.rows.len());
        for (row_index, value) in self.column(name)?.into_iter().enumerate() {
            match value.as_f64() {
                Some(number) => values.push(number),
                None => bail!("column {name} row {row_index} is not numeric: {value:?}"),
            }
        }
        Ok(values)
    }

    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(self.rows.len());
        for (row_index, value) in self.column(name)?.into_iter().enumerate() {
            match value.as_str() {
                Some(text) => values.push(text.to_string()),
                None => bail!("column {name} row {row_index} is not text: {value:?}"),
            }
        }
        Ok(values)
    }
}
