//! Immutable multi-channel signal table

use crate::error::{Error, Result};
use hampel_filter::CleanedSignal;

/// Column name for the 1-based channel `k`
pub fn channel_name(k: usize) -> String {
    format!("ECG{k}")
}

/// Recorded channels, one column per channel, rows in temporal order
///
/// A table is never mutated after loading; replacing a channel yields a
/// new table.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl SignalTable {
    /// Build a table from named columns of equal length
    pub fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(Error::InvalidColumn(format!(
                "{} names for {} columns",
                names.len(),
                columns.len()
            )));
        }
        if let Some(first) = columns.first() {
            if let Some(bad) = columns.iter().find(|c| c.len() != first.len()) {
                return Err(Error::SizeMismatch {
                    expected: first.len(),
                    actual: bad.len(),
                });
            }
        }
        Ok(Self { names, columns })
    }

    /// Build a table from rows, naming the columns `ECG1..ECGn`
    pub(crate) fn from_rows(n_columns: usize, rows: Vec<Vec<f64>>) -> Self {
        let mut columns = vec![Vec::with_capacity(rows.len()); n_columns];
        for row in rows {
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Self {
            names: (1..=n_columns).map(channel_name).collect(),
            columns,
        }
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of channels
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of samples per channel
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Samples of channel `index` (0-based)
    pub fn column(&self, index: usize) -> Result<&[f64]> {
        self.columns
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::InvalidColumn(format!("no column at index {index}")))
    }

    /// Samples of the channel called `name`
    pub fn column_by_name(&self, name: &str) -> Result<&[f64]> {
        let index = self.index_of(name)?;
        self.column(index)
    }

    /// Position of the channel called `name`
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::InvalidColumn(name.to_string()))
    }

    /// Row `index` across all channels
    pub fn row(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().map(move |c| c[index])
    }

    /// New table with channel `index` replaced by `cleaned`
    pub fn with_column_replaced(&self, index: usize, cleaned: &CleanedSignal) -> Result<Self> {
        let expected = self.column(index)?.len();
        if cleaned.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: cleaned.len(),
            });
        }
        let mut columns = self.columns.clone();
        columns[index] = cleaned.as_slice().to_vec();
        Ok(Self {
            names: self.names.clone(),
            columns,
        })
    }
}
