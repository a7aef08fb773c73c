//! ReturnTable — the aligned, fully populated return table.

use super::month::Month;
use super::series::ReturnSeries;
use serde::Serialize;

/// A time-indexed table with one return column per asset.
///
/// The row index is the intersection of every contributing series' index:
/// joins are always inner, so every row has a value for every column. A
/// single-asset list is still a one-column table, never a bare series.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnTable {
    index: Vec<Month>,
    columns: Vec<String>,
    /// Column-major values; each inner vec has the same length as `index`.
    values: Vec<Vec<f64>>,
}

impl ReturnTable {
    /// Seed a table from a single series.
    ///
    /// The accumulator starts from the first asset's series rather than an
    /// empty table: an inner join against an empty table would collapse
    /// everything to zero rows.
    pub fn from_series(series: ReturnSeries) -> Self {
        Self {
            index: series.index().to_vec(),
            columns: vec![series.symbol().to_string()],
            values: vec![series.values().to_vec()],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.index.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn index(&self) -> &[Month] {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn first_date(&self) -> Option<Month> {
        self.index.first().copied()
    }

    pub fn last_date(&self) -> Option<Month> {
        self.index.last().copied()
    }

    /// Values for one column, by symbol.
    pub fn column(&self, symbol: &str) -> Option<&[f64]> {
        let pos = self.columns.iter().position(|c| c == symbol)?;
        Some(&self.values[pos])
    }

    /// One row of values, in column order.
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.values.iter().map(|col| col[row]).collect()
    }

    /// Inner-join a series onto the table as a new column.
    ///
    /// The row set shrinks (or stays the same) with every join — it never
    /// grows, and no missing cells are ever introduced.
    pub fn inner_join(self, series: &ReturnSeries) -> Self {
        let mut keep_rows = Vec::new();
        let mut keep_other = Vec::new();
        let other_index = series.index();
        let (mut i, mut j) = (0, 0);
        while i < self.index.len() && j < other_index.len() {
            match self.index[i].cmp(&other_index[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    keep_rows.push(i);
                    keep_other.push(j);
                    i += 1;
                    j += 1;
                }
            }
        }

        let index: Vec<Month> = keep_rows.iter().map(|&i| self.index[i]).collect();
        let mut values: Vec<Vec<f64>> = self
            .values
            .iter()
            .map(|col| keep_rows.iter().map(|&i| col[i]).collect())
            .collect();
        values.push(keep_other.iter().map(|&j| series.values()[j]).collect());

        let mut columns = self.columns;
        columns.push(series.symbol().to_string());

        Self {
            index,
            columns,
            values,
        }
    }

    /// Restrict rows to months `>= first`.
    pub fn slice_from(self, first: Month) -> Self {
        let last = match self.last_date() {
            Some(last) => last.max(first),
            None => return self,
        };
        self.slice(first, last)
    }

    /// Restrict rows to months in `[first, last]` (inclusive).
    pub fn slice(self, first: Month, last: Month) -> Self {
        let keep: Vec<usize> = self
            .index
            .iter()
            .enumerate()
            .filter(|(_, month)| **month >= first && **month <= last)
            .map(|(i, _)| i)
            .collect();
        Self {
            index: keep.iter().map(|&i| self.index[i]).collect(),
            values: self
                .values
                .iter()
                .map(|col| keep.iter().map(|&i| col[i]).collect())
                .collect(),
            columns: self.columns,
        }
    }
}
