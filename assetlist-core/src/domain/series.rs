//! ReturnSeries — a named, monthly-indexed series of fractional returns.

use super::month::Month;
use crate::error::ListError;
use serde::{Deserialize, Serialize};

/// Fractional monthly returns for one symbol.
///
/// The index is strictly increasing with no duplicate months. `index` and
/// `values` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    symbol: String,
    index: Vec<Month>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Build a series from `(month, value)` points.
    ///
    /// Points must already be sorted strictly ascending by month; anything
    /// else is rejected rather than silently reordered.
    pub fn new(
        symbol: impl Into<String>,
        points: Vec<(Month, f64)>,
    ) -> Result<Self, ListError> {
        for pair in points.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ListError::InvalidArgument(format!(
                    "series index must be strictly increasing, got {} after {}",
                    pair[1].0, pair[0].0
                )));
            }
        }
        let (index, values) = points.into_iter().unzip();
        Ok(Self {
            symbol: symbol.into(),
            index,
            values,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Replace the identifying name, keeping the data.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[Month] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn first_date(&self) -> Option<Month> {
        self.index.first().copied()
    }

    pub fn last_date(&self) -> Option<Month> {
        self.index.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }

    /// Restrict to months in `[first, last]` (inclusive).
    pub fn slice(&self, first: Month, last: Month) -> Self {
        let points = self
            .iter()
            .filter(|(month, _)| *month >= first && *month <= last)
            .collect::<Vec<_>>();
        let (index, values) = points.into_iter().unzip();
        Self {
            symbol: self.symbol.clone(),
            index,
            values,
        }
    }

    /// Inner-join with `other` on the month index, combining paired values.
    ///
    /// Only months present in both series survive, so the result can be
    /// shorter than either input. The result keeps `self`'s symbol.
    pub fn join_with(&self, other: &Self, combine: impl Fn(f64, f64) -> f64) -> Self {
        let mut index = Vec::new();
        let mut values = Vec::new();
        let (mut i, mut j) = (0, 0);
        // Two-pointer merge: both indices are strictly increasing.
        while i < self.index.len() && j < other.index.len() {
            match self.index[i].cmp(&other.index[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    index.push(self.index[i]);
                    values.push(combine(self.values[i], other.values[j]));
                    i += 1;
                    j += 1;
                }
            }
        }
        Self {
            symbol: self.symbol.clone(),
            index,
            values,
        }
    }
}
