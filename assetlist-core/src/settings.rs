//! Crate-wide defaults and the period-length summary type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol used when an asset list is built with no assets given.
pub const DEFAULT_SYMBOL: &str = "SPY.US";

/// Periods per year for the monthly series this crate works with.
pub const MONTHS_PER_YEAR: usize = 12;

/// Whole-year / leftover-month split of an aligned table's row count.
///
/// Derived from the number of rows, not from calendar subtraction. The two
/// measures agree only when the series has no gaps, and are deliberately
/// kept separate (see `AssetList::period_length_years`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLength {
    pub years: usize,
    pub months: usize,
}

impl PeriodLength {
    pub fn from_rows(rows: usize) -> Self {
        Self {
            years: rows / MONTHS_PER_YEAR,
            months: rows % MONTHS_PER_YEAR,
        }
    }
}

impl fmt::Display for PeriodLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months", self.years, self.months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_splits_on_twelve() {
        let pl = PeriodLength::from_rows(31);
        assert_eq!(pl.years, 2);
        assert_eq!(pl.months, 7);
        assert_eq!(pl.to_string(), "2 years, 7 months");
    }

    #[test]
    fn from_rows_handles_exact_years() {
        let pl = PeriodLength::from_rows(24);
        assert_eq!(pl.years, 2);
        assert_eq!(pl.months, 0);
    }
}
