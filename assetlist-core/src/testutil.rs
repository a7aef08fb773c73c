//! Shared test fixtures: deterministic series, handles, and a mock provider.

use crate::domain::{AssetHandle, Month, ReturnSeries};
use crate::error::ListError;
use crate::provider::{AssetProvider, InflationProvider, InflationSeries};
use std::collections::BTreeMap;

pub fn m(year: i32, month: u32) -> Month {
    Month::new(year, month).unwrap()
}

pub fn months(from: Month, to: Month) -> Vec<Month> {
    let mut out = Vec::new();
    let mut cur = from;
    while cur <= to {
        out.push(cur);
        cur = cur.next();
    }
    out
}

/// Constant-valued monthly series spanning `[from, to]`.
pub fn series(symbol: &str, from: Month, to: Month, value: f64) -> ReturnSeries {
    let points = months(from, to).into_iter().map(|mo| (mo, value)).collect();
    ReturnSeries::new(symbol, points).unwrap()
}

/// Series with explicit values starting at `from`, one month per value.
pub fn series_with(symbol: &str, from: Month, values: &[f64]) -> ReturnSeries {
    let mut cur = from;
    let mut points = Vec::with_capacity(values.len());
    for &value in values {
        points.push((cur, value));
        cur = cur.next();
    }
    ReturnSeries::new(symbol, points).unwrap()
}

pub fn handle(symbol: &str, currency: &str, from: Month, to: Month) -> AssetHandle {
    handle_with_value(symbol, currency, from, to, 0.01)
}

pub fn handle_with_value(
    symbol: &str,
    currency: &str,
    from: Month,
    to: Month,
    value: f64,
) -> AssetHandle {
    AssetHandle {
        symbol: symbol.to_string(),
        name: format!("{symbol} name"),
        currency: currency.to_string(),
        first_date: from,
        last_date: to,
        ror: series(symbol, from, to, value),
    }
}

/// In-memory provider for builder and currency tests.
#[derive(Debug, Default)]
pub struct MockProvider {
    assets: BTreeMap<String, AssetHandle>,
    inflation: BTreeMap<String, ReturnSeries>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with a "USD.FX" listing from 2016-01, so a USD-based list
    /// has its base currency resolvable without it dominating the bounds.
    pub fn usd() -> Self {
        Self::new().with_asset(handle("USD.FX", "USD", m(2016, 1), m(2025, 12)))
    }

    pub fn with_asset(mut self, handle: AssetHandle) -> Self {
        self.assets.insert(handle.symbol.clone(), handle);
        self
    }

    pub fn with_inflation(mut self, series: ReturnSeries) -> Self {
        self.inflation.insert(series.symbol().to_string(), series);
        self
    }
}

impl AssetProvider for MockProvider {
    fn resolve(&self, symbol: &str) -> Result<AssetHandle, ListError> {
        self.assets.get(symbol).cloned().ok_or_else(|| ListError::NotFound {
            symbol: symbol.to_string(),
        })
    }
}

impl InflationProvider for MockProvider {
    fn inflation(
        &self,
        symbol: &str,
        first: Month,
        last: Month,
    ) -> Result<InflationSeries, ListError> {
        let full = self.inflation.get(symbol).ok_or_else(|| ListError::NotFound {
            symbol: symbol.to_string(),
        })?;
        let clipped = full.slice(first, last);
        match (clipped.first_date(), clipped.last_date()) {
            (Some(first_date), Some(last_date)) => Ok(InflationSeries {
                symbol: symbol.to_string(),
                values: clipped,
                first_date,
                last_date,
            }),
            _ => Err(ListError::NoOverlap),
        }
    }
}
