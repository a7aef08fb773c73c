//! AssetListBuilder — the list-construction algorithm.
//!
//! Resolve each input to a handle, normalize currencies, inner-join every
//! return series on the month index, then reconcile all the date bounds:
//! the global range is the tightest intersection of the assets' metadata
//! bounds, the base currency's own listing span, the inflation series (when
//! enabled), and any caller-supplied overrides.

use crate::domain::{AssetRef, Month, ReturnTable};
use crate::error::ListError;
use crate::list::asset_list::{AssetList, InflationContext};
use crate::list::currency::set_currency;
use crate::provider::{AssetProvider, InflationProvider};
use crate::settings::{PeriodLength, DEFAULT_SYMBOL};
use std::collections::BTreeMap;

/// Builder for [`AssetList`].
///
/// Defaults: base currency "USD", inflation enabled, no explicit date
/// bounds. An empty asset set falls back to [`DEFAULT_SYMBOL`].
#[derive(Debug, Clone)]
pub struct AssetListBuilder {
    assets: Vec<AssetRef>,
    currency: String,
    inflation: bool,
    first_date: Option<Month>,
    last_date: Option<Month>,
}

impl Default for AssetListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetListBuilder {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            currency: "USD".to_string(),
            inflation: true,
            first_date: None,
            last_date: None,
        }
    }

    /// Add one asset, by symbol or as a pre-resolved handle.
    pub fn asset(mut self, asset: impl Into<AssetRef>) -> Self {
        self.assets.push(asset.into());
        self
    }

    /// Add several assets, by symbol or as pre-resolved handles.
    pub fn assets<I, A>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AssetRef>,
    {
        self.assets.extend(assets.into_iter().map(Into::into));
        self
    }

    /// Base currency every return series is normalized to.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Enable or disable the inflation series (enabled by default).
    pub fn inflation(mut self, enabled: bool) -> Self {
        self.inflation = enabled;
        self
    }

    /// Explicit start bound; only ever tightens the computed range.
    pub fn first_date(mut self, month: Month) -> Self {
        self.first_date = Some(month);
        self
    }

    /// Explicit end bound; only ever tightens the computed range.
    pub fn last_date(mut self, month: Month) -> Self {
        self.last_date = Some(month);
        self
    }

    /// Resolve, normalize, join, and bound-reconcile the asset set.
    pub fn build<P>(self, provider: &P) -> Result<AssetList, ListError>
    where
        P: AssetProvider + InflationProvider + ?Sized,
    {
        let refs = if self.assets.is_empty() {
            vec![AssetRef::Symbol(DEFAULT_SYMBOL.to_string())]
        } else {
            self.assets
        };
        tracing::debug!(
            assets = refs.len(),
            currency = %self.currency,
            inflation = self.inflation,
            "building asset list"
        );

        let mut handles = Vec::with_capacity(refs.len());
        for reference in refs {
            let handle = match reference {
                AssetRef::Handle(handle) => handle,
                AssetRef::Symbol(symbol) => provider.resolve(&symbol)?,
            };
            handles.push(handle);
        }
        let symbols: Vec<String> = handles.iter().map(|h| h.symbol.clone()).collect();

        // Per-symbol bounds in insertion order; the stable sorts below keep
        // insertion order as the tie-break for newest/eldest.
        let mut first_dates: Vec<(String, Month)> = Vec::new();
        let mut last_dates: Vec<(String, Month)> = Vec::new();
        let mut names = BTreeMap::new();
        let mut currencies = BTreeMap::new();

        // Seed the table from the first asset's series, then inner-join the
        // rest in input order. The row set only ever shrinks.
        let mut table: Option<ReturnTable> = None;
        for handle in &handles {
            let ror = if handle.currency == self.currency {
                handle.ror.clone()
            } else {
                set_currency(provider, &handle.ror, &handle.currency, &self.currency)?
            };
            table = Some(match table {
                None => ReturnTable::from_series(ror),
                Some(accumulated) => accumulated.inner_join(&ror),
            });
            currencies.insert(handle.symbol.clone(), handle.currency.clone());
            names.insert(handle.symbol.clone(), handle.name.clone());
            first_dates.push((handle.symbol.clone(), handle.first_date));
            last_dates.push((handle.symbol.clone(), handle.last_date));
        }
        let mut table = match table {
            Some(table) => table,
            None => {
                return Err(ListError::InvalidArgument(
                    "asset list cannot be empty".to_string(),
                ))
            }
        };
        if table.num_rows() == 0 {
            return Err(ListError::NoOverlap);
        }

        // The base currency has its own quotable range; it constrains the
        // global bounds like any asset, keyed by the currency code.
        let listing = provider.resolve(&format!("{}.FX", self.currency))?;
        first_dates.push((self.currency.clone(), listing.first_date));
        last_dates.push((self.currency.clone(), listing.last_date));

        let (mut first_date, mut last_date) =
            global_bounds(&first_dates, &last_dates).ok_or(ListError::NoOverlap)?;

        let inflation = if self.inflation {
            let symbol = format!("{}.INFL", self.currency);
            let inflation = provider.inflation(&symbol, first_date, last_date)?;
            first_date = first_date.max(inflation.first_date);
            last_date = last_date.min(inflation.last_date);
            first_dates.push((symbol.clone(), inflation.first_date));
            last_dates.push((symbol.clone(), inflation.last_date));
            Some(InflationContext {
                symbol,
                series: inflation.values,
                first_date: inflation.first_date,
                last_date: inflation.last_date,
            })
        } else {
            None
        };

        // Ascending by date; newest/eldest come from the sorted first-date
        // entries, with inflation (when present) a candidate like any asset.
        first_dates.sort_by_key(|(_, date)| *date);
        last_dates.sort_by_key(|(_, date)| *date);
        let eldest_asset = first_dates[0].0.clone();
        let newest_asset = first_dates[first_dates.len() - 1].0.clone();

        // Overrides tighten, never loosen. The first-date slice happens
        // before the last-date override is even looked at, mirroring the
        // two-stage slicing of the construction contract.
        if let Some(requested) = self.first_date {
            first_date = first_date.max(requested);
        }
        table = table.slice_from(first_date);
        if let Some(requested) = self.last_date {
            last_date = last_date.min(requested);
        }
        if first_date > last_date {
            return Err(ListError::InvalidRange {
                first: first_date,
                last: last_date,
            });
        }
        let table = table.slice(first_date, last_date);
        if table.num_rows() == 0 {
            return Err(ListError::NoOverlap);
        }

        let period_length = PeriodLength::from_rows(table.num_rows());
        let days = last_date
            .month_end()
            .signed_duration_since(first_date.month_end())
            .num_days();
        let period_length_years = (days as f64 / 365.0 * 10.0).round() / 10.0;

        tracing::debug!(
            %first_date,
            %last_date,
            rows = table.num_rows(),
            newest = %newest_asset,
            eldest = %eldest_asset,
            "asset list assembled"
        );

        Ok(AssetList {
            symbols,
            currency: self.currency,
            ror: table,
            first_date,
            last_date,
            newest_asset,
            eldest_asset,
            names,
            currencies,
            first_dates: first_dates.into_iter().collect(),
            last_dates: last_dates.into_iter().collect(),
            period_length,
            period_length_years,
            inflation,
        })
    }
}

/// Tightest common bounds: the latest first date and the earliest last date.
fn global_bounds(
    first_dates: &[(String, Month)],
    last_dates: &[(String, Month)],
) -> Option<(Month, Month)> {
    let first = first_dates.iter().map(|(_, date)| *date).max()?;
    let last = last_dates.iter().map(|(_, date)| *date).min()?;
    Some((first, last))
}
