//! AssetList — the constructed result and its accessor surface.

use crate::domain::{Month, ReturnSeries, ReturnTable};
use crate::error::ListError;
use crate::list::validate::validate_positive_integer;
use crate::settings::PeriodLength;
use std::collections::BTreeMap;
use std::fmt;

/// Inflation bookkeeping attached to a list built with inflation enabled.
///
/// `first_date`/`last_date` are the inflation series' own availability
/// bounds; they also appear in the list's first/last date maps because
/// inflation can be the binding constraint on the global range.
#[derive(Debug, Clone)]
pub struct InflationContext {
    /// Identifier of the form "{CCY}.INFL".
    pub symbol: String,
    /// Monthly inflation rates over the list's nominal range.
    pub series: ReturnSeries,
    pub first_date: Month,
    pub last_date: Month,
}

/// An aligned, currency-normalized collection of asset return series.
///
/// Built by [`crate::AssetListBuilder`]; all fields are derived together and
/// stay mutually consistent. The return table is the single source of truth
/// for values — nothing here exposes a wider time window than its index.
#[derive(Debug, Clone)]
pub struct AssetList {
    pub(crate) symbols: Vec<String>,
    pub(crate) currency: String,
    pub(crate) ror: ReturnTable,
    pub(crate) first_date: Month,
    pub(crate) last_date: Month,
    pub(crate) newest_asset: String,
    pub(crate) eldest_asset: String,
    pub(crate) names: BTreeMap<String, String>,
    pub(crate) currencies: BTreeMap<String, String>,
    pub(crate) first_dates: BTreeMap<String, Month>,
    pub(crate) last_dates: BTreeMap<String, Month>,
    pub(crate) period_length: PeriodLength,
    pub(crate) period_length_years: f64,
    pub(crate) inflation: Option<InflationContext>,
}

impl AssetList {
    /// Symbols in input order, e.g. `["SPY.US", "AGG.US"]`.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Tickers: symbols with the namespace suffix stripped.
    pub fn tickers(&self) -> Vec<&str> {
        self.symbols
            .iter()
            .map(|s| s.split('.').next().unwrap_or(s))
            .collect()
    }

    /// Base currency code of the list.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The aligned return table, already sliced to `[first_date, last_date]`.
    pub fn assets_ror(&self) -> &ReturnTable {
        &self.ror
    }

    /// Tightest usable start across assets, base currency, and inflation.
    pub fn first_date(&self) -> Month {
        self.first_date
    }

    /// Tightest usable end across assets, base currency, and inflation.
    pub fn last_date(&self) -> Month {
        self.last_date
    }

    /// Symbol with the latest first date — the bottleneck for the start.
    pub fn newest_asset(&self) -> &str {
        &self.newest_asset
    }

    /// Symbol with the earliest first date.
    pub fn eldest_asset(&self) -> &str {
        &self.eldest_asset
    }

    /// Display name per symbol.
    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Native currency per symbol.
    pub fn currencies(&self) -> &BTreeMap<String, String> {
        &self.currencies
    }

    /// First available date per symbol, including the base currency's
    /// listing and (if enabled) inflation.
    pub fn assets_first_dates(&self) -> &BTreeMap<String, Month> {
        &self.first_dates
    }

    /// Last available date per symbol, same key set as the first-date map.
    pub fn assets_last_dates(&self) -> &BTreeMap<String, Month> {
        &self.last_dates
    }

    /// Whole-years/months split of the table's row count.
    pub fn period_length(&self) -> PeriodLength {
        self.period_length
    }

    /// Calendar length of `[first_date, last_date]` in years, one decimal.
    ///
    /// Computed from calendar-day subtraction, unlike [`Self::period_length`]
    /// which counts rows. The two disagree when the series has gaps; both
    /// are exposed and neither is reconciled to the other.
    pub fn period_length_years(&self) -> f64 {
        self.period_length_years
    }

    /// Inflation context, present when the list was built with inflation.
    pub fn inflation(&self) -> Option<&InflationContext> {
        self.inflation.as_ref()
    }

    /// The return table with the inflation column inner-joined on.
    ///
    /// The join happens here, on demand, rather than eagerly at build time:
    /// callers that never ask for inflation pay no join cost, and callers
    /// that do always get a fully populated table. Without inflation this
    /// is just a copy of the return table.
    pub fn ror_with_inflation(&self) -> ReturnTable {
        match &self.inflation {
            Some(context) => self.ror.clone().inner_join(&context.series),
            None => self.ror.clone(),
        }
    }

    /// Validate a rolling-window period in years against the available
    /// history: it must be positive and must not exceed the whole-years
    /// portion of [`Self::period_length`].
    pub fn validate_period(&self, period: i64) -> Result<(), ListError> {
        validate_positive_integer("period", period)?;
        let max_years = self.period_length.years as i64;
        if period > max_years {
            return Err(ListError::InvalidArgument(format!(
                "'period' ({period}) is beyond the available history range ({max_years} years)"
            )));
        }
        Ok(())
    }

    /// Number of assets in the list.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for AssetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "symbols: [{}]", self.symbols.join(", "))?;
        writeln!(f, "currency: {}", self.currency)?;
        writeln!(f, "first_date: {}", self.first_date)?;
        writeln!(f, "last_date: {}", self.last_date)?;
        writeln!(f, "period_length: {}", self.period_length)?;
        write!(
            f,
            "inflation: {}",
            self.inflation
                .as_ref()
                .map(|c| c.symbol.as_str())
                .unwrap_or("None")
        )
    }
}
