//! Provider traits — the external collaborators that supply asset and
//! inflation data.
//!
//! Both calls are synchronous: a provider either returns a fully populated
//! handle or fails outright. Retry, caching, and timeout policy belong to
//! the implementation behind the trait, not to this crate.

use crate::domain::{AssetHandle, Month, ReturnSeries};
use crate::error::ListError;

/// Resolves symbols to asset handles.
///
/// Besides ordinary assets ("SPY.US"), implementations must serve synthetic
/// FX symbols: pair symbols like "EURUSD.FX" whose return series is the
/// exchange-rate return, and single-currency listings like "USD.FX" whose
/// date bounds give the span over which the currency itself is quotable.
pub trait AssetProvider {
    fn resolve(&self, symbol: &str) -> Result<AssetHandle, ListError>;
}

/// Inflation series for one currency, clipped to a requested window.
#[derive(Debug, Clone)]
pub struct InflationSeries {
    /// Identifier of the form "{CCY}.INFL".
    pub symbol: String,
    /// Monthly inflation rates within the requested window.
    pub values: ReturnSeries,
    /// First month with data inside the window.
    pub first_date: Month,
    /// Last month with data inside the window.
    pub last_date: Month,
}

/// Supplies inflation data for identifiers of the form "{CCY}.INFL".
pub trait InflationProvider {
    fn inflation(
        &self,
        symbol: &str,
        first: Month,
        last: Month,
    ) -> Result<InflationSeries, ListError>;
}
