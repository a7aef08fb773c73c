//! assetlist-core — aligned, currency-normalized rate-of-return series.
//!
//! Given a set of assets and a base currency, build a monthly return table
//! restricted to the assets' common history:
//! - resolve symbols through a pluggable [`AssetProvider`]
//! - convert each series to the base currency via FX cross-rates
//! - inner-join everything on the month index
//! - tighten the usable range with the base currency's own listing span,
//!   an optional inflation series, and caller-supplied bounds
//!
//! [`AssetListBuilder`] is the entry point. [`CsvStore`] is a file-backed
//! provider for local data directories; any other source can be plugged in
//! by implementing [`AssetProvider`] and [`InflationProvider`].

pub mod domain;
pub mod error;
pub mod list;
pub mod provider;
pub mod settings;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use domain::{AssetHandle, AssetRef, Month, ParseMonthError, ReturnSeries, ReturnTable};
pub use error::ListError;
pub use list::{AssetList, AssetListBuilder, InflationContext};
pub use provider::{AssetProvider, InflationProvider, InflationSeries};
pub use settings::{PeriodLength, DEFAULT_SYMBOL, MONTHS_PER_YEAR};
pub use store::CsvStore;
