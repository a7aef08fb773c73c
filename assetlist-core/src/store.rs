//! CsvStore — a local CSV/TOML-backed implementation of the provider traits.
//!
//! Layout of a data directory:
//!
//! ```text
//! data/
//!   catalog.toml     # per-symbol metadata: name, currency
//!   SPY.US.csv       # one file per series: date,value rows, monthly
//!   EURUSD.FX.csv
//!   USD.FX.csv
//!   USD.INFL.csv
//! ```
//!
//! FX pairs, currency listings, and inflation series are ordinary entries;
//! the builder addresses them through their synthetic symbols.

use crate::domain::{AssetHandle, Month, ReturnSeries};
use crate::error::ListError;
use crate::provider::{AssetProvider, InflationProvider, InflationSeries};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Metadata for one catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMeta {
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Catalog {
    assets: BTreeMap<String, AssetMeta>,
}

/// File-backed provider over a directory of monthly return CSVs.
#[derive(Debug)]
pub struct CsvStore {
    root: PathBuf,
    catalog: Catalog,
}

#[derive(Debug, Deserialize)]
struct SeriesRow {
    date: Month,
    value: f64,
}

impl CsvStore {
    /// Open a data directory by reading its `catalog.toml`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ListError> {
        let root = root.into();
        let path = root.join("catalog.toml");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ListError::Store(format!("read {}: {e}", path.display())))?;
        let catalog: Catalog = toml::from_str(&content)
            .map_err(|e| ListError::Store(format!("parse {}: {e}", path.display())))?;
        tracing::debug!(root = %root.display(), symbols = catalog.assets.len(), "opened csv store");
        Ok(Self { root, catalog })
    }

    /// Symbols present in the catalog, sorted.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.catalog.assets.keys().map(String::as_str)
    }

    /// Metadata for a symbol, if cataloged.
    pub fn meta(&self, symbol: &str) -> Option<&AssetMeta> {
        self.catalog.assets.get(symbol)
    }

    fn series_path(&self, symbol: &str) -> PathBuf {
        self.root.join(format!("{symbol}.csv"))
    }

    fn read_series(&self, symbol: &str) -> Result<ReturnSeries, ListError> {
        let path = self.series_path(symbol);
        read_series_file(&path, symbol)
    }
}

fn read_series_file(path: &Path, symbol: &str) -> Result<ReturnSeries, ListError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| ListError::Store(format!("open {}: {e}", path.display())))?;
    let mut points = Vec::new();
    for record in reader.deserialize::<SeriesRow>() {
        let row = record.map_err(|e| ListError::Store(format!("parse {}: {e}", path.display())))?;
        points.push((row.date, row.value));
    }
    ReturnSeries::new(symbol, points)
}

impl AssetProvider for CsvStore {
    fn resolve(&self, symbol: &str) -> Result<AssetHandle, ListError> {
        let meta = self.meta(symbol).ok_or_else(|| ListError::NotFound {
            symbol: symbol.to_string(),
        })?;
        let ror = self.read_series(symbol)?;
        let (first_date, last_date) = match (ror.first_date(), ror.last_date()) {
            (Some(first), Some(last)) => (first, last),
            // Cataloged but no data rows: treat as unresolvable.
            _ => {
                return Err(ListError::NotFound {
                    symbol: symbol.to_string(),
                })
            }
        };
        Ok(AssetHandle {
            symbol: symbol.to_string(),
            name: meta.name.clone(),
            currency: meta.currency.clone(),
            first_date,
            last_date,
            ror,
        })
    }
}

impl InflationProvider for CsvStore {
    fn inflation(
        &self,
        symbol: &str,
        first: Month,
        last: Month,
    ) -> Result<InflationSeries, ListError> {
        if self.meta(symbol).is_none() {
            return Err(ListError::NotFound {
                symbol: symbol.to_string(),
            });
        }
        let full = self.read_series(symbol)?;
        let clipped = full.slice(first, last);
        match (clipped.first_date(), clipped.last_date()) {
            (Some(first_date), Some(last_date)) => Ok(InflationSeries {
                symbol: symbol.to_string(),
                values: clipped,
                first_date,
                last_date,
            }),
            // No inflation data inside the requested window.
            _ => Err(ListError::NoOverlap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::AssetListBuilder;
    use crate::testutil::m;
    use std::fmt::Write as _;
    use std::path::Path;

    fn write_series(dir: &Path, symbol: &str, from: Month, count: usize, value: f64) {
        let mut body = String::from("date,value\n");
        let mut month = from;
        for _ in 0..count {
            writeln!(body, "{month},{value}").unwrap();
            month = month.next();
        }
        std::fs::write(dir.join(format!("{symbol}.csv")), body).unwrap();
    }

    fn sample_store(dir: &Path) -> CsvStore {
        std::fs::write(
            dir.join("catalog.toml"),
            r#"
[assets."X.US"]
name = "X Fund"
currency = "USD"

[assets."Y.US"]
name = "Y Fund"
currency = "USD"

[assets."USD.FX"]
name = "US Dollar"
currency = "USD"

[assets."USD.INFL"]
name = "US inflation"
currency = "USD"

[assets."EMPTY.US"]
name = "No data"
currency = "USD"
"#,
        )
        .unwrap();
        write_series(dir, "X.US", m(2015, 1), 72, 0.01); // 2015-01..2020-12
        write_series(dir, "Y.US", m(2017, 6), 31, 0.02); // 2017-06..2019-12
        write_series(dir, "USD.FX", m(2016, 1), 120, 0.0);
        write_series(dir, "USD.INFL", m(2018, 1), 18, 0.002); // ..2019-06
        std::fs::write(dir.join("EMPTY.US.csv"), "date,value\n").unwrap();
        CsvStore::open(dir).unwrap()
    }

    #[test]
    fn resolve_reads_metadata_and_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample_store(dir.path());

        let asset = store.resolve("X.US").unwrap();
        assert_eq!(asset.name, "X Fund");
        assert_eq!(asset.currency, "USD");
        assert_eq!(asset.first_date, m(2015, 1));
        assert_eq!(asset.last_date, m(2020, 12));
        assert_eq!(asset.ror.len(), 72);
    }

    #[test]
    fn resolve_rejects_uncataloged_and_empty_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample_store(dir.path());

        assert!(matches!(
            store.resolve("NOPE.US"),
            Err(ListError::NotFound { symbol }) if symbol == "NOPE.US"
        ));
        assert!(matches!(
            store.resolve("EMPTY.US"),
            Err(ListError::NotFound { .. })
        ));
    }

    #[test]
    fn inflation_is_clipped_to_the_window() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample_store(dir.path());

        let inflation = store
            .inflation("USD.INFL", m(2017, 6), m(2019, 12))
            .unwrap();
        assert_eq!(inflation.first_date, m(2018, 1));
        assert_eq!(inflation.last_date, m(2019, 6));
        assert_eq!(inflation.values.len(), 18);
    }

    #[test]
    fn missing_catalog_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            CsvStore::open(dir.path()),
            Err(ListError::Store(_))
        ));
    }

    #[test]
    fn builder_runs_end_to_end_against_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample_store(dir.path());

        let list = AssetListBuilder::new()
            .assets(["X.US", "Y.US"])
            .build(&store)
            .unwrap();

        // Inflation (2018-01..2019-06) is the binding constraint.
        assert_eq!(list.first_date(), m(2018, 1));
        assert_eq!(list.last_date(), m(2019, 6));
        assert_eq!(list.assets_ror().num_rows(), 18);
        assert_eq!(list.names()["X.US"], "X Fund");
        assert!(list.inflation().is_some());
    }
}
