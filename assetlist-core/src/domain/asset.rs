//! AssetHandle and AssetRef — resolved assets and the inputs that name them.

use super::month::Month;
use super::series::ReturnSeries;
use serde::{Deserialize, Serialize};

/// A fully resolved asset: metadata plus its monthly return history.
///
/// `first_date`/`last_date` are the asset's inclusive availability bounds as
/// reported by the provider. They are metadata — the return series may cover
/// fewer months once currency conversion restricts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetHandle {
    /// Namespaced identifier, e.g. "SPY.US" or "EURUSD.FX".
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// ISO-like currency code the series is quoted in.
    pub currency: String,
    pub first_date: Month,
    pub last_date: Month,
    /// Monthly fractional returns.
    pub ror: ReturnSeries,
}

impl AssetHandle {
    /// Ticker: the symbol without its namespace suffix.
    pub fn ticker(&self) -> &str {
        self.symbol.split('.').next().unwrap_or(&self.symbol)
    }
}

/// Input reference: either a raw symbol to resolve through the provider or
/// an already-resolved handle used as-is.
#[derive(Debug, Clone)]
pub enum AssetRef {
    Symbol(String),
    Handle(AssetHandle),
}

impl AssetRef {
    /// The symbol this reference names, resolved or not.
    pub fn symbol(&self) -> &str {
        match self {
            AssetRef::Symbol(symbol) => symbol,
            AssetRef::Handle(handle) => &handle.symbol,
        }
    }
}

impl From<&str> for AssetRef {
    fn from(symbol: &str) -> Self {
        AssetRef::Symbol(symbol.to_string())
    }
}

impl From<String> for AssetRef {
    fn from(symbol: String) -> Self {
        AssetRef::Symbol(symbol)
    }
}

impl From<&String> for AssetRef {
    fn from(symbol: &String) -> Self {
        AssetRef::Symbol(symbol.clone())
    }
}

impl From<AssetHandle> for AssetRef {
    fn from(handle: AssetHandle) -> Self {
        AssetRef::Handle(handle)
    }
}
