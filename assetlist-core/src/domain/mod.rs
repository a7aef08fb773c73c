//! Domain types: the monthly period, return series, aligned table, and
//! asset handle.

pub mod asset;
pub mod month;
pub mod series;
pub mod table;

pub use asset::{AssetHandle, AssetRef};
pub use month::{Month, ParseMonthError};
pub use series::ReturnSeries;
pub use table::ReturnTable;

/// Symbol type alias
pub type Symbol = String;
