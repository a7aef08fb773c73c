//! Asset-list construction: the builder, currency normalization, the
//! resulting list object, and input validation.

pub mod asset_list;
pub mod builder;
pub mod currency;
pub mod validate;

pub use asset_list::{AssetList, InflationContext};
pub use builder::AssetListBuilder;
pub use currency::set_currency;
pub use validate::validate_positive_integer;
