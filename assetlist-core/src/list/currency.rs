//! Currency normalization via FX cross-rate composition.

use crate::domain::ReturnSeries;
use crate::error::ListError;
use crate::provider::AssetProvider;

/// Convert `returns` from `asset_currency` into `list_currency` using the
/// "{A}{B}.FX" cross-rate series.
///
/// Both series are moved to growth-factor form (1 + r), inner-joined on the
/// month index, multiplied, and moved back to fractional returns. The join
/// restricts the result to the months where the exchange rate itself is
/// quoted, so conversion can shrink an asset's usable range. The result
/// keeps the original series' symbol.
///
/// When the two currencies are equal the series is returned unchanged and
/// no FX lookup happens.
pub fn set_currency(
    provider: &(impl AssetProvider + ?Sized),
    returns: &ReturnSeries,
    asset_currency: &str,
    list_currency: &str,
) -> Result<ReturnSeries, ListError> {
    if asset_currency == list_currency {
        return Ok(returns.clone());
    }
    let pair = format!("{asset_currency}{list_currency}.FX");
    tracing::debug!(symbol = returns.symbol(), %pair, "converting returns to list currency");
    let fx = provider.resolve(&pair)?;
    Ok(returns.join_with(&fx.ror, |asset, rate| (asset + 1.0) * (rate + 1.0) - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{handle_with_value, m, series, series_with, MockProvider};
    use proptest::prelude::*;

    #[test]
    fn same_currency_is_identity() {
        // No FX symbol registered at all: an FX lookup would fail loudly.
        let provider = MockProvider::new();
        let returns = series("X.US", m(2020, 1), m(2020, 12), 0.01);
        let converted = set_currency(&provider, &returns, "USD", "USD").unwrap();
        assert_eq!(converted, returns);
    }

    #[test]
    fn converts_through_the_cross_rate() {
        let provider = MockProvider::new().with_asset(handle_with_value(
            "EURUSD.FX",
            "USD",
            m(2020, 1),
            m(2020, 12),
            0.02,
        ));
        let returns = series("X.DE", m(2020, 1), m(2020, 12), 0.01);
        let converted = set_currency(&provider, &returns, "EUR", "USD").unwrap();
        assert_eq!(converted.symbol(), "X.DE");
        assert_eq!(converted.len(), 12);
        let expected = 1.01 * 1.02 - 1.0;
        assert!(converted.values().iter().all(|v| (v - expected).abs() < 1e-12));
    }

    #[test]
    fn conversion_shrinks_to_fx_coverage() {
        let provider = MockProvider::new().with_asset(handle_with_value(
            "EURUSD.FX",
            "USD",
            m(2020, 6),
            m(2020, 9),
            0.0,
        ));
        let returns = series("X.DE", m(2020, 1), m(2020, 12), 0.01);
        let converted = set_currency(&provider, &returns, "EUR", "USD").unwrap();
        assert_eq!(converted.first_date(), Some(m(2020, 6)));
        assert_eq!(converted.last_date(), Some(m(2020, 9)));
    }

    #[test]
    fn missing_pair_fails_with_not_found() {
        let provider = MockProvider::new();
        let returns = series("X.DE", m(2020, 1), m(2020, 3), 0.01);
        let err = set_currency(&provider, &returns, "EUR", "USD").unwrap_err();
        assert!(matches!(err, ListError::NotFound { symbol } if symbol == "EURUSD.FX"));
    }

    proptest! {
        /// Converting A→B then back B→A through the inverse cross-rate
        /// reconstructs the original series within floating-point tolerance.
        #[test]
        fn round_trip_reconstructs_returns(
            returns in prop::collection::vec(-0.5f64..1.0, 1..48),
            rate in -0.5f64..1.0,
        ) {
            let inverse = 1.0 / (1.0 + rate) - 1.0;
            let span = returns.len() as u32;
            let mut to = m(2015, 1);
            for _ in 1..span {
                to = to.next();
            }
            let provider = MockProvider::new()
                .with_asset(handle_with_value("EURUSD.FX", "USD", m(2015, 1), to, rate))
                .with_asset(handle_with_value("USDEUR.FX", "EUR", m(2015, 1), to, inverse));

            let original = series_with("X.DE", m(2015, 1), &returns);
            let there = set_currency(&provider, &original, "EUR", "USD").unwrap();
            let back = set_currency(&provider, &there, "USD", "EUR").unwrap();

            prop_assert_eq!(back.len(), original.len());
            for (a, b) in back.values().iter().zip(original.values()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }
    }
}
